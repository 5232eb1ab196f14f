// Player records: role, lifecycle status and optional statistics.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::Amount;

/// Playing role of a cricketer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlayerRole {
    Batsman,
    Bowler,
    AllRounder,
    WicketKeeper,
}

impl PlayerRole {
    /// Every role, in display order.
    pub const ALL: [PlayerRole; 4] = [
        PlayerRole::Batsman,
        PlayerRole::Bowler,
        PlayerRole::AllRounder,
        PlayerRole::WicketKeeper,
    ];

    /// Parse a role label.
    ///
    /// Matching is case-insensitive, so both "All-rounder" and "All-Rounder"
    /// resolve to [`PlayerRole::AllRounder`]. Anything else is rejected.
    pub fn from_str_role(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        PlayerRole::ALL
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(trimmed))
    }

    /// Canonical display label.
    pub fn label(&self) -> &'static str {
        match self {
            PlayerRole::Batsman => "Batsman",
            PlayerRole::Bowler => "Bowler",
            PlayerRole::AllRounder => "All-rounder",
            PlayerRole::WicketKeeper => "Wicket-keeper",
        }
    }

    /// Short badge used in narrow table columns.
    pub fn short_label(&self) -> &'static str {
        match self {
            PlayerRole::Batsman => "BAT",
            PlayerRole::Bowler => "BOWL",
            PlayerRole::AllRounder => "AR",
            PlayerRole::WicketKeeper => "WK",
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<String> for PlayerRole {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PlayerRole::from_str_role(&value).ok_or_else(|| format!("unknown player role `{value}`"))
    }
}

impl From<PlayerRole> for String {
    fn from(role: PlayerRole) -> Self {
        role.label().to_string()
    }
}

/// A blank role means "not set". Unknown labels are still errors.
fn deserialize_optional_role<'de, D>(deserializer: D) -> Result<Option<PlayerRole>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => PlayerRole::try_from(raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Lifecycle state of a player in the auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerStatus {
    #[default]
    Available,
    Sold,
    Unsold,
    #[serde(alias = "permanently_unsold")]
    PermanentlyUnsold,
}

impl PlayerStatus {
    /// Parse a status string as stored by the backend.
    pub fn from_str_status(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Some(PlayerStatus::Available),
            "sold" => Some(PlayerStatus::Sold),
            "unsold" => Some(PlayerStatus::Unsold),
            "permanently-unsold" | "permanently_unsold" => Some(PlayerStatus::PermanentlyUnsold),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayerStatus::Available => "Available",
            PlayerStatus::Sold => "Sold",
            PlayerStatus::Unsold => "Unsold",
            PlayerStatus::PermanentlyUnsold => "Permanently unsold",
        }
    }
}

/// The closed set of statistics the board knows how to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatKey {
    Matches,
    Runs,
    Average,
    StrikeRate,
    Wickets,
    Economy,
    Centuries,
    Fifties,
}

impl StatKey {
    /// Every statistic, in display order.
    pub const ALL: [StatKey; 8] = [
        StatKey::Matches,
        StatKey::Runs,
        StatKey::Average,
        StatKey::StrikeRate,
        StatKey::Wickets,
        StatKey::Economy,
        StatKey::Centuries,
        StatKey::Fifties,
    ];

    /// Field name used in stored records.
    pub fn key(&self) -> &'static str {
        match self {
            StatKey::Matches => "matches",
            StatKey::Runs => "runs",
            StatKey::Average => "average",
            StatKey::StrikeRate => "strikeRate",
            StatKey::Wickets => "wickets",
            StatKey::Economy => "economy",
            StatKey::Centuries => "centuries",
            StatKey::Fifties => "fifties",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        StatKey::ALL.into_iter().find(|k| k.key() == key)
    }

    /// Compact column label.
    pub fn label(&self) -> &'static str {
        match self {
            StatKey::Matches => "M",
            StatKey::Runs => "Runs",
            StatKey::Average => "Avg",
            StatKey::StrikeRate => "SR",
            StatKey::Wickets => "Wkts",
            StatKey::Economy => "Econ",
            StatKey::Centuries => "100s",
            StatKey::Fifties => "50s",
        }
    }

    /// Decimal places used when rendering the value.
    pub fn precision(&self) -> usize {
        match self {
            StatKey::Average | StatKey::StrikeRate | StatKey::Economy => 2,
            _ => 0,
        }
    }
}

/// Optional statistics keyed by [`StatKey`].
///
/// Deserializes from an arbitrary JSON object or `null`: unknown keys and
/// non-numeric values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "Option<HashMap<String, serde_json::Value>>",
    into = "BTreeMap<String, f64>"
)]
pub struct PlayerStats {
    values: BTreeMap<StatKey, f64>,
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: StatKey, value: f64) -> Self {
        self.values.insert(key, value);
        self
    }

    pub fn get(&self, key: StatKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Present statistics in display order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKey, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }
}

impl From<Option<HashMap<String, serde_json::Value>>> for PlayerStats {
    fn from(raw: Option<HashMap<String, serde_json::Value>>) -> Self {
        let values = raw
            .unwrap_or_default()
            .iter()
            .filter_map(|(k, v)| Some((StatKey::from_key(k)?, v.as_f64()?)))
            .collect();
        PlayerStats { values }
    }
}

impl From<PlayerStats> for BTreeMap<String, f64> {
    fn from(stats: PlayerStats) -> Self {
        stats
            .values
            .into_iter()
            .map(|(k, v)| (k.key().to_string(), v))
            .collect()
    }
}

/// A player record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_role")]
    pub role: Option<PlayerRole>,
    pub base_price: Amount,
    #[serde(default)]
    pub status: PlayerStatus,
    #[serde(default)]
    pub stats: PlayerStats,
    /// Team that bought the player, once sold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_to: Option<String>,
    /// Final hammer price, once sold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_price: Option<Amount>,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_price: Amount) -> Self {
        Player {
            id: id.into(),
            name: name.into(),
            role: None,
            base_price,
            status: PlayerStatus::Available,
            stats: PlayerStats::default(),
            sold_to: None,
            sold_price: None,
        }
    }

    /// Whether the player can be put up as the open lot.
    pub fn is_biddable(&self) -> bool {
        self.status == PlayerStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing_is_case_insensitive() {
        assert_eq!(PlayerRole::from_str_role("Batsman"), Some(PlayerRole::Batsman));
        assert_eq!(PlayerRole::from_str_role("All-rounder"), Some(PlayerRole::AllRounder));
        assert_eq!(PlayerRole::from_str_role("All-Rounder"), Some(PlayerRole::AllRounder));
        assert_eq!(PlayerRole::from_str_role(" wicket-keeper "), Some(PlayerRole::WicketKeeper));
        assert_eq!(PlayerRole::from_str_role("Keeper"), None);
        assert_eq!(PlayerRole::from_str_role(""), None);
    }

    #[test]
    fn role_serializes_to_canonical_label() {
        let json = serde_json::to_string(&PlayerRole::AllRounder).unwrap();
        assert_eq!(json, "\"All-rounder\"");
        let role: PlayerRole = serde_json::from_str("\"All-Rounder\"").unwrap();
        assert_eq!(role, PlayerRole::AllRounder);
        assert!(serde_json::from_str::<PlayerRole>("\"Umpire\"").is_err());
    }

    #[test]
    fn status_accepts_both_separators() {
        let a: PlayerStatus = serde_json::from_str("\"permanently-unsold\"").unwrap();
        let b: PlayerStatus = serde_json::from_str("\"permanently_unsold\"").unwrap();
        assert_eq!(a, PlayerStatus::PermanentlyUnsold);
        assert_eq!(b, PlayerStatus::PermanentlyUnsold);
        assert_eq!(
            PlayerStatus::from_str_status("Sold"),
            Some(PlayerStatus::Sold)
        );
        assert_eq!(PlayerStatus::from_str_status("retired"), None);
    }

    #[test]
    fn stats_drop_unknown_keys_and_non_numbers() {
        let stats: PlayerStats = serde_json::from_str(
            r#"{"runs": 4500, "strikeRate": 138.2, "catches": 40, "wickets": "n/a"}"#,
        )
        .unwrap();
        assert_eq!(stats.get(StatKey::Runs), Some(4500.0));
        assert_eq!(stats.get(StatKey::StrikeRate), Some(138.2));
        assert_eq!(stats.get(StatKey::Wickets), None);
        assert_eq!(stats.iter().count(), 2);
    }

    #[test]
    fn stats_iterate_in_display_order() {
        let stats = PlayerStats::new()
            .with(StatKey::Fifties, 12.0)
            .with(StatKey::Matches, 80.0)
            .with(StatKey::Economy, 7.4);
        let keys: Vec<StatKey> = stats.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![StatKey::Matches, StatKey::Economy, StatKey::Fifties]);
    }

    #[test]
    fn player_deserializes_from_camel_case() {
        let player: Player = serde_json::from_str(
            r#"{
                "id": "p1",
                "name": "Virat Kohli",
                "role": "Batsman",
                "basePrice": 2000,
                "status": "available",
                "stats": {"matches": 250, "average": 58.1}
            }"#,
        )
        .unwrap();
        assert_eq!(player.name, "Virat Kohli");
        assert_eq!(player.role, Some(PlayerRole::Batsman));
        assert_eq!(player.base_price, 2000.0);
        assert!(player.is_biddable());
        assert_eq!(player.stats.get(StatKey::Average), Some(58.1));
        assert!(player.sold_to.is_none());
    }

    #[test]
    fn player_defaults_missing_optional_fields() {
        let player: Player =
            serde_json::from_str(r#"{"id": "p2", "name": "Rashid", "basePrice": 500}"#).unwrap();
        assert!(player.role.is_none());
        assert_eq!(player.status, PlayerStatus::Available);
        assert!(player.stats.is_empty());
    }

    #[test]
    fn blank_role_and_null_stats_are_unset() {
        let player: Player = serde_json::from_str(
            r#"{"id": "p4", "name": "Jadeja", "basePrice": 800, "role": "  ", "stats": null}"#,
        )
        .unwrap();
        assert!(player.role.is_none());
        assert!(player.stats.is_empty());

        let null_role: Player = serde_json::from_str(
            r#"{"id": "p5", "name": "Gill", "basePrice": 900, "role": null}"#,
        )
        .unwrap();
        assert!(null_role.role.is_none());
    }

    #[test]
    fn unknown_role_still_rejected() {
        let result = serde_json::from_str::<Player>(
            r#"{"id": "p6", "name": "X", "basePrice": 100, "role": "Umpire"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn sold_player_is_not_biddable() {
        let mut player = Player::new("p3", "Bumrah", 1500.0);
        player.status = PlayerStatus::Sold;
        assert!(!player.is_biddable());
        player.status = PlayerStatus::PermanentlyUnsold;
        assert!(!player.is_biddable());
    }
}
