// Field-level validation of raw records before they are written upstream.
//
// Failures are values, not errors: a `ValidationResult` maps field names to
// human-readable messages that the UI renders inline next to the field.

use std::collections::BTreeMap;

use chrono::DateTime;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::auction::player::{PlayerRole, PlayerStatus};
use crate::auction::settings::{MIN_BID_INCREMENT_FLOOR, UNSOLD_REDUCTION_RANGE};
use crate::auction::team::DEFAULT_INITIAL_WALLET;

/// Key used when the input cannot be checked field by field.
pub const GENERAL_FIELD: &str = "_general";

/// Outcome of validating one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
}

impl ValidationResult {
    /// A passing result with no messages.
    pub fn ok() -> Self {
        ValidationResult {
            is_valid: true,
            errors: BTreeMap::new(),
        }
    }

    /// A failing result with a single `_general` message.
    pub fn general(message: impl Into<String>) -> Self {
        let mut result = ValidationResult::ok();
        result.add(GENERAL_FIELD, message);
        result
    }

    /// Record a failure for `field`. The first message recorded for a field
    /// is kept.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
        self.is_valid = false;
    }

    /// Message recorded for `field`, if any.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

enum NumberField {
    Missing,
    NotANumber,
    Number(f64),
}

fn number_field(obj: &Map<String, Value>, key: &str) -> NumberField {
    match obj.get(key) {
        None | Some(Value::Null) => NumberField::Missing,
        Some(v) => match v.as_f64() {
            Some(n) => NumberField::Number(n),
            None => NumberField::NotANumber,
        },
    }
}

fn require_name(obj: &Map<String, Value>, result: &mut ValidationResult, what: &str) {
    let present = obj
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());
    if !present {
        result.add("name", format!("{what} name is required"));
    }
}

/// Validate a player record before import or edit.
pub fn validate_player_data(data: &Value) -> ValidationResult {
    let Some(obj) = data.as_object() else {
        return ValidationResult::general("Invalid player data");
    };
    let mut result = ValidationResult::ok();

    require_name(obj, &mut result, "Player");

    match number_field(obj, "basePrice") {
        NumberField::Missing => result.add("basePrice", "Base price is required"),
        NumberField::NotANumber => result.add("basePrice", "Base price must be a number"),
        NumberField::Number(n) if n < 0.0 => {
            result.add("basePrice", "Base price cannot be negative")
        }
        NumberField::Number(_) => {}
    }

    match obj.get("role") {
        None | Some(Value::Null) => {}
        Some(Value::String(s)) if s.trim().is_empty() => {}
        Some(v) => {
            if v.as_str().and_then(PlayerRole::from_str_role).is_none() {
                let allowed: Vec<&str> = PlayerRole::ALL.iter().map(|r| r.label()).collect();
                result.add(
                    "role",
                    format!("Role must be one of: {}", allowed.join(", ")),
                );
            }
        }
    }

    if let Some(v) = obj.get("status") {
        if v.as_str().and_then(PlayerStatus::from_str_status).is_none() {
            result.add("status", "Unknown player status");
        }
    }

    match obj.get("stats") {
        None | Some(Value::Null) | Some(Value::Object(_)) => {}
        Some(_) => result.add("stats", "Stats must be an object"),
    }

    result
}

/// Validate a team record before creation or edit.
pub fn validate_team_data(data: &Value) -> ValidationResult {
    let Some(obj) = data.as_object() else {
        return ValidationResult::general("Invalid team data");
    };
    let mut result = ValidationResult::ok();

    require_name(obj, &mut result, "Team");

    let initial = match number_field(obj, "initialWallet") {
        NumberField::Missing => Some(DEFAULT_INITIAL_WALLET),
        NumberField::NotANumber => {
            result.add("initialWallet", "Initial wallet must be a number");
            None
        }
        NumberField::Number(n) if n < 0.0 => {
            result.add("initialWallet", "Initial wallet cannot be negative");
            None
        }
        NumberField::Number(n) => Some(n),
    };

    match number_field(obj, "wallet") {
        NumberField::Missing => result.add("wallet", "Wallet is required"),
        NumberField::NotANumber => result.add("wallet", "Wallet must be a number"),
        NumberField::Number(n) if n < 0.0 => result.add("wallet", "Wallet cannot be negative"),
        NumberField::Number(n) => {
            if let Some(initial) = initial {
                if n > initial {
                    result.add("wallet", "Wallet cannot exceed the initial wallet");
                }
            }
        }
    }

    result
}

/// Validate auction settings before they are saved.
pub fn validate_auction_settings(data: &Value) -> ValidationResult {
    let Some(obj) = data.as_object() else {
        return ValidationResult::general("Invalid auction settings");
    };
    let mut result = ValidationResult::ok();

    match number_field(obj, "minBidIncrement") {
        NumberField::Number(n) if n >= MIN_BID_INCREMENT_FLOOR => {}
        NumberField::Missing => {
            result.add("minBidIncrement", "Minimum bid increment is required")
        }
        _ => result.add(
            "minBidIncrement",
            format!("Minimum bid increment must be at least {MIN_BID_INCREMENT_FLOOR}"),
        ),
    }

    let (lo, hi) = UNSOLD_REDUCTION_RANGE;
    match number_field(obj, "unsoldPriceReduction") {
        NumberField::Number(n) if n > lo && n < hi => {}
        NumberField::Missing => result.add(
            "unsoldPriceReduction",
            "Unsold price reduction is required",
        ),
        _ => result.add(
            "unsoldPriceReduction",
            format!("Unsold price reduction must be between {lo} and {hi}"),
        ),
    }

    match obj.get("auctionDate") {
        None | Some(Value::Null) => {}
        Some(v) => {
            let parses = v
                .as_str()
                .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok());
            if !parses {
                result.add("auctionDate", "Auction date must be a valid date");
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_message_per_field_wins() {
        let mut result = ValidationResult::ok();
        result.add("amount", "first");
        result.add("amount", "second");
        assert!(!result.is_valid);
        assert_eq!(result.message("amount"), Some("first"));
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn serializes_with_camel_case_flag() {
        let json = serde_json::to_value(ValidationResult::general("boom")).unwrap();
        assert_eq!(json, json!({"isValid": false, "errors": {"_general": "boom"}}));
    }

    #[test]
    fn non_object_inputs_degrade_to_general() {
        for input in [json!(null), json!(42), json!("player"), json!([1, 2])] {
            for result in [
                validate_player_data(&input),
                validate_team_data(&input),
                validate_auction_settings(&input),
            ] {
                assert!(!result.is_valid);
                assert_eq!(result.errors.len(), 1);
                assert!(result.message(GENERAL_FIELD).is_some());
            }
        }
    }

    #[test]
    fn valid_player_passes() {
        let result = validate_player_data(&json!({
            "name": "Jasprit Bumrah",
            "role": "Bowler",
            "basePrice": 1500,
            "status": "available",
            "stats": {"wickets": 150, "economy": 7.3}
        }));
        assert!(result.is_valid, "{:?}", result.errors);
    }

    #[test]
    fn player_role_accepts_either_capitalisation() {
        for role in ["All-rounder", "All-Rounder", "wicket-keeper"] {
            let result = validate_player_data(&json!({"name": "X", "basePrice": 0, "role": role}));
            assert!(result.is_valid, "role {role} should be accepted");
        }
    }

    #[test]
    fn player_blank_role_counts_as_unset() {
        let result = validate_player_data(&json!({"name": "X", "basePrice": 10, "role": " "}));
        assert!(result.is_valid, "{:?}", result.errors);
        let null_stats = validate_player_data(&json!({"name": "X", "basePrice": 10, "stats": null}));
        assert!(null_stats.is_valid);
    }

    #[test]
    fn player_field_errors() {
        let result = validate_player_data(&json!({
            "name": "  ",
            "basePrice": -5,
            "role": "Umpire",
            "status": "retired",
            "stats": [1, 2]
        }));
        assert!(!result.is_valid);
        assert_eq!(result.message("name"), Some("Player name is required"));
        assert_eq!(result.message("basePrice"), Some("Base price cannot be negative"));
        assert!(result.message("role").unwrap().contains("All-rounder"));
        assert_eq!(result.message("status"), Some("Unknown player status"));
        assert_eq!(result.message("stats"), Some("Stats must be an object"));
    }

    #[test]
    fn player_base_price_missing_or_text() {
        let missing = validate_player_data(&json!({"name": "A"}));
        assert_eq!(missing.message("basePrice"), Some("Base price is required"));
        let text = validate_player_data(&json!({"name": "A", "basePrice": "lots"}));
        assert_eq!(text.message("basePrice"), Some("Base price must be a number"));
    }

    #[test]
    fn team_wallet_rules() {
        assert!(validate_team_data(&json!({"name": "Kolkata", "wallet": 10000})).is_valid);
        assert!(
            validate_team_data(&json!({"name": "Kolkata", "wallet": 500, "initialWallet": 500}))
                .is_valid
        );

        let over = validate_team_data(&json!({"name": "Kolkata", "wallet": 12000}));
        assert_eq!(
            over.message("wallet"),
            Some("Wallet cannot exceed the initial wallet")
        );

        let negative = validate_team_data(&json!({"name": "Kolkata", "wallet": -1}));
        assert_eq!(negative.message("wallet"), Some("Wallet cannot be negative"));

        let missing = validate_team_data(&json!({"wallet": 100}));
        assert_eq!(missing.message("name"), Some("Team name is required"));
        assert!(missing.message("wallet").is_none());
    }

    #[test]
    fn settings_rules() {
        assert!(validate_auction_settings(&json!({
            "minBidIncrement": 100,
            "unsoldPriceReduction": 0.25,
            "auctionDate": "2026-04-01T09:00:00+05:30"
        }))
        .is_valid);

        let bad = validate_auction_settings(&json!({
            "minBidIncrement": 5,
            "unsoldPriceReduction": 1.0,
            "auctionDate": "next tuesday"
        }));
        assert!(bad.message("minBidIncrement").unwrap().contains("at least 10"));
        assert!(bad.message("unsoldPriceReduction").unwrap().contains("between"));
        assert_eq!(
            bad.message("auctionDate"),
            Some("Auction date must be a valid date")
        );

        let missing = validate_auction_settings(&json!({}));
        assert_eq!(
            missing.message("minBidIncrement"),
            Some("Minimum bid increment is required")
        );
        assert_eq!(
            missing.message("unsoldPriceReduction"),
            Some("Unsold price reduction is required")
        );
    }
}
