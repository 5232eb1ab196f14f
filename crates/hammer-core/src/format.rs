// Display formatting for amounts, statistics and long text.

/// Digit grouping convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567 (lakh/crore)
    Indian,
}

/// Locales the board can format currency for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    EnIn,
    EnUs,
    EnGb,
}

impl Locale {
    /// Parse a BCP 47 style code such as `en-IN` (case-insensitive, `_`
    /// accepted as separator).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-in" => Some(Locale::EnIn),
            "en-us" => Some(Locale::EnUs),
            "en-gb" => Some(Locale::EnGb),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnIn => "en-IN",
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
        }
    }

    pub fn currency_symbol(&self) -> &'static str {
        match self {
            Locale::EnIn => "₹",
            Locale::EnUs => "$",
            Locale::EnGb => "£",
        }
    }

    pub fn grouping(&self) -> Grouping {
        match self {
            Locale::EnIn => Grouping::Indian,
            Locale::EnUs | Locale::EnGb => Grouping::Thousands,
        }
    }
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    let mut breaks = Vec::new();
    match grouping {
        Grouping::Thousands => {
            let mut i = len;
            while i > 3 {
                i -= 3;
                breaks.push(i);
            }
        }
        Grouping::Indian => {
            if len > 3 {
                let mut i = len - 3;
                breaks.push(i);
                while i > 2 {
                    i -= 2;
                    breaks.push(i);
                }
            }
        }
    }

    let mut out = String::with_capacity(len + breaks.len());
    for (idx, ch) in digits.chars().enumerate() {
        if breaks.contains(&idx) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format with grouping and a fixed number of decimals. Returns the sign
/// separately so callers can put it in front of a currency symbol.
fn format_grouped(value: f64, decimals: usize, grouping: Grouping) -> (bool, String) {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let mut body = group_digits(int_part, grouping);
    if let Some(frac) = frac_part {
        body.push('.');
        body.push_str(frac);
    }
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    (negative, body)
}

fn with_symbol(amount: Option<f64>, symbol: &str, grouping: Grouping) -> String {
    let (negative, body) = format_grouped(amount.unwrap_or(0.0), 0, grouping);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{symbol}{body}")
}

/// Format a whole-currency amount behind `symbol` with thousands grouping.
/// A missing amount renders as zero.
pub fn format_currency(amount: Option<f64>, symbol: &str) -> String {
    with_symbol(amount, symbol, Grouping::Thousands)
}

/// Format a whole-currency amount using the symbol and grouping of
/// `locale`. A missing amount renders as zero.
pub fn format_currency_locale(amount: Option<f64>, locale: Locale) -> String {
    with_symbol(amount, locale.currency_symbol(), locale.grouping())
}

/// Format a plain number with thousands grouping.
pub fn format_number(value: f64, decimals: usize) -> String {
    let (negative, body) = format_grouped(value, decimals, Grouping::Thousands);
    if negative {
        format!("-{body}")
    } else {
        body
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Shorten `text` to at most `max_chars` characters, ending in `...` when
/// anything was cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_with_symbol() {
        assert_eq!(format_currency(Some(1500.0), "₹"), "₹1,500");
        assert_eq!(format_currency(Some(1234567.0), "$"), "$1,234,567");
        assert_eq!(format_currency(Some(999.0), "₹"), "₹999");
        assert_eq!(format_currency(Some(0.0), "₹"), "₹0");
    }

    #[test]
    fn missing_amount_is_zero() {
        assert_eq!(format_currency(None, "₹"), "₹0");
        assert_eq!(format_currency(None, "$"), "$0");
        assert_eq!(format_currency_locale(None, Locale::EnIn), "₹0");
    }

    #[test]
    fn rounds_to_whole_units() {
        assert_eq!(format_currency(Some(1499.6), "₹"), "₹1,500");
        assert_eq!(format_currency(Some(-0.2), "₹"), "₹0");
    }

    #[test]
    fn negative_amounts_put_sign_before_symbol() {
        assert_eq!(format_currency(Some(-300.0), "₹"), "-₹300");
        assert_eq!(format_currency_locale(Some(-125000.0), Locale::EnIn), "-₹1,25,000");
    }

    #[test]
    fn locale_grouping() {
        assert_eq!(format_currency_locale(Some(12345678.0), Locale::EnIn), "₹1,23,45,678");
        assert_eq!(format_currency_locale(Some(100000.0), Locale::EnIn), "₹1,00,000");
        assert_eq!(format_currency_locale(Some(12345678.0), Locale::EnUs), "$12,345,678");
        assert_eq!(format_currency_locale(Some(2500.0), Locale::EnGb), "£2,500");
        assert_eq!(format_currency_locale(Some(999.0), Locale::EnIn), "₹999");
    }

    #[test]
    fn locale_codes() {
        assert_eq!(Locale::from_code("en-IN"), Some(Locale::EnIn));
        assert_eq!(Locale::from_code("en_us"), Some(Locale::EnUs));
        assert_eq!(Locale::from_code("EN-GB"), Some(Locale::EnGb));
        assert_eq!(Locale::from_code("fr-FR"), None);
        assert_eq!(Locale::EnIn.code(), "en-IN");
    }

    #[test]
    fn numbers_and_percent() {
        assert_eq!(format_number(4523.0, 0), "4,523");
        assert_eq!(format_number(138.456, 2), "138.46");
        assert_eq!(format_number(-1234.5, 1), "-1,234.5");
        assert_eq!(format_percent(25.0), "25.0%");
        assert_eq!(format_percent(33.333), "33.3%");
    }

    #[test]
    fn truncate_text_on_char_boundary() {
        assert_eq!(truncate_text("Chennai", 10), "Chennai");
        assert_eq!(truncate_text("Royal Challengers Bangalore", 12), "Royal Cha...");
        assert_eq!(truncate_text("Ravindra Jadeja", 9), "Ravind...");
        assert_eq!(truncate_text("₹₹₹₹₹₹", 5), "₹₹...");
        assert_eq!(truncate_text("abcdef", 2), "..");
        assert_eq!(truncate_text("", 0), "");
    }
}
