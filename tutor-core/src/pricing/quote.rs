use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Hour count after coercion: always finite and within `1..=MAX_HOURS`.
///
/// Anything that is not a positive number (NaN, infinities, zero, negatives,
/// unparsable text) becomes one hour. Fractional counts above one are kept.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Hours(f64);

impl Hours {
    pub const ONE: Hours = Hours(1.0);

    /// Upper bound on billable hours. Any `u32` rate times this stays below
    /// 2^53, so totals are exact integers in both Rust and JavaScript.
    pub const MAX_HOURS: f64 = 1_000_000.0;

    pub fn coerce(raw: f64) -> Self {
        if !raw.is_finite() || raw == 0.0 {
            return Self::ONE;
        }
        Hours(raw.clamp(1.0, Self::MAX_HOURS))
    }

    /// Coerce free-form input such as a form field. Surrounding whitespace is ignored.
    pub fn parse_lossy(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::ONE;
        }
        let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
            Some(hex) if hex.chars().all(|c| c.is_ascii_hexdigit()) => radix_value(hex, 16),
            Some(_) => None,
            None => trimmed.parse::<f64>().ok(),
        };
        parsed.map(Self::coerce).unwrap_or(Self::ONE)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Value of a digit string in `radix`, accumulated as `f64` so long strings never overflow.
/// `None` when `digits` is empty or holds a character outside the radix.
pub(crate) fn radix_value(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

impl Default for Hours {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<f64> for Hours {
    fn from(raw: f64) -> Self {
        Self::coerce(raw)
    }
}

impl From<u32> for Hours {
    fn from(raw: u32) -> Self {
        Self::coerce(f64::from(raw))
    }
}

impl From<i32> for Hours {
    fn from(raw: i32) -> Self {
        Self::coerce(f64::from(raw))
    }
}

impl From<&str> for Hours {
    fn from(raw: &str) -> Self {
        Self::parse_lossy(raw)
    }
}

impl From<Option<f64>> for Hours {
    fn from(raw: Option<f64>) -> Self {
        raw.map(Self::coerce).unwrap_or(Self::ONE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    Package,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountLine {
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    /// Discount as a percentage, e.g. `10.0` for a 10% tier.
    pub percentage: f64,
    pub amount: f64,
}

/// Price breakdown for one language/level/hours request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub language: String,
    pub level: String,
    pub hours: f64,
    pub base_price: u32,
    pub subtotal: f64,
    pub discounts: Vec<DiscountLine>,
    pub total_discount: f64,
    pub total: u64,
    pub price_per_hour: u64,
    pub description: String,
}

impl Quote {
    pub fn has_discount(&self) -> bool {
        !self.discounts.is_empty()
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Standard,
    Urgent,
}

impl Urgency {
    /// Only the exact form value `"urgent"` is urgent; every other value is standard.
    pub fn from_form_value(value: &str) -> Self {
        if value == "urgent" {
            Urgency::Urgent
        } else {
            Urgency::Standard
        }
    }
}

impl FromStr for Urgency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Urgency::from_form_value(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_coercion() {
        assert_eq!(Hours::from(0.0).get(), 1.0);
        assert_eq!(Hours::from(-3.0).get(), 1.0);
        assert_eq!(Hours::from(0.5).get(), 1.0);
        assert_eq!(Hours::from(f64::NAN).get(), 1.0);
        assert_eq!(Hours::from(f64::INFINITY).get(), 1.0);
        assert_eq!(Hours::from(6u32).get(), 6.0);
        assert_eq!(Hours::from(2.5).get(), 2.5);
    }

    #[test]
    fn test_huge_hour_counts_are_capped() {
        assert_eq!(Hours::from(1.0e16).get(), Hours::MAX_HOURS);
        assert_eq!(Hours::from(f64::MAX).get(), Hours::MAX_HOURS);
        assert_eq!(Hours::from("1e300").get(), Hours::MAX_HOURS);
        assert_eq!(Hours::from(Hours::MAX_HOURS).get(), Hours::MAX_HOURS);
        assert!(f64::from(u32::MAX) * Hours::MAX_HOURS < 2f64.powi(53));
    }

    #[test]
    fn test_hours_from_text() {
        assert_eq!(Hours::from(" 8 ").get(), 8.0);
        assert_eq!(Hours::from("").get(), 1.0);
        assert_eq!(Hours::from("four").get(), 1.0);
        assert_eq!(Hours::from("4abc").get(), 1.0);
        assert_eq!(Hours::from("inf").get(), 1.0);
        assert_eq!(Hours::from("0x10").get(), 16.0);
        assert_eq!(Hours::from(" 0XA ").get(), 10.0);
        assert_eq!(Hours::from("0x").get(), 1.0);
        assert_eq!(Hours::from("0x1g").get(), 1.0);
    }

    #[test]
    fn test_quote_json_field_names() {
        let quote = Quote {
            language: "python".to_string(),
            level: "beginner".to_string(),
            hours: 4.0,
            base_price: 6000,
            subtotal: 24000.0,
            discounts: vec![DiscountLine {
                kind: DiscountKind::Package,
                percentage: 5.0,
                amount: 1200.0,
            }],
            total_discount: 1200.0,
            total: 22800,
            price_per_hour: 5700,
            description: "x".to_string(),
        };
        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["basePrice"], 6000);
        assert_eq!(value["totalDiscount"], 1200.0);
        assert_eq!(value["pricePerHour"], 5700);
        assert_eq!(value["discounts"][0]["type"], "package");
    }

    #[test]
    fn test_urgency_parsing() {
        assert_eq!(Urgency::from_form_value("urgent"), Urgency::Urgent);
        assert_eq!(Urgency::from_form_value("URGENT"), Urgency::Standard);
        assert_eq!(Urgency::from_form_value(" urgent"), Urgency::Standard);
        assert_eq!(Urgency::from_form_value("normal"), Urgency::Standard);
        assert_eq!("".parse::<Urgency>().unwrap(), Urgency::Standard);
    }
}
