use super::quote::{DiscountKind, DiscountLine, Hours, Quote, Urgency};
use super::table::{DiscountTable, PriceTable};
use crate::config::PricingConfig;

pub const DEFAULT_URGENCY_SURCHARGE: f64 = 0.20;

/// Turns (language, level, hours) into a [`Quote`].
///
/// Holds read-only tables, so one engine can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    prices: PriceTable,
    discounts: DiscountTable,
    urgency_surcharge: f64,
}

impl PricingEngine {
    pub fn new(prices: PriceTable, discounts: DiscountTable) -> Self {
        Self {
            prices,
            discounts,
            urgency_surcharge: DEFAULT_URGENCY_SURCHARGE,
        }
    }

    pub fn from_config(config: &PricingConfig) -> Self {
        Self {
            prices: config.prices.clone(),
            discounts: config.discounts.clone(),
            urgency_surcharge: config.urgency_surcharge,
        }
    }

    pub fn with_urgency_surcharge(mut self, surcharge: f64) -> Self {
        self.urgency_surcharge = surcharge;
        self
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn discounts(&self) -> &DiscountTable {
        &self.discounts
    }

    /// Always produces a quote: unknown keys fall back, bad hour counts become one hour.
    pub fn calculate_price(&self, language: &str, level: &str, hours: impl Into<Hours>) -> Quote {
        let base_price = self.resolve_base_price(language, level);
        let hours = hours.into().get();
        let subtotal = f64::from(base_price) * hours;

        let mut discounts = Vec::new();
        if let Some(rate) = self.discounts.package_rate(hours).filter(|r| *r > 0.0) {
            discounts.push(DiscountLine {
                kind: DiscountKind::Package,
                percentage: rate * 100.0,
                amount: subtotal * rate,
            });
        }

        let total_discount: f64 = discounts.iter().map(|d| d.amount).sum();
        let total = round_amount(subtotal - total_discount);
        let price_per_hour = round_amount(total as f64 / hours);

        Quote {
            language: language.to_string(),
            level: level.to_string(),
            hours,
            base_price,
            subtotal,
            discounts,
            total_discount,
            total,
            price_per_hour,
            description: self.prices.description(language).to_string(),
        }
    }

    /// Quote total with the urgency surcharge applied on top. The quote itself is untouched.
    pub fn final_price(&self, quote: &Quote, urgency: Urgency) -> u64 {
        match urgency {
            Urgency::Standard => quote.total,
            Urgency::Urgent => round_amount(quote.total as f64 * (1.0 + self.urgency_surcharge)),
        }
    }

    pub fn urgency_surcharge(&self) -> f64 {
        self.urgency_surcharge
    }

    fn resolve_base_price(&self, language: &str, level: &str) -> u32 {
        self.prices
            .rate(language, level)
            .unwrap_or_else(|| self.prices.fallback_rate())
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PriceTable::builtin(), DiscountTable::builtin())
    }
}

/// Round half up to a whole colón. Negative or non-finite amounts clamp to zero.
pub(crate) fn round_amount(amount: f64) -> u64 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0;
    }
    (amount + 0.5).floor() as u64
}
