//! Quote engine for an individual programming-tutoring service.
//!
//! Maps a (language, level, hours) request to a [`Quote`]: per-hour rate from a
//! tiered [`PriceTable`], times the hours, minus an exact-match package discount.
//! Pricing never fails; unknown keys and bad hour counts fall back to defaults.

pub mod config;
pub mod error;
pub mod observability;
pub mod present;
pub mod pricing;

pub use config::{ContactInfo, PricingConfig};
pub use error::{PricingError, Result};
pub use pricing::{DiscountTable, Hours, PriceTable, PricingEngine, Quote, Urgency};
