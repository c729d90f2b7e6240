pub mod calculator;
pub mod quote;
pub mod table;

pub use calculator::PricingEngine;
pub use quote::{DiscountKind, DiscountLine, Hours, Quote, Urgency};
pub use table::{DiscountTable, FlatDiscounts, Level, LanguageRates, PackageTier, PriceTable};
