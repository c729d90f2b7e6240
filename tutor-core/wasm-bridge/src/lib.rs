//! Browser bindings for the quote engine.
//!
//! The site's scripts build one `QuoteEngine` at startup and hand it to the
//! calculator widget, the quotation document and the booking form. Request and
//! budget forms are turned into their document text by the free functions.

mod quote_bindings;

pub use quote_bindings::{budget_options_text, format_money, request_summary_text, QuoteEngine};
