//! Text the website's collaborators render from a [`Quote`](crate::pricing::Quote):
//! money strings, quotation document rows, booking messages, and the request and
//! budget documents built from raw form submissions.
//!
//! Nothing here draws or sends anything.

pub mod breakdown;
pub mod messages;
pub mod money;
pub mod names;
pub mod requests;
pub mod text;

pub use breakdown::{LineKind, PriceLine, QuoteBreakdown};
pub use messages::BookingRequest;
pub use money::{format_colones, format_colones_document, format_number};
pub use names::{language_name, level_name};
pub use requests::{BudgetOptions, Field, FormFields, RequestSummary};
pub use text::{safe_text, strip_emoji};
