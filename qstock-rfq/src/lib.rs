pub mod models;
pub mod draft;
pub mod quoting;
pub mod ledger;

pub use models::{NewRfqItem, Quote, QuoteItem, Rfq, RfqItem, RfqStatus};
pub use draft::RfqDraft;
pub use quoting::{AlternativeOffer, ItemQuote, QuoteSubmission};
pub use ledger::{RfqError, RfqLedger};
