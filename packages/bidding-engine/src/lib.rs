#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for bridge-bidding quizzes: auction legality, answer-type
//! gating, and partnership consensus scoring.
//!
//! Everything here is a pure function over value types. The surrounding
//! application (persistence, auth, routing) supplies plain data and receives
//! plain data back; nothing in this crate performs I/O or holds state between
//! calls.

pub mod domain;
pub mod errors;


// Re-exports for public API
pub use domain::answer_types::{available_types, compatible, AnswerType, IncompatibilityError};
pub use domain::auction_types::{
    seat_for_sequence, Auction, Bid, Call, Seat, Side, Strain, Vulnerability,
};
pub use domain::consensus::{agreement, deep_equal, overall_score, AgreementResult, AnswerRecord};
pub use domain::legality::{legal_calls, validate, LegalityError};
pub use errors::DomainError;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
