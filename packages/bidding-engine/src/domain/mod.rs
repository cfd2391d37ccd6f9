//! Domain layer: pure auction and consensus logic.

pub mod answer_types;
pub mod auction_parsing;
pub mod auction_serde;
pub mod auction_types;
pub mod consensus;
pub mod legality;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_answer_types;

// Re-exports for ergonomics
pub use answer_types::{available_types, compatible, AnswerType, IncompatibilityError};
pub use auction_types::{seat_for_sequence, Auction, Bid, Call, Seat, Side, Strain, Vulnerability};
pub use consensus::{agreement, deep_equal, overall_score, AgreementResult, AnswerRecord};
pub use legality::{legal_calls, validate, LegalityError};
