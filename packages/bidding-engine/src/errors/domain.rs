//! Engine-level error type used across the domain modules.
//!
//! This error type is HTTP- and DB-agnostic. Callers embedding the engine
//! should map it to their own transport-facing error shape; nothing here
//! knows anything about presentation.

use thiserror::Error;

/// Recoverable construction/parsing failures for auction values.
///
/// Legality reporting has its own accumulating shape
/// ([`crate::domain::legality::LegalityError`]); this enum covers the few
/// operations that fail with a single reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid contract level {0}: must be 1..=7")]
    InvalidLevel(u8),
    #[error("parse call: {0}")]
    ParseCall(String),
}
