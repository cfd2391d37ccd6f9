//! Error handling for the bidding engine.

pub mod domain;

pub use domain::DomainError;
