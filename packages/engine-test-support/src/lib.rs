//! Engine test support utilities
//!
//! This crate provides fixtures for integration tests against the bidding
//! engine: auction builders, readable call shorthands, answer-record
//! literals, and unified logging initialization.

pub mod answers;
pub mod auctions;
pub mod logging;

pub use auctions::{auction, AuctionBuilder};
