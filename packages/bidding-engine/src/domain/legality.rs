//! Auction legality: seat rotation, contract ranking, doubles and redoubles,
//! and structural auction-end enforcement.
//!
//! The validator accumulates every violation it can detect instead of
//! stopping at the first, so a quiz author sees all problems in one pass.
//! Checks whose preconditions are absent (rank comparison with no prior
//! contract) are skipped silently rather than cascading spurious errors.

use thiserror::Error;
use tracing::debug;

use super::auction_types::{
    seat_for_sequence, Auction, Bid, Call, Seat, Strain, MAX_LEVEL, MIN_LEVEL,
};

/// One legality violation. `bid_index` points at the offending bid when the
/// violation is attributable to a single bid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LegalityError {
    pub message: String,
    pub bid_index: Option<usize>,
}

impl LegalityError {
    pub fn at(index: usize, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            bid_index: Some(index),
        }
    }
}

/// Check whether an ordered call sequence is a legal bridge auction.
///
/// An empty auction is trivially valid (bidding in progress). A pass-out
/// (exactly four passes) is complete and legal with no further checks.
/// Vulnerability never affects legality.
pub fn validate(auction: &Auction) -> Result<(), Vec<LegalityError>> {
    let bids = &auction.bids;
    if bids.is_empty() {
        return Ok(());
    }
    if is_pass_out(bids) {
        return Ok(());
    }

    let mut errors = Vec::new();

    for (i, bid) in bids.iter().enumerate() {
        check_position(auction.dealer, i, bid, &mut errors);
        match bid.call {
            Call::Pass => {}
            Call::Contract { level, .. } => {
                if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
                    errors.push(LegalityError::at(
                        i,
                        format!("contract level {level} out of range 1..=7"),
                    ));
                } else if let Some(prev) = last_contract_before(bids, i) {
                    let new_rank = bid.call.rank().unwrap_or(0);
                    let prev_rank = prev.call.rank().unwrap_or(0);
                    if new_rank <= prev_rank {
                        errors.push(LegalityError::at(
                            i,
                            format!(
                                "contract {} does not outbid the previous contract {}",
                                bid.call, prev.call
                            ),
                        ));
                    }
                }
            }
            Call::Double => match last_contract_before(bids, i) {
                None => errors.push(LegalityError::at(
                    i,
                    "double requires a preceding contract bid",
                )),
                Some(contract) => {
                    if !bid.seat.is_opponent(contract.seat) {
                        errors.push(LegalityError::at(
                            i,
                            format!("{:?} cannot double their own side's contract", bid.seat),
                        ));
                    }
                }
            },
            Call::Redouble => {
                let follows_double = i > 0 && bids[i - 1].call == Call::Double;
                if !follows_double {
                    errors.push(LegalityError::at(
                        i,
                        "redouble must immediately follow a double",
                    ));
                }
            }
        }
    }

    if let Some(end) = closing_index(bids) {
        for i in end..bids.len() {
            errors.push(LegalityError::at(i, "auction should have ended"));
        }
    }

    debug!(
        bid_count = bids.len(),
        error_count = errors.len(),
        "auction validated"
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_position(dealer: Seat, i: usize, bid: &Bid, errors: &mut Vec<LegalityError>) {
    if bid.sequence != i {
        errors.push(LegalityError::at(
            i,
            format!("bid declares sequence {} but sits at position {i}", bid.sequence),
        ));
    }
    let expected = seat_for_sequence(dealer, i);
    if bid.seat != expected {
        errors.push(LegalityError::at(
            i,
            format!(
                "position {i} belongs to {expected:?}, found {:?}",
                bid.seat
            ),
        ));
    }
}

fn is_pass_out(bids: &[Bid]) -> bool {
    bids.len() == 4 && bids.iter().all(|b| b.call == Call::Pass)
}

/// Most recent contract bid strictly before index `i`, if any.
fn last_contract_before(bids: &[Bid], i: usize) -> Option<&Bid> {
    bids[..i].iter().rev().find(|b| b.call.is_contract())
}

/// Index of the first bid past the auction's structural close, if the
/// sequence contains a contract followed by three consecutive passes.
fn closing_index(bids: &[Bid]) -> Option<usize> {
    for j in 1..bids.len().saturating_sub(2) {
        let contract_before = bids[..j].iter().any(|b| b.call.is_contract());
        let three_passes = bids[j..j + 3].iter().all(|b| b.call == Call::Pass);
        if contract_before && three_passes {
            return Some(j + 3);
        }
    }
    None
}

/// Enumerate every call the seat on turn could legally add to the auction.
/// Used by editing tools to present a bidding box; order is Pass, contracts
/// ascending by rank, then Double/Redouble when applicable.
///
/// Mirrors `validate`'s per-call rules exactly, including the loose double
/// rule (no doubled/redoubled tracking) and the strict redouble rule.
pub fn legal_calls(auction: &Auction) -> Vec<Call> {
    if auction.is_complete() {
        return Vec::new();
    }
    let bids = &auction.bids;
    let next_seat = seat_for_sequence(auction.dealer, bids.len());

    let mut calls = vec![Call::Pass];

    let floor = last_contract_before(bids, bids.len())
        .and_then(|b| b.call.rank())
        .unwrap_or(0);
    for level in MIN_LEVEL..=MAX_LEVEL {
        for strain in [
            Strain::Clubs,
            Strain::Diamonds,
            Strain::Hearts,
            Strain::Spades,
            Strain::NoTrump,
        ] {
            let call = Call::Contract { level, strain };
            if call.rank().unwrap_or(0) > floor {
                calls.push(call);
            }
        }
    }

    if let Some(contract) = last_contract_before(bids, bids.len()) {
        if next_seat.is_opponent(contract.seat) {
            calls.push(Call::Double);
        }
    }
    if bids.last().map(|b| b.call) == Some(Call::Double) {
        calls.push(Call::Redouble);
    }

    calls
}
