//! Core auction types: Seat, Strain, Call, Bid, Auction

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// The four table positions in fixed clockwise order, starting from North.
/// Seat derivation and rotation both index into this array.
pub const SEATS: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 7;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Seat {
    North,
    East,
    South,
    West,
}

/// A partnership side. North-South sit across from each other, as do
/// East-West; every legality rule that cares about "opponent" reduces to a
/// side comparison.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    NorthSouth,
    EastWest,
}

impl Seat {
    pub fn index(self) -> usize {
        match self {
            Seat::North => 0,
            Seat::East => 1,
            Seat::South => 2,
            Seat::West => 3,
        }
    }

    pub fn side(self) -> Side {
        match self {
            Seat::North | Seat::South => Side::NorthSouth,
            Seat::East | Seat::West => Side::EastWest,
        }
    }

    pub fn partner(self) -> Seat {
        match self {
            Seat::North => Seat::South,
            Seat::South => Seat::North,
            Seat::East => Seat::West,
            Seat::West => Seat::East,
        }
    }

    pub fn is_opponent(self, other: Seat) -> bool {
        self.side() != other.side()
    }
}

/// Seat expected to act at zero-based position `sequence` when `dealer`
/// makes the first call.
pub fn seat_for_sequence(dealer: Seat, sequence: usize) -> Seat {
    SEATS[(dealer.index() + sequence) % 4]
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Strain {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrump,
}

impl Strain {
    /// Ranking component for contract comparison (Clubs lowest, NoTrump
    /// highest). Used only for outbidding, never for play value.
    pub fn rank(self) -> u8 {
        match self {
            Strain::Clubs => 1,
            Strain::Diamonds => 2,
            Strain::Hearts => 3,
            Strain::Spades => 4,
            Strain::NoTrump => 5,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Call {
    Pass,
    Double,
    Redouble,
    Contract { level: u8, strain: Strain },
}

impl Call {
    /// Checked constructor for contract calls; level must be 1..=7.
    pub fn contract(level: u8, strain: Strain) -> Result<Call, DomainError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(DomainError::InvalidLevel(level));
        }
        Ok(Call::Contract { level, strain })
    }

    /// Total-order rank for contract calls: `level * 10 + strain_rank`.
    /// A later contract is legal only if its rank strictly exceeds the most
    /// recent prior contract's rank. Non-contract calls have no rank.
    /// Widened to u16 so an out-of-range level still ranks without overflow.
    pub fn rank(self) -> Option<u16> {
        match self {
            Call::Contract { level, strain } => {
                Some(u16::from(level) * 10 + u16::from(strain.rank()))
            }
            _ => None,
        }
    }

    pub fn is_contract(self) -> bool {
        matches!(self, Call::Contract { .. })
    }
}

/// One call within an auction, carrying its declared position and seat.
/// Both are redundant with `(dealer, index)` and are cross-checked by the
/// legality validator rather than trusted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub call: Call,
    pub seat: Seat,
    pub sequence: usize,
}

/// Vulnerability affects downstream scoring/display only, never legality.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Vulnerability {
    None,
    NorthSouth,
    EastWest,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    pub dealer: Seat,
    pub vulnerability: Vulnerability,
    /// Ordered; insertion order is the play order.
    pub bids: Vec<Bid>,
}

impl Auction {
    pub fn new(dealer: Seat, vulnerability: Vulnerability) -> Self {
        Self {
            dealer,
            vulnerability,
            bids: Vec::new(),
        }
    }

    /// The final call, if any. This is what the answer-type gate is run
    /// against when a question is authored.
    pub fn last_call(&self) -> Option<Call> {
        self.bids.last().map(|b| b.call)
    }

    /// Whether the auction is structurally finished: either a pass-out
    /// (exactly four passes) or a contract followed eventually by three
    /// closing passes.
    pub fn is_complete(&self) -> bool {
        let n = self.bids.len();
        if n == 4 && self.bids.iter().all(|b| b.call == Call::Pass) {
            return true;
        }
        if n < 4 {
            return false;
        }
        let (head, tail) = self.bids.split_at(n - 3);
        head.iter().any(|b| b.call.is_contract()) && tail.iter().all(|b| b.call == Call::Pass)
    }
}
