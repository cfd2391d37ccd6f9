// Proptest generators and fixture helpers for auction domain types.

use proptest::prelude::*;

use crate::domain::auction_types::{
    seat_for_sequence, Auction, Bid, Call, Seat, Strain, Vulnerability,
};

/// Build an auction from bare calls, deriving seat and sequence from the
/// dealer. The resulting auction always satisfies the rotation invariant.
pub fn auction_from_calls(dealer: Seat, vulnerability: Vulnerability, calls: &[Call]) -> Auction {
    let bids = calls
        .iter()
        .enumerate()
        .map(|(i, &call)| Bid {
            call,
            seat: seat_for_sequence(dealer, i),
            sequence: i,
        })
        .collect();
    Auction {
        dealer,
        vulnerability,
        bids,
    }
}

/// Token-based variant for readable test cases, e.g. `["1C", "X", "XX"]`.
pub fn auction_from_tokens(dealer: Seat, tokens: &[&str]) -> Auction {
    let calls: Vec<Call> = tokens
        .iter()
        .map(|t| t.parse::<Call>().expect("fixture call token"))
        .collect();
    auction_from_calls(dealer, Vulnerability::None, &calls)
}

/// Generate a random Seat
pub fn seat() -> impl Strategy<Value = Seat> {
    prop_oneof![
        Just(Seat::North),
        Just(Seat::East),
        Just(Seat::South),
        Just(Seat::West),
    ]
}

/// Generate a random Strain
pub fn strain() -> impl Strategy<Value = Strain> {
    prop_oneof![
        Just(Strain::Clubs),
        Just(Strain::Diamonds),
        Just(Strain::Hearts),
        Just(Strain::Spades),
        Just(Strain::NoTrump),
    ]
}

/// Generate a random Vulnerability
pub fn vulnerability() -> impl Strategy<Value = Vulnerability> {
    prop_oneof![
        Just(Vulnerability::None),
        Just(Vulnerability::NorthSouth),
        Just(Vulnerability::EastWest),
        Just(Vulnerability::All),
    ]
}

/// Generate a random contract call with a valid level
pub fn contract_call() -> impl Strategy<Value = Call> {
    (1u8..=7, strain()).prop_map(|(level, strain)| Call::Contract { level, strain })
}

/// Generate a legal auction made of passes and strictly-climbing contracts,
/// optionally closed with three final passes.
///
/// Between contracts at most two passes are inserted so the closing rule
/// never fires mid-auction; contracts that would not outbid the running
/// maximum are dropped rather than re-rolled.
pub fn legal_auction() -> impl Strategy<Value = Auction> {
    (
        seat(),
        vulnerability(),
        prop::collection::vec((1u8..=7, strain(), 0usize..=2), 0..6),
        any::<bool>(),
    )
        .prop_map(|(dealer, vulnerability, raw, close)| {
            let mut calls: Vec<Call> = Vec::new();
            let mut floor = 0u16;
            for (level, strain, passes_before) in raw {
                let call = Call::Contract { level, strain };
                let rank = call.rank().expect("contract has a rank");
                if rank <= floor {
                    continue;
                }
                calls.extend(std::iter::repeat(Call::Pass).take(passes_before));
                calls.push(call);
                floor = rank;
            }
            if close && floor > 0 {
                calls.extend([Call::Pass, Call::Pass, Call::Pass]);
            }
            auction_from_calls(dealer, vulnerability, &calls)
        })
}
