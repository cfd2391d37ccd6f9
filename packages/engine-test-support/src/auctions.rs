//! Auction fixtures: build legal (or deliberately broken) auctions from
//! compact call tokens without spelling out every seat and sequence.

use bidding_engine::{seat_for_sequence, Auction, Bid, Call, Seat, Vulnerability};

/// Builds auctions with seats and sequences derived from the dealer.
/// Test-only; panics on malformed call tokens.
pub struct AuctionBuilder {
    dealer: Seat,
    vulnerability: Vulnerability,
    calls: Vec<Call>,
}

impl AuctionBuilder {
    pub fn new(dealer: Seat) -> Self {
        Self {
            dealer,
            vulnerability: Vulnerability::None,
            calls: Vec::new(),
        }
    }

    pub fn vulnerability(mut self, vulnerability: Vulnerability) -> Self {
        self.vulnerability = vulnerability;
        self
    }

    pub fn call(mut self, call: Call) -> Self {
        self.calls.push(call);
        self
    }

    /// Append calls from compact tokens, e.g. `.tokens(&["1C", "X", "XX"])`.
    pub fn tokens(mut self, tokens: &[&str]) -> Self {
        for token in tokens {
            let call = token
                .parse::<Call>()
                .unwrap_or_else(|e| panic!("bad call token {token:?}: {e}"));
            self.calls.push(call);
        }
        self
    }

    pub fn build(self) -> Auction {
        let bids = self
            .calls
            .into_iter()
            .enumerate()
            .map(|(i, call)| Bid {
                call,
                seat: seat_for_sequence(self.dealer, i),
                sequence: i,
            })
            .collect();
        Auction {
            dealer: self.dealer,
            vulnerability: self.vulnerability,
            bids,
        }
    }
}

/// One-liner for the common case: seats derived, vulnerability None.
pub fn auction(dealer: Seat, tokens: &[&str]) -> Auction {
    AuctionBuilder::new(dealer).tokens(tokens).build()
}
