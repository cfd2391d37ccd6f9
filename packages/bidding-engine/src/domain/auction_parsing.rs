//! Call parsing and formatting using compact tokens (e.g., "1C", "3NT", "X")

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::auction_types::{Call, Strain, MAX_LEVEL, MIN_LEVEL};
use crate::errors::domain::DomainError;

fn strain_token(strain: Strain) -> &'static str {
    match strain {
        Strain::Clubs => "C",
        Strain::Diamonds => "D",
        Strain::Hearts => "H",
        Strain::Spades => "S",
        Strain::NoTrump => "NT",
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Call::Pass => write!(f, "PASS"),
            Call::Double => write!(f, "X"),
            Call::Redouble => write!(f, "XX"),
            Call::Contract { level, strain } => write!(f, "{level}{}", strain_token(*strain)),
        }
    }
}

impl FromStr for Call {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => return Ok(Call::Pass),
            "X" => return Ok(Call::Double),
            "XX" => return Ok(Call::Redouble),
            _ => {}
        }
        let mut chars = s.chars();
        let level_ch = chars
            .next()
            .ok_or_else(|| DomainError::ParseCall(s.to_string()))?;
        let level = level_ch
            .to_digit(10)
            .ok_or_else(|| DomainError::ParseCall(s.to_string()))? as u8;
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(DomainError::ParseCall(s.to_string()));
        }
        let strain = match chars.as_str() {
            "C" => Strain::Clubs,
            "D" => Strain::Diamonds,
            "H" => Strain::Hearts,
            "S" => Strain::Spades,
            "NT" => Strain::NoTrump,
            _ => return Err(DomainError::ParseCall(s.to_string())),
        };
        Ok(Call::Contract { level, strain })
    }
}

/// Non-panicking helper to parse call tokens (e.g., "1C", "X") into Calls.
/// Returns an error if any token is invalid.
pub fn try_parse_calls<I, S>(tokens: I) -> Result<Vec<Call>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Call>())
        .collect()
}
