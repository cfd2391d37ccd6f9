//! Serialization and deserialization for auction types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::auction_types::{Call, Seat, Strain, Vulnerability};

// Seat serde
impl Serialize for Seat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Seat::North => "NORTH",
            Seat::East => "EAST",
            Seat::South => "SOUTH",
            Seat::West => "WEST",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Seat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "NORTH" => Ok(Seat::North),
            "EAST" => Ok(Seat::East),
            "SOUTH" => Ok(Seat::South),
            "WEST" => Ok(Seat::West),
            _ => Err(serde::de::Error::custom(format!("Invalid seat: {s}"))),
        }
    }
}

// Strain serde
impl Serialize for Strain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Strain::Clubs => "CLUBS",
            Strain::Diamonds => "DIAMONDS",
            Strain::Hearts => "HEARTS",
            Strain::Spades => "SPADES",
            Strain::NoTrump => "NO_TRUMP",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Strain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "CLUBS" => Ok(Strain::Clubs),
            "DIAMONDS" => Ok(Strain::Diamonds),
            "HEARTS" => Ok(Strain::Hearts),
            "SPADES" => Ok(Strain::Spades),
            "NO_TRUMP" => Ok(Strain::NoTrump),
            _ => Err(serde::de::Error::custom(format!("Invalid strain: {s}"))),
        }
    }
}

// Vulnerability serde
impl Serialize for Vulnerability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Vulnerability::None => "NONE",
            Vulnerability::NorthSouth => "NORTH_SOUTH",
            Vulnerability::EastWest => "EAST_WEST",
            Vulnerability::All => "ALL",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Vulnerability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "NONE" => Ok(Vulnerability::None),
            "NORTH_SOUTH" => Ok(Vulnerability::NorthSouth),
            "EAST_WEST" => Ok(Vulnerability::EastWest),
            "ALL" => Ok(Vulnerability::All),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid vulnerability: {s}"
            ))),
        }
    }
}

// Call serde (compact token format like "1C", "3NT", "X", "XX", "PASS")
impl Serialize for Call {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Call {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Call>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
