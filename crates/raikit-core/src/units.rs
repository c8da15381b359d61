//! Denominations of the node's base unit.
//!
//! Every balance and amount on the wire is a decimal string counted in
//! `raw`, the indivisible unit. The named denominations are fixed powers
//! of ten: 1 rai = 10^24 raw, 1 krai = 10^27 raw, 1 Mrai = 10^30 raw.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const RAW_PER_RAI: u128 = 1_000_000_000_000_000_000_000_000;
pub const RAW_PER_KRAI: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAW_PER_MRAI: u128 = 1_000_000_000_000_000_000_000_000_000_000;

// ==============================================================================
// RawAmount
// ==============================================================================

/// An amount in raw. Wraps `u128`; the full public supply fits with room
/// to spare. Serializes as the decimal string the node expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawAmount(u128);

impl RawAmount {
    pub const ZERO: RawAmount = RawAmount(0);

    pub const fn from_raw(raw: u128) -> Self {
        RawAmount(raw)
    }

    /// Whole-rai constructor; `None` on overflow.
    pub fn from_rai(rai: u64) -> Option<Self> {
        (rai as u128).checked_mul(RAW_PER_RAI).map(RawAmount)
    }

    /// Whole-krai constructor; `None` on overflow.
    pub fn from_krai(krai: u64) -> Option<Self> {
        (krai as u128).checked_mul(RAW_PER_KRAI).map(RawAmount)
    }

    /// Whole-Mrai constructor; `None` on overflow.
    pub fn from_mrai(mrai: u64) -> Option<Self> {
        (mrai as u128).checked_mul(RAW_PER_MRAI).map(RawAmount)
    }

    pub const fn as_raw(self) -> u128 {
        self.0
    }

    /// Whole rai, truncating any sub-rai remainder.
    pub const fn to_rai_floor(self) -> u128 {
        self.0 / RAW_PER_RAI
    }

    /// Whole krai, truncating any sub-krai remainder.
    pub const fn to_krai_floor(self) -> u128 {
        self.0 / RAW_PER_KRAI
    }

    /// Whole Mrai, truncating any sub-Mrai remainder.
    pub const fn to_mrai_floor(self) -> u128 {
        self.0 / RAW_PER_MRAI
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: RawAmount) -> Option<RawAmount> {
        self.0.checked_add(other.0).map(RawAmount)
    }

    pub fn checked_sub(self, other: RawAmount) -> Option<RawAmount> {
        self.0.checked_sub(other.0).map(RawAmount)
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RawAmount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u128>().map(RawAmount)
    }
}

impl Serialize for RawAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
