//! Typed views over the node's string-heavy JSON responses.
//!
//! The node encodes every number as a decimal string; fields that are
//! logically numeric decode through [`string_u64`] or [`RawAmount`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::units::RawAmount;

/// Serde adapter for the node's stringified integers ("1000" -> 1000).
pub(crate) mod string_u64 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }
}

// ==============================================================================
// Account Views
// ==============================================================================

/// Balance pair from `account_balance` / `accounts_balances`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Settled balance in raw.
    pub balance: RawAmount,
    /// Amount sent to the account but not yet pocketed, in raw.
    pub pending: RawAmount,
}

/// Full account record from `account_info` (queried with representative,
/// weight, and pending enabled, so those fields are normally present).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Head block hash of the account chain.
    pub frontier: String,
    pub open_block: String,
    pub representative_block: String,
    pub balance: RawAmount,
    #[serde(with = "string_u64")]
    pub modified_timestamp: u64,
    #[serde(with = "string_u64")]
    pub block_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<RawAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<RawAmount>,
}

/// One row of `ledger`. Same shape as [`AccountInfo`] minus the open block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub frontier: String,
    pub open_block: String,
    pub representative_block: String,
    pub balance: RawAmount,
    #[serde(with = "string_u64")]
    pub modified_timestamp: u64,
    #[serde(with = "string_u64")]
    pub block_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<RawAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<RawAmount>,
}

/// One entry of `account_history` / `history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub hash: String,
    /// Block type: `open`, `send`, `receive`, or `change`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Counterparty account.
    pub account: String,
    pub amount: RawAmount,
}

/// One pending block from `accounts_pending` (queried with source enabled).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingBlock {
    pub amount: RawAmount,
    pub source: String,
}

// ==============================================================================
// Ledger Totals
// ==============================================================================

/// Ledger and unchecked block totals from `block_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCounts {
    #[serde(with = "string_u64")]
    pub count: u64,
    #[serde(with = "string_u64")]
    pub unchecked: u64,
}

/// Per-type ledger block totals from `block_count_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTypeCounts {
    #[serde(with = "string_u64")]
    pub send: u64,
    #[serde(with = "string_u64")]
    pub receive: u64,
    #[serde(with = "string_u64")]
    pub open: u64,
    #[serde(with = "string_u64")]
    pub change: u64,
}

// ==============================================================================
// Keys and Blocks
// ==============================================================================

/// Keypair material from `key_create` / `deterministic_key`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyPair {
    pub private: String,
    pub public: String,
    /// The xrb_ address derived from the public key.
    pub account: String,
}

/// Result of `block_create`: the new block's hash and its decoded JSON
/// representation, ready to hand to `process`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedBlock {
    pub hash: String,
    pub block: Value,
}

/// Parameters for `block_create` (offline signing), one variant per block
/// type the node understands.
#[derive(Debug, Clone)]
pub enum BlockSpec {
    /// Open an account, signed with an ad hoc private key.
    Open {
        key: String,
        account: String,
        representative: String,
        source: String,
    },
    /// Pocket a pending send, signed by the wallet.
    Receive {
        wallet: String,
        account: String,
        source: String,
        previous: String,
    },
    /// Send from an account, signed by the wallet. `balance` is the
    /// account balance before the send; `amount` is how much to send.
    Send {
        wallet: String,
        account: String,
        destination: String,
        balance: RawAmount,
        amount: RawAmount,
        previous: String,
    },
    /// Rotate the representative, signed by the wallet.
    Change {
        wallet: String,
        account: String,
        representative: String,
        previous: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_info_decodes_stringified_numbers() {
        let info: AccountInfo = serde_json::from_value(serde_json::json!({
            "frontier": "FF84533A571D953A596EA401FD41743AC85D04F406E76FDE4408EAED50B473C5",
            "open_block": "991CF190094C00F0B68E2E5F75F6BEE95A2E0BD93CEAA4A6734DB9F19B728948",
            "representative_block": "991CF190094C00F0B68E2E5F75F6BEE95A2E0BD93CEAA4A6734DB9F19B728948",
            "balance": "235580100176034320859259343606608761791",
            "modified_timestamp": "1501793775",
            "block_count": "33",
            "representative": "xrb_1anrzcuwe64rwxzcco8dkhpyxpi8kd7zsjc1oeimpc3ppca4mrjtwnqposrs",
            "weight": "1105577030935649664609129644855132177",
            "pending": "2309370929000000000000000000000000"
        }))
        .unwrap();
        assert_eq!(info.block_count, 33);
        assert_eq!(info.modified_timestamp, 1_501_793_775);
        assert!(info.weight.unwrap() > RawAmount::ZERO);
    }

    #[test]
    fn account_info_tolerates_missing_optional_fields() {
        let info: AccountInfo = serde_json::from_value(serde_json::json!({
            "frontier": "FF84",
            "open_block": "991C",
            "representative_block": "991C",
            "balance": "0",
            "modified_timestamp": "0",
            "block_count": "1"
        }))
        .unwrap();
        assert!(info.representative.is_none());
        assert!(info.weight.is_none());
        assert!(info.pending.is_none());
    }

    #[test]
    fn block_counts_reject_non_numeric_strings() {
        let result = serde_json::from_value::<BlockCounts>(serde_json::json!({
            "count": "many",
            "unchecked": "10"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn history_entry_maps_type_to_kind() {
        let entry: HistoryEntry = serde_json::from_value(serde_json::json!({
            "hash": "000D1BAEC8EC208142C99059B393051BAC8380F9B5A2E6B2489A277D81789F3F",
            "type": "receive",
            "account": "xrb_3e3j5tkog48pnny9dmfzj1r16pg8t1e76dz5tmac6iq689wyjfpi00000000",
            "amount": "100000000000000000000000000000000"
        }))
        .unwrap();
        assert_eq!(entry.kind, "receive");
    }
}
