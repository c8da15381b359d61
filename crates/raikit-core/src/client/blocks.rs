//! Block retrieval, publication, and offline block creation.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::RpcError;
use crate::rpc::{Response, RpcRequest, Transport};
use crate::types::{BlockCounts, BlockSpec, BlockTypeCounts, CreatedBlock, HistoryEntry};

use super::{decode_field, decode_response, expect_str, NodeClient};

impl<T: Transport> NodeClient<T> {
    /// Retrieve a block by hash, decoded into its JSON representation.
    pub async fn block(&self, hash: &str) -> Result<Value, RpcError> {
        let response = self
            .call(RpcRequest::new("block").param("hash", hash))
            .await?;
        decode_contents_field(&response, "block", "contents")
    }

    /// Retrieve several blocks at once, keyed by hash.
    pub async fn blocks(&self, hashes: &[String]) -> Result<HashMap<String, Value>, RpcError> {
        let response = self
            .call(RpcRequest::new("blocks").param("hashes", hashes.to_vec()))
            .await?;
        let raw: HashMap<String, Value> = decode_field(response, "blocks", "blocks")?;
        raw.into_iter()
            .map(|(hash, contents)| Ok((hash, decode_contents_value(contents, "blocks")?)))
            .collect()
    }

    /// Like [`blocks`](Self::blocks) with extra per-block detail (amount,
    /// owning account, and the contents). Returned verbatim, keyed by hash.
    pub async fn blocks_info(&self, hashes: &[String]) -> Result<HashMap<String, Value>, RpcError> {
        let response = self
            .call(RpcRequest::new("blocks_info").param("hashes", hashes.to_vec()))
            .await?;
        decode_field(response, "blocks_info", "blocks")
    }

    /// The account whose chain contains the block `hash`.
    pub async fn block_account(&self, hash: &str) -> Result<String, RpcError> {
        let response = self
            .call(RpcRequest::new("block_account").param("hash", hash))
            .await?;
        expect_str(&response, "block_account", "account")
    }

    /// Ledger and unchecked block totals.
    pub async fn block_count(&self) -> Result<BlockCounts, RpcError> {
        let response = self.call(RpcRequest::new("block_count")).await?;
        decode_response(response, "block_count")
    }

    /// Per-type block totals (send/receive/open/change).
    pub async fn block_count_type(&self) -> Result<BlockTypeCounts, RpcError> {
        let response = self.call(RpcRequest::new("block_count_type")).await?;
        decode_response(response, "block_count_type")
    }

    /// Hashes of up to `count` blocks in the account chain, walking back
    /// from `block` toward the open block.
    pub async fn chain(&self, block: &str, count: u64) -> Result<Vec<String>, RpcError> {
        let response = self
            .call(
                RpcRequest::new("chain")
                    .param("block", block)
                    .param("count", count.to_string()),
            )
            .await?;
        decode_field(response, "chain", "blocks")
    }

    /// Send/receive history for the chain ending at `hash`.
    pub async fn history(&self, hash: &str, count: u64) -> Result<Vec<HistoryEntry>, RpcError> {
        let response = self
            .call(
                RpcRequest::new("history")
                    .param("hash", hash)
                    .param("count", count.to_string()),
            )
            .await?;
        decode_field(response, "history", "history")
    }

    /// Rebroadcast the block `hash` (and its successors) to the network.
    /// Returns the hashes that were republished.
    pub async fn republish(&self, hash: &str) -> Result<Vec<String>, RpcError> {
        let response = self
            .call(RpcRequest::new("republish").param("hash", hash))
            .await?;
        decode_field(response, "republish", "blocks")
    }

    /// Publish a signed block to the network. The node expects the block
    /// JSON nested as a string field. Returns the block's hash.
    pub async fn process(&self, block: &Value) -> Result<String, RpcError> {
        let encoded = serde_json::to_string(block)?;
        let response = self
            .call(RpcRequest::new("process").param("block", encoded))
            .await?;
        expect_str(&response, "process", "hash")
    }

    /// Create and sign a block without publishing it (offline signing).
    pub async fn block_create(&self, spec: &BlockSpec) -> Result<CreatedBlock, RpcError> {
        let request = match spec {
            BlockSpec::Open {
                key,
                account,
                representative,
                source,
            } => RpcRequest::new("block_create")
                .param("type", "open")
                .param("key", key.as_str())
                .param("account", account.as_str())
                .param("representative", representative.as_str())
                .param("source", source.as_str()),
            BlockSpec::Receive {
                wallet,
                account,
                source,
                previous,
            } => RpcRequest::new("block_create")
                .param("type", "receive")
                .param("wallet", wallet.as_str())
                .param("account", account.as_str())
                .param("source", source.as_str())
                .param("previous", previous.as_str()),
            BlockSpec::Send {
                wallet,
                account,
                destination,
                balance,
                amount,
                previous,
            } => RpcRequest::new("block_create")
                .param("type", "send")
                .param("wallet", wallet.as_str())
                .param("account", account.as_str())
                .param("destination", destination.as_str())
                .param("balance", balance.to_string())
                .param("amount", amount.to_string())
                .param("previous", previous.as_str()),
            BlockSpec::Change {
                wallet,
                account,
                representative,
                previous,
            } => RpcRequest::new("block_create")
                .param("type", "change")
                .param("wallet", wallet.as_str())
                .param("account", account.as_str())
                .param("representative", representative.as_str())
                .param("previous", previous.as_str()),
        };

        let response = self.call(request).await?;
        let hash = expect_str(&response, "block_create", "hash")?;
        let block = decode_contents_field(&response, "block_create", "block")?;
        Ok(CreatedBlock { hash, block })
    }
}

/// Block contents arrive either inline or as a string holding JSON
/// (the node's historical encoding). Normalize to a decoded value.
fn decode_contents_field(
    response: &Response,
    action: &'static str,
    field: &'static str,
) -> Result<Value, RpcError> {
    let value = response
        .get(field)
        .cloned()
        .ok_or(RpcError::MissingField { action, field })?;
    decode_contents_value(value, action)
}

fn decode_contents_value(value: Value, action: &'static str) -> Result<Value, RpcError> {
    match value {
        Value::String(text) => {
            serde_json::from_str(&text).map_err(|e| RpcError::InvalidField {
                action,
                field: "contents",
                message: format!("nested block JSON: {e}"),
            })
        }
        other => Ok(other),
    }
}
