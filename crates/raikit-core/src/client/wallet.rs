//! Wallet transfers, payment sessions, key derivation, and proof of work.

use crate::error::RpcError;
use crate::rpc::{RpcRequest, Transport};
use crate::types::KeyPair;
use crate::units::RawAmount;

use super::{decode_response, expect_str, NodeClient};

impl<T: Transport> NodeClient<T> {
    /// Send `amount` raw from `source` to `destination`, signed by `wallet`.
    /// Returns the send block hash.
    pub async fn send(
        &self,
        wallet: &str,
        source: &str,
        destination: &str,
        amount: RawAmount,
    ) -> Result<String, RpcError> {
        let response = self
            .call(
                RpcRequest::new("send")
                    .param("wallet", wallet)
                    .param("source", source)
                    .param("destination", destination)
                    .param("amount", amount.to_string()),
            )
            .await?;
        expect_str(&response, "send", "block")
    }

    /// Pocket the pending send `block` into `account`.
    /// Returns the receive block hash.
    pub async fn receive(
        &self,
        wallet: &str,
        account: &str,
        block: &str,
    ) -> Result<String, RpcError> {
        let response = self
            .call(
                RpcRequest::new("receive")
                    .param("wallet", wallet)
                    .param("account", account)
                    .param("block", block),
            )
            .await?;
        expect_str(&response, "receive", "block")
    }

    /// Begin a payment session: claims a zero-balance account from `wallet`,
    /// creating one if none is available. Returns the claimed account.
    pub async fn payment_begin(&self, wallet: &str) -> Result<String, RpcError> {
        let response = self
            .call(RpcRequest::new("payment_begin").param("wallet", wallet))
            .await?;
        expect_str(&response, "payment_begin", "account")
    }

    /// Mark every account in `wallet` as available for payment sessions.
    pub async fn payment_init(&self, wallet: &str) -> Result<String, RpcError> {
        let response = self
            .call(RpcRequest::new("payment_init").param("wallet", wallet))
            .await?;
        expect_str(&response, "payment_init", "status")
    }

    /// End a payment session, releasing `account` back to the pool.
    pub async fn payment_end(&self, account: &str, wallet: &str) -> Result<(), RpcError> {
        self.call(
            RpcRequest::new("payment_end")
                .param("account", account)
                .param("wallet", wallet),
        )
        .await?;
        Ok(())
    }

    /// Block until `account` has received `amount` raw or `timeout_ms`
    /// elapses on the node side. Returns the node's status string.
    pub async fn payment_wait(
        &self,
        account: &str,
        amount: RawAmount,
        timeout_ms: u64,
    ) -> Result<String, RpcError> {
        let response = self
            .call(
                RpcRequest::new("payment_wait")
                    .param("account", account)
                    .param("amount", amount.to_string())
                    .param("timeout", timeout_ms.to_string()),
            )
            .await?;
        expect_str(&response, "payment_wait", "status")
    }

    /// Have the node compute proof of work for a block hash.
    pub async fn work_generate(&self, hash: &str) -> Result<String, RpcError> {
        let response = self
            .call(RpcRequest::new("work_generate").param("hash", hash))
            .await?;
        expect_str(&response, "work_generate", "work")
    }

    /// Generate an ad hoc random keypair.
    pub async fn key_create(&self) -> Result<KeyPair, RpcError> {
        let response = self.call(RpcRequest::new("key_create")).await?;
        decode_response(response, "key_create")
    }

    /// Derive the deterministic keypair at `index` from `seed`.
    pub async fn deterministic_key(&self, seed: &str, index: u64) -> Result<KeyPair, RpcError> {
        let response = self
            .call(
                RpcRequest::new("deterministic_key")
                    .param("seed", seed)
                    .param("index", index.to_string()),
            )
            .await?;
        decode_response(response, "deterministic_key")
    }
}
