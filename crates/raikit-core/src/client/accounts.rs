//! Account and ledger queries, plus wallet-level account management.

use std::collections::HashMap;

use crate::error::RpcError;
use crate::rpc::{RpcRequest, Transport};
use crate::types::{AccountBalance, AccountInfo, HistoryEntry, LedgerEntry, PendingBlock};
use crate::units::RawAmount;

use super::{
    bool_str, decode_field, decode_response, expect_amount, expect_str, expect_u64, NodeClient,
};

impl<T: Transport> NodeClient<T> {
    /// Settled and pending balance of `account`, in raw.
    pub async fn account_balance(&self, account: &str) -> Result<AccountBalance, RpcError> {
        let response = self
            .call(RpcRequest::new("account_balance").param("account", account))
            .await?;
        decode_response(response, "account_balance")
    }

    /// Number of blocks in the account's chain.
    pub async fn account_block_count(&self, account: &str) -> Result<u64, RpcError> {
        let response = self
            .call(RpcRequest::new("account_block_count").param("account", account))
            .await?;
        expect_u64(&response, "account_block_count", "block_count")
    }

    /// Full account record: frontier, open block, balance, representative,
    /// voting weight, and pending amount.
    pub async fn account_info(&self, account: &str) -> Result<AccountInfo, RpcError> {
        let response = self
            .call(
                RpcRequest::new("account_info")
                    .param("account", account)
                    .param("representative", bool_str(true))
                    .param("weight", bool_str(true))
                    .param("pending", bool_str(true)),
            )
            .await?;
        decode_response(response, "account_info")
    }

    /// Create a new account in `wallet` from its next deterministic key.
    /// Returns the new xrb_ address.
    pub async fn account_create(&self, wallet: &str, work: bool) -> Result<String, RpcError> {
        let response = self
            .call(
                RpcRequest::new("account_create")
                    .param("wallet", wallet)
                    .param("work", bool_str(work)),
            )
            .await?;
        expect_str(&response, "account_create", "account")
    }

    /// The xrb_ address for a raw public key.
    pub async fn account_get(&self, public_key: &str) -> Result<String, RpcError> {
        let response = self
            .call(RpcRequest::new("account_get").param("key", public_key))
            .await?;
        expect_str(&response, "account_get", "account")
    }

    /// Send/receive history for `account`, newest first, up to `count`.
    pub async fn account_history(
        &self,
        account: &str,
        count: u64,
    ) -> Result<Vec<HistoryEntry>, RpcError> {
        let response = self
            .call(
                RpcRequest::new("account_history")
                    .param("account", account)
                    .param("count", count.to_string()),
            )
            .await?;
        decode_field(response, "account_history", "history")
    }

    /// All accounts inside `wallet`.
    pub async fn account_list(&self, wallet: &str) -> Result<Vec<String>, RpcError> {
        let response = self
            .call(RpcRequest::new("account_list").param("wallet", wallet))
            .await?;
        decode_field(response, "account_list", "accounts")
    }

    /// Move `accounts` from `source_wallet` into `wallet`.
    /// Returns how many accounts moved.
    pub async fn account_move(
        &self,
        source_wallet: &str,
        wallet: &str,
        accounts: &[String],
    ) -> Result<u64, RpcError> {
        let response = self
            .call(
                RpcRequest::new("account_move")
                    .param("wallet", wallet)
                    .param("source", source_wallet)
                    .param("accounts", accounts.to_vec()),
            )
            .await?;
        expect_u64(&response, "account_move", "moved")
    }

    /// Remove `account` from `wallet`. Returns how many accounts were removed.
    pub async fn account_remove(&self, wallet: &str, account: &str) -> Result<u64, RpcError> {
        let response = self
            .call(
                RpcRequest::new("account_remove")
                    .param("wallet", wallet)
                    .param("account", account),
            )
            .await?;
        expect_u64(&response, "account_remove", "removed")
    }

    /// The representative an account currently votes through.
    pub async fn account_representative(&self, account: &str) -> Result<String, RpcError> {
        let response = self
            .call(RpcRequest::new("account_representative").param("account", account))
            .await?;
        expect_str(&response, "account_representative", "representative")
    }

    /// Point `account` at a new representative. Returns the change block hash.
    pub async fn account_representative_set(
        &self,
        wallet: &str,
        account: &str,
        representative: &str,
    ) -> Result<String, RpcError> {
        let response = self
            .call(
                RpcRequest::new("account_representative_set")
                    .param("wallet", wallet)
                    .param("account", account)
                    .param("representative", representative),
            )
            .await?;
        expect_str(&response, "account_representative_set", "block")
    }

    /// Voting weight of `account`, in raw.
    pub async fn account_weight(&self, account: &str) -> Result<RawAmount, RpcError> {
        let response = self
            .call(RpcRequest::new("account_weight").param("account", account))
            .await?;
        expect_amount(&response, "account_weight", "weight")
    }

    /// Balance pairs for several accounts at once, keyed by address.
    pub async fn accounts_balances(
        &self,
        accounts: &[String],
    ) -> Result<HashMap<String, AccountBalance>, RpcError> {
        let response = self
            .call(RpcRequest::new("accounts_balances").param("accounts", accounts.to_vec()))
            .await?;
        decode_field(response, "accounts_balances", "balances")
    }

    /// Create up to `count` accounts in `wallet` from its next deterministic
    /// keys. Returns the new addresses.
    pub async fn accounts_create(
        &self,
        wallet: &str,
        count: u64,
        work: bool,
    ) -> Result<Vec<String>, RpcError> {
        let response = self
            .call(
                RpcRequest::new("accounts_create")
                    .param("wallet", wallet)
                    .param("count", count.to_string())
                    .param("work", bool_str(work)),
            )
            .await?;
        decode_field(response, "accounts_create", "accounts")
    }

    /// Head block hash for each of `accounts`, keyed by address.
    pub async fn accounts_frontiers(
        &self,
        accounts: &[String],
    ) -> Result<HashMap<String, String>, RpcError> {
        let response = self
            .call(RpcRequest::new("accounts_frontiers").param("accounts", accounts.to_vec()))
            .await?;
        decode_field(response, "accounts_frontiers", "frontiers")
    }

    /// Pending (unpocketed) blocks for each account, keyed by address then
    /// block hash. Only amounts above `threshold` are reported.
    pub async fn accounts_pending(
        &self,
        accounts: &[String],
        count: u64,
        threshold: RawAmount,
    ) -> Result<HashMap<String, HashMap<String, PendingBlock>>, RpcError> {
        let response = self
            .call(
                RpcRequest::new("accounts_pending")
                    .param("accounts", accounts.to_vec())
                    .param("count", count.to_string())
                    .param("threshold", threshold.to_string())
                    .param("source", bool_str(true)),
            )
            .await?;
        decode_field(response, "accounts_pending", "blocks")
    }

    /// Accounts delegating to `account`, keyed by address with delegated
    /// balance in raw.
    pub async fn delegators(&self, account: &str) -> Result<HashMap<String, RawAmount>, RpcError> {
        let response = self
            .call(RpcRequest::new("delegators").param("account", account))
            .await?;
        decode_field(response, "delegators", "delegators")
    }

    /// Number of accounts delegating to `account`.
    pub async fn delegators_count(&self, account: &str) -> Result<u64, RpcError> {
        let response = self
            .call(RpcRequest::new("delegators_count").param("account", account))
            .await?;
        expect_u64(&response, "delegators_count", "count")
    }

    /// Head block hashes for up to `count` accounts starting at `account`,
    /// keyed by address.
    pub async fn frontiers(
        &self,
        account: &str,
        count: u64,
    ) -> Result<HashMap<String, String>, RpcError> {
        let response = self
            .call(
                RpcRequest::new("frontiers")
                    .param("account", account)
                    .param("count", count.to_string()),
            )
            .await?;
        decode_field(response, "frontiers", "frontiers")
    }

    /// Number of accounts in the ledger.
    pub async fn frontier_count(&self) -> Result<u64, RpcError> {
        let response = self.call(RpcRequest::new("frontier_count")).await?;
        expect_u64(&response, "frontier_count", "count")
    }

    /// Ledger rows for up to `count` accounts starting at `account`,
    /// keyed by address.
    pub async fn ledger(
        &self,
        account: &str,
        count: u64,
    ) -> Result<HashMap<String, LedgerEntry>, RpcError> {
        let response = self
            .call(
                RpcRequest::new("ledger")
                    .param("account", account)
                    .param("count", count.to_string())
                    .param("representative", bool_str(true))
                    .param("weight", bool_str(true))
                    .param("pending", bool_str(true)),
            )
            .await?;
        decode_field(response, "ledger", "accounts")
    }

    /// Hashes of up to `count` pending blocks for `account`.
    pub async fn pending(&self, account: &str, count: u64) -> Result<Vec<String>, RpcError> {
        let response = self
            .call(
                RpcRequest::new("pending")
                    .param("account", account)
                    .param("count", count.to_string()),
            )
            .await?;
        decode_field(response, "pending", "blocks")
    }
}
