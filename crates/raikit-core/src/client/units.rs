//! Node-side denomination conversion actions.
//!
//! The node offers conversion between raw and its named denominations as
//! RPC actions; [`crate::units`] covers the same whole-unit math locally.
//! These wrappers exist for parity with the node's surface and for callers
//! that want the node's own rounding.

use crate::error::RpcError;
use crate::rpc::{RpcRequest, Transport};
use crate::units::RawAmount;

use super::{expect_str, NodeClient};

impl<T: Transport> NodeClient<T> {
    /// Divide a raw amount down to whole Mrai.
    pub async fn mrai_from_raw(&self, amount: RawAmount) -> Result<u128, RpcError> {
        self.convert("mrai_from_raw", amount.to_string()).await
    }

    /// Multiply an Mrai amount up to raw.
    pub async fn mrai_to_raw(&self, mrai: u64) -> Result<RawAmount, RpcError> {
        let raw = self.convert("mrai_to_raw", mrai.to_string()).await?;
        Ok(RawAmount::from_raw(raw))
    }

    /// Divide a raw amount down to whole krai.
    pub async fn krai_from_raw(&self, amount: RawAmount) -> Result<u128, RpcError> {
        self.convert("krai_from_raw", amount.to_string()).await
    }

    /// Multiply a krai amount up to raw.
    pub async fn krai_to_raw(&self, krai: u64) -> Result<RawAmount, RpcError> {
        let raw = self.convert("krai_to_raw", krai.to_string()).await?;
        Ok(RawAmount::from_raw(raw))
    }

    /// Divide a raw amount down to whole rai.
    pub async fn rai_from_raw(&self, amount: RawAmount) -> Result<u128, RpcError> {
        self.convert("rai_from_raw", amount.to_string()).await
    }

    /// Multiply a rai amount up to raw.
    pub async fn rai_to_raw(&self, rai: u64) -> Result<RawAmount, RpcError> {
        let raw = self.convert("rai_to_raw", rai.to_string()).await?;
        Ok(RawAmount::from_raw(raw))
    }

    async fn convert(&self, action: &'static str, amount: String) -> Result<u128, RpcError> {
        let response = self
            .call(RpcRequest::new(action).param("amount", amount))
            .await?;
        let converted = expect_str(&response, action, "amount")?;
        converted.parse().map_err(|_| RpcError::InvalidField {
            action,
            field: "amount",
            message: format!("expected a decimal integer, got \"{converted}\""),
        })
    }
}
