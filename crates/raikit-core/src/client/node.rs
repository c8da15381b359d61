//! Node-level queries and network control.

use crate::error::RpcError;
use crate::rpc::{RpcRequest, Transport};
use crate::units::RawAmount;

use super::{expect_amount, NodeClient};

impl<T: Transport> NodeClient<T> {
    /// Total raw in the public supply.
    pub async fn available_supply(&self) -> Result<RawAmount, RpcError> {
        let response = self.call(RpcRequest::new("available_supply")).await?;
        expect_amount(&response, "available_supply", "available")
    }

    /// Bootstrap the ledger from a specific peer.
    pub async fn bootstrap(&self, address: &str, port: u16) -> Result<(), RpcError> {
        self.call(
            RpcRequest::new("bootstrap")
                .param("address", address)
                .param("port", port.to_string()),
        )
        .await?;
        Ok(())
    }

    /// Bootstrap the ledger from any known peer.
    pub async fn bootstrap_any(&self) -> Result<(), RpcError> {
        self.call(RpcRequest::new("bootstrap_any")).await?;
        Ok(())
    }

    /// Ask the node to send a keepalive packet to `address:port`.
    pub async fn keepalive(&self, address: &str, port: u16) -> Result<(), RpcError> {
        self.call(
            RpcRequest::new("keepalive")
                .param("address", address)
                .param("port", port.to_string()),
        )
        .await?;
        Ok(())
    }
}
