pub mod client;
pub mod error;
pub mod rpc;
pub mod types;
pub mod units;

pub use client::NodeClient;
pub use error::RpcError;
pub use rpc::{Endpoint, HttpTransport, Response, RpcRequest, Transport};
pub use units::RawAmount;

#[cfg(test)]
pub(crate) mod test_util;
