use clap::{Parser, Subcommand};

/// raikit — command line client for a rai_node RPC endpoint.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Node RPC URL.
    #[arg(long, default_value = "http://127.0.0.1:7076", env = "RAIKIT_RPC_URL")]
    pub rpc_url: String,

    /// Shared secret for wallet actions that require one (optional; the
    /// node decides where it is expected).
    #[arg(long, env = "RAIKIT_RPC_PASSWORD")]
    pub rpc_password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report ledger and unchecked block totals.
    BlockCount,
    /// Report per-type block totals.
    BlockCountType,
    /// Settled and pending balance of an account.
    AccountBalance { account: String },
    /// Full account record.
    AccountInfo { account: String },
    /// Send/receive history for an account.
    AccountHistory {
        account: String,
        #[arg(long, default_value = "1")]
        count: u64,
    },
    /// Retrieve a block by hash.
    Block { hash: String },
    /// Walk the account chain back from a block hash.
    Chain {
        block: String,
        #[arg(long, default_value = "1")]
        count: u64,
    },
    /// Total raw in the public supply.
    AvailableSupply,
    /// Number of accounts in the ledger.
    FrontierCount,
    /// Have the node compute proof of work for a block hash.
    WorkGenerate { hash: String },
}
