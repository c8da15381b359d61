mod cli;

use clap::Parser;
use eyre::WrapErr;

use raikit_core::{Endpoint, NodeClient};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_level(true)
        .init();

    let endpoint = match &args.rpc_password {
        Some(password) => Endpoint::with_secret(&args.rpc_url, password),
        None => Endpoint::new(&args.rpc_url),
    };
    tracing::debug!(uri = %args.rpc_url, "using node endpoint");
    let client = NodeClient::connect(endpoint);

    match args.command {
        cli::Command::BlockCount => {
            let counts = client.block_count().await.wrap_err("query block count")?;
            print_json(&counts)?;
        }
        cli::Command::BlockCountType => {
            let counts = client
                .block_count_type()
                .await
                .wrap_err("query block counts by type")?;
            print_json(&counts)?;
        }
        cli::Command::AccountBalance { account } => {
            let balance = client
                .account_balance(&account)
                .await
                .wrap_err_with(|| format!("query balance of {account}"))?;
            print_json(&balance)?;
        }
        cli::Command::AccountInfo { account } => {
            let info = client
                .account_info(&account)
                .await
                .wrap_err_with(|| format!("query info for {account}"))?;
            print_json(&info)?;
        }
        cli::Command::AccountHistory { account, count } => {
            let history = client
                .account_history(&account, count)
                .await
                .wrap_err_with(|| format!("query history of {account}"))?;
            print_json(&history)?;
        }
        cli::Command::Block { hash } => {
            let block = client
                .block(&hash)
                .await
                .wrap_err_with(|| format!("retrieve block {hash}"))?;
            print_json(&block)?;
        }
        cli::Command::Chain { block, count } => {
            let hashes = client
                .chain(&block, count)
                .await
                .wrap_err_with(|| format!("walk chain from {block}"))?;
            print_json(&hashes)?;
        }
        cli::Command::AvailableSupply => {
            let supply = client
                .available_supply()
                .await
                .wrap_err("query available supply")?;
            println!("{supply}");
        }
        cli::Command::FrontierCount => {
            let count = client
                .frontier_count()
                .await
                .wrap_err("query frontier count")?;
            println!("{count}");
        }
        cli::Command::WorkGenerate { hash } => {
            let work = client
                .work_generate(&hash)
                .await
                .wrap_err_with(|| format!("generate work for {hash}"))?;
            println!("{work}");
        }
    }

    Ok(())
}

fn print_json<V: serde::Serialize>(value: &V) -> eyre::Result<()> {
    let rendered = serde_json::to_string_pretty(value).wrap_err("render output")?;
    println!("{rendered}");
    Ok(())
}
