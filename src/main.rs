use efp_follow::cli::Cli;
use efp_follow::codec::ListOpcode;
use efp_follow::follow::Orchestrator;
use efp_follow::output;
use efp_follow::wallet::{JsonRpcWallet, LocalKeyWallet, SessionProvider};

use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Main entry point for the follow tool
#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = cli.follow_config();
    let opcode = if cli.unfollow { ListOpcode::Remove } else { ListOpcode::Add };

    if !cli.json {
        let action = if cli.unfollow { "unfollow" } else { "follow" };
        output::print_banner(action, &cli.target, &config.home_chain);
    }

    // Pick the injected wallet; none at all is reported by the workflow itself.
    let sessions = if let Some(url) = &cli.wallet_url {
        if !cli.json {
            output::print_wallet("json-rpc", url);
        }
        SessionProvider::new(Arc::new(JsonRpcWallet::new(url)?))
    } else if let Some(key) = &cli.signer_key {
        let wallet = LocalKeyWallet::from_hex(key, &cli.rpc_url).await?;
        if !cli.json {
            output::print_wallet("local key", &cli.rpc_url);
            output::print_signer(&wallet.address());
        }
        SessionProvider::new(Arc::new(wallet))
    } else {
        SessionProvider::unavailable()
    };

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, cancelling");
            on_interrupt.cancel();
        }
    });

    let orchestrator = Orchestrator::new(sessions, config.clone());
    let result = orchestrator.run(opcode, &cli.target, &cancel).await;

    if cli.json {
        output::print_json(&result)?;
    } else {
        output::print_result(&result, &config.home_chain);
    }

    if !result.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
