pub mod cli;
pub mod config;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use accounts::{RouteAccount, RouteAsset, WatchOnlyAccount};
use adapters::{OneClickClient, SwapApi};
use common::init_logger;
use corelib::{GetQuoteParams, SubmitTxHashParams, SwapStateChangeEvent};
use executor::{
    CheckStatusParams, RouteParams, SwapEventHandler, SwapOutcome, get_swap_api_assets,
    get_swap_quote, poll_status, resolve_asset, route_into_privacy_chain,
    route_out_of_privacy_chain,
};

use cli::{Cli, Command, QuoteArgs, RouteArgs};
use config::AppConfig;

#[derive(Debug, Clone, Copy)]
enum RouteDirection {
    In,
    Out,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::from_env();

    init_logger("privswap", cfg.json_logs);

    let client = OneClickClient::new(cfg.one_click()).context("building swap service client")?;
    info!(base_url = %client.base_url(), "swap service client ready");

    match cli.command {
        Command::Tokens { blockchain } => {
            let mut tokens = get_swap_api_assets(&client).await?;
            if let Some(chain) = blockchain {
                tokens.retain(|t| t.blockchain == chain);
            }
            print_json(&tokens)?;
        }

        Command::Quote(args) => {
            let quote = get_swap_quote(&client, &quote_params(args)).await?;
            print_json(&quote)?;
        }

        Command::Status {
            deposit_address,
            polling,
        } => {
            let params = CheckStatusParams::new(deposit_address, polling.config())
                .with_handler(Some(print_events()));
            match poll_status(&client, params).await {
                Some(last) => print_json(&last)?,
                None => anyhow::bail!("no status could be fetched"),
            }
        }

        Command::SubmitTx {
            tx_hash,
            deposit_address,
        } => {
            client
                .submit_tx_hash(&SubmitTxHashParams {
                    transaction_hash: tx_hash,
                    deposit_address,
                })
                .await?;
            println!("submitted");
        }

        Command::RouteIn(args) => {
            let outcome = run_route(&client, &cfg, RouteDirection::In, args).await?;
            report(&outcome)?;
        }

        Command::RouteOut(args) => {
            let outcome = run_route(&client, &cfg, RouteDirection::Out, args).await?;
            report(&outcome)?;
        }
    }

    Ok(())
}

fn quote_params(args: QuoteArgs) -> GetQuoteParams {
    GetQuoteParams {
        dry: !args.execute,
        sender_address: args.sender,
        recipient_address: args.recipient,
        origin_asset: args.origin_asset,
        destination_asset: args.destination_asset,
        amount: args.amount,
        slippage_tolerance: args.slippage_bps,
        deadline: None,
        referral: None,
    }
}

/// Quote-and-monitor with watch-only accounts. Nothing is signed here; the
/// operator funds the printed deposit address from their own wallet.
async fn run_route(
    client: &OneClickClient,
    cfg: &AppConfig,
    direction: RouteDirection,
    args: RouteArgs,
) -> anyhow::Result<SwapOutcome> {
    let external_asset = match args.external_token {
        Some(token) => RouteAsset::token(args.external_chain, token),
        None => RouteAsset::native(args.external_chain),
    };
    let privacy_asset = RouteAsset::native(cfg.privacy_chain.clone());

    // Decimals come from the service listing so amounts convert exactly.
    let tokens = get_swap_api_assets(client).await?;
    let external_decimals = resolve_asset(&tokens, &external_asset)?.decimals;
    let privacy_decimals = resolve_asset(&tokens, &privacy_asset)?.decimals;

    let external_account = RouteAccount::address_only(WatchOnlyAccount::new(
        external_asset,
        args.external_address,
        external_decimals,
    ));
    let privacy_account = RouteAccount::address_only(WatchOnlyAccount::new(
        privacy_asset,
        args.privacy_address,
        privacy_decimals,
    ));

    let params = RouteParams {
        api: client,
        privacy_account,
        external_account,
        amount: args.amount,
        on_event: Some(print_events()),
        polling: args.polling.config(),
    };

    let outcome = match direction {
        RouteDirection::In => route_into_privacy_chain(params).await?,
        RouteDirection::Out => route_out_of_privacy_chain(params).await?,
    };
    Ok(outcome)
}

fn print_events() -> SwapEventHandler {
    Arc::new(|ev: &SwapStateChangeEvent| {
        if let SwapStateChangeEvent::QuoteReceived { deposit_address } = ev {
            println!("deposit address: {deposit_address}");
        }
        match serde_json::to_string(ev) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::warn!(error = %e, "failed to encode swap event"),
        }
    })
}

fn report(outcome: &SwapOutcome) -> anyhow::Result<()> {
    match outcome.status() {
        Some(status) if outcome.is_settled() => println!("swap settled: {status}"),
        Some(status) => println!("polling gave up while swap was {status}"),
        None => println!("no status observed"),
    }
    if !outcome.succeeded() {
        anyhow::bail!("swap did not succeed");
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
