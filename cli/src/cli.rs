use clap::{Args, Parser, Subcommand};

use corelib::Blockchain;
use executor::{DEFAULT_SLIPPAGE_BPS, PollingConfig};

#[derive(Debug, Parser)]
#[clap(name = "privswap", version, about = "Cross-chain swaps into and out of a privacy chain")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List assets supported by the swap service
    Tokens {
        /// Only show assets on this chain
        #[clap(long, value_parser = parse_blockchain)]
        blockchain: Option<Blockchain>,
    },

    /// Request a quote (dry by default)
    Quote(QuoteArgs),

    /// Poll a swap until it settles and print every status change
    Status {
        #[clap(long)]
        deposit_address: String,

        #[clap(flatten)]
        polling: PollingArgs,
    },

    /// Tell the swap service about a deposit transaction
    SubmitTx {
        #[clap(long)]
        tx_hash: String,

        #[clap(long)]
        deposit_address: String,
    },

    /// Swap from an external chain into the privacy chain
    RouteIn(RouteArgs),

    /// Swap from the privacy chain out to an external chain
    RouteOut(RouteArgs),
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Swap service asset id, e.g. `nep141:sol.omft.near`
    #[clap(long)]
    pub origin_asset: String,

    #[clap(long)]
    pub destination_asset: String,

    /// Amount in base units of the origin asset
    #[clap(long)]
    pub amount: String,

    /// Refund address on the origin chain
    #[clap(long)]
    pub sender: String,

    #[clap(long)]
    pub recipient: String,

    #[clap(long, default_value_t = DEFAULT_SLIPPAGE_BPS)]
    pub slippage_bps: u32,

    /// Request an executable quote with a deposit address
    #[clap(long)]
    pub execute: bool,
}

#[derive(Debug, Args)]
pub struct RouteArgs {
    /// Chain on the non-private side, e.g. `sol`
    #[clap(long, value_parser = parse_blockchain)]
    pub external_chain: Blockchain,

    /// Token contract on the external chain; native asset when omitted
    #[clap(long)]
    pub external_token: Option<String>,

    #[clap(long)]
    pub external_address: String,

    #[clap(long)]
    pub privacy_address: String,

    /// Human-readable amount of the source asset, e.g. `1.5`
    #[clap(long)]
    pub amount: String,

    #[clap(flatten)]
    pub polling: PollingArgs,
}

#[derive(Debug, Args)]
pub struct PollingArgs {
    /// Shorter initial delay and polling interval
    #[clap(long)]
    pub fast: bool,
}

impl PollingArgs {
    pub fn config(&self) -> PollingConfig {
        if self.fast {
            PollingConfig::fast()
        } else {
            PollingConfig::default()
        }
    }
}

fn parse_blockchain(s: &str) -> Result<Blockchain, String> {
    let id = s.trim();
    if id.is_empty() {
        return Err("blockchain id must not be empty".into());
    }
    Ok(Blockchain::from(id))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn quote_is_dry_with_default_slippage() {
        let cli = Cli::try_parse_from([
            "privswap",
            "quote",
            "--origin-asset",
            "nep141:sol.omft.near",
            "--destination-asset",
            "nep141:zec.omft.near",
            "--amount",
            "1000000000",
            "--sender",
            "So1ana",
            "--recipient",
            "t1Zcash",
        ])
        .unwrap();

        match cli.command {
            Command::Quote(args) => {
                assert!(!args.execute);
                assert_eq!(args.slippage_bps, DEFAULT_SLIPPAGE_BPS);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn route_out_parses_chain_and_fast_polling() {
        let cli = Cli::try_parse_from([
            "privswap",
            "route-out",
            "--external-chain",
            "SOL",
            "--external-address",
            "So1ana",
            "--privacy-address",
            "t1Zcash",
            "--amount",
            "0.25",
            "--fast",
        ])
        .unwrap();

        match cli.command {
            Command::RouteOut(args) => {
                assert_eq!(args.external_chain, Blockchain::Sol);
                assert_eq!(args.external_token, None);
                assert_eq!(args.polling.config(), PollingConfig::fast());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn empty_chain_is_rejected() {
        let res = Cli::try_parse_from(["privswap", "tokens", "--blockchain", " "]);
        assert!(res.is_err());
    }
}
