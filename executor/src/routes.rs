//! Directional route builders.
//!
//! Both directions run the same algorithm and differ only in which account
//! pays and which receives:
//! - into the privacy chain: external account → privacy account
//! - out of the privacy chain: privacy account → external account

use accounts::{DepositSender, RouteAccount};
use adapters::SwapApi;
use corelib::GetQuoteParams;
use tracing::info;

use crate::errors::SwapError;
use crate::orchestrator::swap;
use crate::quotes::resolve_asset;
use crate::types::{DEFAULT_SLIPPAGE_BPS, PollingConfig, SwapEventHandler, SwapOutcome, SwapParams};

pub struct RouteParams<'a> {
    pub api: &'a dyn SwapApi,
    /// Account on the privacy chain.
    pub privacy_account: RouteAccount,
    /// Account on the other chain.
    pub external_account: RouteAccount,
    /// Human-readable amount of the source asset, e.g. `"1.5"`.
    pub amount: String,
    pub on_event: Option<SwapEventHandler>,
    pub polling: PollingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    IntoPrivacyChain,
    OutOfPrivacyChain,
}

/// Swap from the external account into the privacy account.
pub async fn route_into_privacy_chain(params: RouteParams<'_>) -> Result<SwapOutcome, SwapError> {
    route(Direction::IntoPrivacyChain, params).await
}

/// Swap from the privacy account out to the external account.
pub async fn route_out_of_privacy_chain(
    params: RouteParams<'_>,
) -> Result<SwapOutcome, SwapError> {
    route(Direction::OutOfPrivacyChain, params).await
}

async fn route(direction: Direction, params: RouteParams<'_>) -> Result<SwapOutcome, SwapError> {
    let RouteParams {
        api,
        privacy_account,
        external_account,
        amount,
        on_event,
        polling,
    } = params;

    let (source, destination) = match direction {
        Direction::IntoPrivacyChain => (&external_account, &privacy_account),
        Direction::OutOfPrivacyChain => (&privacy_account, &external_account),
    };

    let tokens = api.get_tokens().await?;
    let origin = resolve_asset(&tokens, source.asset())?;
    let target = resolve_asset(&tokens, destination.asset())?;

    let base_units = source.asset_to_base_units(&amount)?;

    let quote = GetQuoteParams {
        dry: false,
        sender_address: source.get_address().await?,
        recipient_address: destination.get_address().await?,
        origin_asset: origin.asset_id.clone(),
        destination_asset: target.asset_id.clone(),
        amount: base_units.to_string(),
        slippage_tolerance: DEFAULT_SLIPPAGE_BPS,
        deadline: None,
        referral: None,
    };

    info!(
        component = "routes",
        event = "route_resolved",
        ?direction,
        origin = %origin.asset_id,
        destination = %target.asset_id,
        %amount,
        base_units = %quote.amount,
        auto_deposit = source.is_full(),
        "route resolved"
    );

    let deposit = source.deposit_sender();

    swap(SwapParams {
        api,
        quote,
        deposit: deposit.as_ref().map(|d| d as &dyn DepositSender),
        on_event,
        polling,
    })
    .await
}
