use accounts::RouteAsset;
use adapters::SwapApi;
use corelib::{GetQuoteParams, SwapApiAsset, SwapQuoteResponse};
use tracing::{instrument, warn};

use crate::errors::SwapError;

/// Fresh token listing from the swap service. Nothing is cached here.
#[instrument(skip(api), level = "debug")]
pub async fn get_swap_api_assets(api: &dyn SwapApi) -> Result<Vec<SwapApiAsset>, SwapError> {
    Ok(api.get_tokens().await?)
}

/// Plain quote, dry or executable, without starting a swap.
#[instrument(skip(api, params), fields(dry = params.dry), level = "debug")]
pub async fn get_swap_quote(
    api: &dyn SwapApi,
    params: &GetQuoteParams,
) -> Result<SwapQuoteResponse, SwapError> {
    Ok(api.get_quote(params).await?)
}

/// Find the listing for `asset`. First match wins; duplicates are logged.
pub fn resolve_asset<'t>(
    tokens: &'t [SwapApiAsset],
    asset: &RouteAsset,
) -> Result<&'t SwapApiAsset, SwapError> {
    let mut matches = tokens.iter().filter(|t| t.matches(asset));

    let first = matches.next().ok_or_else(|| SwapError::AssetNotFound {
        blockchain: asset.blockchain.clone(),
        contract_address: asset.token_id.clone(),
    })?;

    let duplicates = matches.count();
    if duplicates > 0 {
        warn!(
            component = "routes",
            event = "ambiguous_asset",
            %asset,
            chosen = %first.asset_id,
            duplicates,
            "swap service lists asset more than once; using first match"
        );
    }

    Ok(first)
}
