//! Request bodies in the shape the service expects. Only fields the router
//! sets are modelled.

use corelib::GetQuoteParams;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapType {
    ExactInput,
    ExactOutput,
}

/// Where deposits come from / refunds go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChainSide {
    OriginChain,
    DestinationChain,
    Intents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestBody {
    pub dry: bool,
    pub swap_type: SwapType,
    pub slippage_tolerance: u32,
    pub origin_asset: String,
    pub deposit_type: ChainSide,
    pub destination_asset: String,
    pub amount: String,
    pub refund_to: String,
    pub refund_type: ChainSide,
    pub recipient: String,
    pub recipient_type: ChainSide,
    pub deadline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<String>,
}

impl QuoteRequestBody {
    /// Exact-input swap funded and refunded on the origin chain, paid out on
    /// the destination chain. Refunds go back to the sender.
    pub fn from_params(params: &GetQuoteParams, default_deadline: String) -> Self {
        Self {
            dry: params.dry,
            swap_type: SwapType::ExactInput,
            slippage_tolerance: params.slippage_tolerance,
            origin_asset: params.origin_asset.clone(),
            deposit_type: ChainSide::OriginChain,
            destination_asset: params.destination_asset.clone(),
            amount: params.amount.clone(),
            refund_to: params.sender_address.clone(),
            refund_type: ChainSide::OriginChain,
            recipient: params.recipient_address.clone(),
            recipient_type: ChainSide::DestinationChain,
            deadline: params.deadline.clone().unwrap_or(default_deadline),
            referral: params.referral.clone(),
        }
    }
}
