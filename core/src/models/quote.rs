use serde::{Deserialize, Serialize};

/// Input of a quote request.
///
/// `amount` is expressed in base units of the origin asset and never carries
/// a decimal point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetQuoteParams {
    /// Quote only; the service will not issue a deposit address.
    pub dry: bool,
    pub sender_address: String,
    pub recipient_address: String,
    pub origin_asset: String,
    pub destination_asset: String,
    pub amount: String,
    /// Basis points (100 = 1%).
    pub slippage_tolerance: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral: Option<String>,
}

/// Quote body as returned by the service.
///
/// Everything is optional on the wire; a dry quote carries amounts but no
/// deposit address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_in_formatted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_in_usd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_out_formatted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_out_usd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_when_inactive: Option<String>,
    /// Estimated seconds until the swap settles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuoteResponse {
    /// Service timestamp covered by `signature`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Echo of the request as the service understood it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_request: Option<serde_json::Value>,
    pub quote: QuoteDetails,
}

impl SwapQuoteResponse {
    pub fn deposit_address(&self) -> Option<&str> {
        self.quote
            .deposit_address
            .as_deref()
            .filter(|addr| !addr.is_empty())
    }
}

/// Acceleration hint: tells the service which transaction funded a deposit
/// address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTxHashParams {
    #[serde(rename = "txHash")]
    pub transaction_hash: String,
    pub deposit_address: String,
}
