use std::fmt;

use serde::{Deserialize, Serialize};

use super::quote::SwapQuoteResponse;

/// Remote execution status of a swap, keyed by deposit address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    PendingDeposit,
    KnownDepositTx,
    IncompleteDeposit,
    Processing,
    Success,
    Refunded,
    Failed,
}

impl ExecutionStatus {
    /// Order shown to users. The service may skip steps.
    pub const HAPPY_PATH: [ExecutionStatus; 4] = [
        ExecutionStatus::PendingDeposit,
        ExecutionStatus::KnownDepositTx,
        ExecutionStatus::Processing,
        ExecutionStatus::Success,
    ];

    /// `SUCCESS`, `REFUNDED` and `FAILED` never progress further.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ExecutionStatus::Success | ExecutionStatus::Refunded | ExecutionStatus::Failed
        )
    }

    /// Position on the happy path, if the status is on it.
    pub fn happy_path_step(self) -> Option<usize> {
        Self::HAPPY_PATH.iter().position(|s| *s == self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionStatus::PendingDeposit => "PENDING_DEPOSIT",
            ExecutionStatus::KnownDepositTx => "KNOWN_DEPOSIT_TX",
            ExecutionStatus::IncompleteDeposit => "INCOMPLETE_DEPOSIT",
            ExecutionStatus::Processing => "PROCESSING",
            ExecutionStatus::Success => "SUCCESS",
            ExecutionStatus::Refunded => "REFUNDED",
            ExecutionStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
}

/// Settlement details reported alongside the status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapDetails {
    #[serde(default)]
    pub intent_hashes: Vec<String>,
    #[serde(default)]
    pub near_tx_hashes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_in_formatted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_out_formatted: Option<String>,
    #[serde(default)]
    pub origin_chain_tx_hashes: Vec<TransactionDetails>,
    #[serde(default)]
    pub destination_chain_tx_hashes: Vec<TransactionDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunded_amount: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStatusResponse {
    pub status: ExecutionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_response: Option<SwapQuoteResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap_details: Option<SwapDetails>,
}

impl ExecutionStatusResponse {
    /// Bare response carrying only a status.
    pub fn with_status(status: ExecutionStatus) -> Self {
        Self {
            status,
            updated_at: None,
            quote_response: None,
            swap_details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_end_states_are_terminal() {
        let terminal: Vec<_> = [
            ExecutionStatus::PendingDeposit,
            ExecutionStatus::KnownDepositTx,
            ExecutionStatus::IncompleteDeposit,
            ExecutionStatus::Processing,
            ExecutionStatus::Success,
            ExecutionStatus::Refunded,
            ExecutionStatus::Failed,
        ]
        .into_iter()
        .filter(|s| s.is_terminal())
        .collect();

        assert_eq!(
            terminal,
            vec![
                ExecutionStatus::Success,
                ExecutionStatus::Refunded,
                ExecutionStatus::Failed
            ]
        );
    }

    #[test]
    fn happy_path_positions() {
        assert_eq!(ExecutionStatus::PendingDeposit.happy_path_step(), Some(0));
        assert_eq!(ExecutionStatus::Success.happy_path_step(), Some(3));
        assert_eq!(ExecutionStatus::IncompleteDeposit.happy_path_step(), None);
        assert_eq!(ExecutionStatus::Refunded.happy_path_step(), None);
    }

    #[test]
    fn status_response_parses_wire_format() {
        let json = r#"{
            "status": "KNOWN_DEPOSIT_TX",
            "updatedAt": "2025-06-01T12:01:00.000Z",
            "swapDetails": {
                "intentHashes": [],
                "originChainTxHashes": [{"hash": "5Kf3", "explorerUrl": "https://solscan.io/tx/5Kf3"}]
            }
        }"#;

        let resp: ExecutionStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, ExecutionStatus::KnownDepositTx);
        let details = resp.swap_details.unwrap();
        assert_eq!(details.origin_chain_tx_hashes[0].hash, "5Kf3");
        assert!(details.destination_chain_tx_hashes.is_empty());
    }

    #[test]
    fn display_matches_wire_tag() {
        let wire = serde_json::to_string(&ExecutionStatus::IncompleteDeposit).unwrap();
        assert_eq!(wire, format!("\"{}\"", ExecutionStatus::IncompleteDeposit));
    }
}
