use serde::Serialize;

use super::status::{ExecutionStatus, ExecutionStatusResponse};

/// Events surfaced to the caller while a swap progresses, in the order the
/// swap transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapStateChangeEvent {
    #[serde(rename_all = "camelCase")]
    QuoteReceived { deposit_address: String },

    #[serde(rename_all = "camelCase")]
    DepositSent { tx_hash: String },

    /// A new remote status, carrying the raw response it came from.
    Status {
        status: ExecutionStatus,
        response: ExecutionStatusResponse,
    },
}

impl SwapStateChangeEvent {
    pub fn status(response: ExecutionStatusResponse) -> Self {
        SwapStateChangeEvent::Status {
            status: response.status,
            response,
        }
    }

    /// Remote status carried by this event, if it is a status event.
    pub fn execution_status(&self) -> Option<ExecutionStatus> {
        match self {
            SwapStateChangeEvent::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.execution_status().is_some_and(ExecutionStatus::is_terminal)
    }
}
