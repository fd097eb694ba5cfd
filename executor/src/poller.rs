//! Status poller
//!
//! Turns the one-shot status endpoint into a bounded stream of status
//! transitions for a single deposit address.
//!
//! Guarantees:
//! - the handler never sees the same status twice in a row
//! - polling stops on the first terminal status
//! - a failed fetch still consumes an attempt and waits out the interval

use adapters::SwapApi;
use corelib::{ExecutionStatusResponse, SwapStateChangeEvent};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::types::CheckStatusParams;

/// Poll until the swap settles or attempts run out.
///
/// Returns the last response observed, which is `None` if every fetch
/// failed.
pub async fn poll_status<A>(api: &A, params: CheckStatusParams) -> Option<ExecutionStatusResponse>
where
    A: SwapApi + ?Sized,
{
    let CheckStatusParams {
        deposit_address,
        max_attempts,
        polling_interval,
        initial_delay,
        on_status_change,
    } = params;

    info!(
        component = "poller",
        event = "startup",
        %deposit_address,
        max_attempts,
        interval_ms = polling_interval.as_millis() as u64,
        initial_delay_ms = initial_delay.as_millis() as u64,
        "status polling started"
    );

    // The service needs a moment to see the deposit at all.
    sleep(initial_delay).await;

    let mut last: Option<ExecutionStatusResponse> = None;
    let mut attempt: u32 = 0;

    while attempt < max_attempts {
        match api.get_execution_status(&deposit_address).await {
            Ok(resp) => {
                let status = resp.status;
                let changed = last.as_ref().map(|prev| prev.status) != Some(status);

                debug!(attempt, %status, changed, "status fetched");

                if changed {
                    info!(
                        component = "poller",
                        event = "status_changed",
                        %deposit_address,
                        attempt,
                        %status,
                        "swap status changed"
                    );

                    if let Some(handler) = &on_status_change {
                        handler(&SwapStateChangeEvent::status(resp.clone()));
                    }
                }

                last = Some(resp);

                if status.is_terminal() {
                    return last;
                }
            }
            Err(e) => {
                warn!(
                    component = "poller",
                    event = "fetch_failed",
                    %deposit_address,
                    attempt,
                    error = %e,
                    "status fetch failed; retrying"
                );
            }
        }

        attempt += 1;

        // No point waiting once the budget is spent.
        if attempt < max_attempts {
            sleep(polling_interval).await;
        }
    }

    warn!(
        component = "poller",
        event = "exhausted",
        %deposit_address,
        max_attempts,
        last_status = ?last.as_ref().map(|s| s.status),
        "status polling gave up before a terminal status"
    );

    last
}
