//! Swap orchestrator.
//!
//! States of one run:
//!
//! ```text
//! INIT -> QUOTE_RECEIVED -> [DEPOSIT_SENT] -> POLLING -> SUCCESS | FAILED | REFUNDED | EXHAUSTED
//! ```
//!
//! `DEPOSIT_SENT` is skipped when no deposit sender is supplied.
//! Quote and deposit failures abort the run; everything after the deposit
//! is best-effort and surfaces through events instead of errors.

use accounts::DepositRequest;
use common::logger::{TraceId, record_deposit_address, swap_span};
use corelib::{SubmitTxHashParams, SwapStateChangeEvent};
use tracing::{Instrument, info, warn};

use crate::errors::SwapError;
use crate::poller::poll_status;
use crate::types::{CheckStatusParams, SwapOutcome, SwapParams};

/// Run one swap to completion (terminal status or polling exhaustion).
///
/// A swap that ends `FAILED` or `REFUNDED` is still `Ok`; inspect
/// [`SwapOutcome::final_status`] or the last event.
pub async fn swap(params: SwapParams<'_>) -> Result<SwapOutcome, SwapError> {
    let trace_id = TraceId::default();
    run(params).instrument(swap_span("swap", &trace_id)).await
}

async fn run(params: SwapParams<'_>) -> Result<SwapOutcome, SwapError> {
    let SwapParams {
        api,
        quote: quote_params,
        deposit,
        on_event,
        polling,
    } = params;

    let emit = |ev: SwapStateChangeEvent| {
        if let Some(handler) = &on_event {
            handler(&ev);
        }
    };

    // ---- Quote ----
    let quote = api.get_quote(&quote_params).await?;

    let deposit_address = quote
        .deposit_address()
        .ok_or(SwapError::NoDepositAddress)?
        .to_string();

    record_deposit_address(&deposit_address);
    info!(
        component = "orchestrator",
        event = "quote_received",
        origin = %quote_params.origin_asset,
        destination = %quote_params.destination_asset,
        amount_in = %quote_params.amount,
        amount_out = ?quote.quote.amount_out,
        "swap quote received"
    );

    emit(SwapStateChangeEvent::QuoteReceived {
        deposit_address: deposit_address.clone(),
    });

    // ---- Deposit ----
    if let Some(sender) = deposit {
        let tx_hash = sender
            .send_deposit(&DepositRequest {
                address: deposit_address.clone(),
                amount: quote_params.amount.clone(),
            })
            .await?;

        info!(
            component = "orchestrator",
            event = "deposit_sent",
            %tx_hash,
            "deposit sent"
        );

        emit(SwapStateChangeEvent::DepositSent {
            tx_hash: tx_hash.clone(),
        });

        let hint = SubmitTxHashParams {
            transaction_hash: tx_hash,
            deposit_address: deposit_address.clone(),
        };
        if let Err(e) = api.submit_tx_hash(&hint).await {
            warn!(
                component = "orchestrator",
                event = "tx_hash_hint_failed",
                error = %e,
                "failed to submit deposit tx hash; continuing"
            );
        }
    } else {
        info!(
            component = "orchestrator",
            event = "awaiting_external_deposit",
            "no deposit sender; monitoring only"
        );
    }

    // ---- Poll ----
    let check = CheckStatusParams::new(deposit_address, polling).with_handler(on_event.clone());
    let final_status = poll_status(api, check).await;

    Ok(SwapOutcome {
        quote,
        final_status,
    })
}
