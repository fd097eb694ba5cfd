
use std::time::Duration;

use corelib::ExecutionStatus::{
    Failed, IncompleteDeposit, KnownDepositTx, PendingDeposit, Processing, Refunded, Success,
};
use executor::{CheckStatusParams, PollingConfig, poll_status};
use mock_api::{DEPOSIT_ADDRESS, EventLog, MockSwapApi};
use proptest::prelude::*;
use tokio::time::Instant;

fn params(max_attempts: u32, log: &EventLog) -> CheckStatusParams {
    CheckStatusParams::new(
        DEPOSIT_ADDRESS,
        PollingConfig {
            max_attempts,
            ..PollingConfig::default()
        },
    )
    .with_handler(Some(log.handler()))
}

#[tokio::test(start_paused = true)]
async fn repeated_status_is_reported_once_and_success_stops_polling() {
    let api = MockSwapApi::new(vec![
        Some(PendingDeposit),
        Some(PendingDeposit),
        Some(KnownDepositTx),
        Some(Success),
        Some(Processing),
    ]);
    let log = EventLog::default();

    let last = poll_status(&api, params(100, &log)).await;

    assert_eq!(log.statuses(), vec![PendingDeposit, KnownDepositTx, Success]);
    assert_eq!(api.status_calls(), 4);
    assert_eq!(last.map(|s| s.status), Some(Success));
}

#[tokio::test(start_paused = true)]
async fn refunded_and_failed_are_terminal() {
    for end in [Refunded, Failed] {
        let api = MockSwapApi::new(vec![Some(Processing), Some(end), Some(Processing)]);
        let log = EventLog::default();

        let last = poll_status(&api, params(10, &log)).await;

        assert_eq!(last.map(|s| s.status), Some(end));
        assert_eq!(api.status_calls(), 2);
        assert_eq!(log.statuses(), vec![Processing, end]);
    }
}

#[tokio::test(start_paused = true)]
async fn exhaustion_returns_last_observed_status() {
    let api = MockSwapApi::new(vec![Some(PendingDeposit), Some(IncompleteDeposit)]);
    let log = EventLog::default();

    // Script runs dry after two polls; the mock then reports PROCESSING.
    let last = poll_status(&api, params(5, &log)).await;

    assert_eq!(api.status_calls(), 5);
    assert_eq!(last.map(|s| s.status), Some(Processing));
    assert_eq!(
        log.statuses(),
        vec![PendingDeposit, IncompleteDeposit, Processing]
    );
}

#[tokio::test(start_paused = true)]
async fn exhaustion_without_any_response_returns_none() {
    let api = MockSwapApi::new(vec![None, None, None]);
    let log = EventLog::default();

    let last = poll_status(&api, params(3, &log)).await;

    assert!(last.is_none());
    assert_eq!(api.status_calls(), 3);
    assert!(log.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn fetch_errors_consume_attempts_and_do_not_reset_dedup() {
    let api = MockSwapApi::new(vec![
        Some(PendingDeposit),
        None,
        Some(PendingDeposit),
        None,
        Some(Success),
    ]);
    let log = EventLog::default();

    let last = poll_status(&api, params(10, &log)).await;

    assert_eq!(api.status_calls(), 5);
    assert_eq!(log.statuses(), vec![PendingDeposit, Success]);
    assert_eq!(last.map(|s| s.status), Some(Success));
}

#[tokio::test(start_paused = true)]
async fn errors_still_wait_out_the_interval() {
    let api = MockSwapApi::new(vec![None, None, Some(Success)]);
    let log = EventLog::default();
    let polling = PollingConfig::fast();

    let start = Instant::now();
    poll_status(
        &api,
        CheckStatusParams::new(DEPOSIT_ADDRESS, polling).with_handler(Some(log.handler())),
    )
    .await;

    // initial delay + two intervals before the third (successful) fetch
    let expected = polling.initial_delay + polling.polling_interval * 2;
    assert!(start.elapsed() >= expected);
    assert!(start.elapsed() < expected + polling.polling_interval);
}

#[tokio::test(start_paused = true)]
async fn first_fetch_waits_for_initial_delay() {
    let api = MockSwapApi::new(vec![Some(Success)]);

    let start = Instant::now();
    let last = poll_status(
        &api,
        CheckStatusParams::new(DEPOSIT_ADDRESS, PollingConfig::default()),
    )
    .await;

    assert_eq!(last.map(|s| s.status), Some(Success));
    assert!(start.elapsed() >= Duration::from_millis(5_000));
    assert!(start.elapsed() < Duration::from_millis(10_000));
}

#[tokio::test(start_paused = true)]
async fn zero_attempts_never_fetches() {
    let api = MockSwapApi::new(vec![Some(Success)]);
    let log = EventLog::default();

    let last = poll_status(&api, params(0, &log)).await;

    assert!(last.is_none());
    assert_eq!(api.status_calls(), 0);
}

fn poll_strategy() -> impl Strategy<Value = Option<corelib::ExecutionStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(PendingDeposit)),
        Just(Some(KnownDepositTx)),
        Just(Some(IncompleteDeposit)),
        Just(Some(Processing)),
        Just(Some(Success)),
        Just(Some(Refunded)),
        Just(Some(Failed)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn handler_never_sees_a_status_twice_in_a_row(
        script in proptest::collection::vec(poll_strategy(), 0..40),
        max_attempts in 1u32..50,
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();

        let api = MockSwapApi::new(script.clone());
        let log = EventLog::default();
        let last = rt.block_on(poll_status(&api, params(max_attempts, &log)));

        let seen = log.statuses();
        for pair in seen.windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }

        // Nothing is reported after a terminal status.
        if let Some(pos) = seen.iter().position(|s| s.is_terminal()) {
            prop_assert_eq!(pos, seen.len() - 1);
            prop_assert_eq!(last.as_ref().map(|s| s.status), Some(seen[pos]));
        }

        prop_assert!(api.status_calls() <= max_attempts as usize);
    }
}
