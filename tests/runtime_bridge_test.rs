//! Runtime bridge round trips with an in-process backend

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use cryptodash::app::App;
use cryptodash::domain::{AnalysisResult, TimeDisplay, Transaction};
use cryptodash::infrastructure::api::{ApiError, BackendApi};
use cryptodash::infrastructure::runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};

#[derive(Default)]
struct FakeBackend {
    transaction_calls: AtomicUsize,
    analysis_calls: AtomicUsize,
}

#[async_trait::async_trait]
impl BackendApi for FakeBackend {
    async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.transaction_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Transaction {
            hash: "0xfeed".into(),
            from_addr: "0xaaaa".into(),
            to_addr: "0xbbbb".into(),
            value: "1000000000000000000".into(),
            time: Some(1_704_067_200),
            raw_json: String::new(),
            parsed_json: String::new(),
        }])
    }

    async fn analysis(&self) -> Result<AnalysisResult, ApiError> {
        self.analysis_calls.fetch_add(1, Ordering::SeqCst);
        Err(ApiError::Unsuccessful {
            status: 200,
            message: Some("No analysis results available".into()),
        })
    }
}

/// Poll until `done` matches an event or the deadline passes
fn collect_until(
    bridge: &RuntimeBridge,
    done: impl Fn(&RuntimeEvent) -> bool,
) -> Vec<RuntimeEvent> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut seen = Vec::new();
    while Instant::now() < deadline {
        for event in bridge.poll_events() {
            let finished = done(&event);
            seen.push(event);
            if finished {
                return seen;
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("timed out; events so far: {:?}", seen);
}

#[test]
fn initial_load_reports_both_fetches_then_completes() {
    let backend = Arc::new(FakeBackend::default());
    let bridge = RuntimeBridge::new(backend.clone()).unwrap();

    bridge
        .send(RuntimeCommand::LoadInitial {
            tx_generation: 1,
            analysis_generation: 1,
        })
        .unwrap();
    let events = collect_until(&bridge, |e| matches!(e, RuntimeEvent::InitialLoadComplete));

    assert_eq!(events.len(), 3);
    assert!(matches!(
        events.last(),
        Some(RuntimeEvent::InitialLoadComplete)
    ));
    assert!(events.iter().any(|e| matches!(
        e,
        RuntimeEvent::TransactionsFetched { generation: 1, result: Ok(txs) } if txs.len() == 1
    )));
    assert!(events.iter().any(|e| matches!(
        e,
        RuntimeEvent::AnalysisFetched { generation: 1, result: Err(err) } if err.is_unsuccessful()
    )));
    assert_eq!(backend.transaction_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend.analysis_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn refresh_echoes_its_generation() {
    let backend = Arc::new(FakeBackend::default());
    let bridge = RuntimeBridge::new(backend.clone()).unwrap();

    bridge
        .send(RuntimeCommand::RefreshTransactions { generation: 7 })
        .unwrap();
    let events = collect_until(&bridge, |e| {
        matches!(e, RuntimeEvent::TransactionsFetched { .. })
    });
    assert!(matches!(
        events.last(),
        Some(RuntimeEvent::TransactionsFetched { generation: 7, .. })
    ));
    assert_eq!(backend.analysis_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn store_applies_bridge_events() {
    let bridge = RuntimeBridge::new(Arc::new(FakeBackend::default())).unwrap();
    let mut app = App::new("http://localhost:8000", TimeDisplay::Utc);

    app.request_initial_load();
    let (tx_generation, analysis_generation) = app.take_initial_load_request().unwrap();
    bridge
        .send(RuntimeCommand::LoadInitial {
            tx_generation,
            analysis_generation,
        })
        .unwrap();

    for event in collect_until(&bridge, |e| matches!(e, RuntimeEvent::InitialLoadComplete)) {
        match event {
            RuntimeEvent::TransactionsFetched { generation, result } => {
                app.apply_transactions(generation, result)
            }
            RuntimeEvent::AnalysisFetched { generation, result } => {
                app.apply_analysis(generation, result)
            }
            RuntimeEvent::InitialLoadComplete => app.finish_initial_load(),
            RuntimeEvent::Error { message } => panic!("unexpected worker error: {message}"),
        }
    }

    assert!(!app.initial_loading);
    assert_eq!(app.transactions.len(), 1);
    // No analysis yet is not an error
    assert!(app.analysis.is_none());
    assert!(app.error.is_none());
}
