//! Runtime bridge - connects sync TUI thread with async Tokio runtime
//!
//! The TUI thread never blocks on the network. Fetches are requested with a
//! [`RuntimeCommand`] and their outcomes come back as [`RuntimeEvent`]s that
//! the main loop drains once per tick.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use tokio::runtime::Runtime;

use crate::domain::{AnalysisResult, Transaction};
use crate::infrastructure::api::{ApiError, BackendApi};
use crate::infrastructure::runtime::worker::run_async_worker;

/// Commands sent from the TUI to the async worker
///
/// Every fetch carries the generation the store assigned to it so the reply
/// can be matched against the latest request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeCommand {
    /// Fetch both resources concurrently and report when both settled
    LoadInitial { tx_generation: u64, analysis_generation: u64 },
    RefreshTransactions { generation: u64 },
    RefreshAnalysis { generation: u64 },
    /// Shutdown the worker
    Shutdown,
}

/// Events sent from the async worker to the TUI
#[derive(Debug)]
pub enum RuntimeEvent {
    TransactionsFetched {
        generation: u64,
        result: Result<Vec<Transaction>, ApiError>,
    },
    AnalysisFetched {
        generation: u64,
        result: Result<AnalysisResult, ApiError>,
    },
    /// Both initial fetches have settled
    InitialLoadComplete,
    /// Worker-level failure, not tied to a fetch
    Error { message: String },
}

/// Bridge between sync TUI thread and async Tokio runtime
pub struct RuntimeBridge {
    cmd_tx: Sender<RuntimeCommand>,
    evt_rx: Receiver<RuntimeEvent>,
}

impl RuntimeBridge {
    /// Start the worker thread with its own Tokio runtime
    pub fn new(backend: Arc<dyn BackendApi>) -> anyhow::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<RuntimeCommand>();
        let (evt_tx, evt_rx) = mpsc::channel::<RuntimeEvent>();

        let rt = Runtime::new().context("failed to create Tokio runtime")?;
        thread::Builder::new()
            .name("cryptodash-runtime".into())
            .spawn(move || {
                rt.block_on(async {
                    if let Err(err) = run_async_worker(backend, cmd_rx, evt_tx.clone()).await {
                        let _ = evt_tx.send(RuntimeEvent::Error {
                            message: format!("Worker exited: {:#}", err),
                        });
                    }
                });
            })
            .context("failed to spawn runtime thread")?;

        Ok(Self { cmd_tx, evt_rx })
    }

    /// Send a command to the async worker
    pub fn send(&self, cmd: RuntimeCommand) -> anyhow::Result<()> {
        self.cmd_tx
            .send(cmd)
            .map_err(|_| anyhow::anyhow!("Worker channel closed"))
    }

    /// Poll for events (non-blocking)
    pub fn poll_events(&self) -> Vec<RuntimeEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.evt_rx.try_recv() {
            events.push(evt);
        }
        events
    }
}

impl Drop for RuntimeBridge {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(RuntimeCommand::Shutdown);
    }
}
