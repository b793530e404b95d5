//! Async worker - runs in the Tokio runtime and performs backend fetches

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::domain::{AnalysisResult, Transaction};
use crate::infrastructure::api::{ApiError, BackendApi};
use crate::infrastructure::runtime::bridge::{RuntimeCommand, RuntimeEvent};

const IDLE_POLL: Duration = Duration::from_millis(10);

/// Run the async worker loop until `Shutdown` or the TUI side hangs up
pub async fn run_async_worker(
    backend: Arc<dyn BackendApi>,
    cmd_rx: Receiver<RuntimeCommand>,
    evt_tx: Sender<RuntimeEvent>,
) -> Result<()> {
    loop {
        loop {
            let cmd = match cmd_rx.try_recv() {
                Ok(cmd) => cmd,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            };
            debug!(?cmd, "runtime command");

            match cmd {
                RuntimeCommand::Shutdown => return Ok(()),

                RuntimeCommand::LoadInitial {
                    tx_generation,
                    analysis_generation,
                } => {
                    let backend = Arc::clone(&backend);
                    let evt_tx = evt_tx.clone();
                    tokio::spawn(async move {
                        let (transactions, analysis) =
                            tokio::join!(backend.transactions(), backend.analysis());
                        log_transactions(&transactions);
                        log_analysis(&analysis);
                        let _ = evt_tx.send(RuntimeEvent::TransactionsFetched {
                            generation: tx_generation,
                            result: transactions,
                        });
                        let _ = evt_tx.send(RuntimeEvent::AnalysisFetched {
                            generation: analysis_generation,
                            result: analysis,
                        });
                        let _ = evt_tx.send(RuntimeEvent::InitialLoadComplete);
                    });
                }

                RuntimeCommand::RefreshTransactions { generation } => {
                    let backend = Arc::clone(&backend);
                    let evt_tx = evt_tx.clone();
                    tokio::spawn(async move {
                        let result = backend.transactions().await;
                        log_transactions(&result);
                        let _ = evt_tx.send(RuntimeEvent::TransactionsFetched { generation, result });
                    });
                }

                RuntimeCommand::RefreshAnalysis { generation } => {
                    let backend = Arc::clone(&backend);
                    let evt_tx = evt_tx.clone();
                    tokio::spawn(async move {
                        let result = backend.analysis().await;
                        log_analysis(&result);
                        let _ = evt_tx.send(RuntimeEvent::AnalysisFetched { generation, result });
                    });
                }
            }
        }

        tokio::time::sleep(IDLE_POLL).await;
    }
}

fn log_transactions(result: &Result<Vec<Transaction>, ApiError>) {
    match result {
        Ok(transactions) => info!(count = transactions.len(), "transactions loaded"),
        Err(err) if err.is_unsuccessful() => warn!(%err, "transactions request unsuccessful"),
        Err(err) => error!(%err, "transactions request failed"),
    }
}

fn log_analysis(result: &Result<AnalysisResult, ApiError>) {
    match result {
        Ok(_) => info!("analysis loaded"),
        // No analysis yet is a normal state before the first workflow run
        Err(err) if err.is_unsuccessful() => info!(%err, "no analysis available"),
        Err(err) => error!(%err, "analysis request failed"),
    }
}
