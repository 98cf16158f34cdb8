//! Debounced fetch gate
//!
//! Each scheduled query gets a generation number and its own cancellation
//! token. Scheduling again cancels the previous token, which both resets a
//! pending debounce timer and aborts an in-flight fetch. Outcomes travel back
//! over a channel tagged with their generation; anything that is not the
//! current generation is discarded on receipt.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use super::source::{FetchError, SuggestionSource};
use crate::item::SuggestionItem;

/// Raw messages sent by fetch tasks
#[derive(Debug)]
enum FetchOutcome {
    Loaded {
        generation: u64,
        query: String,
        items: Vec<SuggestionItem>,
    },
    Failed {
        generation: u64,
        query: String,
        error: FetchError,
    },
    Cancelled {
        generation: u64,
    },
}

impl FetchOutcome {
    fn generation(&self) -> u64 {
        match self {
            FetchOutcome::Loaded { generation, .. }
            | FetchOutcome::Failed { generation, .. }
            | FetchOutcome::Cancelled { generation } => *generation,
        }
    }
}

/// Result of the most recently scheduled fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    Loaded {
        query: String,
        items: Vec<SuggestionItem>,
    },
    Failed {
        query: String,
        error: FetchError,
    },
}

pub struct FetchGate {
    source: Arc<dyn SuggestionSource>,
    debounce: Duration,
    runtime: Handle,
    /// Incremented for every scheduled query
    generation: u64,
    /// Generation whose outcome is still awaited
    in_flight: Option<u64>,
    cancel_token: Option<CancellationToken>,
    response_tx: UnboundedSender<FetchOutcome>,
    response_rx: UnboundedReceiver<FetchOutcome>,
}

impl FetchGate {
    pub fn new(source: Arc<dyn SuggestionSource>, debounce: Duration, runtime: Handle) -> Self {
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        Self {
            source,
            debounce,
            runtime,
            generation: 0,
            in_flight: None,
            cancel_token: None,
            response_tx,
            response_rx,
        }
    }

    /// Fetch `query` once the debounce window passes without another call,
    /// superseding whatever was scheduled before
    pub fn schedule(&mut self, query: String) -> u64 {
        self.cancel();

        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let token = CancellationToken::new();

        log::debug!(
            "Scheduled fetch {} for {:?} in {:?}",
            generation,
            query,
            self.debounce
        );

        self.runtime.spawn(run_fetch(
            Arc::clone(&self.source),
            query,
            self.debounce,
            generation,
            token.clone(),
            self.response_tx.clone(),
        ));

        self.cancel_token = Some(token);
        self.in_flight = Some(generation);
        generation
    }

    /// Cancel the pending or in-flight fetch, if any
    ///
    /// Returns true if something was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.in_flight = None;
        match self.cancel_token.take() {
            Some(token) => {
                token.cancel();
                log::debug!("Cancelled fetch {}", self.generation);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    /// Non-blocking: return the current fetch's result if it has arrived
    pub fn try_next(&mut self) -> Option<FetchResult> {
        while let Ok(outcome) = self.response_rx.try_recv() {
            if let Some(result) = self.accept(outcome) {
                return Some(result);
            }
        }
        None
    }

    /// Wait for the current fetch's result; None when nothing is pending
    pub async fn next(&mut self) -> Option<FetchResult> {
        while self.in_flight.is_some() {
            let outcome = self.response_rx.recv().await?;
            if let Some(result) = self.accept(outcome) {
                return Some(result);
            }
        }
        None
    }

    fn accept(&mut self, outcome: FetchOutcome) -> Option<FetchResult> {
        let generation = outcome.generation();
        if self.in_flight != Some(generation) {
            log::debug!(
                "Discarding stale fetch {} (current: {:?})",
                generation,
                self.in_flight
            );
            return None;
        }

        self.in_flight = None;
        self.cancel_token = None;

        match outcome {
            FetchOutcome::Loaded { query, items, .. } => {
                log::debug!("Fetch {} returned {} items", generation, items.len());
                Some(FetchResult::Loaded { query, items })
            }
            FetchOutcome::Failed { query, error, .. } => {
                log::debug!("Fetch {} failed: {}", generation, error);
                Some(FetchResult::Failed { query, error })
            }
            FetchOutcome::Cancelled { .. } => None,
        }
    }
}

impl Drop for FetchGate {
    fn drop(&mut self) {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }
    }
}

async fn run_fetch(
    source: Arc<dyn SuggestionSource>,
    query: String,
    debounce: Duration,
    generation: u64,
    token: CancellationToken,
    response_tx: UnboundedSender<FetchOutcome>,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            let _ = response_tx.send(FetchOutcome::Cancelled { generation });
            return;
        }
        _ = tokio::time::sleep(debounce) => {}
    }

    log::debug!("Fetching suggestions for {:?} (request {})", query, generation);

    let fetch = source.fetch(&query);
    let outcome = tokio::select! {
        biased;
        _ = token.cancelled() => FetchOutcome::Cancelled { generation },
        result = fetch => match result {
            Ok(items) => FetchOutcome::Loaded { generation, query, items },
            Err(error) => FetchOutcome::Failed { generation, query, error },
        },
    };

    // Receiver gone means the gate was dropped
    let _ = response_tx.send(outcome);
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod gate_tests;
