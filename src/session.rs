//! Async session wiring a form controller to a question provider
//!
//! The controller itself is a synchronous state machine; this layer owns
//! the sole concurrent operation — the provider fetch — and funnels its
//! generation-tagged outcomes back through a channel, so all state
//! mutation stays on the session's single logical thread.

use crate::controller::{EditEvent, FetchRequest, FormController, SubmitOutcome};
use crate::provider::{FetchError, QuestionDescriptor, QuestionProvider};
use crate::schema::FormLevel;
use crate::state::FetchGeneration;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Outcome message sent back from a fetch task
#[derive(Debug)]
struct FetchOutcome {
    generation: FetchGeneration,
    result: Result<Vec<QuestionDescriptor>, FetchError>,
}

/// One live form instance bound to a question provider
pub struct FormSession {
    controller: FormController,
    provider: Arc<dyn QuestionProvider>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl FormSession {
    pub fn new(level: FormLevel, provider: Arc<dyn QuestionProvider>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            controller: FormController::new(level),
            provider,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Apply an edit, spawning a question fetch when the topic changed.
    ///
    /// Superseded fetches are not cancelled; they complete and are then
    /// discarded by the generation guard when their outcome arrives.
    pub fn handle_edit(&mut self, event: EditEvent) {
        if let Some(request) = self.controller.apply_edit(event) {
            self.spawn_fetch(request);
        }
    }

    fn spawn_fetch(&self, request: FetchRequest) {
        let provider = Arc::clone(&self.provider);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = provider.fetch_questions(&request.topic).await;
            // Receiver gone means the session ended; nothing left to do
            let _ = tx.send(FetchOutcome {
                generation: request.generation,
                result,
            });
        });
    }

    /// Apply every fetch outcome that has already completed
    pub fn pump(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.controller
                .apply_fetch_outcome(outcome.generation, outcome.result);
        }
    }

    /// Wait for the next fetch outcome and apply it
    pub async fn process_next_outcome(&mut self) {
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.controller
                .apply_fetch_outcome(outcome.generation, outcome.result);
        }
    }

    /// Submit against whatever dynamic fields are live right now.
    ///
    /// Already-completed outcomes are applied first, but an in-flight
    /// fetch is never waited on.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.pump();
        self.controller.submit()
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FormController {
        &mut self.controller
    }
}
