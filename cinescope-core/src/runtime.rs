//! Async execution of session effects.
//!
//! The orchestrator is synchronous; this module performs the network side
//! of each [`Effect`] on the Tokio runtime and funnels the completion back
//! as a [`Message`] over an unbounded channel.

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::providers::MetadataClient;
use crate::render::Presenter;
use crate::session::{Effect, FetchOrchestrator, Message, SessionState};

/// Perform one effect and turn its result into the completion message.
pub async fn execute(client: &dyn MetadataClient, effect: Effect) -> Message {
    match effect {
        Effect::Search(ticket) => {
            let result = client.search(&ticket.term, ticket.page).await;
            if let Err(err) = &result {
                tracing::debug!(
                    term = %ticket.term,
                    page = ticket.page,
                    error = %err,
                    "search request returned an error"
                );
            }
            Message::PageLoaded {
                outcome: result.into(),
                ticket,
            }
        }
        Effect::FetchDetail(ticket) => {
            let result = client.fetch_by_id(&ticket.id).await;
            if let Err(err) = &result {
                tracing::debug!(
                    id = %ticket.id,
                    error = %err,
                    "detail request returned an error"
                );
            }
            Message::DetailLoaded {
                outcome: result.into(),
                ticket,
            }
        }
    }
}

/// Couples a [`FetchOrchestrator`] with a metadata client.
///
/// Effects are spawned onto the ambient Tokio runtime, so [`dispatch`]
/// must be called from within one.
///
/// [`dispatch`]: SessionRuntime::dispatch
pub struct SessionRuntime<P> {
    orchestrator: FetchOrchestrator<P>,
    client: Arc<dyn MetadataClient>,
    completion_tx: mpsc::UnboundedSender<Message>,
    completion_rx: mpsc::UnboundedReceiver<Message>,
}

impl<P: fmt::Debug> fmt::Debug for SessionRuntime<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRuntime")
            .field("orchestrator", &self.orchestrator)
            .field("client", &self.client.name())
            .finish_non_exhaustive()
    }
}

impl<P: Presenter> SessionRuntime<P> {
    pub fn new(client: Arc<dyn MetadataClient>, presenter: P) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            orchestrator: FetchOrchestrator::new(presenter),
            client,
            completion_tx,
            completion_rx,
        }
    }

    pub fn orchestrator(&self) -> &FetchOrchestrator<P> {
        &self.orchestrator
    }

    pub fn session(&self) -> &SessionState {
        self.orchestrator.session()
    }

    pub fn presenter(&self) -> &P {
        self.orchestrator.presenter()
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        self.orchestrator.presenter_mut()
    }

    /// Feed one message to the orchestrator. Returns `true` when a network
    /// request was started as a result.
    pub fn dispatch(&mut self, message: Message) -> bool {
        let Some(effect) = self.orchestrator.update(message) else {
            return false;
        };

        let client = Arc::clone(&self.client);
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let completion = execute(client.as_ref(), effect).await;
            if tx.send(completion).is_err() {
                tracing::debug!("session runtime dropped before completion");
            }
        });
        true
    }

    /// Wait for the next request completion. The caller decides when to
    /// dispatch it.
    pub async fn next_completion(&mut self) -> Option<Message> {
        self.completion_rx.recv().await
    }

    /// Dispatch completions until no request is outstanding.
    pub async fn settle(&mut self) {
        while self.session().is_in_flight() {
            match self.next_completion().await {
                Some(completion) => {
                    self.dispatch(completion);
                }
                None => break,
            }
        }
    }
}
