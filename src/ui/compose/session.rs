//! Compose session: owns the form state, the service client and the
//! in-flight request.

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::clipboard::ClipboardSink;
use crate::reply::{ComposeError, ComposeRequest, ReplyClient, Tone};
use crate::ui::mvi::Reducer;

use super::intent::ComposeIntent;
use super::reducer::ComposeReducer;
use super::state::ComposeState;

/// A submission accepted by the reducer, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingGeneration {
    pub generation: u64,
    pub request: ComposeRequest,
}

/// Result of one request, tagged with the generation it belongs to.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub generation: u64,
    pub result: Result<String, ComposeError>,
}

pub struct ComposeSession {
    state: ComposeState,
    client: ReplyClient,
    in_flight: Option<JoinHandle<()>>,
}

impl ComposeSession {
    pub fn new(client: ReplyClient, tone: Tone) -> Self {
        Self {
            state: ComposeState::with_tone(tone),
            client,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &ComposeState {
        &self.state
    }

    pub fn client(&self) -> &ReplyClient {
        &self.client
    }

    /// Run an intent through the reducer.
    pub fn dispatch(&mut self, intent: ComposeIntent) {
        self.state = ComposeReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Dispatch `Submit` and report the request to send, if it was accepted.
    pub fn begin_submit(&mut self) -> Option<PendingGeneration> {
        let before = self.state.in_flight_generation();
        self.dispatch(ComposeIntent::Submit);
        match self.state.in_flight_generation() {
            Some(generation) if before != Some(generation) => Some(PendingGeneration {
                generation,
                request: self.state.request(),
            }),
            _ => None,
        }
    }

    /// Apply a finished request to the form.
    ///
    /// Failures are logged with full detail; the form only ever shows the
    /// generic message.
    pub fn complete(&mut self, outcome: GenerationOutcome) {
        self.apply(outcome.generation, &outcome.result);
    }

    fn apply(&mut self, generation: u64, result: &Result<String, ComposeError>) {
        if self.state.in_flight_generation() != Some(generation) {
            tracing::debug!(generation, "Ignoring stale generation result");
            return;
        }
        self.in_flight = None;

        match result {
            Ok(reply) => {
                tracing::info!(generation, reply_len = reply.len(), "Reply generated");
                self.dispatch(ComposeIntent::GenerationSucceeded {
                    generation,
                    reply: reply.clone(),
                });
            }
            Err(err) => {
                tracing::error!(generation, error = %err, "Failed to generate reply");
                self.dispatch(ComposeIntent::GenerationFailed { generation });
            }
        }
    }

    /// Submit the current form without blocking the caller.
    ///
    /// The request runs on `runtime`; `on_complete` receives its outcome
    /// and is expected to hand it back to [`ComposeSession::complete`].
    /// Returns false when the submit trigger is disabled.
    pub fn start_generation<F>(&mut self, runtime: &Handle, on_complete: F) -> bool
    where
        F: FnOnce(GenerationOutcome) + Send + 'static,
    {
        let Some(pending) = self.begin_submit() else {
            return false;
        };

        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        let client = self.client.clone();
        self.in_flight = Some(runtime.spawn(async move {
            let result = client.generate(&pending.request).await;
            on_complete(GenerationOutcome {
                generation: pending.generation,
                result,
            });
        }));
        true
    }

    /// Set the form fields, send the request and wait for the reply.
    ///
    /// Returns [`ComposeError::NotReady`] without touching the form or the
    /// network when the content is empty or another request is in flight.
    pub async fn submit(
        &mut self,
        email_content: impl Into<String>,
        tone: Tone,
    ) -> Result<String, ComposeError> {
        let email_content = email_content.into();
        if email_content.is_empty() || self.state.is_loading() {
            return Err(ComposeError::NotReady);
        }
        self.dispatch(ComposeIntent::SetContent(email_content));
        self.dispatch(ComposeIntent::SelectTone(tone));

        let Some(pending) = self.begin_submit() else {
            return Err(ComposeError::NotReady);
        };

        let result = self.client.generate(&pending.request).await;
        self.apply(pending.generation, &result);
        result
    }

    /// Copy the current reply to `clipboard`.
    ///
    /// Returns true when text was copied. With no reply yet this is a no-op;
    /// clipboard failures are logged, never raised.
    pub fn copy_result(&self, clipboard: &mut dyn ClipboardSink) -> bool {
        if !self.state.has_reply() {
            return false;
        }
        match clipboard.set_text(&self.state.generated_reply) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to copy reply to clipboard");
                false
            }
        }
    }
}

impl Drop for ComposeSession {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn submitting_session() -> ComposeSession {
        let client = ReplyClient::new(&ServiceConfig::default()).unwrap();
        let mut session = ComposeSession::new(client, Tone::Professional);
        session.dispatch(ComposeIntent::SetContent("Hi".to_string()));
        assert!(session.begin_submit().is_some());
        session
    }

    fn captured_logs(session: &mut ComposeSession, outcome: GenerationOutcome) -> String {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || session.complete(outcome));
        let bytes = logs.0.lock().clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn stale_results_are_not_logged_as_outcomes() {
        let mut session = submitting_session();

        let logs = captured_logs(
            &mut session,
            GenerationOutcome {
                generation: 9,
                result: Ok("late".to_string()),
            },
        );
        assert!(logs.contains("Ignoring stale generation result"));
        assert!(!logs.contains("Reply generated"));

        let logs = captured_logs(
            &mut session,
            GenerationOutcome {
                generation: 9,
                result: Err(ComposeError::NotReady),
            },
        );
        assert!(!logs.contains("Failed to generate reply"));
        assert!(session.state().is_loading());
    }

    #[test]
    fn current_result_is_logged_and_applied() {
        let mut session = submitting_session();
        let logs = captured_logs(
            &mut session,
            GenerationOutcome {
                generation: 1,
                result: Ok("reply".to_string()),
            },
        );
        assert!(logs.contains("Reply generated"));
        assert_eq!(session.state().generated_reply, "reply");
    }
}
