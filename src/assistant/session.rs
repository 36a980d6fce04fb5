//! `SessionController`: owns the transcript, the session id and the
//! streaming flag, and drives exchanges with the assistant backend.
//!
//! All methods take `&self`. State sits behind a `parking_lot::Mutex` that is
//! only held for synchronous sections and never across an `.await`, so
//! `add_assistant_messages` or `reset_assistant_chat` may run while an
//! `init_error_helper` call is suspended on the transport. Whatever the
//! transport returns later is appended after those interleaved changes.

use parking_lot::Mutex;
use uuid::Uuid;

use flow_assist_config::AssistantConfig;
use flow_assist_protocol::{
    AssistantReply, AssistantTransport, ChatRequest, ErrorContext, QuickReply, ResponsePayload,
    UserInfo,
};

use super::chat::{ChatMessage, Transcript, normalize};
use super::error::AssistantError;

/// Mutable session state guarded by the controller.
#[derive(Debug, Default)]
struct SessionState {
    transcript: Transcript,
    current_session_id: Option<String>,
    /// `None` until the first exchange starts.
    streaming: Option<bool>,
    /// Exchanges currently awaiting the transport.
    in_flight: usize,
    /// Error context of the last error-helper session.
    chat_session_error: Option<ErrorContext>,
}

/// Chat session controller for the assistant panel.
pub struct SessionController<T> {
    transport: T,
    state: Mutex<SessionState>,
    /// Content of the placeholder appended when an error-helper session opens.
    placeholder_text: String,
    user: UserInfo,
}

impl<T: AssistantTransport> SessionController<T> {
    /// Create a controller with an empty transcript and no session.
    pub fn new(transport: T, config: &AssistantConfig) -> Self {
        Self {
            transport,
            state: Mutex::new(SessionState::default()),
            placeholder_text: config.error_helper_placeholder.clone(),
            user: UserInfo {
                first_name: config.user_first_name.clone(),
            },
        }
    }

    /// Normalize `responses` and append them in order under the batch `id`.
    ///
    /// Rejected payloads are skipped individually; the others are still
    /// appended. Returns the number appended, or
    /// [`AssistantError::PartialBatch`] if anything was rejected.
    pub fn add_assistant_messages(
        &self,
        responses: &[ResponsePayload],
        id: &str,
    ) -> Result<usize, AssistantError> {
        let mut state = self.state.lock();
        append_normalized(&mut state.transcript, responses, id)
    }

    /// Append a user turn to the transcript.
    pub fn add_user_message(&self, content: impl Into<String>, id: impl Into<String>) {
        self.state
            .lock()
            .transcript
            .append([ChatMessage::user_text(id, content)]);
    }

    /// Clear the transcript and forget the session id.
    ///
    /// The streaming flag is left alone; an exchange in flight still settles it.
    pub fn reset_assistant_chat(&self) {
        let mut state = self.state.lock();
        state.transcript.clear();
        state.current_session_id = None;
        state.chat_session_error = None;
        log::debug!("Assistant chat reset");
    }

    /// Open an error-helper session for `context`.
    ///
    /// Appends a placeholder message, then awaits the transport and appends
    /// the normalized reply under the same batch id. A transport failure is
    /// returned as [`AssistantError::Transport`]; the placeholder stays and
    /// the session id is unchanged.
    pub async fn init_error_helper(&self, context: ErrorContext) -> Result<(), AssistantError> {
        let request = ChatRequest::init_error_helper(&context, self.user.clone());
        let batch_id = Uuid::new_v4().to_string();

        {
            let mut state = self.state.lock();
            log::info!(
                "Starting error helper session for node '{}' ({})",
                context.node.name,
                context.node.node_type
            );
            state.chat_session_error = Some(context);
            state.transcript.append([ChatMessage::assistant_text(
                batch_id.as_str(),
                self.placeholder_text.as_str(),
            )]);
        }

        let streaming = self.begin_streaming();
        let result = self.transport.start_session(&request).await;
        let outcome = self.settle(result, &batch_id);
        drop(streaming);
        outcome
    }

    /// Send a free-text follow-up in the current session.
    pub async fn send_message(&self, text: impl Into<String>) -> Result<(), AssistantError> {
        let text = text.into();
        let request = ChatRequest::message(text.as_str());
        self.send_turn(text, request).await
    }

    /// Send a clicked quick reply in the current session.
    pub async fn send_quick_reply(&self, reply: &QuickReply) -> Result<(), AssistantError> {
        let request = ChatRequest::quick_reply(reply.text.as_str(), reply.kind.as_str());
        self.send_turn(reply.text.clone(), request).await
    }

    /// Append the user turn, then await the backend's reply to `request`.
    async fn send_turn(&self, text: String, request: ChatRequest) -> Result<(), AssistantError> {
        let session_id = {
            let mut state = self.state.lock();
            let Some(session_id) = state.current_session_id.clone() else {
                log::warn!("Dropping assistant message: no active session");
                return Err(AssistantError::NoActiveSession);
            };
            state
                .transcript
                .append([ChatMessage::user_text(Uuid::new_v4().to_string(), text)]);
            session_id
        };

        let batch_id = Uuid::new_v4().to_string();
        let streaming = self.begin_streaming();
        let result = self.transport.send_message(&session_id, &request).await;
        let outcome = self.settle(result, &batch_id);
        drop(streaming);
        outcome
    }

    /// Record a settled transport call: adopt the session id and append the
    /// reply, or log and surface the failure.
    fn settle(
        &self,
        result: Result<AssistantReply, flow_assist_protocol::TransportError>,
        batch_id: &str,
    ) -> Result<(), AssistantError> {
        match result {
            Ok(reply) => {
                let mut state = self.state.lock();
                if let Some(session_id) = reply.session_id {
                    if state.current_session_id.as_deref() != Some(session_id.as_str()) {
                        log::info!("Assistant session id: {session_id}");
                    }
                    state.current_session_id = Some(session_id);
                }
                append_normalized(&mut state.transcript, &reply.messages, batch_id).map(|_| ())
            }
            Err(e) => {
                log::error!("Assistant transport failed: {e}");
                Err(e.into())
            }
        }
    }

    fn begin_streaming(&self) -> StreamingGuard<'_> {
        let mut state = self.state.lock();
        state.in_flight += 1;
        state.streaming = Some(true);
        StreamingGuard { state: &self.state }
    }
}

impl<T> SessionController<T> {
    /// Backend-assigned id of the current session, if one is open.
    pub fn current_session_id(&self) -> Option<String> {
        self.state.lock().current_session_id.clone()
    }

    /// `None` before any exchange, then `Some(true)` while one is in flight
    /// and `Some(false)` once all have settled.
    pub fn streaming(&self) -> Option<bool> {
        self.state.lock().streaming
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming().unwrap_or(false)
    }

    /// Snapshot of the transcript messages.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state.lock().transcript.as_slice().to_vec()
    }

    pub fn message_count(&self) -> usize {
        self.state.lock().transcript.len()
    }

    /// Run `f` against the transcript without copying it.
    ///
    /// `f` runs under the state lock and must not call back into the controller.
    pub fn with_transcript<R>(&self, f: impl FnOnce(&Transcript) -> R) -> R {
        f(&self.state.lock().transcript)
    }

    pub fn unread_count(&self) -> usize {
        self.state.lock().transcript.unread_count()
    }

    pub fn mark_all_read(&self) {
        self.state.lock().transcript.mark_all_read();
    }

    /// Error context of the last error-helper session, until reset.
    pub fn chat_session_error(&self) -> Option<ErrorContext> {
        self.state.lock().chat_session_error.clone()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// Settles the streaming flag when an exchange finishes, including when its
/// future is dropped before completion.
struct StreamingGuard<'a> {
    state: &'a Mutex<SessionState>,
}

impl Drop for StreamingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        state.in_flight = state.in_flight.saturating_sub(1);
        if state.in_flight == 0 {
            state.streaming = Some(false);
        }
    }
}

fn append_normalized(
    transcript: &mut Transcript,
    responses: &[ResponsePayload],
    id: &str,
) -> Result<usize, AssistantError> {
    let mut accepted = Vec::with_capacity(responses.len());
    let mut rejected = Vec::new();

    for response in responses {
        match normalize(response, id) {
            Ok(msg) => accepted.push(msg),
            Err(e) => {
                log::warn!("Skipping assistant message in batch '{id}': {e}");
                rejected.push(e);
            }
        }
    }

    let appended = accepted.len();
    transcript.append(accepted);

    if rejected.is_empty() {
        Ok(appended)
    } else {
        Err(AssistantError::PartialBatch { appended, rejected })
    }
}
