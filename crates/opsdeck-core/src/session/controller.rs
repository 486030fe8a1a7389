//! Chat session controller.
//!
//! Owns the ordered conversation log, the pending-input buffer, and the
//! in-flight flag for one session, and runs the turn protocol against the
//! agent backend. State changes are broadcast as [`SessionEvent`]s so the
//! view renders from notifications rather than being driven directly.
//!
//! The turn protocol is two-phase: `begin_submit` performs the optimistic
//! local mutations and opens the in-flight window, the transport call is
//! the sole suspension point, and `settle` applies exactly one outcome and
//! closes the window. `submit` composes the three.

use tokio::sync::broadcast;
use tracing::warn;

use opsdeck_types::chat::{AGENT_ERROR_TEXT, AGENT_GREETING, AgentReply, Speaker, Turn};
use opsdeck_types::error::TransportError;
use opsdeck_types::event::SessionEvent;

use crate::event::bus::EventBus;
use crate::transport::AgentClient;

/// Broadcast capacity for session events. A view that falls this far
/// behind re-reads the log snapshot instead.
const EVENT_CAPACITY: usize = 256;

/// Manages the conversation state of a single chat session.
///
/// The log is append-only and monotonically growing; turns are never
/// reordered, edited, or deleted. At most one chat request is in flight at
/// a time -- a second submission while the flag is set is rejected, not
/// queued. All mutation happens behind `&mut self` on one logical control
/// thread, so no locking is needed.
pub struct SessionController<A: AgentClient> {
    agent: A,
    log: Vec<Turn>,
    pending_input: String,
    in_flight: bool,
    events: EventBus,
}

impl<A: AgentClient> SessionController<A> {
    /// Create a controller seeded with the static agent greeting.
    pub fn new(agent: A) -> Self {
        Self {
            agent,
            log: vec![Turn::new(Speaker::Agent, AGENT_GREETING)],
            pending_input: String::new(),
            in_flight: false,
            events: EventBus::new(EVENT_CAPACITY),
        }
    }

    /// Ordered snapshot of the conversation log.
    pub fn log(&self) -> &[Turn] {
        &self.log
    }

    /// Current unsent operator text.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Whether a chat request is currently in flight.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Subscribe to state-change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Replace the pending input buffer unconditionally.
    ///
    /// No validation: empty or whitespace-only text is permitted
    /// transiently. Callable while a send is in flight; the new text only
    /// takes part in the next submission.
    pub fn update_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
        self.events.publish(SessionEvent::InputChanged {
            text: self.pending_input.clone(),
        });
    }

    /// Submit the pending input as one operator turn.
    ///
    /// No-op when the pending input is empty or all-whitespace, or when a
    /// request is already in flight. Otherwise the log grows by exactly two
    /// turns: the operator turn immediately, and an agent turn on
    /// settlement -- the reply text on success, the fixed sentinel error
    /// text on any failure. Failures are never propagated to the caller.
    /// The in-flight flag is guaranteed false once this returns.
    pub async fn submit(&mut self) {
        let Some(query) = self.begin_submit() else {
            return;
        };
        let outcome = self.agent.send_chat_message(&query).await;
        self.settle(outcome);
    }

    /// Phase one: optimistic append and dispatch gate.
    ///
    /// Returns the text to send, or `None` when the submission is rejected
    /// (blank input, or a send already in flight). On acceptance the
    /// operator turn is appended with the raw pending text, the buffer is
    /// cleared, and the in-flight flag is set -- one atomic mutation from
    /// the caller's perspective.
    fn begin_submit(&mut self) -> Option<String> {
        if self.in_flight || self.pending_input.trim().is_empty() {
            return None;
        }

        let query = std::mem::take(&mut self.pending_input);
        let turn = Turn::new(Speaker::Operator, query.clone());
        self.log.push(turn.clone());
        self.in_flight = true;

        self.events.publish(SessionEvent::TurnAppended { turn });
        self.events.publish(SessionEvent::InputChanged {
            text: String::new(),
        });
        self.events
            .publish(SessionEvent::InFlightChanged { in_flight: true });

        Some(query)
    }

    /// Phase two: apply exactly one settlement outcome.
    ///
    /// Success appends the reply text verbatim; failure is swallowed into
    /// the sentinel agent turn. Clearing the in-flight flag is the final
    /// mutation and happens on both arms.
    fn settle(&mut self, outcome: Result<AgentReply, TransportError>) {
        let turn = match outcome {
            Ok(reply) => Turn::new(Speaker::Agent, reply.response),
            Err(err) => {
                warn!("chat request failed: {err}");
                Turn::new(Speaker::Agent, AGENT_ERROR_TEXT)
            }
        };
        self.log.push(turn.clone());
        self.in_flight = false;

        self.events.publish(SessionEvent::TurnAppended { turn });
        self.events
            .publish(SessionEvent::InFlightChanged { in_flight: false });
    }
}
