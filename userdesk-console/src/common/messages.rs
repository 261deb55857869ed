use iced::Task;
use userdesk_model::UserID;

use crate::domains::feedback::FeedbackMessage;
use crate::domains::user_update::messages::UserUpdateMessage;

/// The main domain message router
#[derive(Clone, Debug)]
pub enum DomainMessage {
    /// Profile editing domain
    UserUpdate(UserUpdateMessage),
    /// Notices shown to the operator
    Feedback(FeedbackMessage),
    NoOp,
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserUpdate(msg) => msg.name(),
            Self::Feedback(msg) => msg.name(),
            Self::NoOp => "NoOp",
        }
    }
}

impl From<UserUpdateMessage> for DomainMessage {
    fn from(msg: UserUpdateMessage) -> Self {
        DomainMessage::UserUpdate(msg)
    }
}

impl From<FeedbackMessage> for DomainMessage {
    fn from(msg: FeedbackMessage) -> Self {
        DomainMessage::Feedback(msg)
    }
}

/// Events a domain broadcasts after handling a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrossDomainEvent {
    /// The directory accepted an update for this user
    UserSaved(UserID),
    /// The initial load found no usable record
    UserUnavailable(UserID),
}

/// Result of a domain update that includes both a task and events to emit
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages)
    pub task: Task<DomainMessage>,
    /// Events to broadcast to other domains immediately
    pub events: Vec<CrossDomainEvent>,
}

impl DomainUpdateResult {
    /// Nothing to run, nothing to announce
    pub fn none() -> Self {
        Self {
            task: Task::none(),
            events: Vec::new(),
        }
    }

    /// Create a result with just a task
    pub fn task(task: Task<DomainMessage>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    /// Create a result with task and events
    pub fn with_events(
        task: Task<DomainMessage>,
        events: Vec<CrossDomainEvent>,
    ) -> Self {
        Self { task, events }
    }
}

impl std::fmt::Debug for DomainUpdateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainUpdateResult")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}
