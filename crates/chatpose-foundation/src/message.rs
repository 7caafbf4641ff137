//! What the interaction layer needs to know about a message.

/// Stable message identity, used to detect row recycling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "msg#{}", self.0)
    }
}

/// Which screen edge a message bubble is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageAlignment {
    /// Received message, anchored to the leading (left) edge.
    Incoming,
    /// Sent message, anchored to the trailing (right) edge.
    Outgoing,
}

impl MessageAlignment {
    /// Sign of horizontal motion that heads toward the screen center, away
    /// from the anchored edge.
    pub fn toward_center_sign(self) -> f32 {
        match self {
            MessageAlignment::Incoming => 1.0,
            MessageAlignment::Outgoing => -1.0,
        }
    }

    pub fn is_toward_center(self, dx: f32) -> bool {
        dx * self.toward_center_sign() > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageInfo {
    pub id: MessageId,
    pub alignment: MessageAlignment,
    pub reply_allowed: bool,
}

impl MessageInfo {
    pub fn incoming(id: u64) -> Self {
        Self {
            id: MessageId(id),
            alignment: MessageAlignment::Incoming,
            reply_allowed: true,
        }
    }

    pub fn outgoing(id: u64) -> Self {
        Self {
            id: MessageId(id),
            alignment: MessageAlignment::Outgoing,
            reply_allowed: true,
        }
    }

    pub fn with_reply_allowed(mut self, allowed: bool) -> Self {
        self.reply_allowed = allowed;
        self
    }
}
