//! Chat message log and time formatting.

use crate::data::{Message, Sender};
use chrono::{DateTime, Duration, Local};
use tracing::debug;
use uuid::Uuid;

/// Append `draft` as a message from the local user.
///
/// Returns the new log and the cleared draft. A draft that is empty or only
/// whitespace leaves both unchanged. The stored text is the draft as typed.
pub fn send(messages: Vec<Message>, draft: String) -> (Vec<Message>, String) {
    if draft.trim().is_empty() {
        return (messages, draft);
    }

    let mut messages = messages;
    messages.push(Message {
        id: Uuid::new_v4().to_string(),
        text: draft,
        timestamp: Local::now(),
        sender: Sender::Me,
    });
    (messages, String::new())
}

/// Message log of an open conversation plus its draft.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    pub messages: Vec<Message>,
    pub draft: String,
}

impl ChatLog {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            draft: String::new(),
        }
    }

    /// Send the current draft. Returns whether a message was appended.
    pub fn submit(&mut self) -> bool {
        let before = self.messages.len();
        let (messages, draft) = send(
            std::mem::take(&mut self.messages),
            std::mem::take(&mut self.draft),
        );
        self.messages = messages;
        self.draft = draft;

        let sent = self.messages.len() > before;
        if sent {
            debug!("Message sent ({} in log)", self.messages.len());
        }
        sent
    }
}

/// `HH:MM` time of day
pub fn format_time(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Date shown in the conversation list relative to `now`:
/// `HH:MM` today, `Yesterday`, otherwise `DD/MM`.
pub fn format_chat_date(timestamp: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let day = timestamp.date_naive();
    let today = now.date_naive();
    if day == today {
        format_time(timestamp)
    } else if today.checked_sub_signed(Duration::days(1)) == Some(day) {
        "Yesterday".to_string()
    } else {
        timestamp.format("%d/%m").to_string()
    }
}
