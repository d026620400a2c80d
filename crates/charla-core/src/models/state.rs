use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::locale::Locale;
use crate::models::message::Message;

/// Id of the built-in greeting message.
pub const GREETING_ID: i64 = 1;

/// The full conversation as seen by subscribers and written to storage.
///
/// `messages` is kept in insertion order; the last element is the most
/// recent message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatStoreState {
    pub messages: Vec<Message>,
}

impl ChatStoreState {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// A conversation holding only the assistant greeting for `locale`.
    pub fn greeting(locale: Locale) -> Self {
        Self {
            messages: vec![Message::assistant(GREETING_ID, locale.greeting())],
        }
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut Message> {
        self.messages.last_mut()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
