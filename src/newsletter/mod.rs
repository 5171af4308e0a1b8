//! Newsletter signup: the shared email draft, the feedback shown after a
//! submission, and the floating banner.

pub mod banner;

pub use banner::{Banner, ScrollMetrics};

use unicode_width::UnicodeWidthStr;

pub const SUCCESS_MESSAGE: &str = "Thank you for subscribing!";
pub const FAILURE_MESSAGE: &str = "Failed to subscribe. Please try again later.";

/// How a subscription attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    /// The server refused the address; carries its message verbatim.
    Rejected(String),
    /// Transport failure or an unusable response.
    Failed,
}

impl SubscribeOutcome {
    pub fn message(&self) -> &str {
        match self {
            SubscribeOutcome::Subscribed => SUCCESS_MESSAGE,
            SubscribeOutcome::Rejected(msg) => msg,
            SubscribeOutcome::Failed => FAILURE_MESSAGE,
        }
    }
}

/// Single-line text field with a byte cursor kept on char boundaries.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Display column of the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

/// The email field and the last submission message, shared by the inline
/// form and the floating banner.
#[derive(Debug, Default)]
pub struct SubscriptionDraft {
    pub email: InputState,
    pub message: Option<String>,
    pub in_flight: usize,
}

impl SubscriptionDraft {
    /// The address to submit, or `None` when the field is blank.
    ///
    /// Surrounding whitespace is stripped the way an email input sanitizes
    /// its value; nothing else is validated.
    pub fn submission(&mut self) -> Option<String> {
        let email = self.email.text.trim();
        if email.is_empty() {
            return None;
        }
        self.in_flight += 1;
        Some(email.to_string())
    }

    pub fn apply(&mut self, outcome: &SubscribeOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if *outcome == SubscribeOutcome::Subscribed {
            self.email.clear();
        }
        self.message = Some(outcome.message().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(email: &str) -> SubscriptionDraft {
        let mut draft = SubscriptionDraft::default();
        for c in email.chars() {
            draft.email.insert_char(c);
        }
        draft
    }

    #[test]
    fn success_clears_email_and_thanks() {
        let mut draft = draft_with("user@example.com");
        assert_eq!(draft.submission().as_deref(), Some("user@example.com"));
        draft.apply(&SubscribeOutcome::Subscribed);
        assert!(draft.email.text.is_empty());
        assert_eq!(draft.email.cursor, 0);
        assert_eq!(draft.message.as_deref(), Some(SUCCESS_MESSAGE));
        assert_eq!(draft.in_flight, 0);
    }

    #[test]
    fn rejection_keeps_email_and_shows_server_text() {
        let mut draft = draft_with("user@example.com");
        draft.submission();
        draft.apply(&SubscribeOutcome::Rejected("Already subscribed".into()));
        assert_eq!(draft.email.text, "user@example.com");
        assert_eq!(draft.message.as_deref(), Some("Already subscribed"));
    }

    #[test]
    fn failure_shows_generic_text() {
        let mut draft = draft_with("user@example.com");
        draft.submission();
        draft.apply(&SubscribeOutcome::Failed);
        assert_eq!(draft.email.text, "user@example.com");
        assert_eq!(draft.message.as_deref(), Some(FAILURE_MESSAGE));
    }

    #[test]
    fn blank_email_is_not_submitted() {
        let mut draft = draft_with("   ");
        assert_eq!(draft.submission(), None);
        assert_eq!(draft.in_flight, 0);
        assert_eq!(draft_with("  a@b.co ").submission().as_deref(), Some("a@b.co"));
    }

    #[test]
    fn editing_respects_char_boundaries() {
        let mut input = InputState::default();
        for c in "jü@x".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "j@x");
        assert_eq!(input.cursor_column(), 1);
        input.move_end();
        input.delete_word_back();
        assert!(input.text.is_empty());
    }

    #[test]
    fn delete_forward_and_home() {
        let mut input = InputState::default();
        for c in "abc".chars() {
            input.insert_char(c);
        }
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "bc");
        input.move_right();
        assert_eq!(input.cursor, 1);
    }
}
