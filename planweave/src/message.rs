//! Minimal message types for LLM calls.
//!
//! Message roles: System, User, Assistant. The planner, worker, and solver
//! each build a short message list and hand it to an [`LlmClient`](crate::llm::LlmClient).

/// A single message in an LLM conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// System prompt; typically placed first in the message list.
    System(String),
    /// User input.
    User(String),
    /// Model reply.
    Assistant(String),
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }

    /// Returns the text content regardless of role.
    pub fn content(&self) -> &str {
        match self {
            Self::System(s) | Self::User(s) | Self::Assistant(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: constructors produce the matching variant with content.
    #[test]
    fn constructors_produce_expected_variants() {
        assert!(matches!(Message::system("s"), Message::System(c) if c == "s"));
        assert!(matches!(Message::user("u"), Message::User(c) if c == "u"));
        assert!(matches!(Message::assistant("a"), Message::Assistant(c) if c == "a"));
    }

    /// **Scenario**: content() returns the inner text for every role.
    #[test]
    fn content_returns_inner_text() {
        for m in [
            Message::system("x"),
            Message::user("x"),
            Message::assistant("x"),
        ] {
            assert_eq!(m.content(), "x");
        }
    }
}
