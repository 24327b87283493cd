//! Chat transcript types shared by the concierge and its transports.

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Role name used on the generative-language wire, where assistant
    /// turns are tagged `model`.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "model",
        }
    }
}

/// One prior turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// Everything a transport needs to produce one reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub system_instruction: String,
    pub transcript: Vec<ChatTurn>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::ChatRole;

    #[test]
    fn assistant_turns_use_the_model_wire_role() {
        assert_eq!(ChatRole::User.wire_name(), "user");
        assert_eq!(ChatRole::Assistant.wire_name(), "model");
    }
}
