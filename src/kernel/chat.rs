use super::console::now_ms;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp_ms: u64,
}

#[derive(Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(ChatRole::User, text);
    }

    pub fn push_model(&mut self, text: impl Into<String>) {
        self.push(ChatRole::Model, text);
    }

    fn push(&mut self, role: ChatRole, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            role,
            text: text.into(),
            timestamp_ms: now_ms(),
        });
    }

    pub fn last_model_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::Model)
            .map(|m| m.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_keeps_order_and_roles() {
        let mut chat = ChatState::default();
        chat.push_user("build me a todo app");
        chat.push_model("Created 3 files.");
        chat.push_user("make it dark");

        assert_eq!(chat.messages.len(), 3);
        assert_eq!(chat.messages[0].role, ChatRole::User);
        assert_eq!(chat.last_model_text(), Some("Created 3 files."));
    }
}
