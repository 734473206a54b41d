use chrono::{DateTime, Utc};

/// Delay before the simulated support reply.
pub const REPLY_DELAY_MS: u64 = 1000;

pub const GREETING: &str =
    "👋 Hi there! I'm Nihar, your personal assistant. How can I help you today?";
pub const CANNED_REPLY: &str = "I'll be happy to help! What specific information do you need?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub attachment: Option<Attachment>,
}

/// Local, simulated chat. Nothing is sent anywhere.
#[derive(Debug, Clone)]
pub struct ChatSession {
    open: bool,
    draft: String,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        let mut session = Self {
            open: false,
            draft: String::new(),
            messages: Vec::new(),
            next_id: 1,
        };
        session.push(GREETING.to_string(), Sender::Support, None);
        session
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closing discards the unsent draft.
    pub fn close(&mut self) {
        self.open = false;
        self.draft.clear();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Sends the draft. Returns `false` for a blank draft, in which case
    /// nothing changes and no reply should be scheduled.
    pub fn send(&mut self) -> bool {
        if self.draft.trim().is_empty() {
            return false;
        }
        let text = std::mem::take(&mut self.draft);
        self.push(text, Sender::User, None);
        true
    }

    pub fn reply(&mut self) {
        self.push(CANNED_REPLY.to_string(), Sender::Support, None);
    }

    pub fn attach(&mut self, kind: AttachmentKind, name: String) {
        let text = match kind {
            AttachmentKind::Image => "Sent an image".to_string(),
            AttachmentKind::File => format!("Sent a file: {name}"),
        };
        self.push(text, Sender::User, Some(Attachment { kind, name }));
    }

    fn push(&mut self, text: String, sender: Sender, attachment: Option<Attachment>) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
            attachment,
        });
        self.next_id += 1;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_greet_on_start() {
        let chat = ChatSession::new();
        assert!(!chat.is_open());
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].sender, Sender::Support);
        assert_eq!(chat.messages()[0].text, GREETING);
    }

    #[test]
    fn should_ignore_blank_drafts() {
        let mut chat = ChatSession::new();
        chat.set_draft("   ".to_string());
        assert!(!chat.send());
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn should_send_draft_and_clear_it() {
        let mut chat = ChatSession::new();
        chat.set_draft("hello".to_string());
        assert!(chat.send());
        assert_eq!(chat.draft(), "");
        let last = chat.messages().last().unwrap();
        assert_eq!(last.text, "hello");
        assert_eq!(last.sender, Sender::User);

        chat.reply();
        assert_eq!(chat.messages().last().unwrap().text, CANNED_REPLY);
    }

    #[test]
    fn should_assign_increasing_ids() {
        let mut chat = ChatSession::new();
        chat.set_draft("one".to_string());
        chat.send();
        chat.reply();
        let ids: Vec<u64> = chat.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn should_describe_attachments() {
        let mut chat = ChatSession::new();
        chat.attach(AttachmentKind::File, "cv.pdf".to_string());
        chat.attach(AttachmentKind::Image, "me.png".to_string());
        let texts: Vec<&str> = chat.messages()[1..].iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["Sent a file: cv.pdf", "Sent an image"]);
        assert_eq!(
            chat.messages()[2].attachment.as_ref().map(|a| a.kind),
            Some(AttachmentKind::Image)
        );
        assert_eq!(
            chat.messages()[2].attachment.as_ref().map(|a| a.name.as_str()),
            Some("me.png")
        );
    }

    #[test]
    fn should_discard_draft_on_close() {
        let mut chat = ChatSession::new();
        chat.open();
        chat.set_draft("half-written".to_string());
        chat.close();
        assert!(!chat.is_open());
        assert_eq!(chat.draft(), "");
    }
}
