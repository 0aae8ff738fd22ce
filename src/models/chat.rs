use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAuthor {
    Player,
    GameMaster,
}

#[derive(Debug, Clone)]
pub struct ChatEntry {
    pub author: ChatAuthor,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// Ordered message list for one sitting. The player's entry lands the
/// moment it is submitted; a Game Master entry is appended only once a
/// reply actually arrived, so a failed exchange leaves the log with the
/// player entry alone.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_player(&mut self, body: impl Into<String>) {
        self.push(ChatAuthor::Player, body.into());
    }

    pub fn push_game_master(&mut self, body: impl Into<String>) {
        self.push(ChatAuthor::GameMaster, body.into());
    }

    fn push(&mut self, author: ChatAuthor, body: String) {
        self.entries.push(ChatEntry {
            author,
            body,
            sent_at: Utc::now(),
        });
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
