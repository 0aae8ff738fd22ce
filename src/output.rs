use crate::ansi;
use crate::models::chat::{ChatAuthor, ChatEntry};
use chrono::Local;
use std::io::Write;

/// The terminal surface. One stdout writer; commands print through this so
/// styling stays in one place.
#[derive(Debug, Clone, Default)]
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    /// Regular in-game line.
    pub fn line(&self, s: impl AsRef<str>) {
        println!("{}", s.as_ref());
    }

    /// Out-of-game notice from the front-end itself.
    pub fn system(&self, s: impl AsRef<str>) {
        println!("{}{}{}", ansi::DIM, s.as_ref(), ansi::RESET);
    }

    /// Short human-readable failure, shown in place of data.
    pub fn error(&self, s: impl AsRef<str>) {
        println!("{}{}{}", ansi::FG_RED, s.as_ref(), ansi::RESET);
    }

    /// One chat bubble: timestamp, author label, body.
    pub fn chat_entry(&self, entry: &ChatEntry) {
        let stamp = entry.sent_at.with_timezone(&Local).format("%H:%M:%S");
        match entry.author {
            ChatAuthor::Player => {
                println!("{}[{stamp}] you:{} {}", ansi::FG_GRAY, ansi::RESET, entry.body);
            }
            ChatAuthor::GameMaster => {
                println!(
                    "{}[{stamp}]{} {}Game Master:{} {}",
                    ansi::FG_GRAY,
                    ansi::RESET,
                    ansi::FG_CYAN,
                    ansi::RESET,
                    entry.body
                );
            }
        }
    }

    /// Draw the input prompt without a trailing newline.
    pub fn prompt(&self) {
        print!("> ");
        let _ = std::io::stdout().flush();
    }
}
