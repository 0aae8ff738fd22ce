use crate::models::chat::ChatLog;
use crate::models::profile::Profile;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnState {
    /// No principal attached; progress lives in the local store
    PreLogin,
    /// Principal attached; progress lives in the hosted backend
    LoggedIn,
}

#[derive(Debug)]
pub struct Session {
    // When is the session started/created
    pub session_started: std::time::Instant,

    /// Name given at the door (used while anonymous)
    display_name: Option<String>,
    /// Profile (if logged in)
    profile: Option<Arc<Profile>>,
    /// Current connection state
    state: ConnState,

    /// Messages exchanged this sitting
    chat: ChatLog,
}

impl Session {
    pub fn new(display_name: Option<String>) -> Self {
        Self {
            session_started: std::time::Instant::now(),
            display_name,
            profile: None,
            state: ConnState::PreLogin,
            chat: ChatLog::new(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.state == ConnState::LoggedIn && self.profile.is_some()
    }

    pub fn profile(&self) -> Option<Arc<Profile>> {
        self.profile.clone()
    }

    pub fn login(&mut self, profile: Profile) {
        self.profile = Some(Arc::new(profile));
        self.state = ConnState::LoggedIn;
    }

    pub fn logout(&mut self) {
        self.profile = None;
        self.state = ConnState::PreLogin;
    }

    /// Swap the attached profile after a rename; no-op while anonymous.
    pub fn set_profile(&mut self, profile: Profile) {
        if self.state == ConnState::LoggedIn {
            self.profile = Some(Arc::new(profile));
        }
    }

    /// Name to greet with: the profile username, else the name given at the
    /// door, else "Adventurer".
    pub fn greeting_name(&self) -> String {
        if let Some(profile) = &self.profile {
            return profile.username.clone();
        }
        self.display_name
            .clone()
            .unwrap_or_else(|| "Adventurer".to_string())
    }

    pub fn chat_log(&self) -> ChatLog {
        self.chat.clone()
    }

    pub fn set_chat_log(&mut self, chat: ChatLog) {
        self.chat = chat;
    }

    pub fn message_count(&self) -> usize {
        self.chat.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::ProfileId;

    fn profile(username: &str) -> Profile {
        Profile {
            id: ProfileId::new(),
            username: username.to_string(),
            password_hash: String::new(),
            created_at: chrono::Utc::now(),
            last_login: None,
        }
    }

    #[test]
    fn t_greeting_precedence() {
        let mut sess = Session::new(Some("Frodo".to_string()));
        assert_eq!(sess.greeting_name(), "Frodo");

        sess.login(profile("Nova"));
        assert_eq!(sess.greeting_name(), "Nova");

        sess.logout();
        assert_eq!(sess.greeting_name(), "Frodo");

        let anon = Session::new(None);
        assert_eq!(anon.greeting_name(), "Adventurer");
    }

    #[test]
    fn t_login_logout_state() {
        let mut sess = Session::new(None);
        assert!(!sess.is_logged_in());

        sess.login(profile("Nova"));
        assert!(sess.is_logged_in());
        assert_eq!(sess.profile().unwrap().username, "Nova");

        sess.logout();
        assert!(!sess.is_logged_in());
        assert!(sess.profile().is_none());
    }

    #[test]
    fn t_set_profile_ignored_while_anonymous() {
        let mut sess = Session::new(None);
        sess.set_profile(profile("Ghost"));
        assert!(sess.profile().is_none());
    }
}
