use crate::error::DomainError;
use crate::input::parser::{Verb, parse_command};
use crate::models::profile::Profile;
use crate::output::Output;
use crate::state::session::Session;
use crate::{Registry, ansi};
use parking_lot::RwLock;
use std::sync::Arc;
use thiserror::Error;

mod inventory;
mod login;
mod logout;
mod name;
mod register;
mod say;
mod stats;

/// What the main loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub type CommandResult = Result<Flow, CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Command context passed to command handlers
pub struct CmdCtx {
    /// Output surface
    pub output: Output,
    /// Global service registry
    pub registry: Arc<Registry>,
    /// Player session
    pub sess: Arc<RwLock<Session>>,
}

impl CmdCtx {
    pub fn is_logged_in(&self) -> bool {
        self.sess.read().is_logged_in()
    }

    pub fn profile(&self) -> Option<Arc<Profile>> {
        self.sess.read().profile()
    }
}

pub async fn process_command(raw: &str, ctx: Arc<CmdCtx>) -> CommandResult {
    let intent = parse_command(raw);
    match intent.verb {
        Verb::Help => {
            ctx.output.system(help_text());
            Ok(Flow::Continue)
        }
        Verb::Stats => stats::stats(ctx.clone()).await,
        Verb::Inventory => inventory::inventory(ctx.clone()).await,
        Verb::Register => register::register(ctx.clone(), intent).await,
        Verb::Login => login::login(ctx.clone(), intent).await,
        Verb::Logout => logout::logout(ctx.clone()).await,
        Verb::Name => name::name(ctx.clone(), intent).await,
        Verb::Say => say::say(ctx.clone(), intent).await,
        Verb::Quit => {
            let (secs, messages) = {
                let sess = ctx.sess.read();
                (sess.session_started.elapsed().as_secs(), sess.message_count())
            };
            ctx.output
                .system(format!("You wandered for {secs}s and exchanged {messages} messages. Farewell."));
            Ok(Flow::Quit)
        }
    }
}

pub fn help_text() -> String {
    format!(
        r#"
{bold}{fg_cyan}Available commands{reset}
------------------
  {fg_yellow}help{reset}                         Show this help
  {fg_yellow}register <name> <password>{reset}   Create an account (keeps progress on the server)
  {fg_yellow}login <name> <password>{reset}      Sign in to an existing account
  {fg_yellow}logout{reset}                       Sign out; progress stays on this machine only
  {fg_yellow}name <new-name>{reset}              Change your name (signed in only)
  {fg_yellow}stats{reset}                        Show your character sheet
  {fg_yellow}inventory{reset}                    Show your six inventory slots
  {fg_yellow}quit{reset}                         Leave the fire

{bold}{fg_cyan}Everything else{reset} is spoken to the {fg_green}Game Master{reset}. Try:
  open the chest
  go north
  attack the goblin
"#,
        bold = ansi::BOLD,
        fg_cyan = ansi::FG_CYAN,
        fg_yellow = ansi::FG_YELLOW,
        fg_green = ansi::FG_GREEN,
        reset = ansi::RESET,
    )
}
