use crate::commands::{CmdCtx, CommandError, CommandResult, Flow, stats};
use crate::error::LoginError;
use crate::input::parser::Intent;
use crate::ansi;
use std::sync::Arc;

pub async fn login(ctx: Arc<CmdCtx>, intent: Intent) -> CommandResult {
    if intent.args.len() < 3 {
        return Err(CommandError::Usage("login <name> <password>"));
    }

    let profile = match ctx
        .registry
        .services
        .account
        .login(&intent.args[1], &intent.args[2])
        .await
    {
        Ok(profile) => profile,
        Err(err) => {
            match err {
                LoginError::UserNotFound | LoginError::InvalidPassword => {
                    ctx.output.error("Login failed. Check your username and password.");
                }
                LoginError::InternalError(e) => {
                    tracing::error!(error = %e, "login failed");
                    ctx.output.error("Login failed due to a server error. Try again later.");
                }
            }
            return Ok(Flow::Continue);
        }
    };

    let username = profile.username.clone();
    ctx.sess.write().login(profile);

    ctx.output.line(format!(
        "Welcome back, {}{}{}!",
        ansi::BOLD,
        username,
        ansi::RESET
    ));

    // Pull the character sheet straight into view
    stats::stats(ctx).await
}
