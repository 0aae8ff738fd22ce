use crate::ansi;
use crate::commands::{CmdCtx, CommandError, CommandResult, Flow};
use crate::error::DomainError;
use crate::input::parser::Intent;
use std::sync::Arc;

pub async fn register(ctx: Arc<CmdCtx>, intent: Intent) -> CommandResult {
    if intent.args.len() < 3 {
        return Err(CommandError::Usage("register <name> <password>"));
    }

    let profile = match ctx
        .registry
        .services
        .account
        .register(&intent.args[1], &intent.args[2])
        .await
    {
        Ok(profile) => profile,
        Err(DomainError::Validation { message, .. }) => {
            ctx.output.error(format!("Cannot use that name: {message}."));
            return Ok(Flow::Continue);
        }
        Err(e) => {
            tracing::error!(error = %e, "sign up failed");
            ctx.output.error("Sign up failed. Try again later.");
            return Ok(Flow::Continue);
        }
    };

    // Fresh accounts start from defaults; local anonymous progress is
    // deliberately not imported.
    if let Err(e) = ctx.registry.services.player.initialize(profile.id).await {
        tracing::error!(error = %e, "initial stats seeding failed");
        ctx.output
            .error("Account created, but there was an issue setting up your initial stats.");
    }

    let username = profile.username.clone();
    ctx.sess.write().login(profile);

    ctx.output.line(format!(
        "Welcome, {}{}{}! Your journey begins.",
        ansi::BOLD,
        username,
        ansi::RESET
    ));
    Ok(Flow::Continue)
}
