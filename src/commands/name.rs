use crate::commands::{CmdCtx, CommandError, CommandResult, Flow};
use crate::error::DomainError;
use crate::input::parser::Intent;
use std::sync::Arc;

pub async fn name(ctx: Arc<CmdCtx>, intent: Intent) -> CommandResult {
    if intent.args.len() < 2 {
        return Err(CommandError::Usage("name <new-name>"));
    }

    let Some(profile) = ctx.profile() else {
        ctx.output.error("Failed to update name.");
        ctx.output.system("Sign in first to change your name.");
        return Ok(Flow::Continue);
    };

    let new_name = intent.args[1].as_str();
    match ctx.registry.services.account.rename(profile.id, new_name).await {
        Ok(()) => {
            let mut renamed = (*profile).clone();
            renamed.username = new_name.trim().to_string();
            ctx.sess.write().set_profile(renamed);

            ctx.output
                .line(format!("You shall henceforth be known as {new_name}."));
        }
        Err(DomainError::Validation { message, .. }) => {
            ctx.output.error(format!("Cannot use that name: {message}."));
        }
        Err(e) => {
            tracing::error!(error = %e, "rename failed");
            ctx.output.error("Failed to update name.");
        }
    }

    Ok(Flow::Continue)
}
