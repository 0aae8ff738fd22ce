use crate::commands::{CmdCtx, CommandResult, Flow};
use crate::input::parser::{Intent, say_text};
use crate::models::chat::ChatAuthor;
use std::sync::Arc;

pub async fn say(ctx: Arc<CmdCtx>, intent: Intent) -> CommandResult {
    let prompt = say_text(&intent).trim().to_string();
    if prompt.is_empty() {
        return Ok(Flow::Continue);
    }

    let profile = ctx.profile();
    let scope = match ctx.registry.services.session.resolve(profile.as_deref()).await {
        Ok(scope) => scope,
        Err(e) => {
            // The submitted message still lands in the log; only the reply
            // is lost.
            tracing::error!(error = %e, "session resolve failed");
            let mut log = ctx.sess.read().chat_log();
            log.push_player(&prompt);
            if let Some(entry) = log.last() {
                ctx.output.chat_entry(entry);
            }
            ctx.sess.write().set_chat_log(log);
            ctx.output.error("Failed to generate response.");
            return Ok(Flow::Continue);
        }
    };

    let mut log = ctx.sess.read().chat_log();
    let before = log.len();

    let result = ctx
        .registry
        .services
        .chat
        .exchange(&scope, &mut log, &prompt)
        .await;

    // Whatever happened, show the entries this round produced: the player
    // bubble always, the Game Master bubble only when a reply arrived.
    for entry in &log.entries()[before..] {
        ctx.output.chat_entry(entry);
    }

    if let Err(e) = result {
        let message = if log.last().is_some_and(|entry| entry.author == ChatAuthor::GameMaster) {
            "Failed to update stats."
        } else {
            "Failed to generate response."
        };

        tracing::error!(error = %e, "chat exchange failed");
        ctx.output.error(message);
    }

    ctx.sess.write().set_chat_log(log);
    Ok(Flow::Continue)
}
