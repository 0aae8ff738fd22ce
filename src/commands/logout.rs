use crate::commands::{CmdCtx, CommandResult, Flow};
use std::sync::Arc;

pub async fn logout(ctx: Arc<CmdCtx>) -> CommandResult {
    if !ctx.is_logged_in() {
        ctx.output.system("You are not signed in.");
        return Ok(Flow::Continue);
    }

    ctx.sess.write().logout();
    ctx.output
        .system("Signed out. Progress now stays on this machine only.");
    Ok(Flow::Continue)
}
