use crate::commands::{CmdCtx, CommandResult, Flow};
use crate::ansi;
use std::sync::Arc;

pub async fn inventory(ctx: Arc<CmdCtx>) -> CommandResult {
    let profile = ctx.profile();
    let scope = match ctx.registry.services.session.resolve(profile.as_deref()).await {
        Ok(scope) => scope,
        Err(e) => {
            tracing::error!(error = %e, "session resolve failed");
            ctx.output.error("Failed to fetch inventory.");
            return Ok(Flow::Continue);
        }
    };

    let slots = match ctx.registry.services.player.inventory(&scope).await {
        Ok(slots) => slots,
        Err(e) => {
            tracing::error!(error = %e, "inventory fetch failed");
            ctx.output.error("Failed to fetch inventory.");
            return Ok(Flow::Continue);
        }
    };

    ctx.output.line(format!("{}Inventory{}", ansi::BOLD, ansi::RESET));
    ctx.output.line("---------");
    for (slot, item) in slots.iter().enumerate() {
        if item.is_placeholder() {
            ctx.output
                .line(format!("[{}] {}{}{}", slot + 1, ansi::DIM, item.name, ansi::RESET));
        } else {
            ctx.output
                .line(format!("[{}] {} x{}", slot + 1, item.name, item.quantity));
        }
    }

    Ok(Flow::Continue)
}
