use crate::commands::{CmdCtx, CommandResult, Flow};
use crate::ansi;
use std::sync::Arc;

pub async fn stats(ctx: Arc<CmdCtx>) -> CommandResult {
    let profile = ctx.profile();
    let scope = match ctx.registry.services.session.resolve(profile.as_deref()).await {
        Ok(scope) => scope,
        Err(e) => {
            tracing::error!(error = %e, "session resolve failed");
            ctx.output.error("Failed to fetch stats.");
            return Ok(Flow::Continue);
        }
    };

    let stats = match ctx.registry.services.player.stats(&scope).await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!(error = %e, "stats fetch failed");
            ctx.output.error("Failed to fetch stats.");
            return Ok(Flow::Continue);
        }
    };

    ctx.output.line(format!(
        r#"{bold}Stats{reset}
-----
Level:    {fg_red}{level}{reset}
Health:   {fg_green}{health}{reset}
XP:       {fg_blue}{xp}/{xp_next}{reset}
Strength: {fg_yellow}{strength}{reset}"#,
        bold = ansi::BOLD,
        reset = ansi::RESET,
        fg_red = ansi::FG_RED,
        fg_green = ansi::FG_GREEN,
        fg_blue = ansi::FG_BLUE,
        fg_yellow = ansi::FG_YELLOW,
        level = stats.level,
        health = stats.health,
        xp = stats.experience,
        xp_next = stats.xp_for_next_level(),
        strength = stats.strength,
    ));

    Ok(Flow::Continue)
}
