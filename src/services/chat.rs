use crate::error::AppResult;
use crate::models::chat::ChatLog;
use crate::models::stats::PlayerStats;
use crate::services::gm::GameMaster;
use crate::services::player::PlayerService;
use crate::services::session::SessionScope;
use std::sync::Arc;

/// Experience gained per completed exchange.
const EXPERIENCE_PER_EXCHANGE: u32 = 10;

/// One submit/response round with the Game Master.
pub struct ChatService {
    gm: Arc<dyn GameMaster>,
    player: Arc<PlayerService>,
}

impl ChatService {
    pub fn new(gm: Arc<dyn GameMaster>, player: Arc<PlayerService>) -> Self {
        Self { gm, player }
    }

    /// Submit one prompt. The player's entry lands in the log immediately;
    /// the Game Master entry is appended only when a reply arrives. A
    /// completed exchange awards experience and persists the new stats to
    /// the scope's storage target.
    pub async fn exchange(
        &self,
        scope: &SessionScope,
        log: &mut ChatLog,
        prompt: &str,
    ) -> AppResult<PlayerStats> {
        log.push_player(prompt);

        let reply = self.gm.respond(prompt).await?;
        log.push_game_master(reply);

        let stats = self.player.stats(scope).await?;
        let updated = stats.gained_experience(EXPERIENCE_PER_EXCHANGE);
        self.player.update_stats(scope, &updated).await?;

        Ok(updated)
    }
}
