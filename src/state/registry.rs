use crate::config::Config;
use crate::db::Db;
use crate::db::repo::{
    InventoryRepo, InventoryRepository, ProfileRepo, ProfileRepository, StatsRepo, StatsRepository,
};
use crate::services::{AccountService, ChatService, PlayerService, ScriptedGameMaster, SessionResolver};
use crate::store::LocalStore;
use std::sync::Arc;

pub struct Repos {
    pub profile: Arc<dyn ProfileRepo>,
    pub stats: Arc<dyn StatsRepo>,
    pub inventory: Arc<dyn InventoryRepo>,
}

pub struct Services {
    pub account: Arc<AccountService>,
    pub session: Arc<SessionResolver>,
    pub player: Arc<PlayerService>,
    pub chat: Arc<ChatService>,
}

pub struct Registry {
    pub db: Arc<Db>,
    pub repos: Arc<Repos>,
    pub services: Arc<Services>,
    pub config: Arc<Config>,
}

impl Registry {
    pub fn new(db: Arc<Db>, store: Arc<LocalStore>, config: Arc<Config>) -> Self {
        let repos = Arc::new(Repos {
            profile: Arc::new(ProfileRepository::new(db.clone())),
            stats: Arc::new(StatsRepository::new(db.clone())),
            inventory: Arc::new(InventoryRepository::new(db.clone())),
        });

        let player_service = Arc::new(PlayerService::new(
            repos.stats.clone(),
            repos.inventory.clone(),
            store.clone(),
        ));

        let services = Arc::new(Services {
            account: Arc::new(AccountService::new(repos.profile.clone())),
            session: Arc::new(SessionResolver::new(repos.profile.clone())),
            chat: Arc::new(ChatService::new(
                Arc::new(ScriptedGameMaster::new()),
                player_service.clone(),
            )),
            player: player_service,
        });

        Self {
            db,
            repos,
            services,
            config,
        }
    }
}
