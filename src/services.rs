mod account;
mod chat;
mod gm;
mod player;
mod session;

pub use account::AccountService;
pub use chat::ChatService;
pub use gm::{GameMaster, ScriptedGameMaster};
pub use player::{PlayerService, PlayerStorage};
pub use session::{SessionResolver, SessionScope};
