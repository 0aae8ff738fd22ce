use crate::error::AppResult;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use rand::seq::IndexedRandom;

/// Boundary to the chat response generator: one free-text prompt in, one
/// free-text reply out. Implementations hold no conversation state.
#[async_trait]
pub trait GameMaster: Send + Sync {
    async fn respond(&self, prompt: &str) -> AppResult<String>;
}

struct ReplyTable {
    /// Keywords that pull a prompt into this table
    triggers: &'static [&'static str],
    replies: &'static [&'static str],
}

static TABLES: Lazy<Vec<ReplyTable>> = Lazy::new(|| {
    vec![
        ReplyTable {
            triggers: &["hello", "hi", "hey", "greet", "well met"],
            replies: &[
                "Well met, traveler. The fire is warm and the night is long.",
                "Ah, a new face. Pull up a stool and tell me what brings you here.",
                "Greetings. The road behind you is closed; only the road ahead matters now.",
            ],
        },
        ReplyTable {
            triggers: &["attack", "fight", "strike", "sword", "battle"],
            replies: &[
                "Steel rings against steel! Your blow lands true, and your foe staggers back.",
                "You lunge forward. The clash echoes through the hall, and the shadows scatter.",
                "A bold strike! Your arm aches, but your enemy is worse for it.",
            ],
        },
        ReplyTable {
            triggers: &["look", "examine", "search", "inspect"],
            replies: &[
                "You peer into the gloom. Dust, old bones, and something glinting just out of reach.",
                "Your torch reveals carvings older than any kingdom you know.",
                "You search carefully. Whoever was here before you left in a hurry.",
            ],
        },
        ReplyTable {
            triggers: &["north", "south", "east", "west", "go", "walk", "travel"],
            replies: &[
                "You set off. The path narrows and the trees lean in to listen.",
                "Mile after mile falls behind you. At dusk you reach a crossroads marked with runes.",
                "The way is rough but passable. Ahead, a faint light flickers.",
            ],
        },
        ReplyTable {
            triggers: &["treasure", "chest", "loot", "gold", "coin"],
            replies: &[
                "The chest creaks open: a handful of coins and a map inked on cracked leather.",
                "Gold glitters in the torchlight. Some of it may even be real.",
                "You pocket what you can carry. The rest you mark on your map for a stronger day.",
            ],
        },
        ReplyTable {
            triggers: &["rest", "sleep", "camp", "fire"],
            replies: &[
                "You make camp beneath the old oak. The night passes without incident, mostly.",
                "Sleep comes fast. In your dreams, the dungeon rearranges itself.",
                "You rest by the embers. Your wounds knit; your resolve returns.",
            ],
        },
    ]
});

static FALLBACK: &[&str] = &[
    "The Game Master strokes his beard. \"Interesting. Tell me more.\"",
    "A roll of unseen dice. \"Fate allows it, for now.\"",
    "\"Hm.\" The Game Master leans forward. \"And what do you do next?\"",
    "The candle gutters. Somewhere below, something answers your words with a growl.",
];

/// The scripted Game Master: keyword-routed canned responses with random
/// phrasing. Stands in for a hosted generator behind the same trait.
#[derive(Default)]
pub struct ScriptedGameMaster;

impl ScriptedGameMaster {
    pub fn new() -> Self {
        Self
    }

    fn pick(&self, prompt: &str) -> String {
        let lowered = prompt.to_lowercase();
        let mut rng = rand::rng();

        for table in TABLES.iter() {
            if table.triggers.iter().any(|t| lowered.contains(t))
                && let Some(reply) = table.replies.choose(&mut rng)
            {
                return (*reply).to_string();
            }
        }

        FALLBACK
            .choose(&mut rng)
            .copied()
            .unwrap_or("The Game Master ponders in silence.")
            .to_string()
    }
}

#[async_trait]
impl GameMaster for ScriptedGameMaster {
    async fn respond(&self, prompt: &str) -> AppResult<String> {
        Ok(self.pick(prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn t_always_replies() {
        let gm = ScriptedGameMaster::new();
        let reply = gm.respond("what is this place?").await.unwrap();
        assert!(!reply.is_empty());
    }

    #[test]
    fn t_keyword_routes_to_table() {
        let gm = ScriptedGameMaster::new();
        let greetings = &TABLES[0];

        for _ in 0..10 {
            let reply = gm.pick("hello there, old man");
            assert!(greetings.replies.contains(&reply.as_str()));
        }
    }

    #[test]
    fn t_unmatched_prompt_uses_fallback() {
        let gm = ScriptedGameMaster::new();
        let reply = gm.pick("zzz qqq xyzzy");
        assert!(FALLBACK.contains(&reply.as_str()));
    }
}
