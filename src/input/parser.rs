//! Command parser for the chat front-end.
//!
//! Anything that is not a known command is a chat message for the Game
//! Master:
//!   "stats"                    -> Verb::Stats
//!   "login nova secret"        -> Verb::Login, args = ["login", "nova", "secret"]
//!   "say where am I?"          -> Verb::Say, text "where am I?"
//!   "draw your sword, knave"   -> Verb::Say (free text falls through)
//!
//! Bare verbs (`stats`, `inventory`, ...) only match a lone word, so a
//! sentence that happens to start with one still reaches the Game Master.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Help,
    Stats,
    Inventory,
    Register,
    Login,
    Logout,
    Name,
    Say,
    Quit,
}

/// Parsed user input. `args` keeps the verb at index 0, like the raw line.
#[derive(Debug, Clone)]
pub struct Intent {
    pub verb: Verb,
    pub args: Vec<String>,
    pub raw: String,
}

pub fn parse_command(raw: &str) -> Intent {
    let trimmed = raw.trim();
    let args: Vec<String> = trimmed.split_whitespace().map(|s| s.to_string()).collect();

    let verb = match args.first().map(|s| s.to_ascii_lowercase()).as_deref() {
        Some("register") | Some("signup") => Verb::Register,
        Some("login") | Some("signin") => Verb::Login,
        Some("name") | Some("rename") => Verb::Name,
        Some("say") => Verb::Say,
        Some("help") | Some("?") if args.len() == 1 => Verb::Help,
        Some("stats") | Some("sheet") if args.len() == 1 => Verb::Stats,
        Some("inventory") | Some("inv") | Some("i") if args.len() == 1 => Verb::Inventory,
        Some("logout") | Some("signout") if args.len() == 1 => Verb::Logout,
        Some("quit") | Some("exit") if args.len() == 1 => Verb::Quit,
        _ => Verb::Say,
    };

    Intent {
        verb,
        args,
        raw: trimmed.to_string(),
    }
}

/// The chat text of a `Say` intent: everything after an explicit `say`,
/// or the whole line for free text.
pub fn say_text(intent: &Intent) -> &str {
    if intent.verb == Verb::Say
        && intent
            .args
            .first()
            .is_some_and(|v| v.eq_ignore_ascii_case("say"))
    {
        intent.raw[intent.args[0].len()..].trim_start()
    } else {
        &intent.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_bare_verbs() {
        assert_eq!(parse_command("stats").verb, Verb::Stats);
        assert_eq!(parse_command("  inventory ").verb, Verb::Inventory);
        assert_eq!(parse_command("inv").verb, Verb::Inventory);
        assert_eq!(parse_command("i").verb, Verb::Inventory);
        assert_eq!(parse_command("help").verb, Verb::Help);
        assert_eq!(parse_command("QUIT").verb, Verb::Quit);
        assert_eq!(parse_command("logout").verb, Verb::Logout);
    }

    #[test]
    fn t_verbs_with_args() {
        let i = parse_command("login nova secret");
        assert_eq!(i.verb, Verb::Login);
        assert_eq!(i.args, vec!["login", "nova", "secret"]);

        assert_eq!(parse_command("register nova secret").verb, Verb::Register);
        assert_eq!(parse_command("name Strider").verb, Verb::Name);
    }

    #[test]
    fn t_sentences_go_to_the_game_master() {
        assert_eq!(parse_command("i attack the goblin").verb, Verb::Say);
        assert_eq!(parse_command("stats are for nerds").verb, Verb::Say);
        assert_eq!(parse_command("open the chest").verb, Verb::Say);
    }

    #[test]
    fn t_say_text_extraction() {
        let explicit = parse_command("say   where am I?");
        assert_eq!(explicit.verb, Verb::Say);
        assert_eq!(say_text(&explicit), "where am I?");

        let free = parse_command("draw your sword, knave");
        assert_eq!(say_text(&free), "draw your sword, knave");

        let empty = parse_command("   ");
        assert_eq!(empty.verb, Verb::Say);
        assert_eq!(say_text(&empty), "");
    }
}
