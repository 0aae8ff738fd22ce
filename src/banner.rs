pub const BANNER: &str = r#"__        __              _
\ \      / /_ _ _ __   __| | ___ _ __ ___ _ __
 \ \ /\ / / _` | '_ \ / _` |/ _ \ '__/ _ \ '__|
  \ V  V / (_| | | | | (_| |  __/ | |  __/ |
   \_/\_/ \__,_|_| |_|\__,_|\___|_|  \___|_|
"#;

pub const ENTRY: &str = r#"
Hello, wanderer
A fireside chat with the Game Master
------------------------------------------------
• Talk to the Game Master: just type and press enter
• Check your character: `stats`, `inventory`
• Keep progress across visits: `register <name> <password>`
• Returning? `login <name> <password>`
------------------------------------------------
Type `help` for commands | `quit` to exit
------------------------------------------------
"#;
