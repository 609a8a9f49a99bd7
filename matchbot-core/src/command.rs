//! Command classification: `/name arg1 arg2` → name + args, anything else is plain text.
//!
//! A trailing `@botname` on the command token is stripped (Telegram appends it in group chats).
//! Names are matched lower-cased; unknown names are still parsed as commands so the chain can
//! consume them without replying.

/// A parsed bot command: lower-cased name plus whitespace-split arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Classifies message text. Returns None for plain text (no leading `/`, or `/` followed by
    /// whitespace or nothing).
    pub fn parse(text: &str) -> Option<Command> {
        let rest = text.trim().strip_prefix('/')?;
        let first = rest.split_whitespace().next()?;
        if !rest.starts_with(first) {
            // whitespace between '/' and the first token: not a command
            return None;
        }
        let name = first.split('@').next().unwrap_or(first).to_lowercase();
        if name.is_empty() {
            return None;
        }
        let args = rest
            .split_whitespace()
            .skip(1)
            .map(str::to_string)
            .collect();
        Some(Command { name, args })
    }

    /// Arguments joined by single spaces, as command handlers consume them.
    pub fn args_text(&self) -> String {
        self.args.join(" ")
    }
}
