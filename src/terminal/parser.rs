// Turns a raw input line into a Command
//
// No quoting, no escaping, no pipes. Whitespace splits tokens and that's it.

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// First token, lowercased
    pub name: String,
    /// Everything after the name, case untouched
    pub args: Vec<String>,
    /// The trimmed input
    pub raw: String,
}

/// Parse a line. Returns None when there's nothing but whitespace.
pub fn parse(input: &str) -> Option<Command> {
    let raw = input.trim();
    let mut tokens = raw.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();

    Some(Command {
        name,
        args,
        raw: raw.to_string(),
    })
}
