// Command history with an Up/Down cursor
//
// Up stops at the oldest entry and keeps returning it. Down walks forward and
// drops back to an empty prompt past the newest entry. The asymmetry is
// intentional, it's how the prompt is expected to feel.

/// Where the user is while browsing history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    NotBrowsing,
    At(usize),
}

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: Cursor,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line. Blank lines are ignored.
    pub fn push(&mut self, entry: &str) {
        if entry.trim().is_empty() {
            return;
        }
        self.entries.push(entry.to_string());
        self.cursor = Cursor::NotBrowsing;
    }

    /// Step back. None only when there is no history at all.
    pub fn previous(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let index = match self.cursor {
            Cursor::NotBrowsing => last,
            Cursor::At(i) => i.saturating_sub(1),
        };
        self.cursor = Cursor::At(index);
        Some(&self.entries[index])
    }

    /// Step forward. Empty string means "back at a fresh prompt".
    pub fn next(&mut self) -> &str {
        match self.cursor {
            Cursor::NotBrowsing => "",
            Cursor::At(i) if i + 1 < self.entries.len() => {
                self.cursor = Cursor::At(i + 1);
                &self.entries[i + 1]
            }
            Cursor::At(_) => {
                self.cursor = Cursor::NotBrowsing;
                ""
            }
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
