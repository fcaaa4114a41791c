/// Prefix completion over a fixed list of words
///
/// Used for command names (built from the help table) and, by the controller,
/// for project ids after `view`.

#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    words: Vec<String>,
}

impl Autocomplete {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Every word starting with `partial`, case-insensitive, in list order
    pub fn matches(&self, partial: &str) -> Vec<&str> {
        if partial.is_empty() {
            return Vec::new();
        }
        let partial = partial.to_lowercase();
        self.words
            .iter()
            .filter(|w| w.to_lowercase().starts_with(&partial))
            .map(String::as_str)
            .collect()
    }

    /// The match, if there is exactly one
    pub fn suggest(&self, partial: &str) -> Option<&str> {
        match self.matches(partial).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}
