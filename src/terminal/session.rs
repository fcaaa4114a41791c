/// Terminal session state
///
/// Owns the transcript, the command history and the command-name completer.
/// Every mutation of the transcript is followed by a notification to the
/// registered listeners, after the lines are in place.

use crate::content::{ContentStore, Profile};
use crate::terminal::autocomplete::Autocomplete;
use crate::terminal::command::{CommandKind, Dispatcher};
use crate::terminal::history::History;
use crate::terminal::line::{CommandResult, OutputLine};
use crate::terminal::parser;
use std::sync::Arc;

/// What happened to the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptChange {
    /// Lines from this index on are new
    Appended { from: usize },
    /// The whole transcript was replaced
    Reset,
}

/// Gets told about every transcript change
pub trait SessionListener {
    fn transcript_changed(&mut self, change: TranscriptChange, transcript: &[OutputLine]);
}

impl<F> SessionListener for F
where
    F: FnMut(TranscriptChange, &[OutputLine]),
{
    fn transcript_changed(&mut self, change: TranscriptChange, transcript: &[OutputLine]) {
        self(change, transcript)
    }
}

// Inner width of the banner frame when the greeting is short
const BANNER_MIN_WIDTH: usize = 58;

/// The greeting shown at startup and after `clear`
pub fn welcome_banner(profile: &Profile) -> Vec<OutputLine> {
    let greeting = format!("Welcome to the portfolio terminal of {}", profile.name);
    let width = BANNER_MIN_WIDTH.max(greeting.chars().count() + 4);
    let rule = "═".repeat(width);
    let empty = format!("║{}║", " ".repeat(width));

    vec![
        OutputLine::success(format!("╔{}╗", rule)),
        OutputLine::success(empty.clone()),
        OutputLine::success(format!("║{:^width$}║", greeting, width = width)),
        OutputLine::success(empty),
        OutputLine::success(format!("╚{}╝", rule)),
        OutputLine::blank(),
        OutputLine::plain("Type \"help\" to see the available commands."),
        OutputLine::blank(),
    ]
}

pub struct Session {
    dispatcher: Dispatcher,
    history: History,
    transcript: Vec<OutputLine>,
    commands: Autocomplete,
    listeners: Vec<Box<dyn SessionListener>>,
}

impl Session {
    pub fn new(content: Arc<ContentStore>) -> Self {
        let commands = Autocomplete::new(content.commands().iter().map(|(name, _)| name.clone()));
        let transcript = welcome_banner(content.profile());

        Self {
            dispatcher: Dispatcher::new(content),
            history: History::new(),
            transcript,
            commands,
            listeners: Vec::new(),
        }
    }

    /// Register a listener. It's immediately told to draw the current transcript.
    pub fn subscribe(&mut self, mut listener: Box<dyn SessionListener>) {
        listener.transcript_changed(TranscriptChange::Reset, &self.transcript);
        self.listeners.push(listener);
    }

    /// Run one line of input
    ///
    /// The line is always echoed. Blank input stops there. Anything else goes
    /// into history, gets dispatched, and its output is appended followed by a
    /// blank separator. `clear` swaps the transcript for the welcome banner.
    pub fn submit(&mut self, input: &str) -> CommandResult {
        let trimmed = input.trim();
        let from = self.transcript.len();
        self.transcript.push(OutputLine::command(format!("$ {}", trimmed)));

        let Some(command) = parser::parse(trimmed) else {
            self.notify(TranscriptChange::Appended { from });
            return CommandResult::empty();
        };

        self.history.push(trimmed);
        let result = self.dispatcher.dispatch(&command);

        if CommandKind::from_name(&command.name) == Some(CommandKind::Clear) {
            self.clear();
            return result;
        }

        self.transcript.extend(result.lines.iter().cloned());
        self.transcript.push(OutputLine::blank());
        self.notify(TranscriptChange::Appended { from });
        result
    }

    /// Replace the transcript with a fresh welcome banner. History stays.
    pub fn clear(&mut self) {
        self.transcript = welcome_banner(self.dispatcher.content().profile());
        self.notify(TranscriptChange::Reset);
    }

    /// Older history entry, None if there's no history
    pub fn previous(&mut self) -> Option<String> {
        self.history.previous().map(str::to_string)
    }

    /// Newer history entry, empty past the newest
    pub fn next(&mut self) -> String {
        self.history.next().to_string()
    }

    pub fn suggestion(&self, partial: &str) -> Option<&str> {
        self.commands.suggest(partial)
    }

    pub fn matches(&self, partial: &str) -> Vec<&str> {
        self.commands.matches(partial)
    }

    pub fn transcript(&self) -> &[OutputLine] {
        &self.transcript
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn content(&self) -> &ContentStore {
        self.dispatcher.content()
    }

    fn notify(&mut self, change: TranscriptChange) {
        for listener in self.listeners.iter_mut() {
            listener.transcript_changed(change, &self.transcript);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::line::LineKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session() -> Session {
        Session::new(Arc::new(ContentStore::bundled().unwrap()))
    }

    fn texts(lines: &[OutputLine]) -> Vec<String> {
        lines.iter().map(|l| l.text.clone()).collect()
    }

    #[test]
    fn test_starts_with_banner() {
        let s = session();
        let banner = welcome_banner(s.content().profile());
        assert_eq!(texts(s.transcript()), texts(&banner));
        assert!(s.transcript()[2].text.contains("Alex Rivera"));
    }

    #[test]
    fn test_banner_frame_is_aligned() {
        let s = session();
        let widths: Vec<usize> = s.transcript()[..5]
            .iter()
            .map(|l| l.text.chars().count())
            .collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_submit_appends_echo_output_and_separator() {
        let mut s = session();
        let before = s.transcript().len();
        let result = s.submit("  ls ");

        let new = &s.transcript()[before..];
        assert_eq!(new.len(), 1 + result.lines.len() + 1);
        assert_eq!(new[0].kind, LineKind::Command);
        assert_eq!(new[0].text, "$ ls");
        assert_eq!(new[1].text, result.lines[0].text);
        assert_eq!(new.last().unwrap().text, "");
        assert_eq!(s.history().entries(), &["ls".to_string()]);
    }

    #[test]
    fn test_blank_submit_only_echoes() {
        let mut s = session();
        let before = s.transcript().len();
        let result = s.submit("   ");

        assert!(result.lines.is_empty());
        assert_eq!(s.transcript().len(), before + 1);
        assert_eq!(s.transcript()[before].text, "$ ");
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_failed_command_keeps_session_usable() {
        let mut s = session();
        let result = s.submit("sudo make me a sandwich");
        assert!(!result.succeeded);
        assert!(s.submit("whoami").succeeded);
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn test_clear_resets_to_banner_and_keeps_history() {
        let mut s = session();
        s.submit("whoami");
        s.submit("skills");
        s.submit("CLEAR");

        let banner = welcome_banner(s.content().profile());
        assert_eq!(texts(s.transcript()), texts(&banner));
        assert_eq!(s.history().entries(), &["whoami", "skills", "CLEAR"].map(String::from));
    }

    #[test]
    fn test_history_navigation() {
        let mut s = session();
        for input in ["a", "b", "c"] {
            s.submit(input);
        }
        assert_eq!(s.previous().as_deref(), Some("c"));
        assert_eq!(s.previous().as_deref(), Some("b"));
        assert_eq!(s.previous().as_deref(), Some("a"));
        assert_eq!(s.previous().as_deref(), Some("a"));
        assert_eq!(s.next(), "b");
    }

    #[test]
    fn test_command_completion() {
        let s = session();
        assert_eq!(s.suggestion("he"), Some("help"));
        assert_eq!(s.suggestion("s"), None);
        assert_eq!(s.matches("s"), vec!["skills", "social"]);
        assert!(s.matches("").is_empty());
    }

    #[test]
    fn test_listeners_see_each_change_after_it_lands() {
        let mut s = session();
        let seen: Rc<RefCell<Vec<(TranscriptChange, usize)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        s.subscribe(Box::new(move |change: TranscriptChange, lines: &[OutputLine]| {
            sink.borrow_mut().push((change, lines.len()));
        }));

        let banner_len = s.transcript().len();
        s.submit("ls");
        let after_ls = s.transcript().len();
        s.submit("clear");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], (TranscriptChange::Reset, banner_len));
        assert_eq!(seen[1], (TranscriptChange::Appended { from: banner_len }, after_ls));
        assert_eq!(seen[2], (TranscriptChange::Reset, banner_len));
    }

    #[test]
    fn test_transcript_preserves_order() {
        let mut s = session();
        let mut expected = texts(s.transcript());
        for input in ["projects", "nope", "view folio-term", "social", "view"] {
            let result = s.submit(input);
            expected.push(format!("$ {}", input));
            expected.extend(result.lines.iter().map(|l| l.text.clone()));
            expected.push(String::new());
        }
        assert_eq!(texts(s.transcript()), expected);
    }
}
