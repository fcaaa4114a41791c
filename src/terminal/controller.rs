// Presentation controller
//
// Sits between key events and the session. Holds the half-typed input, the
// project overlay and any completion candidates Tab turned up.

use crate::content::{ContentStore, Project};
use crate::terminal::autocomplete::Autocomplete;
use crate::terminal::command::CommandKind;
use crate::terminal::line::Widget;
use crate::terminal::session::{Session, SessionListener};
use std::sync::Arc;

/// Keys the controller understands. Hosts map their own events onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Up,
    Down,
    Tab,
    /// Drop the pending input (Ctrl+C)
    ClearLine,
    /// Same as typing `clear` (Ctrl+L)
    ClearScreen,
    Escape,
    /// Leave (Ctrl+D on an empty prompt)
    Quit,
}

/// What a key press did, so the host knows what to redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed
    Idle,
    /// The input buffer or candidate list changed
    Input,
    /// A command ran
    Submitted { succeeded: bool },
    OverlayOpened,
    OverlayClosed,
    Exit,
}

/// Result of activating a widget line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    OpenUrl(String),
    ShowProject,
}

pub struct Controller {
    session: Session,
    input: String,
    overlay: Option<Project>,
    candidates: Vec<String>,
    project_ids: Autocomplete,
}

impl Controller {
    pub fn new(content: Arc<ContentStore>) -> Self {
        let project_ids = Autocomplete::new(content.project_ids().map(str::to_string));
        Self {
            session: Session::new(content),
            input: String::new(),
            overlay: None,
            candidates: Vec::new(),
            project_ids,
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn SessionListener>) {
        self.session.subscribe(listener);
    }

    pub fn handle_key(&mut self, key: Key) -> Effect {
        // The overlay is modal
        if self.overlay.is_some() {
            return match key {
                Key::Escape | Key::Enter | Key::Char('q') | Key::Quit => self.close_overlay(),
                _ => Effect::Idle,
            };
        }

        if key != Key::Tab {
            self.candidates.clear();
        }

        match key {
            Key::Char(c) => {
                self.input.push(c);
                Effect::Input
            }
            Key::Backspace => {
                if self.input.pop().is_some() {
                    Effect::Input
                } else {
                    Effect::Idle
                }
            }
            Key::Enter => self.submit(),
            Key::Up => match self.session.previous() {
                Some(entry) => {
                    self.input = entry;
                    Effect::Input
                }
                None => Effect::Idle,
            },
            Key::Down => {
                self.input = self.session.next();
                Effect::Input
            }
            Key::Tab => self.complete(),
            Key::ClearLine => {
                self.input.clear();
                Effect::Input
            }
            Key::ClearScreen => {
                self.input = CommandKind::Clear.name().to_string();
                self.submit()
            }
            Key::Escape => Effect::Idle,
            Key::Quit => {
                if self.input.is_empty() {
                    Effect::Exit
                } else {
                    Effect::Idle
                }
            }
        }
    }

    /// Submit a whole line at once, as if it had been typed and Enter pressed
    pub fn submit_line(&mut self, line: &str) -> Effect {
        self.candidates.clear();
        self.input = line.to_string();
        self.submit()
    }

    fn submit(&mut self) -> Effect {
        let input = std::mem::take(&mut self.input);
        let result = self.session.submit(&input);

        let project = result.lines.iter().find_map(|line| match &line.widget {
            Some(Widget::ProjectDetail(project)) => Some(project.clone()),
            _ => None,
        });

        if let Some(project) = project {
            log::debug!("opening overlay for {}", project.id);
            self.overlay = Some(project);
            return Effect::OverlayOpened;
        }

        Effect::Submitted {
            succeeded: result.succeeded,
        }
    }

    // Single match replaces the input, several get stashed for display.
    fn complete(&mut self) -> Effect {
        self.candidates.clear();

        let trimmed = self.input.trim_start();
        let Some((head, rest)) = split_head(trimmed) else {
            return Effect::Idle;
        };

        match rest {
            None => {
                if let Some(name) = self.session.suggestion(head) {
                    self.input = name.to_string();
                    return Effect::Input;
                }
                self.candidates = to_owned(self.session.matches(head));
            }
            Some(arg) if head.eq_ignore_ascii_case(CommandKind::View.name()) => {
                if arg.contains(char::is_whitespace) {
                    return Effect::Idle;
                }
                if let Some(id) = self.project_ids.suggest(arg) {
                    self.input = format!("{} {}", CommandKind::View.name(), id);
                    return Effect::Input;
                }
                self.candidates = to_owned(self.project_ids.matches(arg));
            }
            Some(_) => return Effect::Idle,
        }

        if self.candidates.len() > 1 {
            Effect::Input
        } else {
            self.candidates.clear();
            Effect::Idle
        }
    }

    pub fn close_overlay(&mut self) -> Effect {
        self.overlay = None;
        Effect::OverlayClosed
    }

    /// Act on a widget line in the transcript, like a click would
    pub fn activate(&mut self, index: usize) -> Option<Activation> {
        let line = self.session.transcript().get(index)?;
        match line.widget.as_ref()? {
            Widget::SocialLink(link) => Some(Activation::OpenUrl(link.url.clone())),
            Widget::ProjectDetail(project) => {
                self.overlay = Some(project.clone());
                Some(Activation::ShowProject)
            }
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn overlay(&self) -> Option<&Project> {
        self.overlay.as_ref()
    }

    /// Completion candidates from the last ambiguous Tab
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

// First token and whatever follows it (None when there's no second part yet)
fn split_head(input: &str) -> Option<(&str, Option<&str>)> {
    if input.trim().is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        None => Some((input, None)),
        Some(at) => {
            let rest = input[at..].trim_start();
            if rest.is_empty() {
                Some((&input[..at], None))
            } else {
                Some((&input[..at], Some(rest.trim_end())))
            }
        }
    }
}

fn to_owned(words: Vec<&str>) -> Vec<String> {
    words.into_iter().map(str::to_string).collect()
}
