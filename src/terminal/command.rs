/// Command registry and dispatcher
///
/// The command set is closed and known up front, so the registry is just an
/// enum. The dispatcher maps a parsed Command onto it and calls the handler.

use crate::content::ContentStore;
use crate::terminal::handlers;
use crate::terminal::line::{CommandResult, OutputLine};
use crate::terminal::parser::Command;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Every built-in command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    Whoami,
    Ls,
    Skills,
    Experience,
    Projects,
    View,
    Social,
    Clear,
}

impl CommandKind {
    pub const ALL: [CommandKind; 9] = [
        CommandKind::Help,
        CommandKind::Whoami,
        CommandKind::Ls,
        CommandKind::Skills,
        CommandKind::Experience,
        CommandKind::Projects,
        CommandKind::View,
        CommandKind::Social,
        CommandKind::Clear,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Help => "help",
            CommandKind::Whoami => "whoami",
            CommandKind::Ls => "ls",
            CommandKind::Skills => "skills",
            CommandKind::Experience => "experience",
            CommandKind::Projects => "projects",
            CommandKind::View => "view",
            CommandKind::Social => "social",
            CommandKind::Clear => "clear",
        }
    }

    /// Exact match on an already lowercased name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ways a single command can fail. None of these end the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing registered under that name
    #[error("{0}: command not found")]
    NotFound(String),

    /// Required argument missing
    #[error("Error: {command} needs {argument}")]
    Usage {
        command: CommandKind,
        argument: String,
        usage: String,
    },

    /// Well-formed id that points at nothing
    #[error("Error: project \"{0}\" not found")]
    ProjectNotFound(String),
}

impl CommandError {
    /// What to try next
    pub fn hint(&self) -> String {
        match self {
            CommandError::NotFound(_) => {
                "Try 'help' to see the available commands.".to_string()
            }
            CommandError::Usage { usage, .. } => format!("Usage: {}", usage),
            CommandError::ProjectNotFound(_) => {
                "Use 'projects' to list the available ids.".to_string()
            }
        }
    }

    /// Error line followed by the hint line
    pub fn into_lines(self) -> Vec<OutputLine> {
        vec![OutputLine::error(self.to_string()), OutputLine::plain(self.hint())]
    }
}

/// Routes commands to their handlers
pub struct Dispatcher {
    content: Arc<ContentStore>,
}

impl Dispatcher {
    pub fn new(content: Arc<ContentStore>) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// Run a command and return whatever its handler produced
    ///
    /// Unknown names come back as a failed result with an error line and a
    /// pointer to `help`. `clear` returns an empty result; the session does
    /// the actual clearing.
    pub fn dispatch(&self, command: &Command) -> CommandResult {
        let Some(kind) = CommandKind::from_name(&command.name) else {
            log::debug!("no handler for '{}'", command.name);
            return CommandResult::failure(
                CommandError::NotFound(command.name.clone()).into_lines(),
            );
        };

        log::debug!("dispatching {} with {} args", kind, command.args.len());

        match self.run(kind, &command.args) {
            Ok(lines) => CommandResult::success(lines),
            Err(e) => {
                log::debug!("{} failed: {}", kind, e);
                CommandResult::failure(e.into_lines())
            }
        }
    }

    fn run(&self, kind: CommandKind, args: &[String]) -> Result<Vec<OutputLine>, CommandError> {
        let content = self.content.as_ref();
        match kind {
            CommandKind::Help => Ok(handlers::help(content)),
            CommandKind::Whoami => Ok(handlers::whoami(content)),
            CommandKind::Ls => Ok(handlers::ls()),
            CommandKind::Skills => Ok(handlers::skills(content)),
            CommandKind::Experience => Ok(handlers::experience(content)),
            CommandKind::Projects => Ok(handlers::projects(content)),
            CommandKind::View => handlers::view(content, args),
            CommandKind::Social => Ok(handlers::social(content)),
            CommandKind::Clear => Ok(Vec::new()),
        }
    }
}
