/// Terminal module
///
/// The command interpreter and session state machine: parsing, dispatch,
/// handlers, history, completion and the controller that drives them.

pub mod autocomplete;
pub mod command;
pub mod controller;
pub mod handlers;
pub mod history;
pub mod line;
pub mod parser;
pub mod session;

pub use autocomplete::Autocomplete;
pub use command::{CommandError, CommandKind, Dispatcher};
pub use controller::{Activation, Controller, Effect, Key};
pub use history::{Cursor, History};
pub use line::{CommandResult, LineKind, OutputLine, Widget};
pub use parser::{parse, Command};
pub use session::{welcome_banner, Session, SessionListener, TranscriptChange};
