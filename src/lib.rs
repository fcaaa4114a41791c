/// folio-term library
///
/// A portfolio you browse by typing commands: content store, command
/// interpreter, session state and the hosts that put it on a screen.

pub mod config;
pub mod content;
pub mod error;
pub mod terminal;
pub mod ui;

// Re-exports for convenience
pub use content::ContentStore;
pub use error::{FolioError, Result};
pub use terminal::{Controller, Session};
