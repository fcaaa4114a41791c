/// Content module
///
/// The read-only portfolio data every command handler reads from.

pub mod models;
pub mod store;

pub use models::*;
pub use store::ContentStore;
