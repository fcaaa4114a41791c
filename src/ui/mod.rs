/// Front-end hosts
///
/// Everything that touches a real terminal lives here. The terminal module
/// never does I/O itself.

pub mod line_mode;
pub mod raw;
pub mod render;
