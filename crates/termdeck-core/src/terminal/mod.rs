pub mod backends;
pub mod common;
pub mod errors;
pub mod mapping;
pub mod operations;
pub mod registry;
pub mod traits;
pub mod types;

// Re-export commonly used types and functions
pub use errors::TerminalError;
pub use mapping::{map_terminal, resolve_location};
pub use registry::{detect_backend, get_backend};
pub use traits::TerminalBackend;
pub use types::{TerminalHandle, TerminalLocation, TerminalOptions, ThemeColor};
