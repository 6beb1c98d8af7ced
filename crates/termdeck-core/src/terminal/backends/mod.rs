//! Terminal backend implementations.

mod dry_run;
mod tmux;

pub use dry_run::DryRunBackend;
pub use tmux::TmuxBackend;
