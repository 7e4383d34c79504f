//! wsview-exec: IO boundary to the external `workspace` CLI.
//! Subprocess execution behind a mock-injectable runner trait, plus the
//! captured queries (`--json`, `--get-base-dir`). No business logic.

pub mod error;
pub mod executor;
pub mod query;

pub use error::ExecError;
pub use executor::{WorkspaceCommandRunner, WorkspaceExecutor};
pub use query::{get_base_dir, list_workspaces_raw};
