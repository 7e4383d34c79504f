//! wsview-core: pure types and logic for the workspace command bridge.
//! Record model, list parsing, shell quoting, path-boundary guard and the
//! external command lines. No async, no process IO.

pub mod command;
pub mod dispatch;
pub mod parse;
pub mod path_guard;
pub mod shell;
pub mod types;

pub use command::{DEFAULT_WORKSPACE_BIN, WorkspaceCommand};
pub use dispatch::Dispatch;
pub use parse::parse_workspace_list;
pub use path_guard::{PathRejection, ensure_within_base};
pub use shell::{escape_single_quotes, quote_single};
pub use types::{ListPhase, WorkspaceRecord, WorkspaceSnapshot};
