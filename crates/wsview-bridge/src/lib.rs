//! wsview-bridge: the UI-agnostic workspace command bridge.
//!
//! Turns user intent (list, open, warm, doctor, delete, refresh) into
//! invocations of the external `workspace` tool and hands interactive
//! commands to a host terminal. Host UIs plug in through [`HostSurface`]
//! and observe list changes through [`RefreshSignal`].

pub mod bridge;
pub mod error;
pub mod host;
pub mod refresh;
pub mod view;

pub use bridge::{BridgeConfig, DEFAULT_REFRESH_DELAY, WorkspaceBridge};
pub use error::{BridgeError, HostError};
pub use host::{HostSurface, Notice, NoticeLevel};
pub use refresh::RefreshSignal;
pub use view::WorkspaceView;
