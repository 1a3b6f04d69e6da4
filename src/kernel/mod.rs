//! Headless application core (state/action/effect).

pub mod action;
pub mod bus;
pub mod chat;
pub mod console;
pub mod effect;
pub mod preview;
pub mod state;
pub mod store;

pub use action::Action;
pub use bus::{kernel_bus, KernelBusReceiver, KernelBusSender, KernelMessage};
pub use chat::{ChatMessage, ChatRole, ChatState};
pub use console::{ConsoleState, LogEntry, LogLevel};
pub use effect::Effect;
pub use preview::build_preview;
pub use state::{AppState, GitStatus};
pub use store::{DispatchResult, Store};
