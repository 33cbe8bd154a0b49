//! Bar module: The message bar service and its host-facing contract.
//!
//! # Architecture
//!
//! ```text
//!   Command / KeyPress          tick(elapsed)
//!          │                         │
//!          ▼                         ▼
//! ┌──────────────────────────────────────────┐
//! │               MessageBar                 │
//! │  BufferStore ◀── Navigator   WaitQueue   │
//! │       │                          │       │
//! │       ▼                          ▼       │
//! │ PersistenceGateway          EventHub ────┼──▶ Receiver<BarEvent>
//! └──────────────────────────────────────────┘
//! ```

#[allow(clippy::module_inception)]
mod bar;
mod command;
mod events;
mod indicator;

pub use bar::MessageBar;
pub use command::{Command, Outcome};
pub use events::{BarEvent, EventHub};
pub use indicator::Indicator;
