//! Swipe-to-dismiss card stacks.
//!
//! [`SwipeController`] holds the interaction logic and talks to the UI tree through the
//! [`SwipeHost`] trait. [`SwipeStack`] wires a controller to egui, backed by a [`MemoryHost`].

pub use error::{Result, SwipeError};
pub use event::{Direction, PointerEvent, PointerInput, PointerPhase};
pub use host::{Display, InlineStyle, ListenerTarget, Position, SwipeHost};
pub use memory::{MemoryHost, NodeId};
pub use settings::{DropCallback, SwipeOptions, SwipeSettings};
pub use stack::SwipeStack;
pub use state::{DragSession, SwipeController, SwipeResponse};

mod error;
mod event;
mod host;
pub mod memory;
mod settings;
mod stack;
mod state;

pub mod utils;
