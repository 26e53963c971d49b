pub mod components;
pub mod config;
pub mod interop;
pub mod state;
pub mod viewers;

pub use components::*;
pub use config::{initial_state, ui_config, UiConfig};
pub use interop::*;
pub use state::*;
pub use viewers::*;
