//! Individual pane rendering modules

pub mod log;
pub mod stack;
pub mod status;

pub use log::render_log_pane;
pub use stack::{render_stack_pane, StackScrollState};
pub use status::{render_status_bar, StatusRenderData};
