//! Application state module

mod app_state;
mod forms;
mod result_state;

pub use app_state::*;
pub use forms::*;
pub use result_state::*;
