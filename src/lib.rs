// Library entry so integration tests and external tools can reference internal
// modules. The binary (`main.rs`) wires the same modules together.
pub mod commands;
pub mod config;
pub mod handler;
pub mod jobs;
pub mod model;
pub mod responses;
pub mod sheets;
pub mod util;

pub use model::AppState;
