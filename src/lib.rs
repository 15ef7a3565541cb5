//! Counter, text echo and color toggle driven by a single pure reducer.

pub mod cli;
pub mod config;
pub mod logging;
pub mod script;
pub mod ui;
