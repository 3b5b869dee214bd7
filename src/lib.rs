pub mod cli;
pub mod config;
pub mod logging;
pub mod telegram;

pub use telegram::{Bot, Error, Result};
