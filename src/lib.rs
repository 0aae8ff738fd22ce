pub mod ansi;
pub mod banner;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod services;
pub mod state;
pub mod store;

// Convenient re-exports (so call sites can do `wanderer::Registry`, etc.)
pub use commands::process_command;
pub use state::{
    registry::Registry,
    session::{ConnState, Session},
};
