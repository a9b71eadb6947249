pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod system;
pub mod utils;

#[cfg(test)]
mod testing;
