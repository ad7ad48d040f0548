//! Accept loop and per-connection task spawning

pub mod listener;

pub use listener::Listener;
