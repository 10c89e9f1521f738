//! HTTP / WebSocket UI layer.

mod conversation;
pub mod error;
pub mod event;
mod handler;
mod router;
mod runner;
mod signal;
pub mod state;
pub mod view;

pub use router::build_router;
pub use runner::{open_store, run, serve};
