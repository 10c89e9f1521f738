//! Infrastructure layer.
//!
//! Concrete message store backends and the DTOs exchanged over HTTP and
//! WebSocket.

pub mod dto;
pub mod repository;
