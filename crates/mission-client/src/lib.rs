//! Typed gateway over the mission board HTTP API.

pub mod client;
pub mod error;

pub use client::{KanbanClient, ListParams};
pub use error::{ClientError, ClientResult};
