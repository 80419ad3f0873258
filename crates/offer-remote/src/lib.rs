//! Client for the external document generation backend

mod client;
mod payload;

pub use client::RemoteClient;
pub use payload::GenerateRequest;
