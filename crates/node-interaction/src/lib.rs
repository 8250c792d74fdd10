//! This crate implements all interactions with a running hardhat node: a JSON-RPC transport and a
//! client composing the public, test, and wallet capability sets over it.

mod actions;
mod client;
mod error;
mod request_tracing_layer;
mod transport;

#[cfg(test)]
mod mock;

pub use actions::*;
pub use client::*;
pub use error::*;
pub use request_tracing_layer::*;
pub use transport::{HttpTransport, RpcTransport};
