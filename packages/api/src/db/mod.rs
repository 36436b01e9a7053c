//! # Data service client
//!
//! Server functions reach the managed data service through one shared
//! [`store::Repository`] over a [`store::RestStore`]. It is gated behind
//! `#[cfg(feature = "server")]` so client (WASM) builds never link the HTTP
//! backend.
//!
//! The client is a **lazy, process-wide singleton** backed by a
//! [`tokio::sync::OnceCell`]: the first call to [`get_repository`] reads the
//! configuration and builds the client, and every later caller shares it.

#[cfg(feature = "server")]
mod client;

#[cfg(feature = "server")]
pub use client::{get_repository, Repo};
