//! Client for the remote conversational agent.
//!
//! A single [`AgentClient`] forwards a message (plus optional structured
//! context) to the configured agent endpoint and classifies every failure
//! into an [`AgentError`] kind. Each call is one attempt: no retries, no
//! caching.

pub mod client;
pub mod config;
pub mod error;

pub use client::AgentClient;
pub use config::AgentConfig;
pub use error::AgentError;
