//! Domain primitives shared by every FlowPilot crate.
//!
//! Nothing in here touches the database or the network: error taxonomy,
//! id/timestamp aliases, payload shapes and the pagination rules.

pub mod error;
pub mod pagination;
pub mod status;
pub mod types;
