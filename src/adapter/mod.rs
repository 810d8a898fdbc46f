//! Adapters implementing and driving the ports.

pub mod inbound;
pub mod outbound;
