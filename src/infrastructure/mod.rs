//! Adapters implementing the domain ports.

pub mod timed;
