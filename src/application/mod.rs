//! Application layer orchestrating a rental session.
//!
//! `RentalDesk` drives the console conversation and hands the resulting rental
//! to a `RentalWorker`, awaiting it before the session ends.

pub mod desk;
pub mod worker;
