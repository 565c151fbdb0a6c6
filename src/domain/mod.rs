//! Domain layer: vehicles, customers, rentals and the money types they price with.

pub mod customer;
pub mod money;
pub mod ports;
pub mod rental;
pub mod vehicle;
