use super::customer::Customer;
use super::money::Cost;
use super::vehicle::Vehicle;
use crate::error::RentalError;
use rust_decimal::Decimal;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RentalState {
    Active,
    Completed,
}

/// Binds a [`Vehicle`] to a [`Customer`] for a fixed number of days.
///
/// Construction marks the vehicle unavailable; [`Rental::complete`] hands it back.
/// The rental borrows both parties, which must outlive it.
#[derive(Debug)]
pub struct Rental<'a> {
    vehicle: &'a Vehicle,
    customer: &'a Customer,
    days: u32,
    total_cost: Cost,
    state: RentalState,
}

impl<'a> Rental<'a> {
    /// Starts a rental.
    ///
    /// Fails with [`RentalError::InvalidArgument`] when `days` is not positive, in
    /// which case the vehicle is left untouched.
    pub fn new(
        vehicle: &'a Vehicle,
        customer: &'a Customer,
        days: i32,
    ) -> Result<Self, RentalError> {
        let days = u32::try_from(days)
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| {
                RentalError::InvalidArgument(
                    "Rental days must be greater than zero.".to_string(),
                )
            })?;

        if vehicle
            .rate()
            .value()
            .checked_mul(Decimal::from(days))
            .is_none()
        {
            return Err(RentalError::InvalidArgument(
                "Rental cost exceeds the supported range.".to_string(),
            ));
        }

        // Renting an unavailable vehicle is allowed; only reported.
        if !vehicle.is_available() {
            warn!(
                license_plate = vehicle.license_plate(),
                "renting a vehicle that is already unavailable"
            );
        }

        let total_cost = vehicle.compute_cost(days);
        vehicle.set_available(false);
        debug!(
            license_plate = vehicle.license_plate(),
            customer = customer.name(),
            days,
            %total_cost,
            "rental active"
        );

        Ok(Self {
            vehicle,
            customer,
            days,
            total_cost,
            state: RentalState::Active,
        })
    }

    pub fn vehicle(&self) -> &'a Vehicle {
        self.vehicle
    }

    pub fn customer(&self) -> &'a Customer {
        self.customer
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    pub fn state(&self) -> RentalState {
        self.state
    }

    /// Finishes the rental and makes the vehicle available again.
    ///
    /// A rental completes at most once; later calls fail with
    /// [`RentalError::AlreadyCompleted`] and leave availability alone.
    pub fn complete(&mut self) -> Result<Completion, RentalError> {
        if self.state == RentalState::Completed {
            return Err(RentalError::AlreadyCompleted);
        }
        self.vehicle.set_available(true);
        self.state = RentalState::Completed;
        debug!(license_plate = self.vehicle.license_plate(), "rental completed");

        Ok(Completion {
            customer_name: self.customer.name().to_string(),
            total_cost: self.total_cost,
        })
    }
}

impl fmt::Display for Rental<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer: {}", self.customer.name())?;
        writeln!(f, "Vehicle: {}", self.vehicle.model())?;
        writeln!(f, "Rental Days: {}", self.days)?;
        write!(f, "Total Cost: ${}", self.total_cost)
    }
}

/// Receipt produced when a rental completes.
#[derive(Debug, PartialEq, Clone)]
pub struct Completion {
    pub customer_name: String,
    pub total_cost: Cost,
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rental completed for {}. Total cost: ${}",
            self.customer_name, self.total_cost
        )
    }
}
