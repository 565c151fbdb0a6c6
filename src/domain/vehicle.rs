use super::money::{Cost, Rate};
use crate::error::RentalError;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VehicleCategory {
    Car,
    Bike,
}

impl FromStr for VehicleCategory {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("car") {
            Ok(Self::Car)
        } else if s.eq_ignore_ascii_case("bike") {
            Ok(Self::Bike)
        } else {
            Err(RentalError::InvalidArgument(
                "Invalid vehicle type. Must be 'Car' or 'Bike'.".to_string(),
            ))
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => f.write_str("Car"),
            Self::Bike => f.write_str("Bike"),
        }
    }
}

/// A vehicle that can be bound into a [`Rental`](super::rental::Rental).
///
/// Cars and bikes share a single representation and differ only by their
/// [`VehicleCategory`]. Availability is atomic so the vehicle can be lent by
/// reference to the worker that completes the rental.
#[derive(Debug)]
pub struct Vehicle {
    license_plate: String,
    model: String,
    category: VehicleCategory,
    rate: Rate,
    available: AtomicBool,
}

impl Vehicle {
    pub fn new(
        category: VehicleCategory,
        license_plate: impl Into<String>,
        model: impl Into<String>,
        rate: Rate,
    ) -> Self {
        Self {
            license_plate: license_plate.into(),
            model: model.into(),
            category,
            rate,
            available: AtomicBool::new(true),
        }
    }

    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Release);
    }

    /// Price of renting this vehicle for `days`. Day validation belongs to the rental.
    ///
    /// # Panics
    ///
    /// Panics if the cost overflows `Decimal`; [`Rental::new`](super::rental::Rental::new)
    /// rejects such rentals before pricing them.
    pub fn compute_cost(&self, days: u32) -> Cost {
        match self.category {
            VehicleCategory::Car | VehicleCategory::Bike => self.rate * days,
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (License: {})", self.model, self.license_plate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn civic() -> Vehicle {
        Vehicle::new(
            VehicleCategory::Car,
            "ABC123",
            "Civic",
            Rate::new(dec!(20.0)).unwrap(),
        )
    }

    #[test]
    fn test_category_parsing_ignores_case() {
        assert_eq!("Car".parse::<VehicleCategory>().unwrap(), VehicleCategory::Car);
        assert_eq!("cAR".parse::<VehicleCategory>().unwrap(), VehicleCategory::Car);
        assert_eq!("BIKE".parse::<VehicleCategory>().unwrap(), VehicleCategory::Bike);
    }

    #[test]
    fn test_category_parsing_rejects_unknown() {
        let err = "Truck".parse::<VehicleCategory>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid vehicle type. Must be 'Car' or 'Bike'."
        );
        assert!(" car".parse::<VehicleCategory>().is_err());
        assert!("".parse::<VehicleCategory>().is_err());
    }

    #[test]
    fn test_new_vehicle_is_available() {
        let vehicle = civic();
        assert!(vehicle.is_available());
        assert_eq!(vehicle.license_plate(), "ABC123");
        assert_eq!(vehicle.model(), "Civic");
        assert_eq!(vehicle.category(), VehicleCategory::Car);
    }

    #[test]
    fn test_set_available_is_unconditional() {
        let vehicle = civic();
        vehicle.set_available(false);
        vehicle.set_available(false);
        assert!(!vehicle.is_available());
        vehicle.set_available(true);
        assert!(vehicle.is_available());
    }

    #[test]
    fn test_cost_is_linear_for_every_category() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let cents: i64 = rng.gen_range(1..1_000_000);
            let days: u32 = rng.gen_range(1..10_000);
            let rate = Decimal::new(cents, 2);
            for category in [VehicleCategory::Car, VehicleCategory::Bike] {
                let vehicle = Vehicle::new(category, "P", "M", Rate::new(rate).unwrap());
                assert_eq!(
                    vehicle.compute_cost(days),
                    Cost::new(rate * Decimal::from(days))
                );
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(civic().to_string(), "Civic (License: ABC123)");
    }
}
