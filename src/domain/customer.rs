use std::fmt;

/// The person renting a vehicle. Both fields are stored verbatim.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Customer {
    name: String,
    driver_license: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, driver_license: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            driver_license: driver_license.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn driver_license(&self) -> &str {
        &self.driver_license
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer: {} (Driver License: {})",
            self.name, self.driver_license
        )
    }
}
