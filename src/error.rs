use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("Invalid input! Please enter the correct data type.")]
    TypeMismatch { field: &'static str, input: String },
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Rental process was interrupted.")]
    Interrupted { license_plate: String },
    #[error("Rental has already been completed.")]
    AlreadyCompleted,
    #[error("Input ended before all rental details were provided.")]
    InputClosed,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RentalError>;
