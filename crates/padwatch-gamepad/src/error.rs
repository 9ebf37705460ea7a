use thiserror::Error;

use crate::types::DeviceIndex;

/// Error type for driver and device operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to initialize the backend (SDL2 or subsystems).
    #[error("Backend init failed: {0}")]
    BackendInit(String),
    /// No device is present at the requested index.
    #[error("Device not found: {0}")]
    DeviceNotFound(DeviceIndex),
    /// A device is present but the driver could not open it.
    #[error("Device init failed: {0}")]
    DeviceInit(String),
    /// Monitor configuration was rejected.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenient result alias for driver operations.
pub type Result<T> = std::result::Result<T, Error>;
