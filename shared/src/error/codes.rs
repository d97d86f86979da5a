//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Feria errors
//! - 5xxx: Cita errors
//! - 7xxx: Export errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,

    // ==================== 4xxx: Feria ====================
    /// Fair not found
    FeriaNotFound = 4001,
    /// Fair has no seats left or is not open
    FeriaAgotada = 4002,
    /// New total capacity is below the seats already reserved
    CapacityBelowReserved = 4003,
    /// Total capacity is negative
    NegativeCapacity = 4004,

    // ==================== 5xxx: Cita ====================
    /// Appointment not found
    CitaNotFound = 5001,

    // ==================== 7xxx: Export ====================
    /// Nothing to export
    NoDataToExport = 7001,
    /// Unknown collection name
    UnknownCollection = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Disk full
    StorageFull = 9401,
    /// Store file damaged
    StorageCorrupted = 9402,
    /// Store temporarily unavailable
    SystemBusy = 9403,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",

            // Feria
            ErrorCode::FeriaNotFound => "Fair not found",
            ErrorCode::FeriaAgotada => "Fair is not accepting bookings",
            ErrorCode::CapacityBelowReserved => "Capacity is below reserved seats",
            ErrorCode::NegativeCapacity => "Capacity cannot be negative",

            // Cita
            ErrorCode::CitaNotFound => "Appointment not found",

            // Export
            ErrorCode::NoDataToExport => "No data available to export",
            ErrorCode::UnknownCollection => "Unknown collection",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StorageFull => "Storage is full",
            ErrorCode::StorageCorrupted => "Storage is corrupted",
            ErrorCode::SystemBusy => "System is busy, try again",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),

            // Feria
            4001 => Ok(ErrorCode::FeriaNotFound),
            4002 => Ok(ErrorCode::FeriaAgotada),
            4003 => Ok(ErrorCode::CapacityBelowReserved),
            4004 => Ok(ErrorCode::NegativeCapacity),

            // Cita
            5001 => Ok(ErrorCode::CitaNotFound),

            // Export
            7001 => Ok(ErrorCode::NoDataToExport),
            7002 => Ok(ErrorCode::UnknownCollection),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9401 => Ok(ErrorCode::StorageFull),
            9402 => Ok(ErrorCode::StorageCorrupted),
            9403 => Ok(ErrorCode::SystemBusy),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);

        assert_eq!(ErrorCode::FeriaNotFound.code(), 4001);
        assert_eq!(ErrorCode::FeriaAgotada.code(), 4002);
        assert_eq!(ErrorCode::CapacityBelowReserved.code(), 4003);
        assert_eq!(ErrorCode::NegativeCapacity.code(), 4004);

        assert_eq!(ErrorCode::CitaNotFound.code(), 5001);
        assert_eq!(ErrorCode::NoDataToExport.code(), 7001);

        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::StorageFull.code(), 9401);
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(1001), Err(InvalidErrorCode(1001)));
        assert_eq!(
            format!("{}", InvalidErrorCode(999)),
            "invalid error code: 999"
        );
    }

    #[test]
    fn test_retired_codes_rejected() {
        for code in [1u16, 4, 5, 6, 7, 8, 6001, 9002, 9003] {
            assert_eq!(ErrorCode::try_from(code), Err(InvalidErrorCode(code)));
        }
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::CapacityBelowReserved).unwrap();
        assert_eq!(json, "4003");

        let code: ErrorCode = serde_json::from_str("5001").unwrap();
        assert_eq!(code, ErrorCode::CitaNotFound);

        assert!(serde_json::from_str::<ErrorCode>("4999").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::FeriaNotFound,
            ErrorCode::CitaNotFound,
            ErrorCode::UnknownCollection,
            ErrorCode::SystemBusy,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }
}
