//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 4xxx: Feria errors
/// - 5xxx: Cita errors
/// - 7xxx: Export errors
/// - 9xxx: System errors
///
/// Unassigned ranges fall back to `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Fair and capacity errors (4xxx)
    Feria,
    /// Appointment errors (5xxx)
    Cita,
    /// CSV export errors (7xxx)
    Export,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            4000..5000 => Self::Feria,
            5000..6000 => Self::Cita,
            7000..8000 => Self::Export,
            9000.. => Self::System,
            _ => Self::General,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Feria => "feria",
            Self::Cita => "cita",
            Self::Export => "export",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(8), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Feria);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Cita);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Export);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::FeriaNotFound.category(), ErrorCategory::Feria);
        assert_eq!(
            ErrorCode::CapacityBelowReserved.category(),
            ErrorCategory::Feria
        );
        assert_eq!(ErrorCode::CitaNotFound.category(), ErrorCategory::Cita);
        assert_eq!(ErrorCode::NoDataToExport.category(), ErrorCategory::Export);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Feria).unwrap();
        assert_eq!(json, "\"feria\"");

        let category: ErrorCategory = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(category, ErrorCategory::System);
    }
}
