//! Macro for implementing Display and FromStr for status enums
//!
//! This macro eliminates boilerplate for status enum conversions by providing
//! a single implementation for both Display and FromStr traits. It handles
//! case-insensitive parsing and consistent string representation.
//!
//! # Example
//!
//! ```rust
//! use portico_domain::impl_portal_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum InvoiceStatus {
//!     Unpaid,
//!     Partial,
//!     Paid,
//! }
//!
//! impl_portal_status_conversions!(InvoiceStatus {
//!     Unpaid => "unpaid",
//!     Partial => "partial",
//!     Paid => "paid",
//! });
//! ```

/// Implements Display and FromStr traits for status enums
///
/// This macro generates:
/// - Display trait: converts enum variants to lowercase strings
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their string
///   representations
///
/// # Features
///
/// - Case-insensitive parsing (e.g., "PAID", "paid", "Paid" all work)
/// - Consistent lowercase string output
/// - Descriptive error messages with enum name
#[macro_export]
macro_rules! impl_portal_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    // Test enum for macro validation, with a hyphenated mapping
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestPhase {
        Submitted,
        PendingPayment,
        InProgress,
        Done,
    }

    impl_portal_status_conversions!(TestPhase {
        Submitted => "submitted",
        PendingPayment => "pending-payment",
        InProgress => "in-progress",
        Done => "done",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestPhase::Submitted.to_string(), "submitted");
        assert_eq!(TestPhase::PendingPayment.to_string(), "pending-payment");
        assert_eq!(TestPhase::InProgress.to_string(), "in-progress");
        assert_eq!(TestPhase::Done.to_string(), "done");
    }

    #[test]
    fn test_fromstr_lowercase() {
        assert_eq!(TestPhase::from_str("submitted").unwrap(), TestPhase::Submitted);
        assert_eq!(TestPhase::from_str("pending-payment").unwrap(), TestPhase::PendingPayment);
        assert_eq!(TestPhase::from_str("in-progress").unwrap(), TestPhase::InProgress);
        assert_eq!(TestPhase::from_str("done").unwrap(), TestPhase::Done);
    }

    #[test]
    fn test_fromstr_uppercase() {
        assert_eq!(TestPhase::from_str("SUBMITTED").unwrap(), TestPhase::Submitted);
        assert_eq!(TestPhase::from_str("PENDING-PAYMENT").unwrap(), TestPhase::PendingPayment);
        assert_eq!(TestPhase::from_str("IN-PROGRESS").unwrap(), TestPhase::InProgress);
        assert_eq!(TestPhase::from_str("DONE").unwrap(), TestPhase::Done);
    }

    #[test]
    fn test_fromstr_mixed_case() {
        assert_eq!(TestPhase::from_str("Submitted").unwrap(), TestPhase::Submitted);
        assert_eq!(TestPhase::from_str("Pending-Payment").unwrap(), TestPhase::PendingPayment);
        assert_eq!(TestPhase::from_str("In-ProGress").unwrap(), TestPhase::InProgress);
        assert_eq!(TestPhase::from_str("DoNe").unwrap(), TestPhase::Done);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestPhase::from_str("archived");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestPhase: archived"));
    }

    #[test]
    fn test_fromstr_empty() {
        let result = TestPhase::from_str("");
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip() {
        let phases = vec![
            TestPhase::Submitted,
            TestPhase::PendingPayment,
            TestPhase::InProgress,
            TestPhase::Done,
        ];

        for phase in phases {
            let string = phase.to_string();
            let parsed = TestPhase::from_str(&string).unwrap();
            assert_eq!(phase, parsed);
        }
    }
}
