//! Order status and type codes
//!
//! Both enums are persisted as small integers. Every read decodes the column
//! through `from_code`, so a row carrying an unknown code surfaces as
//! `DomainError::InvalidArgument` instead of a silently wrong variant.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Complete,
    Doing,
    Canceled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Complete,
        OrderStatus::Doing,
        OrderStatus::Canceled,
    ];

    pub fn code(self) -> i32 {
        match self {
            OrderStatus::Complete => 1,
            OrderStatus::Doing => 2,
            OrderStatus::Canceled => 3,
        }
    }

    pub fn from_code(code: i32) -> Result<Self, DomainError> {
        if code <= 0 {
            return Err(DomainError::InvalidArgument(format!(
                "Invalid status code [{}], status must be greater than 0",
                code
            )));
        }

        Self::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or_else(|| {
                DomainError::InvalidArgument(format!(
                    "Invalid status code [{}], status not found",
                    code
                ))
            })
    }

    /// COMPLETE and CANCELED orders accept no further work.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Complete | OrderStatus::Canceled)
    }
}

impl TryFrom<i32> for OrderStatus {
    type Error = DomainError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Complete => "COMPLETE",
            OrderStatus::Doing => "DOING",
            OrderStatus::Canceled => "CANCELED",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Table,
    Desk,
    Delivery,
}

impl OrderType {
    pub const ALL: [OrderType; 3] = [OrderType::Table, OrderType::Desk, OrderType::Delivery];

    pub fn code(self) -> i32 {
        match self {
            OrderType::Table => 1,
            OrderType::Desk => 2,
            OrderType::Delivery => 3,
        }
    }

    pub fn from_code(code: i32) -> Result<Self, DomainError> {
        if code <= 0 {
            return Err(DomainError::InvalidArgument(format!(
                "Invalid order type code [{}], type must be greater than 0",
                code
            )));
        }

        Self::ALL
            .into_iter()
            .find(|order_type| order_type.code() == code)
            .ok_or_else(|| {
                DomainError::InvalidArgument(format!(
                    "Invalid order type code [{}], type not found",
                    code
                ))
            })
    }
}

impl TryFrom<i32> for OrderType {
    type Error = DomainError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderType::Table => "TABLE",
            OrderType::Desk => "DESK",
            OrderType::Delivery => "DELIVERY",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_round_trip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_code(status.code()), Ok(status));
            assert_eq!(OrderStatus::try_from(status.code()), Ok(status));
        }
    }

    #[test]
    fn test_type_codes_round_trip() {
        for order_type in OrderType::ALL {
            assert_eq!(OrderType::from_code(order_type.code()), Ok(order_type));
        }
    }

    #[test]
    fn test_codes_are_distinct() {
        let mut codes: Vec<i32> = OrderStatus::ALL.iter().map(|s| s.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), OrderStatus::ALL.len());

        let mut codes: Vec<i32> = OrderType::ALL.iter().map(|t| t.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), OrderType::ALL.len());
    }

    #[test]
    fn test_non_positive_codes_rejected() {
        for code in [0, -1, i32::MIN] {
            assert!(matches!(
                OrderStatus::from_code(code),
                Err(DomainError::InvalidArgument(_))
            ));
            assert!(matches!(
                OrderType::from_code(code),
                Err(DomainError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_unknown_positive_codes_rejected() {
        assert!(matches!(
            OrderStatus::from_code(999),
            Err(DomainError::InvalidArgument(msg)) if msg.contains("not found")
        ));
        assert!(matches!(
            OrderType::from_code(4),
            Err(DomainError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Complete.is_terminal());
        assert!(OrderStatus::Canceled.is_terminal());
        assert!(!OrderStatus::Doing.is_terminal());
    }

    #[test]
    fn test_serde_uses_upper_case_names() {
        let json = serde_json::to_string(&OrderType::Delivery).unwrap();
        assert_eq!(json, "\"DELIVERY\"");
        let status: OrderStatus = serde_json::from_str("\"CANCELED\"").unwrap();
        assert_eq!(status, OrderStatus::Canceled);
        assert_eq!(OrderStatus::Doing.to_string(), "DOING");
    }
}
