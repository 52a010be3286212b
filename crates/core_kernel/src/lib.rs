//! Core Kernel - Foundational types for the policy dashboard
//!
//! This crate provides the value types shared by the dashboard domain:
//! - Money types with precise decimal arithmetic
//! - Calendar date parsing and display
//! - Integer identifiers for records and notifications

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError, Percentage};
pub use temporal::TemporalError;
pub use identifiers::{PolicyRecordId, NotificationId};
pub use error::CoreError;
