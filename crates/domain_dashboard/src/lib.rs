//! Policy Dashboard Domain
//!
//! This crate implements the logic behind the policy dashboard: filtering
//! the policy table and deriving the KPI and chart figures. Everything here
//! is synchronous and free of I/O; the presentation layer owns the state and
//! calls in on every change.
//!
//! # Components
//!
//! - **Records**: `PolicyRecord` and its categorical enums, validated into a
//!   `RecordSet` at ingestion
//! - **Filtering**: `FilterCriteria` (an immutable value) and `FilterEngine`
//! - **Aggregation**: `AggregateCalculator` for status tiles, outstanding
//!   premium and per-product counts
//! - **Display helpers**: KPI tiles, processing timeline, notification feed
//! - **Session**: `DashboardSession`, the state a front end holds
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_dashboard::{DashboardSession, KpiTile, sample};
//!
//! let mut session = DashboardSession::new(sample::sample_record_set());
//! let stats = session.stats();
//! session.select_kpi(KpiTile::Booked);
//! println!("{}", session.summary());
//! ```

pub mod aggregate;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod kpi;
pub mod notifications;
pub mod record;
pub mod record_set;
pub mod sample;
pub mod session;
pub mod tracking;

pub use aggregate::{AggregateCalculator, AggregateResult, CategoryCount, CategoryCounts};
pub use criteria::{parse_choice, FilterCriteria, PremiumRange};
pub use error::DashboardError;
pub use filter::{FilterEngine, Predicate};
pub use kpi::{KpiCard, KpiTile};
pub use notifications::{Notification, NotificationFeed, NotificationKind};
pub use record::{
    LineOfBusiness, PolicyRecord, PolicyRecordBuilder, PolicyStatus, Product, Source,
    TransactionType,
};
pub use record_set::RecordSet;
pub use session::DashboardSession;
pub use tracking::{processing_steps, progress_percent, ProcessingStage, ProcessingStep, StepState};
