//! # State and Message Objects
//! Structs and enums stored by the incentives engine or passed to its collaborators.

pub mod coins;
pub mod gauge;
pub mod lock;
pub mod query_condition;
pub mod validation;

pub use gauge::{Gauge, GaugePhase};
pub use lock::QualifyingLock;
pub use query_condition::{LockQueryType, QueryCondition};
pub use validation::ValidationError;
