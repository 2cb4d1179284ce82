//! # Tradebook Projector
//!
//! "What-if" growth calculations for the dashboard's calculator.
//!
//! Two growth models live here and are intentionally kept apart:
//!
//! - [`Projector`]: a closed-form projection of capital over a daily, weekly, monthly
//!   or yearly horizon (1, 5, 20 or 240 periods).
//! - [`compounding_schedule`]: a day-by-day simulation that rounds each closing
//!   balance to cents before compounding the next day.
//!
//! Both are pure functions of their inputs. Degenerate inputs (zero capital, missing
//! values, a non-positive day count) yield zero or empty results, and every figure
//! stays finite; errors are reserved for out-of-range parameters.

pub mod error;
pub mod projection;
pub mod schedule;

pub use error::ProjectionError;
pub use projection::{HorizonProjection, ProjectionParameters, Projector};
pub use schedule::{BalancePoint, CompoundingSchedule, ScheduleRow, compounding_schedule};
