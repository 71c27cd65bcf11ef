//! nice-axis: human-friendly axis ticks for charting surfaces.
//!
//! The crate turns a raw data range into a padded range, searches a family
//! of round "nice" intervals for the tick set closest to a target count, and
//! formats tick values into aligned labels. Everything is a pure function of
//! its inputs; plotting surfaces plug in through [`api::AxisSurface`].

pub mod api;
pub mod core;
pub mod error;
pub mod format;
pub mod telemetry;

pub use api::{Axis, AxisSurface, NiceTicksConfig, ValueAxisConfig, make_ticks_nicer};
pub use crate::core::{TickSelection, TickSelector, TickStrategy, select_ticks};
pub use error::{AxisError, AxisResult};
pub use format::{NumberDisplayMode, NumberFormat, format_values};
