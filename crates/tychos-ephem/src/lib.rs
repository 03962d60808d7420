//! Ephemerides: astrometric time series over a date range.
//!
//! An [`EphemeridesRequest`] is validated into a [`StepPlan`] and run by the
//! [`EphemeridesGenerator`] one batch per host tick against a
//! [`tychos_sim::SimulationContext`], whose `pos` is restored after every
//! batch. Finished runs export as a fixed-width text report or JSON.

mod data;
mod error;
mod export;
mod generator;
mod request;

pub use data::{BodyEphemeris, EphemeridesData, EphemerisRow, Reading};
pub use error::EphemError;
pub use export::{ExportFormat, export_file_name, write_export};
pub use generator::{
    CancelToken, DEFAULT_BATCH_SIZE, DEFAULT_MAX_ROWS, EphemeridesGenerator, TickStatus,
};
pub use request::{EphemeridesRequest, StepPlan, StepUnit};
