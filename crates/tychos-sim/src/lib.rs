//! Live simulation state: the current time, the evaluated body model and the
//! clock that advances it.
//!
//! A single [`SimulationContext`] is the source of truth for "now". Anything
//! that moves the model to another time (the ephemerides generator, for one)
//! takes a [`PosSnapshot`] first and restores it afterwards.

mod clock;
mod context;

pub use clock::SimClock;
pub use context::{PosSnapshot, SimulationContext};

/// Body the astrometry is observed from.
pub const DEFAULT_OBSERVER: &str = "Earth";

/// Body used for solar elongation.
pub const DEFAULT_SUN: &str = "Sun";
