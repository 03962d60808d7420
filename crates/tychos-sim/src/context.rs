//! The single owner of "now" and of the evaluated body model.

use glam::{DQuat, DVec3};
use tychos_astro::{AstroError, Astrometry, astrometry_of};
use tychos_orbit::{BodyTable, OrbitError, OrbitModel, OrbitalBodySetting, SceneLookup};
use tychos_time::{CivilDate, CivilTime, pos_to_date_time, pos_to_julian_date, pos_to_julian_day};

use crate::clock::SimClock;
use crate::{DEFAULT_OBSERVER, DEFAULT_SUN};

/// Saved simulation time, restored with [`SimulationContext::restore`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosSnapshot {
    pos: f64,
}

impl PosSnapshot {
    pub fn pos(&self) -> f64 {
        self.pos
    }
}

/// Live simulation state shared by the clock, the viewers and the
/// ephemerides generator.
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pos: f64,
    model: OrbitModel,
    clock: SimClock,
    observer: String,
    sun: String,
}

impl SimulationContext {
    /// Wrap an evaluated model and move it to `pos`.
    pub fn new(model: OrbitModel, pos: f64) -> Self {
        let mut ctx = Self {
            pos,
            model,
            clock: SimClock::default(),
            observer: DEFAULT_OBSERVER.to_string(),
            sun: DEFAULT_SUN.to_string(),
        };
        ctx.model.evaluate(pos);
        ctx
    }

    /// Build a context from a body table.
    pub fn from_table(table: BodyTable, actual_size: bool, pos: f64) -> Result<Self, OrbitError> {
        Ok(Self::new(OrbitModel::new(table, actual_size)?, pos))
    }

    pub fn with_clock(mut self, clock: SimClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn pos(&self) -> f64 {
        self.pos
    }

    /// Move the simulation to `pos` and re-evaluate every body.
    pub fn set_pos(&mut self, pos: f64) {
        self.pos = pos;
        self.model.evaluate(pos);
    }

    /// Advance by `dt_seconds` of real time according to the clock.
    pub fn advance(&mut self, dt_seconds: f64) {
        if self.clock.running {
            let pos = self.clock.advance(self.pos, dt_seconds);
            self.set_pos(pos);
        }
    }

    pub fn snapshot(&self) -> PosSnapshot {
        PosSnapshot { pos: self.pos }
    }

    /// Return to a saved time. Body positions are recomputed from the saved
    /// `pos`, so they match the pre-snapshot state exactly.
    pub fn restore(&mut self, snapshot: PosSnapshot) {
        if self.pos.to_bits() != snapshot.pos.to_bits() {
            log::debug!("Restoring pos {} (was {})", snapshot.pos, self.pos);
        }
        self.set_pos(snapshot.pos);
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut SimClock {
        &mut self.clock
    }

    pub fn model(&self) -> &OrbitModel {
        &self.model
    }

    pub fn actual_size(&self) -> bool {
        self.model.actual_size()
    }

    pub fn set_actual_size(&mut self, actual_size: bool) {
        self.model.set_actual_size(actual_size);
    }

    /// Edit one body's settings and re-evaluate at the current time.
    pub fn update_setting(
        &mut self,
        name: &str,
        edit: impl FnOnce(&mut OrbitalBodySetting),
    ) -> Result<(), OrbitError> {
        self.model.update_setting(name, edit)
    }

    pub fn observer(&self) -> &str {
        &self.observer
    }

    pub fn set_observer(&mut self, observer: impl Into<String>) {
        self.observer = observer.into();
    }

    pub fn sun(&self) -> &str {
        &self.sun
    }

    pub fn position_of(&self, name: &str) -> Option<DVec3> {
        self.model.world_position(name).ok()
    }

    /// Equatorial frame of the observer.
    pub fn earth_frame(&self) -> Option<DQuat> {
        self.model.axis_frame(&self.observer).ok()
    }

    pub fn scale_of(&self, name: &str) -> f64 {
        self.model.distance_scale_of(name)
    }

    /// Astrometry of `target` at the current time.
    pub fn astrometry(&self, target: &str) -> Result<Astrometry, AstroError> {
        astrometry_of(&self.model, &self.observer, &self.sun, target)
    }

    pub fn date_time(&self) -> (CivilDate, CivilTime) {
        pos_to_date_time(self.pos)
    }

    pub fn julian_day(&self) -> i64 {
        pos_to_julian_day(self.pos)
    }

    pub fn julian_date(&self) -> f64 {
        pos_to_julian_date(self.pos)
    }
}

impl SceneLookup for SimulationContext {
    fn position_of(&self, name: &str) -> Option<DVec3> {
        SimulationContext::position_of(self, name)
    }

    fn axis_frame_of(&self, name: &str) -> Option<DQuat> {
        self.model.axis_frame(name).ok()
    }

    fn distance_scale_of(&self, name: &str) -> f64 {
        self.scale_of(name)
    }
}
