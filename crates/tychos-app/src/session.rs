//! Wiring from configuration to a running simulation, and the operations the
//! command-line front end exposes.

use std::fmt;

use tychos_astro::{AstroError, AstrometricResult};
use tychos_config::Config;
use tychos_ephem::{EphemeridesData, EphemeridesGenerator, EphemeridesRequest, TickStatus};
use tychos_orbit::BodyTable;
use tychos_sim::{SimClock, SimulationContext};
use tychos_time::{CivilDate, CivilTime, pos_to_date_time, pos_to_julian_date, pos_to_julian_day};

use crate::error::AppError;
use crate::frame_loop::FrameLoop;

/// Body table named by the config, or the built-in one.
pub fn load_table(config: &Config) -> Result<BodyTable, AppError> {
    match &config.simulation.bodies_file {
        Some(path) => Ok(BodyTable::load(path)?),
        None => Ok(BodyTable::tychos()),
    }
}

/// Simulation context at the configured start instant.
pub fn build_context(config: &Config) -> Result<SimulationContext, AppError> {
    let table = load_table(config)?;
    let pos = config.simulation.start_pos()?;
    let ctx = SimulationContext::from_table(table, config.simulation.actual_size, pos)?
        .with_clock(SimClock::new(config.simulation.speed));
    tracing::debug!(pos, "Simulation context ready");
    Ok(ctx)
}

pub fn build_generator(config: &Config) -> EphemeridesGenerator {
    EphemeridesGenerator::new(config.ephemerides.batch_size, config.ephemerides.max_rows)
}

/// Calendar readings of one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstantReport {
    pub pos: f64,
    pub date: CivilDate,
    pub time: CivilTime,
    pub julian_day: i64,
    pub julian_date: f64,
}

impl InstantReport {
    pub fn at(pos: f64) -> Self {
        let (date, time) = pos_to_date_time(pos);
        Self {
            pos,
            date,
            time,
            julian_day: pos_to_julian_day(pos),
            julian_date: pos_to_julian_date(pos),
        }
    }
}

impl fmt::Display for InstantReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "date:        {}", self.date)?;
        writeln!(f, "time:        {}", self.time)?;
        writeln!(f, "julian day:  {}", self.julian_day)?;
        writeln!(f, "julian date: {:.6}", self.julian_date)?;
        write!(f, "pos:         {}", self.pos)
    }
}

/// Astrometry of each body at the context's current time.
pub fn positions(
    ctx: &SimulationContext,
    bodies: &[String],
) -> Vec<(String, Result<AstrometricResult, AstroError>)> {
    bodies
        .iter()
        .map(|name| (name.clone(), ctx.astrometry(name).map(|a| a.to_result())))
        .collect()
}

/// Run a request to completion on the frame loop, one batch per frame.
pub fn run_ephemerides(
    ctx: &mut SimulationContext,
    generator: &mut EphemeridesGenerator,
    request: EphemeridesRequest,
    mut on_progress: impl FnMut(u8),
) -> Result<EphemeridesData, AppError> {
    generator.submit(request)?;

    let mut frame_loop = FrameLoop::new();
    loop {
        frame_loop.tick(|dt, _| ctx.advance(dt), |_| {});
        match generator.tick(ctx, &mut on_progress) {
            TickStatus::Running { .. } => {}
            TickStatus::Completed => break,
            TickStatus::Cancelled | TickStatus::Idle => return Err(AppError::Cancelled),
        }
    }
    tracing::debug!(frames = frame_loop.frame_count(), "Ephemerides frames");

    generator.take_generated().ok_or(AppError::Cancelled)
}

#[cfg(test)]
mod tests {
    use tychos_ephem::StepUnit;
    use tychos_orbit::OrbitalBodySetting;

    use super::*;

    #[test]
    fn test_default_context_at_epoch() {
        let ctx = build_context(&Config::default()).unwrap();
        assert_eq!(ctx.pos(), 0.0);
        assert!(!ctx.clock().running);
        assert!(ctx.position_of("Neptune").is_some());
    }

    #[test]
    fn test_bodies_file_replaces_builtin_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bodies.ron");
        let mut table = BodyTable::tychos();
        table.bodies.push(OrbitalBodySetting {
            name: "Eris".to_string(),
            parent: Some("Sun".to_string()),
            orbit_radius: 6_770.0,
            ..Default::default()
        });
        table.save(&path).unwrap();

        let mut config = Config::default();
        config.simulation.bodies_file = Some(path);
        let ctx = build_context(&config).unwrap();
        assert!(ctx.position_of("Eris").is_some());
    }

    #[test]
    fn test_instant_report() {
        let report = InstantReport::at(0.0);
        assert_eq!(report.julian_day, 2_451_717);
        let text = report.to_string();
        assert!(text.contains("date:        2000-06-21"));
        assert!(text.contains("time:        12:00:00"));
        assert!(text.contains("julian date: 2451717.000000"));
    }

    #[test]
    fn test_positions_mark_missing_bodies() {
        let ctx = build_context(&Config::default()).unwrap();
        let rows = positions(&ctx, &["Sun".to_string(), "Vulcan".to_string()]);
        assert!(rows[0].1.is_ok());
        assert!(matches!(rows[1].1, Err(AstroError::MissingBody(_))));
    }

    #[test]
    fn test_run_ephemerides_restores_live_time() {
        let mut ctx = build_context(&Config::default()).unwrap();
        let mut generator = EphemeridesGenerator::new(4, 1_000);
        let request =
            EphemeridesRequest::new("2024-01-01", "2024-01-25", 1.0, StepUnit::Days, ["Venus"]);

        let mut last = 0;
        let data = run_ephemerides(&mut ctx, &mut generator, request, |p| last = p).unwrap();
        assert_eq!(data.total_rows(), 25);
        assert_eq!(last, 100);
        assert_eq!(ctx.pos(), 0.0);
    }
}
