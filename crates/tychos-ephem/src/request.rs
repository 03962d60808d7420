//! Generation parameters and their validation into a step plan.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tychos_time::{
    CivilDate, CivilTime, S_DAY, S_HOUR, S_MINUTE, S_MONTH, S_SECOND, S_YEAR, date_time_to_pos,
};

use crate::error::EphemError;

/// Unit of the generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepUnit {
    Seconds,
    Minutes,
    Hours,
    #[default]
    Days,
    Weeks,
    Months,
    Years,
}

impl StepUnit {
    pub const ALL: [StepUnit; 7] = [
        StepUnit::Seconds,
        StepUnit::Minutes,
        StepUnit::Hours,
        StepUnit::Days,
        StepUnit::Weeks,
        StepUnit::Months,
        StepUnit::Years,
    ];

    /// Length of one unit in `pos` units. Months are a twelfth of a year.
    pub fn factor(self) -> f64 {
        match self {
            StepUnit::Seconds => S_SECOND,
            StepUnit::Minutes => S_MINUTE,
            StepUnit::Hours => S_HOUR,
            StepUnit::Days => S_DAY,
            StepUnit::Weeks => 7.0 * S_DAY,
            StepUnit::Months => S_MONTH,
            StepUnit::Years => S_YEAR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepUnit::Seconds => "seconds",
            StepUnit::Minutes => "minutes",
            StepUnit::Hours => "hours",
            StepUnit::Days => "days",
            StepUnit::Weeks => "weeks",
            StepUnit::Months => "months",
            StepUnit::Years => "years",
        }
    }
}

impl fmt::Display for StepUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepUnit {
    type Err = EphemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        StepUnit::ALL
            .into_iter()
            .find(|u| u.as_str() == lower || u.as_str().trim_end_matches('s') == lower)
            .ok_or_else(|| EphemError::UnknownStepUnit(s.to_string()))
    }
}

/// What the user asked for.
///
/// Dates are `YYYY-MM-DD` strings as typed; times are optional `HH:MM:SS`
/// strings and default to midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemeridesRequest {
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    pub step_size: f64,
    #[serde(default)]
    pub step_unit: StepUnit,
    pub bodies: Vec<String>,
}

impl EphemeridesRequest {
    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        step_size: f64,
        step_unit: StepUnit,
        bodies: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            start_time: None,
            end_time: None,
            step_size,
            step_unit,
            bodies: bodies.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_times(mut self, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self.end_time = Some(end_time.into());
        self
    }

    /// Validate and turn the request into a step plan.
    pub fn plan(&self) -> Result<StepPlan, EphemError> {
        if self.bodies.is_empty() {
            return Err(EphemError::NoBodies);
        }
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(EphemError::InvalidStepSize(self.step_size));
        }

        let start_pos = parse_instant(
            &self.start_date,
            self.start_time.as_deref(),
            ["start date", "start time"],
        )?;
        let end_pos =
            parse_instant(&self.end_date, self.end_time.as_deref(), ["end date", "end time"])?;

        let mut increment = self.step_size * self.step_unit.factor();
        if increment == 0.0 {
            return Err(EphemError::InvalidStepSize(self.step_size));
        }
        if end_pos < start_pos {
            increment = -increment;
        }
        // Rounded so that 23.999999 steps count as 24. Counts past `u64::MAX`
        // saturate and are left to the row ceiling.
        let total_steps = ((end_pos - start_pos) / increment).round().max(0.0) as u64;

        Ok(StepPlan {
            start_pos,
            end_pos,
            increment,
            total_steps,
        })
    }
}

fn parse_instant(
    date: &str,
    time: Option<&str>,
    [date_field, time_field]: [&'static str; 2],
) -> Result<f64, EphemError> {
    let date = CivilDate::parse_valid(date).map_err(|source| EphemError::InvalidDate {
        field: date_field,
        source,
    })?;
    let time = match time {
        Some(t) => CivilTime::parse_valid(t).map_err(|source| EphemError::InvalidDate {
            field: time_field,
            source,
        })?,
        None => CivilTime::MIDNIGHT,
    };
    Ok(date_time_to_pos(date, time))
}

/// Validated sweep over `pos`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    pub start_pos: f64,
    pub end_pos: f64,
    /// Signed; negative for a reverse sweep.
    pub increment: f64,
    /// Number of steps; the sweep visits `total_steps + 1` instants.
    pub total_steps: u64,
}

impl StepPlan {
    /// `pos` of step `index`, computed from the start rather than accumulated.
    pub fn pos_at(&self, index: u64) -> f64 {
        self.start_pos + index as f64 * self.increment
    }

    pub fn instants(&self) -> u64 {
        self.total_steps.saturating_add(1)
    }
}
