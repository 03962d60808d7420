//! Generated ephemerides: one row per body per step.

use serde::{Deserialize, Serialize};
use tychos_astro::AstrometricResult;

use crate::request::EphemeridesRequest;

/// What was computed for one body at one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reading {
    Value(AstrometricResult),
    /// The body could not be resolved at this step.
    Gap(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisRow {
    pub date: String,
    pub time: String,
    pub pos: f64,
    pub reading: Reading,
}

impl EphemerisRow {
    pub fn is_gap(&self) -> bool {
        matches!(self.reading, Reading::Gap(_))
    }

    pub fn value(&self) -> Option<&AstrometricResult> {
        match &self.reading {
            Reading::Value(v) => Some(v),
            Reading::Gap(_) => None,
        }
    }
}

/// Chronological rows of a single body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyEphemeris {
    pub name: String,
    pub rows: Vec<EphemerisRow>,
}

/// A completed run, bodies in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemeridesData {
    pub request: EphemeridesRequest,
    pub bodies: Vec<BodyEphemeris>,
}

impl EphemeridesData {
    pub fn rows(&self, body: &str) -> Option<&[EphemerisRow]> {
        self.bodies
            .iter()
            .find(|b| b.name == body)
            .map(|b| b.rows.as_slice())
    }

    pub fn total_rows(&self) -> usize {
        self.bodies.iter().map(|b| b.rows.len()).sum()
    }

    pub fn gap_count(&self) -> usize {
        self.bodies
            .iter()
            .flat_map(|b| &b.rows)
            .filter(|r| r.is_gap())
            .count()
    }
}
