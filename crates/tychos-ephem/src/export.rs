//! Text and JSON renderings of a finished run.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::data::{EphemeridesData, Reading};
use crate::error::EphemError;

/// Output format of [`write_export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

/// `Ephemerides_<start>_to_<end>.txt`
pub fn export_file_name(start_date: &str, end_date: &str) -> String {
    export_file_name_as(start_date, end_date, ExportFormat::Text)
}

fn export_file_name_as(start_date: &str, end_date: &str, format: ExportFormat) -> String {
    format!(
        "Ephemerides_{start_date}_to_{end_date}.{}",
        format.extension()
    )
}

impl EphemeridesData {
    /// Fixed-width report grouped by body.
    pub fn to_text_report(&self) -> String {
        let req = &self.request;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Ephemerides {} to {}, step {} {}",
            req.start_date, req.end_date, req.step_size, req.step_unit
        );

        for body in &self.bodies {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", body.name);
            let _ = writeln!(
                out,
                "{:<12}{:<10}{:<12}{:<13}{:<16}{}",
                "Date", "Time", "RA", "Dec", "Distance", "Elongation"
            );
            for row in &body.rows {
                match &row.reading {
                    Reading::Value(v) => {
                        let _ = writeln!(
                            out,
                            "{:<12}{:<10}{:<12}{:<13}{:<16}{}",
                            row.date, row.time, v.ra, v.dec, v.dist, v.elongation
                        );
                    }
                    Reading::Gap(reason) => {
                        let _ = writeln!(
                            out,
                            "{:<12}{:<10}not available ({reason})",
                            row.date, row.time
                        );
                    }
                }
            }
        }
        out
    }

    pub fn to_json(&self) -> Result<String, EphemError> {
        serde_json::to_string_pretty(self).map_err(EphemError::SerializeError)
    }

    pub fn file_name(&self, format: ExportFormat) -> String {
        export_file_name_as(&self.request.start_date, &self.request.end_date, format)
    }
}

/// Write `data` into `dir` under its export file name and return the path.
pub fn write_export(
    dir: &Path,
    data: &EphemeridesData,
    format: ExportFormat,
) -> Result<PathBuf, EphemError> {
    std::fs::create_dir_all(dir).map_err(EphemError::WriteError)?;
    let contents = match format {
        ExportFormat::Text => data.to_text_report(),
        ExportFormat::Json => data.to_json()?,
    };
    let path = dir.join(data.file_name(format));
    std::fs::write(&path, contents).map_err(EphemError::WriteError)?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use tychos_astro::AstrometricResult;

    use super::*;
    use crate::data::{BodyEphemeris, EphemerisRow};
    use crate::request::{EphemeridesRequest, StepUnit};

    fn data() -> EphemeridesData {
        let value = AstrometricResult {
            ra: "06h00m00s".to_string(),
            dec: "+23°26'21\"".to_string(),
            dist: "1.02 AU".to_string(),
            elongation: "-".to_string(),
        };
        EphemeridesData {
            request: EphemeridesRequest::new("2024-01-01", "2024-01-02", 1.0, StepUnit::Days, ["Sun", "Vulcan"]),
            bodies: vec![
                BodyEphemeris {
                    name: "Sun".to_string(),
                    rows: vec![EphemerisRow {
                        date: "2024-01-01".to_string(),
                        time: "00:00:00".to_string(),
                        pos: 23.5,
                        reading: Reading::Value(value),
                    }],
                },
                BodyEphemeris {
                    name: "Vulcan".to_string(),
                    rows: vec![EphemerisRow {
                        date: "2024-01-01".to_string(),
                        time: "00:00:00".to_string(),
                        pos: 23.5,
                        reading: Reading::Gap("body 'Vulcan' not available".to_string()),
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            export_file_name("2024-01-01", "2024-01-25"),
            "Ephemerides_2024-01-01_to_2024-01-25.txt"
        );
        assert_eq!(
            data().file_name(ExportFormat::Json),
            "Ephemerides_2024-01-01_to_2024-01-02.json"
        );
    }

    #[test]
    fn test_text_report_layout() {
        let report = data().to_text_report();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Ephemerides 2024-01-01 to 2024-01-02, step 1 days");
        assert_eq!(lines[2], "Sun");
        assert!(lines[3].starts_with("Date        Time      RA"));
        assert!(lines[4].starts_with("2024-01-01  00:00:00  06h00m00s   +23°26'21\""));
        assert!(lines[4].ends_with('-'));
        assert!(report.contains("Vulcan"));
        assert!(report.contains("not available (body 'Vulcan' not available)"));
        assert!(!report.contains("NaN"));
    }

    #[test]
    fn test_json_roundtrip_keeps_gaps() {
        let json = data().to_json().unwrap();
        let back: EphemeridesData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data());
        assert_eq!(back.gap_count(), 1);
    }

    #[test]
    fn test_write_export() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("exports");
        let path = write_export(&out, &data(), ExportFormat::Text).unwrap();
        assert_eq!(path.file_name().unwrap(), "Ephemerides_2024-01-01_to_2024-01-02.txt");
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, data().to_text_report());
    }
}
