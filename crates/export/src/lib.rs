//! Export helpers for mission diary summaries, per-mission reports and assistant context.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod diary {
    use std::io::Write;

    use chrono::{DateTime, Utc};
    use serde::Serialize;

    use super::ExportError;

    /// One mission diary entry, borrowed from the history store.
    #[derive(Debug, Clone)]
    pub struct Row<'a> {
        pub id: u64,
        pub name: &'a str,
        pub timestamp: DateTime<Utc>,
        pub intercept_success: bool,
        pub mode: &'a str,
        pub propulsion: &'a str,
        pub payload_mass_kg: f64,
        pub launch_date: DateTime<Utc>,
        pub arrival_date: DateTime<Utc>,
        pub travel_time_days: u32,
        pub delta_v_km_s: f64,
        pub fuel_required_kg: u32,
        pub explanation: &'a str,
        pub educational_note: &'a str,
    }

    impl Row<'_> {
        fn status(&self) -> &'static str {
            if self.intercept_success {
                "SUCCESS"
            } else {
                "FAILURE"
            }
        }
    }

    #[derive(Serialize)]
    struct CsvRow<'a> {
        id: u64,
        name: &'a str,
        timestamp: String,
        status: &'static str,
        mode: &'a str,
        propulsion: &'a str,
        payload_kg: f64,
        launch_utc: String,
        arrival_utc: String,
        travel_time_days: u32,
        delta_v_km_s: String,
        fuel_required_kg: u32,
    }

    /// Write the diary summary as CSV with a header row.
    pub fn write_summary_csv(writer: &mut dyn Write, rows: &[Row<'_>]) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        for row in rows {
            csv.serialize(CsvRow {
                id: row.id,
                name: row.name,
                timestamp: row.timestamp.to_rfc3339(),
                status: row.status(),
                mode: row.mode,
                propulsion: row.propulsion,
                payload_kg: row.payload_mass_kg,
                launch_utc: row.launch_date.to_rfc3339(),
                arrival_utc: row.arrival_date.to_rfc3339(),
                travel_time_days: row.travel_time_days,
                delta_v_km_s: format!("{:.2}", row.delta_v_km_s),
                fuel_required_kg: row.fuel_required_kg,
            })?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Plain-text summary, one block per mission.
    pub fn write_summary_text(writer: &mut dyn Write, rows: &[Row<'_>]) -> Result<(), ExportError> {
        writeln!(writer, "Mission Diary Summary")?;
        writeln!(writer)?;
        for row in rows {
            writeln!(writer, "{} - {}", row.name, row.status())?;
            writeln!(writer, "- Date: {}", row.timestamp.format("%b %d, %Y %H:%M"))?;
            writeln!(writer, "- Propulsion: {}", row.propulsion)?;
            writeln!(
                writer,
                "- ΔV: {:.2} km/s, Travel Time: {} days, Fuel: {} kg",
                row.delta_v_km_s, row.travel_time_days, row.fuel_required_kg
            )?;
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Detailed report for a single mission.
    pub fn write_mission_report(writer: &mut dyn Write, row: &Row<'_>) -> Result<(), ExportError> {
        writeln!(writer, "Mission Report: {}", row.name)?;
        writeln!(writer, "Status        : {}", row.status())?;
        writeln!(writer, "Recorded      : {}", row.timestamp.format("%b %d, %Y %H:%M"))?;
        writeln!(writer, "Mode          : {}", row.mode)?;
        writeln!(writer, "Propulsion    : {}", row.propulsion)?;
        writeln!(writer, "Payload       : {} kg", row.payload_mass_kg)?;
        writeln!(writer, "Launch        : {}", row.launch_date.format("%Y-%m-%d"))?;
        writeln!(writer, "Arrival       : {}", row.arrival_date.format("%Y-%m-%d"))?;
        writeln!(writer, "Travel time   : {} days", row.travel_time_days)?;
        writeln!(writer, "ΔV            : {:.2} km/s", row.delta_v_km_s)?;
        writeln!(writer, "Fuel required : {} kg", row.fuel_required_kg)?;
        writeln!(writer)?;
        writeln!(writer, "{}", row.explanation)?;
        writeln!(writer, "{}", row.educational_note)?;
        Ok(())
    }
}

pub mod assist {
    use serde::Serialize;

    use super::ExportError;

    /// Mission history entry as handed to the chat assistant.
    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ContextEntry<'a> {
        pub name: &'a str,
        pub status: &'static str,
        pub propulsion: &'a str,
        pub delta_v: String,
        pub travel_time: u32,
        pub fuel: u32,
        pub explanation: &'a str,
    }

    /// Pretty-printed JSON array of mission entries.
    pub fn mission_context_json(entries: &[ContextEntry<'_>]) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(entries)?)
    }
}
