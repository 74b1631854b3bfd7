//! Mission diary queries: filtering, ordering, statistics and export views over the history log.

use std::cmp::Ordering;

use intercept_export::assist::ContextEntry;
use intercept_export::diary::Row;

use crate::history::MissionRecord;

/// Which outcomes a diary view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Success,
    Failure,
}

impl StatusFilter {
    fn accepts(self, record: &MissionRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Success => record.data.intercept_success,
            StatusFilter::Failure => !record.data.intercept_success,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DiaryQuery {
    pub status: StatusFilter,
    /// Case-insensitive substring over name, propulsion and mode.
    pub search: Option<String>,
}

impl DiaryQuery {
    fn matches(&self, record: &MissionRecord) -> bool {
        if !self.status.accepts(record) {
            return false;
        }
        let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
            return true;
        };
        let term = term.to_lowercase();
        record.name.to_lowercase().contains(&term)
            || record.data.propulsion.as_str().contains(&term)
            || record.data.mode.as_str().contains(&term)
    }
}

/// Records matching `query`, in insertion order.
pub fn filter<'a>(records: &'a [MissionRecord], query: &DiaryQuery) -> Vec<&'a MissionRecord> {
    records.iter().filter(|r| query.matches(r)).collect()
}

/// Most recent first; ties keep insertion order.
pub fn newest_first<'a>(records: &[&'a MissionRecord]) -> Vec<&'a MissionRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// Aggregate figures shown at the top of the diary.
#[derive(Debug, Clone, PartialEq)]
pub struct DiaryStats<'a> {
    pub total: usize,
    /// Rounded to the nearest whole percent; 0 for an empty diary.
    pub success_rate_percent: u32,
    /// Mean delta-v across all missions; 0 for an empty diary.
    pub average_delta_v_km_s: f64,
    /// Successful mission with the lowest delta-v.
    pub best: Option<&'a MissionRecord>,
}

pub fn stats(records: &[MissionRecord]) -> DiaryStats<'_> {
    if records.is_empty() {
        return DiaryStats {
            total: 0,
            success_rate_percent: 0,
            average_delta_v_km_s: 0.0,
            best: None,
        };
    }

    let total = records.len();
    let successes = records.iter().filter(|r| r.data.intercept_success).count();
    let delta_v_sum: f64 = records.iter().map(|r| r.data.delta_v_km_s).sum();
    let best = records
        .iter()
        .filter(|r| r.data.intercept_success)
        .min_by(|a, b| {
            a.data
                .delta_v_km_s
                .partial_cmp(&b.data.delta_v_km_s)
                .unwrap_or(Ordering::Equal)
        });

    DiaryStats {
        total,
        success_rate_percent: (successes as f64 / total as f64 * 100.0).round() as u32,
        average_delta_v_km_s: delta_v_sum / total as f64,
        best,
    }
}

impl MissionRecord {
    /// Borrowed view for the CSV/text exporters.
    pub fn export_row(&self) -> Row<'_> {
        let data = &self.data;
        Row {
            id: self.id,
            name: &self.name,
            timestamp: self.timestamp,
            intercept_success: data.intercept_success,
            mode: data.mode.as_str(),
            propulsion: data.propulsion.as_str(),
            payload_mass_kg: data.payload_mass_kg,
            launch_date: data.launch_date,
            arrival_date: data.arrival_date,
            travel_time_days: data.travel_time_days,
            delta_v_km_s: data.delta_v_km_s,
            fuel_required_kg: data.fuel_required_kg,
            explanation: &data.explanation,
            educational_note: &data.educational_note,
        }
    }

    /// Entry handed to the chat assistant as mission-history context.
    pub fn assist_entry(&self) -> ContextEntry<'_> {
        ContextEntry {
            name: &self.name,
            status: self.data.status_label(),
            propulsion: self.data.propulsion.as_str(),
            delta_v: self.data.delta_v_display(),
            travel_time: self.data.travel_time_days,
            fuel: self.data.fuel_required_kg,
            explanation: &self.data.explanation,
        }
    }
}
