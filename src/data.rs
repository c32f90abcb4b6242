// src/data.rs
//
// The persisted progress model.
//
// - ProgressSnapshot: everything written to progress.json. Created empty on the
//                     first run, read-modify-written on every update.
// - TopicRecord:      one topic's lab counts, keyed by its display title.
// - LevelProgress:    completion counters for one difficulty tier.
//
// Maps are BTreeMaps so the file serializes in a stable order.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregation;

/// Difficulty tier, in the order the dashboard shows them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Apprentice,
    Practitioner,
    Expert,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Apprentice, Tier::Practitioner, Tier::Expert];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Apprentice => "apprentice",
            Tier::Practitioner => "practitioner",
            Tier::Expert => "expert",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Apprentice => "Apprentice",
            Tier::Practitioner => "Practitioner",
            Tier::Expert => "Expert",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub completed: u32,
    pub total: u32,
}

impl LevelProgress {
    /// Share completed, in percent. Zero when the tier has no labs.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.completed) / f64::from(self.total) * 100.0
        }
    }
}

pub type LevelMap = BTreeMap<Tier, LevelProgress>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub total_labs: u32,
    pub completed: u32,
    pub last_updated: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub topics: BTreeMap<String, TopicRecord>,
    pub level_progress: LevelMap,
    /// Date of the last save, `MM/DD/YY`.
    pub last_updated: Option<String>,
}

impl Default for ProgressSnapshot {
    fn default() -> Self {
        Self {
            topics: BTreeMap::new(),
            level_progress: Tier::ALL.iter().map(|t| (*t, LevelProgress::default())).collect(),
            last_updated: None,
        }
    }
}

impl ProgressSnapshot {
    /// Fold a finished aggregation in. Topics are upserted by title and never
    /// removed; tier progress is replaced wholesale when the dashboard produced any.
    pub fn apply(&mut self, agg: &Aggregation) {
        for row in agg.rows() {
            self.topics.insert(
                row.title.clone(),
                TopicRecord {
                    total_labs: row.total_labs,
                    completed: row.completed,
                    last_updated: row.last_updated,
                },
            );
        }
        if let Some(levels) = &agg.level_progress {
            self.level_progress = levels.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_has_three_zeroed_tiers() {
        let s = ProgressSnapshot::default();
        assert!(s.topics.is_empty());
        assert_eq!(s.level_progress.len(), 3);
        assert!(s.level_progress.values().all(|l| *l == LevelProgress::default()));
        assert_eq!(s.last_updated, None);
    }

    #[test]
    fn percent_of_empty_tier_is_zero() {
        assert_eq!(LevelProgress { completed: 0, total: 0 }.percent(), 0.0);
        assert_eq!(LevelProgress { completed: 1, total: 4 }.percent(), 25.0);
    }

    #[test]
    fn tiers_serialize_lowercase_in_dashboard_order() {
        let s = ProgressSnapshot::default();
        let json = serde_json::to_string(&s.level_progress).unwrap();
        let a = json.find("apprentice").unwrap();
        let p = json.find("practitioner").unwrap();
        let e = json.find("expert").unwrap();
        assert!(a < p && p < e);
    }
}
