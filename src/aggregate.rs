// src/aggregate.rs
use chrono::NaiveDateTime;

use crate::config::consts::TOPIC_GROUPS;
use crate::core::html::Document;
use crate::data::LevelMap;
use crate::error::Gap;
use crate::specs::{labs, topics};

/// Coarse completion state of a topic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    NoProgress,
    Partial,
    Full,
}

impl Status {
    pub fn of(completed: u32, total: u32) -> Self {
        if completed == 0 {
            Status::NoProgress
        } else if completed == total {
            Status::Full
        } else {
            Status::Partial
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Status::NoProgress => "🔴",
            Status::Partial => "🔵",
            Status::Full => "🟢",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRow {
    pub title: String,
    pub total_labs: u32,
    pub completed: u32,
    pub last_updated: NaiveDateTime,
}

impl TopicRow {
    pub fn status(&self) -> Status {
        Status::of(self.completed, self.total_labs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupRows {
    pub label: &'static str,
    pub rows: Vec<TopicRow>,
}

/// One update's worth of merged page data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// Groups found on the topics page, in fixed group order; rows in card order.
    pub groups: Vec<GroupRows>,
    pub level_progress: Option<LevelMap>,
    pub gaps: Vec<Gap>,
}

impl Aggregation {
    pub fn rows(&self) -> impl Iterator<Item = &TopicRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }
}

/// Walk the topic groups, count solved labs per card, and stamp every row with `now`.
/// Broken cards and unmapped topics land in `gaps`; nothing here fails.
pub fn aggregate(
    topics_doc: &Document,
    labs_doc: &Document,
    level_progress: Option<LevelMap>,
    now: NaiveDateTime,
) -> Aggregation {
    let mut agg = Aggregation { level_progress, ..Default::default() };

    for group in &TOPIC_GROUPS {
        let Some(cards) = topics::group_cards(topics_doc, group) else {
            agg.gaps.push(Gap::GroupMissing { group: group.label, anchor: group.anchor });
            continue;
        };

        let mut rows = Vec::with_capacity(cards.len());
        for card in cards {
            let card = match card {
                Ok(c) => c,
                Err(gap) => {
                    agg.gaps.push(gap);
                    continue;
                }
            };
            let completed = labs::try_count_completed(labs_doc, &card.title).unwrap_or_else(|gap| {
                agg.gaps.push(gap);
                0
            });
            rows.push(TopicRow {
                title: card.title,
                total_labs: card.total_labs,
                completed,
                last_updated: now,
            });
        }
        agg.groups.push(GroupRows { label: group.label, rows });
    }

    logf!(
        "aggregated {} topics in {} groups ({} gaps)",
        agg.rows().count(),
        agg.groups.len(),
        agg.gaps.len()
    );
    agg
}
