// src/specs/dashboard.rs
//! Scraping *spec* for the dashboard's per-tier progress.
//!
//! ```text
//! <div class="container-columns-3">
//!   <div class="apprentice-progress">
//!     <div class="radial-text-element">
//!       <div class="radial-text-element-progress">12</div>
//!       <div class="radial-text-element-total">of 52</div>
//! ```
//!
//! No container means the page was served to a logged-out visitor.

use std::sync::LazyLock;

use scraper::Selector;

use crate::config::consts::{LEVEL_COMPLETED, LEVEL_CONTAINER, LEVEL_RADIAL, LEVEL_TOTAL};
use crate::core::html::{self, Document, first_in, text_of};
use crate::core::sanitize::after_last_of;
use crate::data::{LevelMap, LevelProgress, Tier};
use crate::error::Gap;

static CONTAINER: LazyLock<Selector> = LazyLock::new(|| html::selector(LEVEL_CONTAINER));
static RADIAL: LazyLock<Selector> = LazyLock::new(|| html::selector(LEVEL_RADIAL));
static COMPLETED: LazyLock<Selector> = LazyLock::new(|| html::selector(LEVEL_COMPLETED));
static TOTAL: LazyLock<Selector> = LazyLock::new(|| html::selector(LEVEL_TOTAL));
static TIER_BLOCKS: LazyLock<Vec<(Tier, Selector)>> = LazyLock::new(|| {
    Tier::ALL
        .iter()
        .map(|t| (*t, html::selector(&format!("div.{}-progress", t.as_str()))))
        .collect()
});

/// What the dashboard said about tier progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelReading {
    /// `None` when nothing usable was found.
    pub levels: Option<LevelMap>,
    pub gaps: Vec<Gap>,
}

pub fn parse_levels(doc: &Document) -> LevelReading {
    let Some(container) = doc.first(&CONTAINER) else {
        return LevelReading { levels: None, gaps: vec![Gap::LevelsMissing] };
    };

    let mut levels = LevelMap::new();
    let mut gaps = Vec::new();

    for (tier, block_sel) in TIER_BLOCKS.iter() {
        // A tier block that is simply absent is skipped quietly.
        let Some(block) = first_in(container, block_sel) else { continue };

        match first_in(block, &RADIAL).and_then(|radial| {
            let completed = text_of(first_in(radial, &COMPLETED)?).parse::<u32>().ok()?;
            let total = after_last_of(&text_of(first_in(radial, &TOTAL)?)).parse::<u32>().ok()?;
            Some(LevelProgress { completed, total })
        }) {
            Some(progress) => {
                levels.insert(*tier, progress);
            }
            None => gaps.push(Gap::TierUnreadable { tier: tier.as_str() }),
        }
    }

    LevelReading {
        levels: (!levels.is_empty()).then_some(levels),
        gaps,
    }
}
