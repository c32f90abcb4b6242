// src/specs/labs.rs
//! Scraping *spec* for the all-labs page.
//!
//! The page is one flat run of sections:
//!
//! ```text
//! <h2 id="sql-injection">SQL injection</h2>
//!   <div class="widgetcontainer-lab-link is-solved">…</div>
//!   <div class="widgetcontainer-lab-link">…</div>
//! <h2 id="cross-site-scripting">…</h2>
//!   …
//! ```
//!
//! Lab widgets are *siblings* of the heading, not children, so a topic's labs are
//! found by document position: after its `h2`, before the next `h2` (any `h2`,
//! with or without an id). The last section runs to the end of the document.

use std::sync::LazyLock;

use scraper::Selector;

use crate::config::consts::{LAB_LINK, SECTION_HEADING, SOLVED_CLASS};
use crate::core::html::{self, Document, Span};
use crate::error::Gap;
use crate::specs::topic_ids;

static HEADING: LazyLock<Selector> = LazyLock::new(|| html::selector(SECTION_HEADING));
static LAB: LazyLock<Selector> = LazyLock::new(|| html::selector(LAB_LINK));

/// Number of solved labs under `title`'s section. Gaps are logged and count as 0.
pub fn count_completed(labs: &Document, title: &str) -> u32 {
    try_count_completed(labs, title).unwrap_or_else(|gap| {
        logw!("{gap}");
        0
    })
}

/// Same as [`count_completed`], but hands the gap back to the caller.
pub fn try_count_completed(labs: &Document, title: &str) -> Result<u32, Gap> {
    let id = topic_ids::resolve(title).ok_or_else(|| Gap::NoMapping { title: s!(title) })?;
    let span = section_span(labs, id).ok_or_else(|| Gap::SectionMissing { title: s!(title), id })?;

    let solved = labs
        .positioned(&LAB)
        .iter()
        .filter(|lab| span.contains(lab.pos))
        .filter(|lab| lab.has_class(SOLVED_CLASS))
        .count();

    Ok(u32::try_from(solved).unwrap_or(u32::MAX))
}

/// Positions bounding the section whose heading has `id`.
pub fn section_span(labs: &Document, id: &str) -> Option<Span> {
    let headings = labs.positioned(&HEADING);
    let at = headings.iter().position(|h| h.attr("id") == Some(id))?;
    Some(Span {
        start: headings[at].pos,
        end: headings.get(at + 1).map(|h| h.pos),
    })
}
