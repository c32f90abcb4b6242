// src/report.rs
// Markdown progress report. Pure formatting; no I/O.

use crate::aggregate::Aggregation;

const BANNER: &str = "![portswigger.jpg](https://i.imgur.com/kdZjayp.jpeg)";
const TITLE: &str = "# PortSwigger Academy Progress";
const TABLE_HEADER: &str = "| Topic 📖 | Labs 🔬 | Progress ✅ | Status ⭕️ | Last Updated 🗓️ |";
const TABLE_ALIGN: &str = "|---|---|---|:---:|---|";
const GROUP_MARK: &str = "🟧";
const DATE_FMT: &str = "%m/%d/%Y";

pub fn render(agg: &Aggregation) -> String {
    let mut out = s!();
    out.push_str(BANNER);
    out.push_str("\n\n");
    out.push_str(TITLE);
    out.push_str("\n\n");

    if let Some(levels) = &agg.level_progress {
        out.push_str("## Overall Progress\n");
        for (tier, p) in levels {
            out.push_str(&format!(
                "- **{}**: {}/{} ({:.1}%)\n",
                tier.label(),
                p.completed,
                p.total,
                p.percent()
            ));
        }
        out.push('\n');
    }

    out.push_str("## Topic Progress\n");
    out.push_str(TABLE_HEADER);
    out.push('\n');
    out.push_str(TABLE_ALIGN);
    out.push('\n');

    for group in &agg.groups {
        out.push_str(&format!("| **{} {}** | | | | |\n", group.label, GROUP_MARK));
        for row in &group.rows {
            out.push_str(&format!(
                "| {} | {} | {}/{} | {} | {} |\n",
                row.title,
                row.total_labs,
                row.completed,
                row.total_labs,
                row.status().glyph(),
                row.last_updated.format(DATE_FMT)
            ));
        }
    }
    out
}
