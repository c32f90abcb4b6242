// src/specs/topics.rs
//! Scraping *spec* for the all-topics page.
//!
//! Purpose:
//! - For each fixed topic group (`server-side-topics`, …) find the group's `h2`,
//!   the first `div.section-full-width` after it, and every card (`a`) inside.
//! - Per card: title from the first `h3`, advertised lab total from the first
//!   `sup` ("18 LABS" → 18).
//!
//! A broken card is reported and skipped; the rest of the group is unaffected.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::config::consts::{
    CARD, CARD_CONTAINER, CARD_LAB_COUNT, CARD_TITLE, SECTION_HEADING, TopicGroup,
};
use crate::core::html::{self, Document, first_in, text_of};
use crate::core::sanitize::leading_token;
use crate::error::Gap;

static HEADING: LazyLock<Selector> = LazyLock::new(|| html::selector(SECTION_HEADING));
static CONTAINER: LazyLock<Selector> = LazyLock::new(|| html::selector(CARD_CONTAINER));
static CARDS: LazyLock<Selector> = LazyLock::new(|| html::selector(CARD));
static TITLE: LazyLock<Selector> = LazyLock::new(|| html::selector(CARD_TITLE));
static LAB_COUNT: LazyLock<Selector> = LazyLock::new(|| html::selector(CARD_LAB_COUNT));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCard {
    pub title: String,
    pub total_labs: u32,
}

/// Cards of one group, in page order. `None` when the group heading is absent.
/// A group whose heading exists but has no card container yields no cards.
pub fn group_cards(doc: &Document, group: &TopicGroup) -> Option<Vec<Result<TopicCard, Gap>>> {
    let heading = doc
        .positioned(&HEADING)
        .into_iter()
        .find(|h| h.attr("id") == Some(group.anchor))?;

    let Some(container) = doc.first_after(&CONTAINER, heading.pos) else {
        logw!("{}: no card container after #{}", group.label, group.anchor);
        return Some(Vec::new());
    };

    Some(
        container
            .el
            .select(&CARDS)
            .enumerate()
            .map(|(index, card)| read_card(card, group, index))
            .collect(),
    )
}

fn read_card(card: ElementRef<'_>, group: &TopicGroup, index: usize) -> Result<TopicCard, Gap> {
    let title = first_in(card, &TITLE)
        .map(text_of)
        .ok_or(Gap::MissingTitle { group: group.label, index })?;

    let raw = first_in(card, &LAB_COUNT)
        .map(text_of)
        .ok_or_else(|| Gap::MissingLabCount { group: group.label, title: title.clone() })?;

    let total_labs = leading_token(&raw)
        .and_then(|tok| tok.parse::<u32>().ok())
        .ok_or_else(|| Gap::BadLabCount { title: title.clone(), raw: raw.clone() })?;

    Ok(TopicCard { title, total_labs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::TOPIC_GROUPS;

    fn card(title: &str, labs: &str) -> String {
        format!(r#"<a href="/t"><h3>{title}</h3><p>blurb</p><sup>{labs}</sup></a>"#)
    }

    fn group(anchor: &str, cards: &[String]) -> String {
        format!(
            r#"<h2 id="{anchor}">{anchor}</h2><div class="section-full-width">{}</div>"#,
            cards.concat()
        )
    }

    #[test]
    fn reads_title_and_leading_lab_count() {
        let doc = Document::parse(&group(
            "server-side-topics",
            &[card("SQL injection", "18 LABS"), card(" Authentication ", "\n 14\n LABS")],
        ));
        let cards = group_cards(&doc, &TOPIC_GROUPS[0]).unwrap();
        assert_eq!(
            cards,
            vec![
                Ok(TopicCard { title: s!("SQL injection"), total_labs: 18 }),
                Ok(TopicCard { title: s!("Authentication"), total_labs: 14 }),
            ]
        );
    }

    #[test]
    fn malformed_cards_are_reported_in_place() {
        let doc = Document::parse(&group(
            "client-side-topics",
            &[
                card("Clickjacking", "5 LABS"),
                s!(r#"<a href="/x"><sup>3 LABS</sup></a>"#),
                s!(r#"<a href="/y"><h3>WebSockets</h3></a>"#),
                card("CORS", "many LABS"),
                card("DOM-based vulnerabilities", "7"),
            ],
        ));
        let cards = group_cards(&doc, &TOPIC_GROUPS[1]).unwrap();
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].as_ref().unwrap().title, "Clickjacking");
        assert_eq!(cards[1], Err(Gap::MissingTitle { group: "Client-side topics", index: 1 }));
        assert_eq!(
            cards[2],
            Err(Gap::MissingLabCount { group: "Client-side topics", title: s!("WebSockets") })
        );
        assert_eq!(cards[3], Err(Gap::BadLabCount { title: s!("CORS"), raw: s!("many LABS") }));
        assert_eq!(cards[4].as_ref().unwrap().total_labs, 7);
    }

    #[test]
    fn container_is_the_first_after_the_heading() {
        let html = format!(
            "{}{}",
            group("server-side-topics", &[card("SQL injection", "18 LABS")]),
            group("advanced-topics", &[card("JWT attacks", "8 LABS")]),
        );
        let doc = Document::parse(&html);
        let adv = group_cards(&doc, &TOPIC_GROUPS[2]).unwrap();
        assert_eq!(adv.len(), 1);
        assert_eq!(adv[0].as_ref().unwrap().title, "JWT attacks");
    }

    #[test]
    fn missing_heading_is_none_missing_container_is_empty() {
        let doc = Document::parse(r#"<h2 id="server-side-topics">S</h2><p>nothing</p>"#);
        assert_eq!(group_cards(&doc, &TOPIC_GROUPS[0]), Some(Vec::new()));
        assert_eq!(group_cards(&doc, &TOPIC_GROUPS[1]), None);
    }
}
