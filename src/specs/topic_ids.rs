// src/specs/topic_ids.rs
//! Topic title → section id on the all-labs page.
//!
//! The all-topics page names a topic by its display title ("Access control"), the
//! all-labs page anchors its section by a slug (`access-control-vulnerabilities`)
//! that is not derivable from the title. This table bridges the two.
//!
//! Lookup is exact and case-sensitive. A miss means the site added or renamed a
//! topic and the table needs a new entry; callers report it and carry on.

const TOPIC_IDS: &[(&str, &str)] = &[
    ("SQL injection", "sql-injection"),
    ("Authentication", "authentication"),
    ("Path traversal", "path-traversal"),
    ("Command injection", "os-command-injection"),
    ("Business logic vulnerabilities", "business-logic-vulnerabilities"),
    ("Information disclosure", "information-disclosure"),
    ("Access control", "access-control-vulnerabilities"),
    ("File upload vulnerabilities", "file-upload-vulnerabilities"),
    ("Race conditions", "race-conditions"),
    ("Server-side request forgery (SSRF)", "server-side-request-forgery-ssrf"),
    ("XXE injection", "xml-external-entity-xxe-injection"),
    ("NoSQL injection", "nosql-injection"),
    ("API testing", "api-testing"),
    ("Web cache deception", "web-cache-deception"),
    ("Cross-site scripting (XSS)", "cross-site-scripting"),
    ("Cross-site request forgery (CSRF)", "cross-site-request-forgery-csrf"),
    ("Cross-origin resource sharing (CORS)", "cross-origin-resource-sharing-cors"),
    ("Clickjacking", "clickjacking"),
    ("DOM-based vulnerabilities", "dom-based-vulnerabilities"),
    ("WebSockets", "websockets"),
    ("Insecure deserialization", "insecure-deserialization"),
    ("Web LLM attacks", "web-llm-attacks"),
    ("GraphQL API vulnerabilities", "graphql-api-vulnerabilities"),
    ("Server-side template injection", "server-side-template-injection"),
    ("Web cache poisoning", "web-cache-poisoning"),
    ("HTTP Host header attacks", "http-host-header-attacks"),
    ("HTTP request smuggling", "http-request-smuggling"),
    ("OAuth authentication", "oauth-authentication"),
    ("JWT attacks", "jwt"),
    ("Essential skills", "essential-skills"),
    ("Prototype pollution", "prototype-pollution"),
];

pub fn resolve(title: &str) -> Option<&'static str> {
    TOPIC_IDS.iter().find(|(t, _)| *t == title).map(|(_, id)| *id)
}

/// Every known title, in table order.
pub fn titles() -> impl Iterator<Item = &'static str> {
    TOPIC_IDS.iter().map(|(t, _)| *t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_known_title_resolves_to_a_nonempty_id() {
        for title in titles() {
            let id = resolve(title).unwrap();
            assert!(!id.is_empty(), "{title}");
            assert_eq!(resolve(title), Some(id), "lookup must be deterministic");
        }
    }

    #[test]
    fn titles_and_ids_are_unique() {
        let titles: HashSet<_> = TOPIC_IDS.iter().map(|(t, _)| t).collect();
        let ids: HashSet<_> = TOPIC_IDS.iter().map(|(_, i)| i).collect();
        assert_eq!(titles.len(), TOPIC_IDS.len());
        assert_eq!(ids.len(), TOPIC_IDS.len());
    }

    #[test]
    fn ids_are_url_safe() {
        for (_, id) in TOPIC_IDS {
            assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'), "{id}");
        }
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        assert_eq!(resolve("JWT attacks"), Some("jwt"));
        assert_eq!(resolve("Access control"), Some("access-control-vulnerabilities"));
        assert_eq!(resolve("sql injection"), None);
        assert_eq!(resolve("SQL injection "), None);
        assert_eq!(resolve("SQL"), None);
        assert_eq!(resolve(""), None);
    }
}
