// src/config/consts.rs

// Net config
pub const TOPICS_URL: &str = "https://portswigger.net/web-security/all-topics";
pub const ALL_LABS_URL: &str = "https://portswigger.net/web-security/all-labs";
pub const DASHBOARD_URL: &str = "https://portswigger.net/web-security/dashboard";
pub const USER_AGENT: &str = concat!("academy_tracker/", env!("CARGO_PKG_VERSION"));
pub const FETCH_TIMEOUT_SECS: u64 = 15;
pub const VALIDATE_TIMEOUT_SECS: u64 = 5;

// Substring a logged-in dashboard always carries
pub const SESSION_MARKER: &str = "apprentice-progress";

// Secret store
pub const SERVICE_ID: &str = "portswigger_academy";
pub const DEFAULT_USER_KEY: &str = "default_user";
pub const REQUIRED_COOKIES: [&str; 2] = ["SessionId", "t"];
pub const AUTH_COOKIE_PREFIX: &str = "Authenticated";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const PROGRESS_FILE: &str = "progress.json";
pub const REPORT_FILE: &str = "README.md";
pub const TOPICS_BACKUP_FILE: &str = "topics_backup.html";

// Schedule: every Monday at 09:00 local, checked hourly
pub const SCHEDULE_HOUR: u32 = 9;
pub const SCHEDULE_TICK_SECS: u64 = 3600;

// all-labs page
pub const SECTION_HEADING: &str = "h2";
pub const LAB_LINK: &str = "div.widgetcontainer-lab-link";
pub const SOLVED_CLASS: &str = "is-solved";

// all-topics page
pub const CARD_CONTAINER: &str = "div.section-full-width";
pub const CARD: &str = "a";
pub const CARD_TITLE: &str = "h3";
pub const CARD_LAB_COUNT: &str = "sup";

// dashboard page
pub const LEVEL_CONTAINER: &str = "div.container-columns-3";
pub const LEVEL_RADIAL: &str = "div.radial-text-element";
pub const LEVEL_COMPLETED: &str = "div.radial-text-element-progress";
pub const LEVEL_TOTAL: &str = "div.radial-text-element-total";

/// A top-level block of topic cards on the all-topics page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopicGroup {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const TOPIC_GROUPS: [TopicGroup; 3] = [
    TopicGroup { label: "Server-side topics", anchor: "server-side-topics" },
    TopicGroup { label: "Client-side topics", anchor: "client-side-topics" },
    TopicGroup { label: "Advanced topics", anchor: "advanced-topics" },
];
