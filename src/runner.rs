// src/runner.rs
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};

use crate::{
    aggregate::aggregate,
    config::consts::{ALL_LABS_URL, DASHBOARD_URL, TOPICS_URL},
    config::options::TrackerOptions,
    core::{html::Document, net::Session},
    credentials::{self, CredentialStore, SecretStore},
    error::{Result, TrackerError},
    file::{read_if_present, write_text},
    progress::Progress,
    report, specs, store,
};

/// The three pages one update needs, already fetched.
pub struct Pages {
    pub topics: String,
    pub labs: String,
    pub dashboard: String,
}

/// Summary of what was produced.
#[derive(Debug)]
pub struct UpdateSummary {
    pub topics: usize,
    pub gaps: usize,
    pub report_file: PathBuf,
    pub progress_file: PathBuf,
}

/// Where an update cycle gets its pages from. The live site is a [`Session`].
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String>;
}

impl PageSource for Session {
    fn fetch(&self, url: &str) -> Result<String> {
        self.get(url)
    }
}

/// Stored cookies → validated session. Refuses to start on missing or dead cookies.
pub fn init_session<S: SecretStore>(creds: &CredentialStore<S>) -> Result<Session> {
    let cookies = creds.get().ok_or(TrackerError::NoCredentials)?;
    if !credentials::validate(&cookies) {
        return Err(TrackerError::InvalidSession);
    }
    Session::new(cookies)
}

/// One full update cycle: fetch, merge, render, save.
/// Any fetch failure (other than the topics page, which has a backup) aborts the
/// cycle before anything is written.
pub fn update(
    source: &dyn PageSource,
    options: &TrackerOptions,
    progress: &mut dyn Progress,
) -> Result<UpdateSummary> {
    progress.begin(3);
    let result = fetch_pages(source, options, progress)
        .and_then(|pages| apply_pages(&pages, options, Local::now().naive_local(), progress));
    progress.finish();
    result
}

fn fetch_pages(
    source: &dyn PageSource,
    options: &TrackerOptions,
    progress: &mut dyn Progress,
) -> Result<Pages> {
    let topics = fetch_topics(source, options, progress)?;
    progress.page_done("topics");

    let dashboard = source.fetch(DASHBOARD_URL).inspect_err(|e| {
        progress.log(&format!("Error fetching level progress: {e}"));
    })?;
    progress.page_done("dashboard");

    let labs = source.fetch(ALL_LABS_URL).inspect_err(|e| {
        progress.log(&format!("Error fetching all labs: {e}"));
    })?;
    progress.page_done("all-labs");

    Ok(Pages { topics, labs, dashboard })
}

/// Topics page, falling back to the local backup copy when the fetch fails.
fn fetch_topics(
    source: &dyn PageSource,
    options: &TrackerOptions,
    progress: &mut dyn Progress,
) -> Result<String> {
    match source.fetch(TOPICS_URL) {
        Ok(body) => Ok(body),
        Err(e) => {
            progress.log(&format!("Error fetching topics: {e}"));
            let backup = options.topics_backup.display();
            match read_if_present(&options.topics_backup) {
                Ok(Some(body)) => {
                    logw!("using topics backup {backup}");
                    progress.log(&format!("Using backup {backup}"));
                    Ok(body)
                }
                Ok(None) => Err(e),
                Err(read_err) => {
                    loge!("topics backup {backup} unreadable: {read_err}");
                    progress.log(&format!("Could not read backup {backup}: {read_err}"));
                    Err(e)
                }
            }
        }
    }
}

/// Everything after the network: parse, aggregate, render, persist.
pub fn apply_pages(
    pages: &Pages,
    options: &TrackerOptions,
    now: NaiveDateTime,
    progress: &mut dyn Progress,
) -> Result<UpdateSummary> {
    let topics_doc = Document::parse(&pages.topics);
    let labs_doc = Document::parse(&pages.labs);
    let dashboard_doc = Document::parse(&pages.dashboard);

    let reading = specs::dashboard::parse_levels(&dashboard_doc);
    for gap in &reading.gaps {
        logw!("{gap}");
        progress.gap(gap);
    }

    let agg = aggregate(&topics_doc, &labs_doc, reading.levels, now);
    for gap in &agg.gaps {
        logw!("{gap}");
        progress.gap(gap);
    }
    for row in agg.rows() {
        progress.topic_done(row);
    }

    let mut snapshot = store::load(&options.progress_file)?;
    snapshot.apply(&agg);

    let text = report::render(&agg);
    store::save(&mut snapshot, &options.progress_file)?;
    write_text(&options.report_file, &text)?;
    logf!("wrote {}", options.report_file.display());

    Ok(UpdateSummary {
        topics: agg.rows().count(),
        gaps: reading.gaps.len() + agg.gaps.len(),
        report_file: options.report_file.clone(),
        progress_file: options.progress_file.clone(),
    })
}
