// src/core/net.rs
// Blocking HTTPS GETs with the stored cookies attached.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::COOKIE;

use crate::config::consts::{
    DASHBOARD_URL, FETCH_TIMEOUT_SECS, SESSION_MARKER, USER_AGENT, VALIDATE_TIMEOUT_SECS,
};
use crate::credentials::CookieBundle;
use crate::error::{Result, TrackerError};

/// Everything a fetch needs: the HTTP client and the active cookies.
/// Passed explicitly to every operation that talks to the site.
pub struct Session {
    client: Client,
    cookie_header: String,
}

impl Session {
    pub fn new(cookies: CookieBundle) -> Result<Self> {
        let client = build_client(FETCH_TIMEOUT_SECS)?;
        Ok(Self::with_client(client, &cookies))
    }

    pub fn with_client(client: Client, cookies: &CookieBundle) -> Self {
        Self { client, cookie_header: cookies.to_header() }
    }

    /// GET `url`, returning the body. Any non-2xx status is an error.
    pub fn get(&self, url: &str) -> Result<String> {
        logd!("GET {url}");
        let resp = self
            .client
            .get(url)
            .header(COOKIE, self.cookie_header.as_str())
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TrackerError::Status { url: s!(url), status: status.as_u16() });
        }
        Ok(resp.text()?)
    }
}

fn build_client(timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}

/// Liveness probe: the dashboard answers 200 and carries the progress widget
/// only for a logged-in user. Any failure counts as "not valid".
pub fn probe(cookies: &CookieBundle) -> bool {
    let session = match build_client(VALIDATE_TIMEOUT_SECS) {
        Ok(client) => Session::with_client(client, cookies),
        Err(e) => {
            loge!("probe: could not build client: {e}");
            return false;
        }
    };
    match session.get(DASHBOARD_URL) {
        Ok(body) => looks_logged_in(&body),
        Err(e) => {
            logw!("probe failed: {e}");
            false
        }
    }
}

pub fn looks_logged_in(body: &str) -> bool {
    body.contains(SESSION_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_decides_login_state() {
        assert!(looks_logged_in(r#"<div class="apprentice-progress">"#));
        assert!(!looks_logged_in("<form id=login>"));
    }
}
