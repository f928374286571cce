//! Best-effort favicon retrieval
//!
//! Asks Google's favicon service for a 128px icon of the site's domain and
//! drops it into the icons directory. Failures of any kind are reported on
//! stderr and collapsed to `None` so that app creation proceeds without an
//! icon. Never escalate these to hard errors.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::paths::AppDirs;

const FAVICON_SIZE: u32 = 128;
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Download the favicon for `site_url`, returning the saved path or `None`
pub fn fetch_favicon(dirs: &AppDirs, site_url: &str, app_name: &str) -> Option<PathBuf> {
    match try_fetch(dirs, site_url, app_name) {
        Ok(path) => Some(path),
        Err(reason) => {
            eprintln!("Error retrieving favicon: {reason}");
            None
        }
    }
}

fn try_fetch(dirs: &AppDirs, site_url: &str, app_name: &str) -> Result<PathBuf, String> {
    let domain = Url::parse(site_url)
        .map_err(|e| e.to_string())?
        .host_str()
        .ok_or_else(|| format!("no host in URL {site_url}"))?
        .to_string();

    let endpoint = favicon_endpoint(&domain);

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| e.to_string())?;
    let response = client
        .get(&endpoint)
        .send()
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|_| format!("Unable to retrieve favicon for {domain}"))?;

    let body = response.bytes().map_err(|e| e.to_string())?;
    let icon_path = dirs.icon_path(app_name);
    fs::write(&icon_path, &body).map_err(|e| e.to_string())?;

    Ok(icon_path)
}

fn favicon_endpoint(domain: &str) -> String {
    format!("https://www.google.com/s2/favicons?domain={domain}&sz={FAVICON_SIZE}")
}
