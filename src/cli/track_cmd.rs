//! `passtrack <file-no> <dob>` — fetch and print the application status.

use crate::acquisition::HttpClient;
use crate::extraction::extract_status;
use crate::portal;
use anyhow::{bail, Context, Result};
use scraper::Html;
use tracing::debug;
use url::Url;

/// Run the tracker lookup: one POST, one parse, one extraction, one JSON
/// object on stdout.
pub async fn run(file_no: &str, dob: &str, endpoint: &str, timeout_ms: u64) -> Result<()> {
    let endpoint = Url::parse(endpoint)
        .with_context(|| format!("invalid endpoint URL: {endpoint}"))?;

    let client = HttpClient::new(timeout_ms);
    let fields = portal::status_form_fields(file_no, dob);

    debug!("requesting status for file {file_no} from {endpoint}");
    let resp = client
        .post_form(endpoint.as_str(), &fields, timeout_ms)
        .await
        .context("status request failed")?;

    if resp.status != 200 {
        bail!(
            "response status code is not 200 (OK), server responded with {}",
            resp.status
        );
    }

    let document = Html::parse_document(&resp.body);
    if !document.errors.is_empty() {
        // html5ever repairs tag soup unconditionally; the diagnostics are
        // informational and an unusable tree surfaces as a structural error.
        debug!(
            "HTML normalization reported {} diagnostic(s)",
            document.errors.len()
        );
    }

    let record = extract_status(&document)?;
    debug!("extracted {} row(s)", record.len());

    println!("{}", record.to_json_pretty()?);
    Ok(())
}
