//! Structural extraction of the status table from the tracker page.
//!
//! A fixed pipeline over the parsed document. The portal's markup is an
//! unversioned external contract: when the page's overall shape deviates
//! (missing form, unexpected table or row count) extraction aborts with a
//! count-carrying error instead of guessing which element might be the right
//! one. Damage confined to a single row only skips that row.

use crate::extraction::dom::{find_tags, get_attribute, leading_text};
use crate::portal::{
    EXPECTED_CELL_COUNT, EXPECTED_ROW_COUNT, EXPECTED_TABLE_COUNT, STATUS_TABLE_INDEX,
    TARGET_FORM_ID,
};
use crate::record::StatusRecord;
use scraper::Html;
use tracing::debug;

/// Failure modes of status extraction.
///
/// Every variant means the page no longer looks like the tracker page this
/// tool was written against; messages carry the target id or the expected
/// vs. discovered counts so a markup change is diagnosable without the raw
/// HTML.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("failed to extract form with id {0}")]
    FormNotFound(&'static str),

    #[error(
        "website markup has changed, expected {expected} <table>, discovered {actual} tags instead"
    )]
    TableCount { expected: usize, actual: usize },

    #[error(
        "website markup has changed, expected {expected} <tr>, discovered {actual} tags instead"
    )]
    RowCount { expected: usize, actual: usize },
}

/// Extract the status record from the parsed tracker page.
///
/// Stages 1–3 (form by id, table count, row count) are hard preconditions;
/// stages 4–5 (cells and cell text) tolerate per-row damage by skipping the
/// row. Labels and values are taken verbatim from the leading text node of
/// each cell.
pub fn extract_status(document: &Html) -> Result<StatusRecord, ExtractError> {
    let root = document.tree.root();

    let form = find_tags(root, "form")
        .into_iter()
        .find(|&f| get_attribute(f, "id") == Some(TARGET_FORM_ID))
        .ok_or(ExtractError::FormNotFound(TARGET_FORM_ID))?;

    let tables = find_tags(form, "table");
    if tables.len() != EXPECTED_TABLE_COUNT {
        return Err(ExtractError::TableCount {
            expected: EXPECTED_TABLE_COUNT,
            actual: tables.len(),
        });
    }
    let table = tables[STATUS_TABLE_INDEX];

    let rows = find_tags(table, "tr");
    if rows.len() != EXPECTED_ROW_COUNT {
        return Err(ExtractError::RowCount {
            expected: EXPECTED_ROW_COUNT,
            actual: rows.len(),
        });
    }

    let mut record = StatusRecord::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let cells = find_tags(row, "td");
        if cells.len() != EXPECTED_CELL_COUNT {
            debug!(
                "skipping row {index}: expected {EXPECTED_CELL_COUNT} <td>, found {}",
                cells.len()
            );
            continue;
        }
        let (Some(label), Some(value)) = (leading_text(cells[0]), leading_text(cells[1]))
        else {
            debug!("skipping row {index}: cell does not start with a text node");
            continue;
        };
        record.push(label, value);
    }

    Ok(record)
}
