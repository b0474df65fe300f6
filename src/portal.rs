//! Fixed facts about the Passport Seva status-tracker page.
//!
//! Everything in this module mirrors one external website's current markup
//! and form wiring. None of it is discoverable at runtime: when the portal
//! changes, these constants (and the extraction built on them) are what need
//! updating.

/// Status-tracker endpoint on the Passport Seva portal.
pub const STATUS_ENDPOINT: &str =
    "https://www.passportindia.gov.in/AppOnlineProject/statusTracker/trackStatusInpNew";

/// `id` attribute of the form wrapping the status table.
pub const TARGET_FORM_ID: &str = "trackStatusForFileNoNew";

/// Number of `<table>` elements expected inside the target form.
pub const EXPECTED_TABLE_COUNT: usize = 2;

/// Index of the table holding the status rows (the second one).
pub const STATUS_TABLE_INDEX: usize = 1;

/// Number of `<tr>` rows expected in the status table.
pub const EXPECTED_ROW_COUNT: usize = 11;

/// Number of `<td>` cells expected per status row (label and value).
pub const EXPECTED_CELL_COUNT: usize = 2;

/// Form fields for a status lookup by file number and date of birth.
///
/// Field names come from the portal's tracker form. `optStatus` and the
/// `action:` button value are fixed; the other two carry user input and are
/// url-encoded by the transport.
pub fn status_form_fields(file_no: &str, dob: &str) -> Vec<(String, String)> {
    vec![
        ("optStatus".to_string(), "Application_Status".to_string()),
        ("fileNo".to_string(), file_no.to_string()),
        ("applDob".to_string(), dob.to_string()),
        (
            "action:trackStatusForFileNoNew".to_string(),
            "Track Status".to_string(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_carry_user_input() {
        let fields = status_form_fields("BOM001234567", "01/01/1990");
        assert_eq!(fields.len(), 4);
        assert!(fields.contains(&("fileNo".to_string(), "BOM001234567".to_string())));
        assert!(fields.contains(&("applDob".to_string(), "01/01/1990".to_string())));
    }

    #[test]
    fn test_submit_button_field_matches_form_id() {
        let fields = status_form_fields("x", "y");
        let action = &fields[3].0;
        assert_eq!(action, &format!("action:{TARGET_FORM_ID}"));
    }
}
