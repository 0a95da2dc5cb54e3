// Output formatting utilities

use crate::models::StageRequest;

/// Stages already in the Applicants pipeline, as (sort, name)
pub const CURRENT_STAGES: &[(i64, &str)] = &[
    (20, "Under Review"),
    (30, "Interview Scheduled"),
    (40, "Offer"),
    (50, "Reject"),
];

const RULE_WIDTH: usize = 60;

/// Banner printed when no command is given
pub fn format_banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str("Add Stage to Applicants Pipeline\n");
    out.push_str(&rule);
    out.push_str("\n\nCurrent stages:\n");
    for (sort, name) in CURRENT_STAGES {
        out.push_str(&format!("  {}. {}\n", sort, name));
    }
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str("\nRun `stagehand add <NAME> <SORT> [--color <HEX>]` to add a stage,\n");
    out.push_str("e.g. `stagehand add \"Phone Screen\" 25 --color '#2FC6F6'`.\n");
    out.push_str("Use `stagehand preview <NAME>` to check the status id first.\n");
    out
}

/// Describe what `add` would send for a request
pub fn format_preview(request: &StageRequest, show_fields: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("Status code: {}\n", request.status_code()));
    out.push_str(&format!("Status ID:   {}\n", request.status_id()));

    if show_fields {
        out.push_str("\nFields:\n");
        for (key, value) in request.form_fields() {
            out.push_str(&format!("  {:<20} {}\n", key, value));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_lists_current_stages() {
        let banner = format_banner();
        assert!(banner.contains("20. Under Review"));
        assert!(banner.contains("30. Interview Scheduled"));
        assert!(banner.contains("40. Offer"));
        assert!(banner.contains("50. Reject"));
        assert!(banner.contains("stagehand add"));
    }

    #[test]
    fn test_preview_without_fields() {
        let request = StageRequest::new("Phone Screen", 0, None);
        let preview = format_preview(&request, false);
        assert!(preview.contains("PHONE_SCRE"));
        assert!(preview.contains("DT1054_18:UC_PHONE_SCRE"));
        assert!(!preview.contains("fields["));
    }

    #[test]
    fn test_preview_with_fields() {
        let request = StageRequest::new("Phone Screen", 25, Some("#2FC6F6"));
        let preview = format_preview(&request, true);
        assert!(preview.contains("fields[ENTITY_ID]"));
        assert!(preview.contains("DYNAMIC_1054_STAGE_18"));
        assert!(preview.contains("#2FC6F6"));
        assert!(preview.contains("25"));
    }
}
