use crate::commands::{CmdMessage, CmdResult};
use crate::validation::ContentValidation;

/// Length of the content excerpt used in messages.
pub const PREVIEW_CHARS: usize = 40;

/// Short single-line excerpt of widget content for messages.
pub fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if head.is_empty() {
        "(empty)".to_string()
    } else if chars.next().is_some() {
        format!("{}…", head)
    } else {
        head
    }
}

/// Turn validation problems into result messages. Over-limit content is
/// still accepted by the store (it truncates), so these are warnings.
pub fn report_validation(result: &mut CmdResult, validation: &ContentValidation) {
    for issue in &validation.errors {
        result.add_message(CmdMessage::warning(format!(
            "{}; it will be truncated",
            issue
        )));
    }
    for issue in &validation.warnings {
        result.add_message(CmdMessage::info(issue.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_content;

    #[test]
    fn preview_short_content_is_unchanged() {
        assert_eq!(preview("groceries"), "groceries");
    }

    #[test]
    fn preview_truncates_with_ellipsis() {
        let long = "x".repeat(PREVIEW_CHARS + 1);
        let p = preview(&long);
        assert_eq!(p.chars().count(), PREVIEW_CHARS + 1);
        assert!(p.ends_with('…'));
    }

    #[test]
    fn preview_of_empty_content() {
        assert_eq!(preview(""), "(empty)");
    }

    #[test]
    fn validation_issues_become_messages() {
        let mut result = CmdResult::default();
        report_validation(&mut result, &validate_content(&"a".repeat(5001)));
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("truncated"));
    }
}
