use crate::commands::{CmdMessage, CmdResult};
use crate::validation::validate_content;

pub fn run(text: &str) -> CmdResult {
    let validation = validate_content(text);
    let mut result = CmdResult::default();

    for issue in &validation.errors {
        result.add_message(CmdMessage::error(issue.to_string()));
    }
    for issue in &validation.warnings {
        result.add_message(CmdMessage::warning(issue.to_string()));
    }
    if validation.is_valid {
        result.add_message(CmdMessage::success(format!(
            "{} characters",
            validation.character_count
        )));
    }

    result.validation = Some(validation);
    result
}
