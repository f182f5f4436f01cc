//! # Command Layer
//!
//! This module contains the business operations a widget UI needs. Each
//! command lives in its own submodule as plain functions generic over
//! [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the UI-side policy lives:
//! - Assigning ids to new widgets (the store never does)
//! - Running the validation helper before content reaches the store
//! - Coalescing rapid edits through the [`Debouncer`](crate::debounce::Debouncer)
//! - Turning "not found" results into messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: No stdout, stderr or formatting
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected_widgets`: Widgets that were created or modified
//! - `listed_widgets`: Widgets to display
//! - `messages`: Structured messages with levels (info, success, warning, error)
//! - `validation`: Output of the content check, when one ran
//! - `report`: Output of `doctor`
//!
//! ## Command Modules
//!
//! - [`create`]: Create a widget with a fresh id
//! - [`list`]: List all widgets
//! - [`view`]: Fetch widgets by id
//! - [`update`]: Replace a widget's content
//! - [`delete`]: Remove widgets
//! - [`edit`]: Debounced editing session over a stream of content lines
//! - [`import`]: Load a JSON collection
//! - [`check`]: Validate text without touching the store
//! - [`doctor`]: Verify and repair the stored collection
//! - [`helpers`]: Shared utilities

use crate::model::Widget;
use crate::store::DoctorReport;
use crate::validation::ContentValidation;
use serde::Serialize;

pub mod check;
pub mod create;
pub mod delete;
pub mod doctor;
pub mod edit;
pub mod helpers;
pub mod import;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_widgets: Vec<Widget>,
    pub listed_widgets: Vec<Widget>,
    pub messages: Vec<CmdMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ContentValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<DoctorReport>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_widgets(mut self, widgets: Vec<Widget>) -> Self {
        self.listed_widgets = widgets;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
