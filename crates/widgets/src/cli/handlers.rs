//! Command handlers for the widgets CLI.
//!
//! Each handler reads whatever input its command needs (arguments, stdin, a
//! file), calls the API, and returns an [`Output`] describing what to render.
//! Handlers never print; `commands.rs` owns the streams and the exit status.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tokio::io::BufReader;
use widgetapp::api::WidgetsApi;
use widgetapp::commands::import::ImportMode;
use widgetapp::commands::{CmdMessage, CmdResult};
use widgetapp::store::DataStore;

/// What a handler produced and how it should be shown.
pub enum Output {
    /// Widgets in `listed_widgets`, one line each
    List(CmdResult),
    /// Widgets in `listed_widgets`, in full
    Full(CmdResult),
    /// A validation summary plus messages
    Check(CmdResult),
    /// Serialized widgets to write to stdout
    Export { result: CmdResult, json: String },
    /// Messages only
    Messages(CmdResult),
}

impl Output {
    pub fn result(&self) -> &CmdResult {
        match self {
            Output::List(r) | Output::Full(r) | Output::Check(r) | Output::Messages(r) => r,
            Output::Export { result, .. } => result,
        }
    }
}

fn joined_or_stdin(words: &[String]) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read content from stdin")?;
    Ok(text.trim_end_matches(['\n', '\r']).to_string())
}

pub fn list<S: DataStore>(api: &WidgetsApi<S>) -> Result<Output> {
    Ok(Output::List(api.list_widgets()?))
}

pub fn add<S: DataStore>(api: &mut WidgetsApi<S>, text: &[String]) -> Result<Output> {
    let content = joined_or_stdin(text)?;
    Ok(Output::Messages(api.create_widget(content)?))
}

pub fn view<S: DataStore>(api: &WidgetsApi<S>, ids: &[String]) -> Result<Output> {
    Ok(Output::Full(api.view_widgets(ids)?))
}

pub fn update<S: DataStore>(api: &mut WidgetsApi<S>, id: &str, text: &[String]) -> Result<Output> {
    let result = if text.is_empty() {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read content from stdin")?;
        while matches!(bytes.last(), Some(b'\n' | b'\r')) {
            bytes.pop();
        }
        api.update_widget_bytes(id, &bytes)?
    } else {
        api.update_widget(id, &text.join(" "))?
    };
    Ok(Output::Messages(result))
}

pub fn delete<S: DataStore>(api: &mut WidgetsApi<S>, ids: &[String]) -> Result<Output> {
    Ok(Output::Messages(api.delete_widgets(ids)?))
}

/// Run a debounced edit session fed by stdin lines.
pub fn edit<S: DataStore>(api: &mut WidgetsApi<S>, id: &str) -> Result<Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start the edit runtime")?;
    let result =
        runtime.block_on(async { api.edit_widget(id, BufReader::new(tokio::io::stdin())).await })?;
    Ok(Output::Messages(result))
}

pub fn import<S: DataStore>(api: &mut WidgetsApi<S>, file: &Path, replace: bool) -> Result<Output> {
    let raw = if file == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read import data from stdin")?;
        text
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?
    };
    let mode = if replace {
        ImportMode::Replace
    } else {
        ImportMode::Append
    };
    Ok(Output::Messages(api.import_widgets(&raw, mode)?))
}

pub fn export<S: DataStore>(api: &WidgetsApi<S>, file: Option<&PathBuf>) -> Result<Output> {
    let mut result = api.list_widgets()?;
    let mut json = serde_json::to_string_pretty(&result.listed_widgets)?;
    json.push('\n');

    match file {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            result.add_message(CmdMessage::success(format!(
                "Exported {} widget(s) to {}",
                result.listed_widgets.len(),
                path.display()
            )));
            Ok(Output::Messages(result))
        }
        None => Ok(Output::Export { result, json }),
    }
}

pub fn check<S: DataStore>(api: &WidgetsApi<S>, text: &[String]) -> Result<Output> {
    let content = joined_or_stdin(text)?;
    Ok(Output::Check(api.check_content(&content)))
}

pub fn doctor<S: DataStore>(api: &mut WidgetsApi<S>) -> Result<Output> {
    Ok(Output::Messages(api.doctor()?))
}
