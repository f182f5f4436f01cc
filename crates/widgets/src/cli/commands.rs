//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Decides the process exit status
//! - Handles argument parsing
//! - Installs the log subscriber
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Logging**: `tracing-subscriber` on stderr, filtered by `WIDGETS_LOG` (`-v` forces debug)
//! 3. **Context Setup**: Resolve configuration and the data directory, open the store
//! 4. **Dispatch**: Route commands to handlers
//! 5. **Output Formatting**: Render results as styled text or JSON
//! 6. **Error Handling**: Turn store errors into coded messages and exit status 1

use super::handlers::{self, Output};
use super::render::{
    render_full_widgets, render_json, render_messages, render_validation, render_widget_list,
    Rendered,
};
use super::setup::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use widgetapp::error::StoreError;
use widgetapp::init::initialize;

pub const LOG_ENV: &str = "WIDGETS_LOG";

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data.clone())?;
    debug!(data_dir = %ctx.data_dir.display(), "widgets context ready");
    let api = &mut ctx.api;

    let outcome = match &cli.command {
        None | Some(Commands::List) => handlers::list(api),
        Some(Commands::Add { text }) => handlers::add(api, text),
        Some(Commands::View { ids }) => handlers::view(api, ids),
        Some(Commands::Update { id, text }) => handlers::update(api, id, text),
        Some(Commands::Delete { ids }) => handlers::delete(api, ids),
        Some(Commands::Edit { id }) => handlers::edit(api, id),
        Some(Commands::Import { file, replace }) => handlers::import(api, file, *replace),
        Some(Commands::Export { file }) => handlers::export(api, file.as_ref()),
        Some(Commands::Check { text }) => handlers::check(api, text),
        Some(Commands::Doctor) => handlers::doctor(api),
    };

    let rendered = match outcome {
        Ok(output) => render_output(&output, cli.json)?,
        Err(err) => match err.downcast_ref::<StoreError>() {
            Some(store_err) => Rendered {
                stderr: describe_store_error(store_err),
                ..Default::default()
            },
            None => return Err(err),
        },
    };

    print!("{}", rendered.stdout);
    std::io::stdout().flush()?;
    eprint!("{}", rendered.stderr);

    Ok(if rendered.has_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn render_output(output: &Output, json: bool) -> Result<Rendered> {
    let result = output.result();
    let mut rendered = render_messages(&result.messages);

    if json {
        let stdout = match output {
            Output::Export { json, .. } => json.clone(),
            _ => render_json(result)?,
        };
        rendered.stdout = stdout;
        return Ok(rendered);
    }

    let body = match output {
        Output::List(r) => render_widget_list(&r.listed_widgets),
        Output::Full(r) => render_full_widgets(&r.listed_widgets),
        Output::Check(r) => r.validation.as_ref().map(render_validation).unwrap_or_default(),
        Output::Export { json, .. } => json.clone(),
        Output::Messages(_) => String::new(),
    };
    rendered.stdout = body + &rendered.stdout;
    Ok(rendered)
}

fn describe_store_error(err: &StoreError) -> String {
    let mut text = format!("Error [{}]: {}\n", err.code(), err);
    if err.is_recoverable() {
        text.push_str("This may be temporary; try again.\n");
    }
    if matches!(err, StoreError::Parse(_)) {
        text.push_str("Stored data was left untouched. Run `widgets doctor` to inspect it.\n");
    }
    text
}
