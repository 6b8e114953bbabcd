//! `chatter render`: compose a template and show the batches.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chatter_compose::{ComposeConfig, CompositionManager};
use chatter_core::{AddressingContext, CompositionResult, MessageKind, Target};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::cli::RenderArgs;
use crate::output;

#[derive(Serialize)]
struct BatchRow<'a> {
    target: &'a str,
    priority: u32,
    handler: Option<&'a str>,
    commands: Vec<String>,
}

pub fn handle(args: RenderArgs) -> Result<()> {
    let config = load_config(&args)?;
    let data = load_data(args.data.as_deref())?;
    let context = build_context(&args)?;

    tracing::debug!(template = %args.template, templates_dir = %config.templates_dir.display(), "rendering");

    let manager = CompositionManager::from_config(config);
    let mut result = manager.try_compose(&data, &args.template, &context)?;
    if let Some(max) = args.max_length {
        result.conform_to_max_length(max);
    }

    print_result(&result);
    Ok(())
}

fn load_config(args: &RenderArgs) -> Result<ComposeConfig> {
    let config = match &args.config {
        Some(path) => ComposeConfig::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => ComposeConfig::from_env(),
    };
    Ok(match &args.templates {
        Some(dir) => config.with_templates_dir(dir),
        None => config,
    })
}

/// Inline JSON when the argument looks like an object, otherwise a file path.
fn load_data(arg: Option<&str>) -> Result<Map<String, JsonValue>> {
    let Some(arg) = arg else {
        return Ok(Map::new());
    };
    let source = if arg.trim_start().starts_with('{') {
        arg.to_string()
    } else {
        std::fs::read_to_string(Path::new(arg))
            .with_context(|| format!("Failed to read data file {arg}"))?
    };
    let value: JsonValue =
        serde_json::from_str(&source).map_err(|e| anyhow!("Invalid JSON data: {}", e))?;
    match value {
        JsonValue::Object(map) => Ok(map),
        other => Err(anyhow!("Template data must be a JSON object, got {}", other)),
    }
}

fn build_context(args: &RenderArgs) -> Result<AddressingContext> {
    let user = Target::parse(&args.user)?;
    let mut context = AddressingContext::new(user, &args.receiver);
    if let Some(channel) = &args.channel {
        context = context.with_channel(Target::parse(channel)?);
    }
    if args.private {
        context = context.with_input_kind(MessageKind::PrivateMessage);
    }
    Ok(context.with_prefixes_used(args.prefixes))
}

fn print_result(result: &CompositionResult) {
    if result.is_empty() {
        output::dim("Nothing to send");
        return;
    }

    if output::is_json() {
        output::data("batches", result);
        return;
    }

    output::header(&format!("{} batch(es)", result.len()));

    let mut table = output::table();
    output::table_header(&mut table, &["Target", "Priority", "Handler", "Commands"]);

    let rows: Vec<BatchRow> = result
        .iter()
        .map(|batch| BatchRow {
            target: batch.target.name(),
            priority: batch.priority,
            handler: batch.handler.as_deref(),
            commands: batch.commands(),
        })
        .collect();
    for row in &rows {
        let priority = row.priority.to_string();
        let commands = row.commands.join("\n");
        output::table_row(
            &mut table,
            &[row.target, &priority, row.handler.unwrap_or("-"), &commands],
        );
    }

    output::table_print(&table, &rows);
}
