//! `chatter directives` subcommands.

use anyhow::{Result, anyhow};
use chatter_compose::ComposeConfig;
use chatter_directives::DirectiveSet;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::DirectivesAction;
use crate::output;

#[derive(Serialize)]
struct Item<'a> {
    name: &'a str,
    description: &'a str,
}

pub fn handle(action: DirectivesAction) -> Result<()> {
    let config = ComposeConfig::from_env();
    let set = DirectiveSet::with_defaults(&config.directive_settings());

    match action {
        DirectivesAction::List => list(&set),
        DirectivesAction::Info { directive } => info(&set, &directive),
        DirectivesAction::Call {
            directive,
            args,
            body,
        } => call(&set, &directive, &args, body.as_deref()),
    }
}

fn list(set: &DirectiveSet) -> Result<()> {
    let directives = set.list_directives();

    if directives.is_empty() {
        output::dim("No directives registered");
        return Ok(());
    }

    output::header("Template Directives");

    let mut table = output::table();
    output::table_header(&mut table, &["Directive", "Description"]);

    let items: Vec<_> = directives
        .iter()
        .map(|d| {
            output::table_row(&mut table, &[&d.name, &d.description]);
            Item {
                name: &d.name,
                description: &d.description,
            }
        })
        .collect();

    output::table_print(&table, &items);

    Ok(())
}

fn info(set: &DirectiveSet, name: &str) -> Result<()> {
    let directives = set.list_directives();
    let directive = directives
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| anyhow!("Directive not found: {}", name))?;

    output::header(&format!("Directive: {}", directive.name));
    output::dim(&directive.description);
    println!();
    output::header("Parameters");
    output::json_pretty(&directive.parameters);

    Ok(())
}

fn call(set: &DirectiveSet, name: &str, args_str: &str, body: Option<&str>) -> Result<()> {
    let args: JsonValue =
        serde_json::from_str(args_str).map_err(|e| anyhow!("Invalid JSON arguments: {}", e))?;
    let body = body.map(unescape_newlines);

    let text = set.call(name, body.as_deref(), args)?;
    output::raw(name, &text);

    Ok(())
}

/// Shell arguments cannot carry line breaks easily; accept `\n` instead.
fn unescape_newlines(body: &str) -> String {
    body.replace("\\n", "\n")
}
