use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde_json::Value;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let original = read_tree(&cli.original)?;
    let updated = read_tree(&cli.updated)?;

    match classdiff::diff(&original, &updated) {
        None => match cli.format {
            OutputFormat::Text => println!("{} No differences.", "✓".green()),
            // `null` stands for "no diff" so the output stays valid JSON.
            OutputFormat::Json => println!("null"),
        },
        Some(diff) => match cli.format {
            OutputFormat::Text => print_tree(&diff, 0),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diff)?),
        },
    }

    Ok(())
}

fn read_tree(path: &Path) -> anyhow::Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let tree: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    debug!(path = %path.display(), "parsed input tree");
    Ok(tree)
}

fn print_tree(diff: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match diff {
        Value::Object(map) => {
            for (key, value) in map {
                if value.is_object() {
                    println!("{}{}:", pad, key.bold());
                    print_tree(value, depth + 1);
                } else {
                    println!("{}{}: {}", pad, key.bold(), render_leaf(value));
                }
            }
        }
        other => println!("{}{}", pad, render_leaf(other)),
    }
}

fn render_leaf(value: &Value) -> String {
    match value {
        Value::String(s) => s.red().to_string(),
        other => other.to_string().red().to_string(),
    }
}
