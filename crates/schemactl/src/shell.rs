//! Interactive shell: run commands without the `schemactl` prefix.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::cli::{Cli, GlobalArgs};
use crate::commands;
use crate::output;
use crate::tokenizer::tokenize;

const PROMPT: &str = "schemactl> ";

/// What to do with one line of shell input.
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Empty,
    Exit,
    Help,
    Command(Vec<String>),
}

fn classify(input: &str) -> Line {
    match input.trim() {
        "" => Line::Empty,
        "exit" | "quit" | "q" => Line::Exit,
        "help" | "?" => Line::Help,
        other => {
            let args = tokenize(other);
            if args.is_empty() {
                Line::Empty
            } else {
                Line::Command(args)
            }
        }
    }
}

/// Read commands from stdin until `exit` or end of input.
///
/// Command errors are printed and the loop continues.
pub async fn run(global: &GlobalArgs) -> Result<()> {
    print_banner();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{PROMPT}");
        std::io::stdout().flush().context("Failed to write prompt")?;

        let Some(input) = lines.next_line().await.context("Failed to read input")? else {
            println!();
            println!("Goodbye!");
            return Ok(());
        };

        match classify(&input) {
            Line::Empty => continue,
            Line::Exit => {
                println!("Goodbye!");
                return Ok(());
            }
            Line::Help => print_help(),
            Line::Command(args) => {
                execute(args, global).await;
                println!();
            }
        }
    }
}

async fn execute(args: Vec<String>, global: &GlobalArgs) {
    debug!(?args, "shell command");

    let argv = std::iter::once("schemactl".to_string()).chain(args);
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(err) => {
            // Covers --help and --version as well as usage errors
            let _ = err.print();
            return;
        }
    };

    let Some(command) = cli.command else {
        print_help();
        return;
    };

    let line_global = cli.global.layered_over(global);
    if let Err(err) = commands::dispatch(command, &line_global).await {
        output::error(&format!("{err:#}"));
    }
}

fn print_banner() {
    println!();
    println!("  {}", "schemactl".bold());
    println!("  Version: {}", env!("SCHEMACTL_VERSION"));
    println!("  Type 'help' for commands, 'exit' to quit");
    println!();
}

fn print_help() {
    let sections: [(&str, &[(&str, &str)]); 4] = [
        ("COMMANDS", &[
            ("health", "Check API health status"),
            ("reference-data", "Get all doc types and countries"),
            ("version", "Print the version number"),
        ]),
        ("SCHEMAS", &[
            ("schemas list", "List schemas (--status, -t, -c, --visibility)"),
            ("schemas get <id>", "Get a schema by ID"),
            ("schemas version <vid>", "Get one schema version"),
            ("schemas versions <id>", "List all versions of a schema"),
            ("schemas create", "Create a schema: -n NAME -t TYPE --content @file.json"),
            ("schemas update <id>", "Update a schema (new version if active)"),
            ("schemas activate <id>", "Activate a draft schema"),
            ("schemas deprecate <id>", "Deprecate an active schema"),
            ("schemas delete <id>", "Delete a draft schema"),
            ("schemas find-best", "Find the best schema: -t Invoice -c PT"),
            ("schemas match <file>", "Classify a file and match a schema"),
            ("schemas generate", "Generate a schema: -f FILE | --text TEXT -t TYPE -c CC"),
        ]),
        ("DOC TYPES", &[
            ("doc-types list", "List doc types (--all for inactive)"),
            ("doc-types get <code>", "Get a doc type"),
            ("doc-types create <code> <name>", "Create a doc type"),
            ("doc-types update <code>", "Update a doc type (-n, -d, --active)"),
            ("doc-types delete <code>", "Soft delete a doc type"),
        ]),
        ("COUNTRIES", &[
            ("countries list", "List countries (--all for inactive)"),
            ("countries get <code>", "Get a country"),
            ("countries create <code> <name>", "Create a country"),
            ("countries update <code>", "Update a country (-n, --active)"),
            ("countries delete <code>", "Soft delete a country"),
        ]),
    ];

    for (title, entries) in sections {
        println!();
        output::heading(title);
        for (usage, about) in entries {
            println!("  {usage:<32}{about}");
        }
    }

    println!();
    println!("Append --json to any command for JSON output, or --help for its flags.");
    println!("Type 'exit', 'quit' or 'q' to leave.");
}
