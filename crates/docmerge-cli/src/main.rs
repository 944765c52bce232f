use anyhow::{Context, Result};
use docmerge_config::Config;
use docmerge_engine::export::{to_markdown, to_plain_text};
use docmerge_engine::{MergeDocument, RelationTable, io};
use std::{env, path::Path, path::PathBuf, process};

/// What gets written, chosen by the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Markdown,
    PlainText,
}

impl OutputFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("md") | Some("markdown") => OutputFormat::Markdown,
            Some("txt") => OutputFormat::PlainText,
            _ => OutputFormat::Json,
        }
    }
}

struct Job {
    template_path: PathBuf,
    data_path: PathBuf,
    output_path: PathBuf,
    relations: RelationTable,
}

fn run(job: &Job) -> Result<()> {
    let template = MergeDocument::load(&job.template_path)
        .with_context(|| format!("loading template {}", job.template_path.display()))?;
    let data = io::load_data(&job.data_path)
        .with_context(|| format!("loading data {}", job.data_path.display()))?;

    let output = &job.output_path;
    let written = match OutputFormat::for_path(output) {
        OutputFormat::Json => template.write(output, data, &job.relations),
        OutputFormat::Markdown => {
            io::write_file(output, &to_markdown(&template.merge(data, &job.relations)))
        }
        OutputFormat::PlainText => {
            io::write_file(output, &to_plain_text(&template.merge(data, &job.relations)))
        }
    };
    written.with_context(|| format!("writing {}", output.display()))?;

    log::info!("Wrote {}", output.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Determine paths from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let job = if args.len() == 4 {
        // Relation rules only ever come from the config file
        let relations = match Config::load() {
            Ok(Some(config)) => config.relation_table(),
            Ok(None) => RelationTable::default(),
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                process::exit(1);
            }
        };
        Job {
            template_path: PathBuf::from(&args[1]),
            data_path: PathBuf::from(&args[2]),
            output_path: PathBuf::from(&args[3]),
            relations,
        }
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => Job {
                relations: config.relation_table(),
                template_path: config.template_path,
                data_path: config.data_path,
                output_path: config.output_path,
            },
            Ok(None) => {
                eprintln!("Error: No paths provided and no config file found");
                eprintln!("Usage: {} <template> <data> <output>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <template> <data> <output>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [<template> <data> <output>]", args[0]);
        process::exit(1);
    };

    run(&job)
}
