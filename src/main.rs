// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tracegraph CLI entrypoint.
//!
//! Reads a trace snapshot (JSON) from a file or stdin, lays it out and writes the layout JSON to
//! stdout. Diagnostics go to stderr; set `TRACEGRAPH_LOG` (e.g. `debug`) to see them.

use std::error::Error;
use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

use tracegraph::format::{
    export_layout_json, load_trace_forest, parse_trace_forest, ExportOptions,
};
use tracegraph::{CollapseController, CollapsedSet, Direction, LayoutConfig, NodeId};

const LOG_ENV: &str = "TRACEGRAPH_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<trace.json> | -] [--direction horizontal|vertical] [--collapse <id>]... [--select <id>] [--config <config.json>] [--connectors] [--pretty]\n\nReads the trace from stdin when the path is omitted or `-`.\n--collapse may be repeated; collapsed nodes stay visible, their descendants are hidden.\n--connectors adds connector geometry (clipped endpoints, curves, label circles) to the output.\n\nSet {LOG_ENV} (e.g. `debug`) for diagnostics on stderr."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Option<String>,
    direction: Option<Direction>,
    collapse: Vec<NodeId>,
    select: Option<NodeId>,
    config: Option<String>,
    connectors: bool,
    pretty: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--direction" => {
                if options.direction.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.direction = Some(raw.parse().map_err(|_| ())?);
            }
            "--collapse" => {
                let raw = args.next().ok_or(())?;
                options.collapse.push(NodeId::new(raw).map_err(|_| ())?);
            }
            "--select" => {
                if options.select.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.select = Some(NodeId::new(raw).map_err(|_| ())?);
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "--connectors" => {
                if options.connectors {
                    return Err(());
                }
                options.connectors = true;
            }
            "--pretty" => {
                if options.pretty {
                    return Err(());
                }
                options.pretty = true;
            }
            "-" => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
        }
    }

    Ok(options)
}

fn load_config(path: Option<&str>) -> Result<LayoutConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };
    let raw =
        std::fs::read_to_string(path).map_err(|err| format!("failed to read {path}: {err}"))?;
    let config =
        serde_json::from_str(&raw).map_err(|err| format!("invalid config {path}: {err}"))?;
    Ok(config)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "tracegraph".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();

        let config = load_config(options.config.as_deref())?;
        let forest = match options.input.as_deref() {
            None | Some("-") => parse_trace_forest(&io::read_to_string(io::stdin())?)?,
            Some(path) => load_trace_forest(path)?,
        };
        tracing::info!(roots = forest.roots().len(), nodes = forest.node_count(), "trace loaded");

        let collapsed = options.collapse.into_iter().collect::<CollapsedSet>();
        let mut controller = CollapseController::with_state(
            forest,
            config,
            options.direction.unwrap_or_default(),
            collapsed,
        );
        controller.select(options.select);

        let export = ExportOptions { connectors: options.connectors, pretty: options.pretty };
        let json = export_layout_json(&controller.view(), controller.config(), export)?;

        let mut stdout = io::stdout().lock();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("tracegraph: {err}");
        std::process::exit(1);
    }
}
