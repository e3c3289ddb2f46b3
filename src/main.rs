// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lockstudy CLI entrypoint.
//!
//! By default this runs the interactive TUI over the built-in scenarios. `--print` renders one
//! state as plain text instead, and `--export-catalog` writes the catalog as JSON.

use std::error::Error;

use lockstudy::model::ScenarioCatalog;
use lockstudy::render::{render_plain, ViewModel};
use lockstudy::store::{catalog_to_json_string, CatalogFile};
use lockstudy::viewer::{Panel, ViewerEvent, ViewerState};

const CATALOG_ENV: &str = "LOCKSTUDY_CATALOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--catalog <file.json>]\n  {program} [--catalog <file.json>] --print [--select <n> [--panel info|code]]\n  {program} [--catalog <file.json>] --export-catalog <path|->\n\nWithout --catalog the catalog is read from ${CATALOG_ENV}, falling back to the built-in scenarios.\n\n--print writes the viewer as plain text to stdout. --select picks scenario n (1-based) and\n--panel opens its info or code panel.\n--export-catalog writes the catalog as JSON to <path>, or to stdout for `-`."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    catalog_path: Option<String>,
    print: bool,
    select: Option<usize>,
    panel: Option<Panel>,
    export_path: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--catalog" => {
                if options.catalog_path.is_some() {
                    return Err(());
                }
                options.catalog_path = Some(args.next().ok_or(())?);
            }
            "--print" => {
                if options.print {
                    return Err(());
                }
                options.print = true;
            }
            "--select" => {
                if options.select.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let n: usize = raw.parse().map_err(|_| ())?;
                options.select = Some(n);
            }
            "--panel" => {
                if options.panel.is_some() {
                    return Err(());
                }
                let panel = match args.next().ok_or(())?.as_str() {
                    "info" => Panel::Info,
                    "code" => Panel::Code,
                    _ => return Err(()),
                };
                options.panel = Some(panel);
            }
            "--export-catalog" => {
                if options.export_path.is_some() {
                    return Err(());
                }
                options.export_path = Some(args.next().ok_or(())?);
            }
            _ => return Err(()),
        }
    }

    if !options.print && (options.select.is_some() || options.panel.is_some()) {
        return Err(());
    }

    if options.panel.is_some() && options.select.is_none() {
        return Err(());
    }

    if options.print && options.export_path.is_some() {
        return Err(());
    }

    Ok(options)
}

fn load_catalog(options: &CliOptions) -> Result<ScenarioCatalog, Box<dyn Error>> {
    let path = options.catalog_path.clone().or_else(|| {
        std::env::var(CATALOG_ENV).ok().filter(|value| !value.trim().is_empty())
    });
    match path {
        Some(path) => Ok(CatalogFile::new(path).load()?),
        None => Ok(lockstudy::catalog::builtin_catalog()),
    }
}

/// Viewer state for `--print`, after checking `--select` against the catalog.
fn print_state(
    catalog: &ScenarioCatalog,
    select: Option<usize>,
    panel: Option<Panel>,
) -> Result<ViewerState, String> {
    let mut state = ViewerState::new();
    let Some(n) = select else {
        return Ok(state);
    };
    if n == 0 || n > catalog.len() {
        return Err(format!("--select {n} is out of range (catalog has {} scenarios)", catalog.len()));
    }

    state.apply(ViewerEvent::Select(n - 1), catalog.len());
    match panel {
        Some(Panel::Info) => state.apply(ViewerEvent::ToggleInfo, catalog.len()),
        Some(Panel::Code) => state.apply(ViewerEvent::ToggleCode, catalog.len()),
        None => {}
    }
    Ok(state)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "lockstudy".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let catalog = load_catalog(&options)?;

        if let Some(path) = options.export_path.as_deref() {
            if path == "-" {
                println!("{}", catalog_to_json_string(&catalog)?);
            } else {
                CatalogFile::new(path).save(&catalog)?;
            }
            return Ok(());
        }

        if options.print {
            let state = print_state(&catalog, options.select, options.panel)?;
            println!("{}", render_plain(&ViewModel::build(&catalog, &state)));
            return Ok(());
        }

        lockstudy::tui::run(catalog)
    })();

    if let Err(err) = result {
        eprintln!("lockstudy: {err}");
        std::process::exit(1);
    }
}
