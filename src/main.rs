// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Troupe CLI entrypoint.
//!
//! Loads a world file (or the built-in demo world), applies configuration overrides and runs the
//! terminal UI.

use std::error::Error;
use std::path::{Path, PathBuf};

use troupe::config::ConfigOverrides;
use troupe::store::WorldFile;

const DEFAULT_WORLD_FILE: &str = "world.json";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<world.json>] [--max-party <n>] [--allow-empty-party] \
         [--no-portraits] [--log-file <path>]\n  \
         {program} [--world <world.json>] [options]\n  \
         {program} --demo [options]\n\n\
         If world.json/--world is omitted, `{DEFAULT_WORLD_FILE}` in the current directory is \
         used.\n--demo uses a built-in demo world and cannot be combined with a world file.\n\n\
         --max-party, --allow-empty-party and --no-portraits override the world's config.\n\
         --log-file writes tracing output (filtered by RUST_LOG, default info) to the given \
         file.\nTROUPE_ACCENT=#RRGGBB changes the accent colour."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    world: Option<PathBuf>,
    overrides: ConfigOverrides,
    log_file: Option<PathBuf>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--world" => {
                if options.world.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.world = Some(PathBuf::from(path));
            }
            "--max-party" => {
                if options.overrides.max_party_size.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let max_party_size: usize = raw.parse().map_err(|_| ())?;
                if max_party_size == 0 {
                    return Err(());
                }
                options.overrides.max_party_size = Some(max_party_size);
            }
            "--allow-empty-party" => {
                if options.overrides.allow_empty_party {
                    return Err(());
                }
                options.overrides.allow_empty_party = true;
            }
            "--no-portraits" => {
                if options.overrides.hide_portrait_icons {
                    return Err(());
                }
                options.overrides.hide_portrait_icons = true;
            }
            "--log-file" => {
                if options.log_file.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.log_file = Some(PathBuf::from(path));
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.world.is_some() {
                    return Err(());
                }
                options.world = Some(PathBuf::from(arg));
            }
        }
    }

    if options.demo && options.world.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "troupe".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        troupe::logging::init(options.log_file.as_deref())?;

        let (mut world, path) = if options.demo {
            (troupe::tui::demo_world(), PathBuf::from(troupe::tui::DEMO_WORLD_NAME))
        } else {
            let path = options.world.unwrap_or_else(|| PathBuf::from(DEFAULT_WORLD_FILE));
            (WorldFile::load(&path)?, path)
        };
        world.config = world.config.with_overrides(&options.overrides)?;
        let game = world.into_game(Path::new(&path))?;

        tracing::info!(world = %path.display(), "starting terminal ui");
        troupe::tui::run(game)
    })();

    if let Err(err) = result {
        eprintln!("troupe: {err}");
        std::process::exit(1);
    }
}
