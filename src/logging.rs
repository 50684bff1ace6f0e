// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagnostic tracing.
//!
//! The terminal UI owns stdout and stderr while it runs, so events are only recorded when a log
//! file is given. The filter comes from `RUST_LOG` and defaults to `info`.
//!
//! ```bash
//! RUST_LOG=troupe=debug troupe --demo --log-file troupe.log
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. Without a log file nothing is installed and events are
/// dropped.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false).compact())
        .try_init()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    Ok(())
}
