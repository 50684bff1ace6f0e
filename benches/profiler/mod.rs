// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

/// Roster operations finish in nanoseconds, so the defaults favour many short samples.
///
/// - `TROUPE_BENCH_SAMPLES` (default 100)
/// - `TROUPE_BENCH_MILLIS`: measurement window per case (default 1500)
/// - `TROUPE_BENCH_FLAMEGRAPH`: `0` turns the pprof profiler off; any other value is its
///   sampling frequency in Hz (default 997)
pub fn criterion() -> Criterion {
    let sample_size = env_or("TROUPE_BENCH_SAMPLES", 100usize).clamp(10, 500);
    let millis = env_or("TROUPE_BENCH_MILLIS", 1500u64).clamp(200, 60_000);
    let measurement = Duration::from_millis(millis);
    let frequency = env_or("TROUPE_BENCH_FLAMEGRAPH", 997i32).clamp(0, 5000);

    let criterion = Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(measurement / 3)
        .measurement_time(measurement);
    if frequency == 0 {
        return criterion;
    }
    criterion.with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
