// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared Criterion setup for the layout and collapse benches.
//!
//! A full layout pass over the bench forests takes well under a millisecond, so the defaults favor
//! many short samples over long measurement windows. Every knob can be overridden through a
//! `TRACEGRAPH_BENCH_*` variable; `TRACEGRAPH_BENCH_FLAMEGRAPH=0` turns the pprof hook off.

use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

const ENV_PREFIX: &str = "TRACEGRAPH_BENCH_";

struct BenchSettings {
    profile_frequency: i32,
    flamegraph: bool,
    sample_size: usize,
    warm_up: Duration,
    measurement: Duration,
    noise_threshold: f64,
}

impl BenchSettings {
    fn from_env() -> Self {
        Self {
            profile_frequency: env_or("PROFILE_FREQ", 997i32).clamp(1, 10_000),
            flamegraph: env_or("FLAMEGRAPH", 1u8) != 0,
            sample_size: env_or("SAMPLE_SIZE", 200usize).clamp(10, 1_000),
            warm_up: Duration::from_millis(env_or("WARMUP_MS", 500u64).clamp(100, 30_000)),
            measurement: Duration::from_millis(
                env_or("MEASUREMENT_MS", 2_000u64).clamp(250, 60_000),
            ),
            noise_threshold: env_or("NOISE_THRESHOLD", 0.03f64).clamp(0.0, 1.0),
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(format!("{ENV_PREFIX}{name}"))
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
}

pub fn criterion() -> Criterion {
    let settings = BenchSettings::from_env();

    let criterion = Criterion::default()
        .sample_size(settings.sample_size)
        .warm_up_time(settings.warm_up)
        .measurement_time(settings.measurement)
        .noise_threshold(settings.noise_threshold);

    if !settings.flamegraph {
        return criterion;
    }
    criterion.with_profiler(PProfProfiler::new(
        settings.profile_frequency,
        Output::Flamegraph(None),
    ))
}
