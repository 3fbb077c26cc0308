// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

use std::time;

use duration_str::deserialize_duration;
use serde::{Deserialize, Serialize};
use tokio::runtime::{Builder, Runtime};
use tracing::{info, warn};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RuntimeConfiguration {
    /// the number of cores to use for this runtime, 0 meaning all available
    #[serde(default = "default_n_cores")]
    n_cores: usize,

    /// the thread name for the runtime
    #[serde(default = "default_thread_name")]
    thread_name: String,

    /// the timeout for draining on shutdown
    #[serde(
        default = "default_drain_timeout",
        deserialize_with = "deserialize_duration"
    )]
    drain_timeout: time::Duration,
}

impl Default for RuntimeConfiguration {
    fn default() -> Self {
        RuntimeConfiguration {
            n_cores: default_n_cores(),
            thread_name: default_thread_name(),
            drain_timeout: default_drain_timeout(),
        }
    }
}

fn default_n_cores() -> usize {
    0
}

fn default_thread_name() -> String {
    "cra".to_string()
}

fn default_drain_timeout() -> time::Duration {
    time::Duration::from_secs(10)
}

impl RuntimeConfiguration {
    pub fn new() -> Self {
        RuntimeConfiguration::default()
    }

    pub fn with_cores(n_cores: usize) -> Self {
        RuntimeConfiguration {
            n_cores,
            ..RuntimeConfiguration::default()
        }
    }

    pub fn n_cores(&self) -> usize {
        self.n_cores
    }

    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    pub fn drain_timeout(&self) -> time::Duration {
        self.drain_timeout
    }
}

pub struct CraRuntime {
    pub config: RuntimeConfiguration,
    pub runtime: Runtime,
}

#[cfg(feature = "multicore")]
fn available_cores() -> usize {
    num_cpus::get()
}

#[cfg(not(feature = "multicore"))]
fn available_cores() -> usize {
    1
}

#[cfg(feature = "multicore")]
fn build_threaded(config: &RuntimeConfiguration, cores: usize) -> std::io::Result<Runtime> {
    info!(%cores, "Using multi-threaded runtime");
    Builder::new_multi_thread()
        .enable_all()
        .thread_name(config.thread_name.as_str())
        .worker_threads(cores)
        .max_blocking_threads(cores)
        .build()
}

#[cfg(not(feature = "multicore"))]
fn build_threaded(config: &RuntimeConfiguration, _cores: usize) -> std::io::Result<Runtime> {
    info!("Multicore support disabled, using single-threaded runtime");
    Builder::new_current_thread()
        .enable_all()
        .thread_name(config.thread_name.as_str())
        .build()
}

pub fn build(config: &RuntimeConfiguration) -> std::io::Result<CraRuntime> {
    let n_cpu = available_cores();

    let cores = if config.n_cores > n_cpu {
        warn!(
            "Requested number of cores ({}) is greater than available cores ({}). Using all available cores",
            config.n_cores, n_cpu
        );
        n_cpu
    } else if config.n_cores == 0 {
        n_cpu
    } else {
        config.n_cores
    };

    let runtime = match cores {
        1 => {
            info!("Using single-threaded runtime");
            Builder::new_current_thread()
                .enable_all()
                .thread_name(config.thread_name.as_str())
                .build()?
        }
        _ => build_threaded(config, cores)?,
    };

    Ok(CraRuntime {
        config: config.clone(),
        runtime,
    })
}
