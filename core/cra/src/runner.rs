// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use tracing::{debug, info, span};

use crate::args::Args;
use crate::bootstrap::{self, AppRuntime};
use crate::build_info;
use crate::config::ConfigLoader;
use crate::runtime;
use cra_security::GlobalRegistry;

/// Production runtime: builds the tokio runtime described by the `runtime:`
/// config section and blocks until a shutdown signal arrives.
pub struct ServiceRuntime {
    config: ConfigLoader,
}

impl ServiceRuntime {
    pub fn new(config: ConfigLoader) -> Self {
        ServiceRuntime { config }
    }
}

impl AppRuntime for ServiceRuntime {
    fn run(mut self, args: &[String]) -> Result<()> {
        let rt = runtime::build(self.config.runtime()).context("failed to build runtime")?;
        let drain_timeout = rt.config.drain_timeout();

        let result = rt.runtime.block_on(serve(self.config, args));

        // Bounded window for spawned tasks to wind down
        rt.runtime.shutdown_timeout(drain_timeout);
        result
    }
}

/// Non-blocking startup half of the async body: subscriber setup and
/// lifecycle reporting. Runtime arguments are reported exactly as received
/// from the handoff.
fn announce(config: &mut ConfigLoader, args: &[String]) {
    config.tracing().setup_tracing_subscriber();

    debug!(config = ?config);
    info!(build_info = %build_info::BUILD_INFO);
    if !args.is_empty() {
        info!(?args, "runtime arguments");
    }
    info!(
        providers = ?cra_security::global().read().names(),
        "security provider chain active"
    );
}

/// Async body: startup reporting, lifecycle span, block until shutdown.
/// Assumes the security provider chain is already registered.
async fn serve(mut config: ConfigLoader, args: &[String]) -> Result<()> {
    let root_span = span!(tracing::Level::INFO, "application_lifecycle");
    let _enter = root_span.enter();

    announce(&mut config, args);

    info!("Runtime started");
    cra_signal::shutdown().await;
    info!("Received shutdown signal");

    Ok(())
}

/// Load config, register the security provider chain, and hand control to
/// the runtime for the remaining process lifetime.
///
/// This is a **synchronous** blocking call. A provider registration failure
/// returns before the runtime is started; the caller exits non-zero.
pub fn run(args: &Args) -> Result<()> {
    let config = match args.config() {
        Some(path) => ConfigLoader::new(path).context("failed to load configuration")?,
        None => ConfigLoader::defaults(),
    };

    let service = ServiceRuntime::new(config);

    // Providers must be in place before anything can request crypto.
    bootstrap::bootstrap(
        &mut GlobalRegistry,
        bootstrap::default_setups(),
        service,
        args.runtime_args(),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn announce_reports_runtime_args_verbatim() {
        let mut config = ConfigLoader::defaults();
        let args = vec!["--port".to_string(), "8080".to_string()];
        announce(&mut config, &args);
        assert!(logs_contain("--port"));
        assert!(logs_contain("8080"));
    }

    #[test]
    #[traced_test]
    fn announce_reports_the_active_provider_chain() {
        let mut config = ConfigLoader::defaults();
        announce(&mut config, &[]);
        assert!(logs_contain("security provider chain active"));
    }
}
