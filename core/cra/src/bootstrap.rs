// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

//! Startup sequence: ordered security-provider registration followed by the
//! runtime handoff.
//!
//! The sequence is linear and runs once per process, on the initial thread:
//! build and register each provider strictly in order, commit the registry,
//! then hand control to the runtime for the remaining process lifetime. Any
//! registration failure aborts before the handoff; a process must never serve
//! with a partially configured provider chain.

use thiserror::Error;
use tracing::{debug, info};

use cra_security::{EntrustBuilder, IaikBuilder, ProviderBuilder, ProviderRegistry, SecurityError};

/// Abstract runtime-start capability. Under normal operation `run` blocks
/// until process shutdown; tests substitute stubs that return immediately.
pub trait AppRuntime {
    fn run(self, args: &[String]) -> anyhow::Result<()>;
}

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("provider registration failed: {0}")]
    Registration(#[from] SecurityError),
    #[error("runtime error: {0}")]
    Runtime(anyhow::Error),
}

/// One step of the registration sequence.
pub struct ProviderSetup {
    builder: Box<dyn ProviderBuilder>,
    position: usize,
}

impl ProviderSetup {
    pub fn new(builder: Box<dyn ProviderBuilder>, position: usize) -> Self {
        ProviderSetup { builder, position }
    }
}

/// The stock CRA chain: Entrust at position 1, IAIK at position 2.
pub fn default_setups() -> Vec<ProviderSetup> {
    vec![
        ProviderSetup::new(Box::new(EntrustBuilder), 1),
        ProviderSetup::new(Box::new(IaikBuilder), 2),
    ]
}

/// Register `setups` into `registry` strictly in order, commit the registry,
/// then invoke `runtime`, forwarding `args` untouched.
///
/// The first failure aborts: no later builder runs and the runtime never
/// starts. Registration is attempted exactly once per call; running the
/// sequence twice in one process leaves duplicate providers behind and is
/// not supported.
pub fn bootstrap<Reg, R>(
    registry: &mut Reg,
    setups: Vec<ProviderSetup>,
    runtime: R,
    args: &[String],
) -> Result<(), BootstrapError>
where
    Reg: ProviderRegistry,
    R: AppRuntime,
{
    for setup in setups {
        let provider = setup.builder.build()?;
        let position = registry.register(provider, setup.position)?;
        debug!(
            provider = setup.builder.name(),
            position, "security provider registered"
        );
    }
    registry.commit()?;

    info!("security providers registered, handing off to runtime");
    runtime.run(args).map_err(BootstrapError::Runtime)
}
