// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use rustls::crypto::CryptoProvider;

use crate::errors::SecurityError;

/// A named, pluggable bundle of cryptographic algorithms.
///
/// Providers are consulted by algorithm lookups in registry position order,
/// first match wins. Implementations delegate the actual cryptography to a
/// rustls backend and stay black boxes behind this trait.
pub trait SecurityProvider: Send + Sync {
    /// Stable name used for registry ordering, lookups and logging.
    fn name(&self) -> &str;

    /// Identifiers of the algorithms this provider can serve, in the
    /// backend's own preference order.
    fn algorithms(&self) -> &[String];

    /// The rustls crypto backend this provider delegates to.
    fn backend(&self) -> &CryptoProvider;

    fn supports(&self, algorithm: &str) -> bool {
        self.algorithms().iter().any(|a| a == algorithm)
    }
}

/// Fallible construction seam for providers.
///
/// Construction happens exactly once per process, during bootstrap; a builder
/// that fails aborts startup before the runtime handoff.
pub trait ProviderBuilder {
    /// Name of the provider this builder produces.
    fn name(&self) -> &'static str;

    /// Build the provider.
    fn build(&self) -> Result<Arc<dyn SecurityProvider>, SecurityError>;
}

/// Write access to an ordered provider registry.
///
/// The single capability the bootstrap sequence needs. Implemented by plain
/// [`crate::registry::ProviderChain`] values for tests and by
/// [`crate::registry::GlobalRegistry`] for the process-wide chain.
pub trait ProviderRegistry {
    /// Register `provider` at the 1-based `position`. Returns the effective
    /// position after clamping.
    fn register(
        &mut self,
        provider: Arc<dyn SecurityProvider>,
        position: usize,
    ) -> Result<usize, SecurityError>;

    /// Called once after all registrations succeed, before the chain is
    /// consulted. The process-wide registry installs the rustls default here.
    fn commit(&mut self) -> Result<(), SecurityError> {
        Ok(())
    }
}
