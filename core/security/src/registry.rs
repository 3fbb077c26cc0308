// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

//! Ordered, 1-based security provider registry.
//!
//! The process-wide chain is created before any application code runs,
//! mutated only during bootstrap, and treated as read-only afterwards.
//! Algorithm lookups walk the chain in position order, first match wins.

use std::sync::{Arc, Once};

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::errors::SecurityError;
use crate::provider::{ProviderRegistry, SecurityProvider};

/// Ordered provider chain. Positions are 1-based; position 1 is consulted
/// first.
#[derive(Clone, Default)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn SecurityProvider>>,
}

impl ProviderChain {
    pub fn new() -> Self {
        ProviderChain::default()
    }

    /// Insert `provider` at the 1-based `position`.
    ///
    /// Out-of-range positions are clamped to `[1, len + 1]`; entries at or
    /// below the effective position shift down one slot. Duplicate names are
    /// allowed and never deduplicated. Returns the effective position.
    pub fn insert_at(
        &mut self,
        provider: Arc<dyn SecurityProvider>,
        position: usize,
    ) -> Result<usize, SecurityError> {
        if position == 0 {
            return Err(SecurityError::registration(
                provider.name(),
                "positions are 1-based",
            ));
        }

        let index = (position - 1).min(self.providers.len());
        debug!(
            provider = provider.name(),
            position = index + 1,
            "inserting security provider"
        );
        self.providers.insert(index, provider);
        Ok(index + 1)
    }

    /// First provider able to serve `algorithm`, in position order.
    pub fn lookup(&self, algorithm: &str) -> Option<Arc<dyn SecurityProvider>> {
        self.providers
            .iter()
            .find(|p| p.supports(algorithm))
            .cloned()
    }

    /// Provider at the 1-based `position`, if any.
    pub fn provider_at(&self, position: usize) -> Option<Arc<dyn SecurityProvider>> {
        position
            .checked_sub(1)
            .and_then(|i| self.providers.get(i))
            .cloned()
    }

    /// Provider names in position order.
    pub fn names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderChain")
            .field("providers", &self.names())
            .finish()
    }
}

impl ProviderRegistry for ProviderChain {
    fn register(
        &mut self,
        provider: Arc<dyn SecurityProvider>,
        position: usize,
    ) -> Result<usize, SecurityError> {
        self.insert_at(provider, position)
    }
}

static GLOBAL: Lazy<RwLock<ProviderChain>> = Lazy::new(|| RwLock::new(ProviderChain::new()));

/// The process-wide provider chain.
pub fn global() -> &'static RwLock<ProviderChain> {
    &GLOBAL
}

static PROCESS_DEFAULT: Once = Once::new();

/// Install the position-1 provider's rustls backend as the process default.
///
/// Runs at most once per process; later calls are no-ops. Must be called
/// after the chain head is registered and before any TLS handshake.
pub fn install_process_default(chain: &ProviderChain) -> Result<(), SecurityError> {
    let head = chain.provider_at(1).ok_or(SecurityError::EmptyChain)?;

    PROCESS_DEFAULT.call_once(|| match head.backend().clone().install_default() {
        Ok(()) => {
            info!(provider = head.name(), "rustls process default installed");
        }
        Err(_) => {
            // A default installed earlier in the process wins; chain lookups
            // are unaffected.
            warn!(
                provider = head.name(),
                "rustls process default was already installed"
            );
        }
    });

    Ok(())
}

/// Handle to the process-wide chain, locking per call so no guard is held
/// across the runtime handoff.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalRegistry;

impl ProviderRegistry for GlobalRegistry {
    fn register(
        &mut self,
        provider: Arc<dyn SecurityProvider>,
        position: usize,
    ) -> Result<usize, SecurityError> {
        global().write().insert_at(provider, position)
    }

    fn commit(&mut self) -> Result<(), SecurityError> {
        install_process_default(&global().read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustls::crypto::CryptoProvider;
    use tracing_test::traced_test;

    struct FakeProvider {
        name: &'static str,
        algorithms: Vec<String>,
        backend: CryptoProvider,
    }

    impl FakeProvider {
        fn new(name: &'static str, algorithms: &[&str]) -> Arc<dyn SecurityProvider> {
            Arc::new(FakeProvider {
                name,
                algorithms: algorithms.iter().map(|a| a.to_string()).collect(),
                backend: rustls::crypto::ring::default_provider(),
            })
        }
    }

    impl SecurityProvider for FakeProvider {
        fn name(&self) -> &str {
            self.name
        }

        fn algorithms(&self) -> &[String] {
            &self.algorithms
        }

        fn backend(&self) -> &CryptoProvider {
            &self.backend
        }
    }

    #[test]
    #[traced_test]
    fn insert_at_head_shifts_existing_entries_down() {
        let mut chain = ProviderChain::new();
        chain.insert_at(FakeProvider::new("first", &["a"]), 1).unwrap();
        chain.insert_at(FakeProvider::new("second", &["b"]), 1).unwrap();
        assert_eq!(chain.names(), vec!["second", "first"]);
    }

    #[test]
    fn insert_positions_are_one_based() {
        let mut chain = ProviderChain::new();
        let err = chain
            .insert_at(FakeProvider::new("p", &[]), 0)
            .unwrap_err();
        assert!(matches!(err, SecurityError::Registration { .. }));
        assert!(chain.is_empty());
    }

    #[test]
    fn out_of_range_position_is_clamped() {
        let mut chain = ProviderChain::new();
        let effective = chain
            .insert_at(FakeProvider::new("p", &[]), 42)
            .unwrap();
        assert_eq!(effective, 1);
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn lookup_is_first_match_wins() {
        let mut chain = ProviderChain::new();
        chain
            .insert_at(FakeProvider::new("head", &["shared", "only-head"]), 1)
            .unwrap();
        chain
            .insert_at(FakeProvider::new("tail", &["shared", "only-tail"]), 2)
            .unwrap();

        assert_eq!(chain.lookup("shared").unwrap().name(), "head");
        assert_eq!(chain.lookup("only-tail").unwrap().name(), "tail");
        assert!(chain.lookup("missing").is_none());
    }

    #[test]
    fn provider_at_respects_positions() {
        let mut chain = ProviderChain::new();
        chain.insert_at(FakeProvider::new("one", &[]), 1).unwrap();
        chain.insert_at(FakeProvider::new("two", &[]), 2).unwrap();

        assert_eq!(chain.provider_at(1).unwrap().name(), "one");
        assert_eq!(chain.provider_at(2).unwrap().name(), "two");
        assert!(chain.provider_at(0).is_none());
        assert!(chain.provider_at(3).is_none());
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let mut chain = ProviderChain::new();
        chain.insert_at(FakeProvider::new("dup", &[]), 1).unwrap();
        chain.insert_at(FakeProvider::new("dup", &[]), 2).unwrap();
        assert_eq!(chain.names(), vec!["dup", "dup"]);
    }

    #[test]
    fn install_process_default_requires_a_head() {
        let chain = ProviderChain::new();
        let err = install_process_default(&chain).unwrap_err();
        assert!(matches!(err, SecurityError::EmptyChain));
    }
}
