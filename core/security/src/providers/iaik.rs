// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use rustls::crypto::{CryptoProvider, ring};

use crate::errors::SecurityError;
use crate::provider::{ProviderBuilder, SecurityProvider};
use crate::providers::{backend_algorithms, validate_backend};

const NAME: &str = "IAIK";

/// The IAIK provider. Holds priority position 2 in the default chain and
/// delegates to the ring backend.
pub struct Iaik {
    backend: CryptoProvider,
    algorithms: Vec<String>,
}

impl Iaik {
    pub fn new() -> Result<Self, SecurityError> {
        let backend = ring::default_provider();
        validate_backend(NAME, &backend)?;
        let algorithms = backend_algorithms(&backend);
        Ok(Iaik {
            backend,
            algorithms,
        })
    }
}

impl SecurityProvider for Iaik {
    fn name(&self) -> &str {
        NAME
    }

    fn algorithms(&self) -> &[String] {
        &self.algorithms
    }

    fn backend(&self) -> &CryptoProvider {
        &self.backend
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct IaikBuilder;

impl ProviderBuilder for IaikBuilder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn build(&self) -> Result<Arc<dyn SecurityProvider>, SecurityError> {
        Ok(Arc::new(Iaik::new()?))
    }
}
