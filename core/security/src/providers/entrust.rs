// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use rustls::crypto::{CryptoProvider, aws_lc_rs};

use crate::errors::SecurityError;
use crate::provider::{ProviderBuilder, SecurityProvider};
use crate::providers::{backend_algorithms, validate_backend};

const NAME: &str = "Entrust";

/// The Entrust provider. Holds priority position 1 in the default chain and
/// delegates to the aws-lc-rs backend.
pub struct Entrust {
    backend: CryptoProvider,
    algorithms: Vec<String>,
}

impl Entrust {
    pub fn new() -> Result<Self, SecurityError> {
        let backend = aws_lc_rs::default_provider();
        validate_backend(NAME, &backend)?;
        let algorithms = backend_algorithms(&backend);
        Ok(Entrust {
            backend,
            algorithms,
        })
    }
}

impl SecurityProvider for Entrust {
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
pub struct EntrustBuilder;

impl ProviderBuilder for EntrustBuilder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn build(&self) -> Result<Arc<dyn SecurityProvider>, SecurityError> {
        Ok(Arc::new(Entrust::new()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_entrust() {
        let provider = Entrust::new().unwrap();
        assert_eq!(provider.name(), "Entrust");
    }

    #[test]
    fn serves_at_least_one_algorithm() {
        let provider = Entrust::new().unwrap();
        assert!(!provider.algorithms().is_empty());
        let first = provider.algorithms()[0].clone();
        assert!(provider.supports(&first));
    }

    #[test]
    fn builder_produces_named_provider() {
        let provider = EntrustBuilder.build().unwrap();
        assert_eq!(provider.name(), EntrustBuilder.name());
    }
}
