// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

//! Concrete security providers.
//!
//! Two providers ship with CRA, registered at fixed priority positions during
//! bootstrap: [`Entrust`] (position 1, aws-lc-rs backend) and [`Iaik`]
//! (position 2, ring backend).

pub mod entrust;
pub mod iaik;

pub use entrust::{Entrust, EntrustBuilder};
pub use iaik::{Iaik, IaikBuilder};

use rustls::crypto::CryptoProvider;

use crate::errors::SecurityError;

/// Algorithm identifiers exposed by a rustls backend: cipher suites followed
/// by key exchange groups, in the backend's preference order.
pub(crate) fn backend_algorithms(backend: &CryptoProvider) -> Vec<String> {
    let mut ids: Vec<String> = backend
        .cipher_suites
        .iter()
        .map(|s| format!("{:?}", s.suite()))
        .collect();
    ids.extend(backend.kx_groups.iter().map(|g| format!("{:?}", g.name())));
    ids
}

/// A backend with no cipher suites or no key exchange groups has malformed
/// provider metadata and must not be registered.
pub(crate) fn validate_backend(name: &str, backend: &CryptoProvider) -> Result<(), SecurityError> {
    if backend.cipher_suites.is_empty() {
        return Err(SecurityError::construction(
            name,
            "backend exposes no cipher suites",
        ));
    }
    if backend.kx_groups.is_empty() {
        return Err(SecurityError::construction(
            name,
            "backend exposes no key exchange groups",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_algorithms_non_empty_for_both_backends() {
        let aws = rustls::crypto::aws_lc_rs::default_provider();
        let ring = rustls::crypto::ring::default_provider();
        assert!(!backend_algorithms(&aws).is_empty());
        assert!(!backend_algorithms(&ring).is_empty());
    }

    #[test]
    fn validate_accepts_stock_backends() {
        let aws = rustls::crypto::aws_lc_rs::default_provider();
        assert!(validate_backend("test", &aws).is_ok());
    }

    #[test]
    fn algorithms_include_tls13_suites() {
        let ids = backend_algorithms(&rustls::crypto::ring::default_provider());
        assert!(ids.iter().any(|a| a.starts_with("TLS13_")));
    }
}
