// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors for the security provider layer.
#[derive(Error, Debug)]
pub enum SecurityError {
    // Provider construction
    #[error("provider {name} failed to construct: {reason}")]
    Construction { name: String, reason: String },
    // Registry insertion
    #[error("provider {name} failed to register: {reason}")]
    Registration { name: String, reason: String },
    // Process-default installation
    #[error("cannot install a process default from an empty provider chain")]
    EmptyChain,
}

impl SecurityError {
    pub fn construction(name: &str, reason: impl Into<String>) -> Self {
        SecurityError::Construction {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub fn registration(name: &str, reason: impl Into<String>) -> Self {
        SecurityError::Registration {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
