// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

pub mod errors;
pub mod provider;
pub mod providers;
pub mod registry;

pub use errors::SecurityError;
pub use provider::{ProviderBuilder, ProviderRegistry, SecurityProvider};
pub use providers::{Entrust, EntrustBuilder, Iaik, IaikBuilder};
pub use registry::{GlobalRegistry, ProviderChain, global, install_process_default};
