// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

pub mod args;
pub mod bootstrap;
pub mod build_info;
pub mod config;
pub mod runner;
pub mod runtime;

mod allocator;
