// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

/// When the `jemalloc` feature is enabled, replace the system allocator with
/// jemalloc. Useful on glibc targets (throughput, fragmentation) and on musl
/// targets, where it replaces the minimal built-in allocator.
///
/// ```text
/// cargo build -p cra --features jemalloc
/// ```
#[cfg(feature = "jemalloc")]
#[global_allocator]
static ALLOCATOR: jemallocator::Jemalloc = jemallocator::Jemalloc;
