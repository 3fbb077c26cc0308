// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

/// Resolves when the process receives a shutdown signal.
pub async fn shutdown() {
    imp::shutdown().await
}

#[cfg(unix)]
mod imp {
    use tokio::signal::unix::{SignalKind, signal};
    use tracing::info;

    pub(super) async fn shutdown() {
        tokio::select! {
            // interrupt from the terminal
            _ = sig(SignalKind::interrupt(), "SIGINT") => {}
            // orchestrators (e.g. k8s) stop containers with SIGTERM
            _ = sig(SignalKind::terminate(), "SIGTERM") => {}
        };
    }

    async fn sig(kind: SignalKind, name: &str) {
        signal(kind)
            .expect("Failed to register signal handler")
            .recv()
            .await;
        info!(
            target: "cra::signal",
            "received signal {}, starting shutdown",
            name,
        );
    }
}

#[cfg(not(unix))]
mod imp {
    use tracing::info;

    pub(super) async fn shutdown() {
        tokio::signal::windows::ctrl_c()
            .expect("Failed to register signal handler")
            .recv()
            .await;
        info!(
            target: "cra::signal",
            "received signal Ctrl-C, starting shutdown",
        );
    }
}
