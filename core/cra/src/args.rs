// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "CRA application entrypoint", long_about = None)]
pub struct Args {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", env = "CRA_CONFIG")]
    config: Option<String>,

    /// Print build information and exit
    #[arg(long, default_value_t = false)]
    version: bool,

    /// Arguments forwarded untouched to the application runtime
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    runtime_args: Vec<String>,
}

impl Args {
    pub fn version(&self) -> bool {
        self.version
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn runtime_args(&self) -> &[String] {
        &self.runtime_args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_args_are_kept_in_order() {
        let args = Args::parse_from(["cra", "--", "--port", "8080"]);
        assert_eq!(args.runtime_args(), ["--port", "8080"]);
    }

    #[test]
    fn config_is_optional() {
        let args = Args::parse_from(["cra"]);
        assert!(args.config().is_none());
        assert!(!args.version());
    }

    #[test]
    fn config_flag_is_read() {
        let args = Args::parse_from(["cra", "--config", "/etc/cra/config.yaml"]);
        assert_eq!(args.config(), Some("/etc/cra/config.yaml"));
    }
}
