// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voxbridge - voice assistant backend server.
//!
//! This is the binary entry point for the Voxbridge gateway.

use clap::{Parser, Subcommand};

mod serve;

/// Voxbridge - voice assistant backend server.
#[derive(Parser, Debug)]
#[command(name = "voxbridge", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Voxbridge gateway server.
    Serve,
    /// Print the effective configuration with secrets redacted.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match voxbridge_config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("voxbridge: configuration error: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("voxbridge: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => print_config(config),
        None => {
            println!("voxbridge: use --help for available commands");
        }
    }
}

/// Prints the resolved configuration as TOML, blanking every secret field.
fn print_config(mut config: voxbridge_config::VoxbridgeConfig) {
    let redacted = Some("[redacted]".to_string());
    if config.server.bearer_token.is_some() {
        config.server.bearer_token = redacted.clone();
    }
    if config.gemini.api_key.is_some() {
        config.gemini.api_key = redacted.clone();
    }
    if config.tavily.api_key.is_some() {
        config.tavily.api_key = redacted.clone();
    }
    if config.firecrawl.api_key.is_some() {
        config.firecrawl.api_key = redacted.clone();
    }
    if config.session.token_secret.is_some() {
        config.session.token_secret = redacted;
    }
    match toml::to_string_pretty(&config) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => eprintln!("voxbridge: failed to render config: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_loads_config_defaults() {
        let config = voxbridge_config::load_config_from_str("")
            .expect("default config should be valid");
        assert_eq!(config.server.port, 8600);
    }

    #[test]
    fn cli_parses_serve_subcommand() {
        let cli = Cli::parse_from(["voxbridge", "serve"]);
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }
}
