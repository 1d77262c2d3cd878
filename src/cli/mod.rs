//! CLI module for the credential registry
//!
//! `serve` (the default when no subcommand is given) runs the HTTP server.

pub mod serve;

use clap::{Parser, Subcommand};

/// Credential Registry - in-memory username/password store over HTTP
#[derive(Parser)]
#[command(name = "credential-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default mode)
    Serve(serve::ServeArgs),
}

impl Cli {
    /// The requested command, falling back to `serve` with no overrides
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Serve(serve::ServeArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["credential-registry"]).unwrap();

        match cli.command_or_default() {
            Command::Serve(args) => {
                assert!(args.host.is_none());
                assert!(args.port.is_none());
                assert!(args.prefix.is_none());
            }
        }
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "credential-registry",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--prefix",
            "",
        ])
        .unwrap();

        match cli.command_or_default() {
            Command::Serve(args) => {
                assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
                assert_eq!(args.port, Some(9000));
                assert_eq!(args.prefix.as_deref(), Some(""));
            }
        }
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Cli::try_parse_from(["credential-registry", "serve", "--port", "99999"]).is_err());
    }
}
