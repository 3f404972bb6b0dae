//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Read scripture aloud and browse the reading page's menus from a terminal.
#[derive(Parser)]
#[command(name = "lectio")]
#[command(about = "Read scripture aloud, verse by verse")]
#[command(version)]
pub struct Cli {
    /// Root address of the selection service
    #[arg(long = "base-url", env = "LECTIO_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Seconds to wait for each selection service request
    #[arg(long, env = "LECTIO_TIMEOUT", global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Retries for selection service requests that fail with 5xx or a network error
    #[arg(long, env = "LECTIO_RETRIES", global = true)]
    pub retries: Option<u8>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::NavTarget;
    use clap::CommandFactory;
    use lectio_core::EngineKind;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "lectio",
            "--verbose",
            "--base-url",
            "http://bible.local:8080",
            "translations",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://bible.local:8080"));
        assert!(matches!(cli.command, Some(Commands::Translations)));
    }

    #[test]
    fn test_request_tuning_args() {
        let cli = Cli::parse_from(["lectio", "books", "web", "--timeout", "5", "--retries", "0"]);
        assert_eq!(cli.timeout, Some(5));
        assert_eq!(cli.retries, Some(0));

        assert!(Cli::try_parse_from(["lectio", "translations", "--timeout", "0"]).is_err());
    }

    #[test]
    fn test_listen_args() {
        let cli = Cli::parse_from([
            "lectio",
            "listen",
            "john3.txt",
            "--engine",
            "transcript",
            "--rate",
            "1.5",
            "--interactive",
        ]);
        let Some(Commands::Listen(args)) = cli.command else {
            panic!("expected listen");
        };
        assert_eq!(args.file.to_str(), Some("john3.txt"));
        assert_eq!(args.engine, Some(EngineKind::Transcript));
        assert_eq!(args.rate, Some(1.5));
        assert!(args.interactive);
    }

    #[test]
    fn test_unknown_engine_is_rejected() {
        assert!(Cli::try_parse_from(["lectio", "listen", "f.txt", "--engine", "festival"]).is_err());
    }

    #[test]
    fn test_nav_requires_exactly_one_target() {
        let url = "http://localhost:5000/read?book=John&chapter=3";
        assert!(Cli::try_parse_from(["lectio", "nav", url]).is_err());
        assert!(Cli::try_parse_from(["lectio", "nav", url, "--next", "--prev"]).is_err());

        let cli = Cli::parse_from(["lectio", "nav", url, "--translation", "kjv"]);
        let Some(Commands::Nav(args)) = cli.command else {
            panic!("expected nav");
        };
        assert_eq!(
            args.target,
            NavTarget {
                next: false,
                prev: false,
                translation: Some("kjv".to_string())
            }
        );
    }
}
