//! CLI entry point - the composition root.
//!
//! Settings are resolved here from flags, environment and `.env`, then
//! commands are dispatched to handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use lectio_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut config = CliConfig {
        base_url: cli.base_url,
        timeout_secs: cli.timeout,
        retries: cli.retries,
        ..CliConfig::default()
    };

    match command {
        Commands::Translations => {
            let ctx = bootstrap(&config)?;
            handlers::menus::translations(&ctx).await?;
        }
        Commands::Books { translation } => {
            let ctx = bootstrap(&config)?;
            handlers::menus::books(&ctx, &translation).await?;
        }
        Commands::Chapters { translation, book } => {
            let ctx = bootstrap(&config)?;
            handlers::menus::chapters(&ctx, &translation, &book).await?;
        }
        Commands::Read {
            translation,
            book,
            chapter,
        } => {
            let ctx = bootstrap(&config)?;
            handlers::menus::read(&ctx, &translation, &book, &chapter).await?;
        }
        Commands::Listen(args) => {
            config.lang.clone_from(&args.lang);
            config.rate = args.rate;
            config.pitch = args.pitch;
            config.engine = args.engine;
            config.transcript_wpm = args.wpm;
            let settings = config.settings()?;
            handlers::listen::execute(&settings, &args).await?;
        }
        Commands::Nav(args) => {
            handlers::nav::execute(&args)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err:#}");
            err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
        }
    };

    // Exit without waiting on a blocked stdin reader.
    std::process::exit(code);
}
