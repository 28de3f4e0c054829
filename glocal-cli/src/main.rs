use clap::{CommandFactory, Parser};
use glocal_cli::commands::Commands;
use glocal_cli::context::GlocalCliContext;
use glocal_cli::handlers::{
    handle_config_command, handle_search_command, handle_trending_command,
};
use glocal_cli::{Cli, output_error_json};
use is_terminal::IsTerminal;
use tracing::Level;

#[tokio::main]
async fn main() {
    let cli_args = Cli::parse();

    // Determine output format - priority: machine flag > env var > cli arg > default
    let output_format = if cli_args.machine {
        "json".to_string()
    } else if let Ok(env_output) = std::env::var("GLOCAL_OUTPUT") {
        env_output
    } else {
        cli_args.output.clone()
    };

    let is_quiet = cli_args.quiet
        || std::env::var("GLOCAL_QUIET")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

    // Machine mode implies quiet so stdout stays clean JSON
    let log_level = if is_quiet || cli_args.machine {
        Level::ERROR
    } else if cli_args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli_args, &output_format).await {
        output_error_json(&e, &output_format);
        std::process::exit(1);
    }
}

async fn run(cli_args: Cli, output_format: &str) -> glocal::Result<()> {
    match cli_args.command {
        Commands::Version => {
            if output_format == "json" {
                println!("{}", serde_json::json!({ "version": glocal::VERSION }));
            } else {
                println!("Glocal CLI v{}", glocal::VERSION);
            }
        }

        Commands::Completions(args) => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(
                clap_complete::Shell::from(args.shell),
                &mut command,
                name,
                &mut std::io::stdout(),
            );
        }

        Commands::Search(cmd) => {
            let ctx = GlocalCliContext::new(cli_args.config.as_deref())?;
            handle_search_command(cmd, &ctx, output_format).await?;
        }

        Commands::Trending(cmd) => {
            let ctx = GlocalCliContext::new(cli_args.config.as_deref())?;
            handle_trending_command(cmd, &ctx, output_format).await?;
        }

        Commands::Config(cmd) => {
            let ctx = GlocalCliContext::new(cli_args.config.as_deref())?;
            handle_config_command(cmd, &ctx, output_format).await?;
        }
    }

    Ok(())
}
