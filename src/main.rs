use clap::Parser;
use tagform::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tagform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let api_url = cli.api_url.as_deref();

    match cli.command {
        Some(Commands::Slug { title }) => {
            tagform::cli::slug::run(&title);
        }
        Some(Commands::Create { title, list }) => {
            tagform::cli::create::run(&cli.config, api_url, &title, list).await?;
        }
        Some(Commands::List) => {
            tagform::cli::list::run(&cli.config, api_url).await?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
