use std::time::Duration;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use feed_client::{TransitionFeed, DEFAULT_FEED_URL};
use settings::SettingsStore;
use url::Url;

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the current transitions and print them.
    Fetch {
        #[arg(long, default_value = DEFAULT_FEED_URL)]
        feed_url: Url,
        #[arg(long, default_value_t = 15)]
        timeout_secs: u64,
    },
    /// Print the resolved settings path and document.
    ShowSettings,
    /// Persist the welcome flag.
    SetWelcomeShown {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();

    match cli.command {
        Command::Fetch {
            feed_url,
            timeout_secs,
        } => {
            let feed = TransitionFeed::new();
            let transitions = feed
                .try_fetch(&feed_url, Duration::from_secs(timeout_secs))
                .await?;
            println!("{} transitions", transitions.len());
            for transition in &transitions {
                println!(
                    "{} ({} packages)",
                    transition.name,
                    transition.package_count()
                );
                for package in &transition.packages {
                    println!("  - {package}");
                }
            }
        }
        Command::ShowSettings => {
            let store = SettingsStore::from_user_config_dir()?;
            let document = store.load()?;
            println!("path: {}", store.path().display());
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        Command::SetWelcomeShown { value } => {
            let store = SettingsStore::from_user_config_dir()?;
            let mut document = store.load()?;
            document.welcome_shown = value;
            store.save(&document)?;
            println!(
                "welcome_shown={value} saved to {}",
                store.path().display()
            );
        }
    }

    Ok(())
}
