//! Showrunner CLI - episode planning for drop-based marketing campaigns.

use clap::Parser;
use showrunner::cli::{Cli, Commands, ConfigCommands};
use showrunner::commands::{self, Output};
use showrunner::config::{ConfigOverrides, OutputFormat, ResolvedConfig};
use showrunner::store::EpisodeStore;
use std::process;

fn main() {
    let cli = Cli::parse();
    let human = cli.human_readable;

    let result = run(cli);

    if let Err(e) = result {
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!(r#"{{"error": "{}"}}"#, e);
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), showrunner::Error> {
    // The -H flag wins over the config file; everything else resolves
    // file > default.
    let overrides = if cli.human_readable {
        ConfigOverrides::new().with_output_format(OutputFormat::Human)
    } else {
        ConfigOverrides::new()
    };
    let config = ResolvedConfig::load(&overrides)?;
    let human = matches!(config.output_format(), OutputFormat::Human);

    run_command(cli.command, &config, human)
}

fn run_command(
    command: Option<Commands>,
    config: &ResolvedConfig,
    human: bool,
) -> Result<(), showrunner::Error> {
    match command {
        Some(Commands::List { status }) => {
            let store = EpisodeStore::with_seed_data();
            let result = commands::episode_list(&store, status.as_deref(), config)?;
            output(&result, human);
        }
        Some(Commands::Show { id }) => {
            let store = EpisodeStore::with_seed_data();
            let result = commands::episode_show(&store, &id, config)?;
            output(&result, human);
        }
        Some(Commands::Create {
            name,
            concept,
            status,
            start,
            launch,
            budget,
            target,
            member,
        }) => {
            let mut store = EpisodeStore::with_seed_data();
            let result = commands::episode_create(
                &mut store,
                &name,
                &concept,
                status.as_deref(),
                start.as_deref(),
                launch.as_deref(),
                budget,
                target,
                &member,
            )?;
            output(&result, human);
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => {
                let result = commands::config_show(config)?;
                output(&result, human);
            }
            ConfigCommands::Path => {
                let result = commands::config_path_cmd()?;
                output(&result, human);
            }
        },
        Some(Commands::Version) => {
            let result = commands::version()?;
            output(&result, human);
        }
        #[cfg(feature = "tui")]
        Some(Commands::Tui) => {
            showrunner::tui::run(config)?;
        }
        None => {
            // Default: open the terminal UI, or fall back to the episode
            // list when built without it.
            #[cfg(feature = "tui")]
            {
                showrunner::tui::run(config)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                let store = EpisodeStore::with_seed_data();
                let result = commands::episode_list(&store, None, config)?;
                output(&result, human);
            }
        }
    }

    Ok(())
}

/// Print output in JSON or human-readable format.
fn output<T: Output>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}
