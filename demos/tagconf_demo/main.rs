//! # tagconf demo application
//!
//! A sample CLI tool showing how to wire tagconf into an application. It
//! exists to demonstrate and manually verify the loader.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example tagconf_demo -- echo
//! cargo run --example tagconf_demo -- config env
//! ```
//!
//! | Feature               | How to exercise it                                          |
//! |-----------------------|-------------------------------------------------------------|
//! | Default tags          | `cargo run --example tagconf_demo -- echo`                  |
//! | Config file (cwd)     | Create `config.json` in cwd, then run `echo`                |
//! | Env var override      | `DISPLAY_COLOR=red cargo run --example tagconf_demo -- echo` |
//! | Renamed nested key    | `SERVER_MAX_CONN=5 cargo run --example tagconf_demo -- echo` |
//! | `config env`          | `cargo run --example tagconf_demo -- config env`            |
//! | `config list`         | `cargo run --example tagconf_demo -- config list`           |
//! | `config save`         | `echo {} > config.json && cargo run --example tagconf_demo -- config save` |
//! | Walker trace          | `RUST_LOG=tagconf=debug cargo run --example tagconf_demo -- echo` |

mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tagconf::{ConfigArgs, Kind, Tagconf, TagconfBuilder, coerce};

use config::DemoConfig;

/// tagconf demo: a sample CLI app for showcasing tagconf integration.
#[derive(Parser, Debug)]
#[command(name = "tagconf-demo")]
struct Cli {
    /// Read config.json from this directory instead of the cwd.
    #[arg(long, global = true)]
    dir: Option<std::path::PathBuf>,

    /// Fail if the config file is missing.
    #[arg(long, global = true)]
    require_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print resolved configuration values (colored by display.color).
    Echo,
    /// Inspect the configuration (list, env, save).
    Config(ConfigArgs),
}

fn make_builder(cli: &Cli) -> TagconfBuilder {
    let builder = Tagconf::builder()
        .file_required(cli.require_file)
        .coercion(Kind::Bool, coerce::coerce_bool);

    match &cli.dir {
        Some(dir) => builder.path(dir),
        None => builder,
    }
}

fn ansi_color_code(name: &str) -> &str {
    match name {
        "red" => "\x1b[31m",
        "green" => "\x1b[32m",
        "yellow" => "\x1b[33m",
        "blue" => "\x1b[34m",
        "magenta" => "\x1b[35m",
        "cyan" => "\x1b[36m",
        "white" => "\x1b[37m",
        _ => "\x1b[0m",
    }
}

const RESET: &str = "\x1b[0m";

fn echo_all(config: &DemoConfig) {
    let color = ansi_color_code(&config.display.color);

    if config.verbose {
        println!("{color}[verbose] Resolved configuration for {:?}{RESET}", config.name);
        println!();
    }

    let entries = [
        ("name", config.name.clone()),
        ("verbose", config.verbose.to_string()),
        ("server.host", config.server.host.clone()),
        ("server.port", config.server.port.to_string()),
        ("server.max_connections", config.server.max_connections.to_string()),
        ("display.color", config.display.color.clone()),
        ("display.format", config.display.format.clone()),
    ];

    if config.display.format == "plain" {
        for (key, value) in &entries {
            println!("{key}={value}");
        }
    } else {
        let max_key_len = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        for (key, value) in &entries {
            println!("{color}{key:<max_key_len$}{RESET}  {value}");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let builder = make_builder(&cli);

    match cli.command {
        Commands::Echo => {
            let config: DemoConfig = builder.load_default().unwrap_or_else(|e| {
                eprintln!("Failed to load config:\n{e}");
                std::process::exit(1);
            });
            echo_all(&config);
        }
        Commands::Config(args) => {
            let action = args.into_action();
            builder
                .handle_and_print::<DemoConfig>(&action)
                .unwrap_or_else(|e| {
                    eprintln!("Config error:\n{e}");
                    std::process::exit(1);
                });
        }
    }
}
