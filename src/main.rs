//! Chroma Programming Language - CLI

use anyhow::{Context, Result};
use chroma::backends::repl::{commands::describe_words, LineREPL};
use chroma::util::config::{
    get_config_path, load_user_config, save_user_config, RuntimeConfig, UserConfig,
};
use chroma::util::logger;
use chroma::{Interpreter, NAME, VERSION};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// A color-typed stack language with exact rational arithmetic
#[derive(Parser, Debug)]
#[command(name = "chroma")]
#[command(author = "Chroma Team")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Maximum nesting of word bodies before evaluation fails
    #[arg(long, global = true, value_name = "N")]
    max_depth: Option<usize>,

    /// Maximum tokens evaluated per program
    #[arg(long, global = true, value_name = "N")]
    max_steps: Option<u64>,

    /// Maximum bracket nesting of a vector
    #[arg(long, global = true, value_name = "N")]
    max_nesting: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a Chroma source file as one program
    Run {
        /// Source file to run
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print stack, register and dictionary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate Chroma code from command line
    Eval {
        /// Code to evaluate
        #[arg(value_name = "CODE")]
        code: String,

        /// Print stack, register and dictionary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive session (default)
    Repl,

    /// Describe the built-in words
    Words,

    /// Show the user configuration file and its effective settings
    Config {
        /// Write the effective settings to the user config file
        #[arg(long)]
        init: bool,
    },

    /// Print version information
    Version,
}

fn evaluate(
    source: &str,
    runtime: RuntimeConfig,
    json: bool,
) -> Result<()> {
    let mut session = Interpreter::with_config(runtime);
    let output = session.try_execute(source)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        println!("{}", output);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        logger::init_debug();
        debug!("{} version: {}", NAME, VERSION);
        debug!("Host: {}", std::env::consts::OS);
    } else {
        logger::init_cli();
    }

    let mut config = load_user_config().unwrap_or_else(|e| {
        warn!("ignoring user config: {}", e);
        UserConfig::default()
    });
    if let Some(depth) = args.max_depth {
        config.runtime.max_depth = depth;
    }
    if let Some(steps) = args.max_steps {
        config.runtime.max_steps = Some(steps);
    }
    if let Some(nesting) = args.max_nesting {
        config.runtime.max_nesting = nesting;
    }

    match args.command.unwrap_or(Commands::Repl) {
        Commands::Run { file, json } => {
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read file: {}", file.display()))?;
            evaluate(&source, config.runtime, json)
                .with_context(|| format!("Failed to run: {}", file.display()))?;
        }
        Commands::Eval { code, json } => {
            evaluate(&code, config.runtime, json).context("Failed to evaluate code")?;
        }
        Commands::Repl => {
            let mut repl = LineREPL::with_config(config.runtime, config.repl.into())
                .context("Failed to start REPL")?;
            repl.run().context("REPL terminated")?;
        }
        Commands::Words => {
            println!("{}", describe_words(None));
        }
        Commands::Config { init } => {
            let path = get_config_path().context("Cannot determine config directory")?;
            if init {
                save_user_config(&config).context("Failed to write user config")?;
                info!("wrote {}", path.display());
            }
            println!("# {}", path.display());
            print!(
                "{}",
                toml::to_string_pretty(&config).context("Failed to render config")?
            );
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}
