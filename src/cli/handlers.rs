use std::io::Read;
use std::path::PathBuf;

use flexi_logger::LoggerHandle;
use log::{debug, info};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::logging::{self, LoggingError};
use crate::model::{Config, IdStrategy};
use crate::ops::ids::generator_for;
use crate::ops::script;
use crate::ops::task_store::TaskStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(cli.config.as_deref())?;
    // Dropping the handle flushes and stops the logger
    let _logger = start_logging(&cli, &config)?;

    match cli.command {
        None => crate::tui::run(&config),
        Some(Commands::Run(args)) => cmd_run(args, &config),
    }
}

/// File logging is on when a log directory comes from the flag or the config
fn start_logging(cli: &Cli, config: &Config) -> Result<Option<LoggerHandle>, LoggingError> {
    let dir = cli
        .log_dir
        .clone()
        .or_else(|| config.log.dir.as_ref().map(PathBuf::from));
    let level = cli.log_level.as_deref().unwrap_or(&config.log.level);
    match dir {
        Some(dir) => logging::init_logging(level, &dir).map(Some),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Script mode
// ---------------------------------------------------------------------------

fn cmd_run(args: RunArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_script(&args.script)?;
    let commands = script::parse_script(&text)?;

    let strategy = resolve_strategy(args.ids, config);
    debug!("run: {} commands, ids={:?}", commands.len(), strategy);

    let mut store = TaskStore::with_ids(generator_for(strategy));
    let events = script::run_script(&mut store, &commands);
    info!("run: {} events, {}", events.len(), store.counts());

    if args.json {
        let doc = RunJson {
            events: &events,
            tasks: store.tasks(),
            counts: store.counts(),
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        for line in format_run(&events, store.tasks()) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Flag first, then config. Scripts default to sequential ids so that
/// `toggle 1` refers to the first task added.
fn resolve_strategy(flag: Option<IdsArg>, config: &Config) -> IdStrategy {
    flag.map(IdStrategy::from)
        .or(config.ids.strategy)
        .unwrap_or(IdStrategy::Sequential)
}

fn read_script(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("cannot read script from stdin: {}", e))?;
        return Ok(text);
    }
    let text = std::fs::read_to_string(source)
        .map_err(|e| format!("cannot read script '{}': {}", source, e))?;
    Ok(text)
}
