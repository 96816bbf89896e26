//! treepick CLI - pick entries from a tree in the terminal
//!
//! Usage: treepick [OPTIONS] <FILE>
//!
//! FILE is JSON: either a tree object (`{"name", "children", "attrs"}`) or
//! an array of items (strings or tree objects). The picker is drawn on
//! stderr; the picked entries are printed to stdout as JSON.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use treepick::config::{load_with_warnings, with_env_overrides};
use treepick::terminal::detect_capabilities;
use treepick::{Node, Options, OutputFormat, PickOutcome, Picker, PickerConfig};

/// treepick - interactive tree picker
#[derive(Parser, Debug)]
#[command(name = "treepick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with the options
    file: PathBuf,

    /// Heading shown above the options
    #[arg(long)]
    title: Option<String>,

    /// Rename the root ("select all") entry
    #[arg(long)]
    root_name: Option<String>,

    /// Allow marking several entries with SPACE
    #[arg(short, long)]
    multiselect: bool,

    /// Single-select: also return every entry below the picked one
    #[arg(long)]
    include_children: bool,

    /// Only return leaf entries
    #[arg(long)]
    leaves_only: bool,

    /// Output format: nodeindex, nameindex, nodeonly or nameonly
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Cursor indicator glyph
    #[arg(long)]
    indicator: Option<String>,

    /// Draw the indicator without parentheses
    #[arg(long)]
    no_parentheses: bool,

    /// Row the cursor starts on
    #[arg(long)]
    default_index: Option<usize>,

    /// Multiselect: minimum number of entries before ENTER is accepted
    #[arg(long)]
    min_selection: Option<usize>,

    /// TOML file with picker options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Validate and print the first screen without interaction
    #[arg(long)]
    dry_run: bool,
}

/// Accepted shapes of the options file
#[derive(Deserialize)]
#[serde(untagged)]
enum OptionsFile {
    List(Vec<ListItem>),
    Tree(Node),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListItem {
    Node(Node),
    Scalar(serde_json::Value),
}

fn item_to_node(item: &ListItem) -> Node {
    match item {
        ListItem::Node(node) => node.clone(),
        ListItem::Scalar(serde_json::Value::String(s)) => Node::new(s.as_str()),
        ListItem::Scalar(other) => Node::new(other.to_string()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("✗ Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    init_logging(cli.log_file.as_deref(), cli.verbose)?;

    let config = build_config(&cli)?;
    let options = read_options(&cli.file)?;
    let mut picker: Picker = Picker::new(options, config)?;

    if cli.dry_run {
        let supports_unicode = detect_capabilities().supports_unicode;
        let session = picker.session();
        for line in session.config().title_lines() {
            println!("{}", line);
        }
        for line in session.option_lines(supports_unicode) {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    ensure_interactive(io::stdin().is_terminal(), io::stderr().is_terminal())?;

    match picker.start()? {
        PickOutcome::Picked(picked) => {
            println!("{}", serde_json::to_string(&picked)?);
            Ok(ExitCode::SUCCESS)
        }
        PickOutcome::Cancelled => Ok(ExitCode::from(1)),
        PickOutcome::Custom(()) => Ok(ExitCode::SUCCESS),
    }
}

/// Keys come from stdin and the UI goes to stderr; stdout may be redirected.
fn ensure_interactive(stdin_tty: bool, stderr_tty: bool) -> Result<()> {
    if !stdin_tty {
        bail!("stdin is not a terminal; use --dry-run to validate without interaction");
    }
    if !stderr_tty {
        bail!("stderr is not a terminal; the picker is drawn on stderr, redirect stdout only");
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Result<PickerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let (config, warnings) = load_with_warnings(path)?;
            for w in &warnings {
                match w.line {
                    Some(line) => eprintln!(
                        "⚠ Unknown config key '{}' in {}:{}",
                        w.key,
                        w.file.display(),
                        line
                    ),
                    None => eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display()),
                }
                if let Some(suggestion) = &w.suggestion {
                    eprintln!("   Did you mean '{}'?", suggestion);
                }
            }
            config
        }
        None => PickerConfig::default(),
    };

    config = with_env_overrides(config)?;

    if let Some(title) = &cli.title {
        config.title = Some(title.clone());
    }
    if let Some(root_name) = &cli.root_name {
        config.root_name = Some(root_name.clone());
    }
    if cli.multiselect {
        config.multiselect = true;
    }
    if cli.include_children {
        config.singleselect_output_include_children = true;
    }
    if cli.leaves_only {
        config.output_leaves_only = true;
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    if let Some(indicator) = &cli.indicator {
        config.indicator = indicator.clone();
    }
    if cli.no_parentheses {
        config.indicator_parentheses = false;
    }
    if let Some(index) = cli.default_index {
        config.default_index = index;
    }
    if let Some(count) = cli.min_selection {
        config.min_selection_count = count;
    }

    Ok(config)
}

fn read_options(path: &Path) -> Result<Options<ListItem>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let parsed: OptionsFile = serde_json::from_str(&content).with_context(|| {
        format!(
            "{}: expected a tree object or an array of options",
            path.display()
        )
    })?;

    Ok(match parsed {
        OptionsFile::List(items) => Options::list(items, item_to_node),
        OptionsFile::Tree(root) => Options::Tree(root),
    })
}

fn init_logging(log_file: Option<&Path>, verbose: u8) -> Result<()> {
    // The picker owns the terminal; logs only ever go to a file.
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("TREEPICK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("treepick={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
