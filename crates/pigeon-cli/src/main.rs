use pigeon_core::{
    Ancestor, DEFAULT_DEPTH, MemoryStore, PedigreeTree, PigeonId, build_pedigree_tree,
};
use pigeon_layout::svg::{SvgRenderOptions, render_pedigree_debug_svg};
use pigeon_layout::{LayoutConfiguration, compute_layout};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Store(pigeon_core::Error),
    Layout(pigeon_layout::Error),
    Json(serde_json::Error),
    UnknownPigeon(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Store(err) => write!(f, "{err}"),
            CliError::Layout(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::UnknownPigeon(id) => write!(f, "No pigeon with id {id:?} in store"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<pigeon_core::Error> for CliError {
    fn from(value: pigeon_core::Error) -> Self {
        Self::Store(value)
    }
}

impl From<pigeon_layout::Error> for CliError {
    fn from(value: pigeon_layout::Error) -> Self {
        Self::Layout(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Tree,
    Layout,
    Render,
}

#[derive(Debug)]
struct Args {
    command: Command,
    input: Option<String>,
    pigeon: Option<String>,
    depth: usize,
    config: Option<String>,
    width: f64,
    height: f64,
    start_y: f64,
    pretty: bool,
    slot_labels: bool,
    out: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            command: Command::Tree,
            input: None,
            pigeon: None,
            depth: DEFAULT_DEPTH,
            config: None,
            // A4 landscape minus margins, in centimetres.
            width: 27.7,
            height: 17.0,
            start_y: 0.0,
            pretty: false,
            slot_labels: false,
            out: None,
        }
    }
}

#[derive(Serialize)]
struct TreeSlotOut<'a> {
    index: usize,
    generation: usize,
    pigeon: Ancestor<'a>,
}

#[derive(Serialize)]
struct TreeOut<'a> {
    depth: usize,
    known: usize,
    slots: Vec<TreeSlotOut<'a>>,
}

fn usage() -> &'static str {
    "pigeon-cli\n\
\n\
USAGE:\n\
  pigeon-cli [tree] [--pigeon <id>] [--depth <n>] [--pretty] [--store <path>|<store.json>|-]\n\
  pigeon-cli layout [--pigeon <id>] [--depth <n>] [--config <path>] [--width <w>] [--height <h>] [--start-y <y>] [--pretty] [--store <path>|<store.json>|-]\n\
  pigeon-cli render [--pigeon <id>] [--depth <n>] [--config <path>] [--width <w>] [--height <h>] [--start-y <y>] [--slot-labels] [--out <path>] [--store <path>|<store.json>|-]\n\
\n\
NOTES:\n\
  - --store <path> and a positional <store.json> are equivalent; give only one.\n\
  - If the store is omitted or '-', it is read from stdin.\n\
  - Without --pigeon, a blank pedigree template is produced.\n\
  - --config accepts JSON, or YAML when the file ends in .yaml/.yml.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - Set PIGEON_LOG (e.g. PIGEON_LOG=debug) to enable diagnostics on stderr.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_f64(raw: &str) -> Result<f64, CliError> {
    raw.parse::<f64>().map_err(|_| CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "tree" => args.command = Command::Tree,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--slot-labels" => args.slot_labels = true,
            "--pigeon" => args.pigeon = Some(next_value(&mut it)?.clone()),
            "--config" => args.config = Some(next_value(&mut it)?.clone()),
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--depth" => {
                args.depth = next_value(&mut it)?
                    .parse::<usize>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--width" => args.width = parse_f64(next_value(&mut it)?)?,
            "--height" => args.height = parse_f64(next_value(&mut it)?)?,
            "--start-y" => args.start_y = parse_f64(next_value(&mut it)?)?,
            "--store" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(next_value(&mut it)?.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" if args.input.is_none() => args.input = Some("-".to_string()),
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn read_config(path: Option<&str>) -> Result<LayoutConfiguration, CliError> {
    let Some(path) = path else {
        return Ok(LayoutConfiguration::default());
    };
    let text = std::fs::read_to_string(path)?;
    let is_yaml = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
    let config = if is_yaml {
        LayoutConfiguration::from_yaml_str(&text)?
    } else {
        LayoutConfiguration::from_json_str(&text)?
    };
    Ok(config)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn build_tree<'a>(store: &'a MemoryStore, args: &Args) -> Result<PedigreeTree<'a>, CliError> {
    let start = match args.pigeon.as_deref() {
        None => Ancestor::Unknown,
        Some(id) => {
            let id = PigeonId::from(id);
            match store.ancestor(&id) {
                Ancestor::Unknown => return Err(CliError::UnknownPigeon(id.to_string())),
                known => known,
            }
        }
    };
    Ok(build_pedigree_tree(store, start, args.depth)?)
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let store = MemoryStore::from_json_str(&text)?;
    tracing::debug!(pigeons = store.len(), "loaded pigeon store");
    let tree = build_tree(&store, &args)?;

    match args.command {
        Command::Tree => {
            let out = TreeOut {
                depth: tree.depth(),
                known: tree.known_count(),
                slots: tree
                    .iter()
                    .map(|(index, pigeon)| TreeSlotOut {
                        index,
                        generation: pigeon_core::pedigree::generation_of(index),
                        pigeon,
                    })
                    .collect(),
            };
            write_json(&out, args.pretty)
        }
        Command::Layout => {
            let config = read_config(args.config.as_deref())?;
            let layout = compute_layout(&tree, &config, args.width, args.height, args.start_y)?;
            write_json(&layout, args.pretty)
        }
        Command::Render => {
            let config = read_config(args.config.as_deref())?;
            let layout = compute_layout(&tree, &config, args.width, args.height, args.start_y)?;
            let options = SvgRenderOptions {
                include_slot_index_labels: args.slot_labels,
                ..SvgRenderOptions::default()
            };
            let svg = render_pedigree_debug_svg(&layout, &options);
            write_text(&svg, args.out.as_deref())
        }
    }
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("PIGEON_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    setup_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err @ CliError::UnknownPigeon(_)) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
