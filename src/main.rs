use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{Level, LevelFilter, Log, Metadata, Record};

use hymnal_chords::{render_song, ChordError, ChordWord, Format, Song};

/// Print hymn lyrics with inline [chords] as a chord sheet, optionally transposed
#[derive(Parser, Debug)]
#[command(name = "hymnal-chords", version, about)]
struct Cli {
    /// Song file (bracket-annotated lyrics, optional YAML frontmatter)
    input: PathBuf,

    /// Semitones to shift, on top of the song's own `transpose` setting
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    transpose: i32,

    /// Output format: sheet, annotated or json
    #[arg(short, long, default_value = "sheet")]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Writes log records to stderr
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let tag = match record.level() {
                Level::Error => "error",
                Level::Warn => "warn",
                Level::Info => "info",
                Level::Debug => "debug",
                Level::Trace => "trace",
            };
            eprintln!("[{}] {}", tag, record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_boxed_logger(Box::new(StderrLogger { level })).is_ok() {
        log::set_max_level(level);
    }
}

fn run(cli: &Cli) -> Result<(), ChordError> {
    let song = Song::load(&cli.input)?;
    let default_shift = song.metadata().transpose;
    let song = song.with_default_transpose().transposed(cli.transpose);
    log::info!(
        "{}: {} lines, shifted {} + {} semitones",
        cli.input.display(),
        song.lines().len(),
        default_shift,
        cli.transpose
    );
    let has_symbols = song
        .lines()
        .iter()
        .flat_map(|line| line.words())
        .any(ChordWord::has_chord_symbols);
    if !has_symbols {
        log::warn!("{} has no chord annotations", cli.input.display());
    }

    let rendered = render_song(&song, cli.format)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered).map_err(|source| ChordError::Io {
                path: path.clone(),
                source,
            })?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
