use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use thiserror::Error;

use swissblur_core::bitmap::infrastructure::bmp_file_reader::BmpFileReader;
use swissblur_core::bitmap::infrastructure::bmp_file_writer::BmpFileWriter;
use swissblur_core::filtering::infrastructure::filter_factory::{create_filter, FilterKind};
use swissblur_core::pipeline::filter_image_use_case::FilterImageUseCase;
use swissblur_core::pipeline::orchestrator::Orchestrator;
use swissblur_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use swissblur_core::shared::constants::{BITMAP_EXTENSION, DEFAULT_WORKER_COUNT, MAX_WORKER_COUNT};

/// Box blur or Swiss cheese filter for bitmap images.
///
/// Options must be given in order: -i, then -o, then -f.
#[derive(Parser)]
#[command(name = "swissblur")]
struct Cli {
    /// Input bitmap (.bmp). Must come first.
    #[arg(short = 'i', value_name = "INPUT", action = ArgAction::Append, allow_hyphen_values = true)]
    input: Vec<PathBuf>,

    /// Output bitmap. Must come second.
    #[arg(short = 'o', value_name = "OUTPUT", action = ArgAction::Append, allow_hyphen_values = true)]
    output: Vec<PathBuf>,

    /// Filter type: b (box blur) or c (Swiss cheese). Must come third.
    #[arg(short = 'f', value_name = "FILTER", action = ArgAction::Append, allow_hyphen_values = true)]
    filter: Vec<String>,

    /// Number of worker threads.
    #[arg(long, default_value_t = DEFAULT_WORKER_COUNT)]
    threads: usize,

    /// Seed for hole placement (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Error, Debug, PartialEq, Eq)]
enum ArgError {
    #[error("No input file name provided")]
    MissingInput,
    #[error("No output file name provided")]
    MissingOutput,
    #[error("No filter type provided")]
    MissingFilter,
    #[error("{}", .0.position_rule())]
    OutOfOrder(OptionKind),
    #[error("Invalid filter type argument '{0}': expected 'b' or 'c'")]
    InvalidFilter(String),
    #[error("Input file has an invalid name or is not accessible: {}", .0.display())]
    InvalidInput(PathBuf),
    #[error("Thread count {requested} exceeds the maximum of {max}")]
    TooManyThreads { requested: usize, max: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OptionKind {
    Input,
    Output,
    Filter,
}

impl OptionKind {
    const ALL: [OptionKind; 3] = [OptionKind::Input, OptionKind::Output, OptionKind::Filter];

    fn id(self) -> &'static str {
        match self {
            OptionKind::Input => "input",
            OptionKind::Output => "output",
            OptionKind::Filter => "filter",
        }
    }

    /// Required position among the three options, starting at 0.
    fn slot(self) -> usize {
        self as usize
    }

    fn position_rule(self) -> &'static str {
        match self {
            OptionKind::Input => "First argument must be for input file",
            OptionKind::Output => "Second argument must be for output file name",
            OptionKind::Filter => "Third argument must be filter type",
        }
    }
}

/// One `-i`/`-o`/`-f` value with its position on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Occurrence {
    index: usize,
    kind: OptionKind,
    value: String,
}

#[derive(Debug, PartialEq, Eq)]
struct Selection {
    input: PathBuf,
    output: PathBuf,
    filter: FilterKind,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (args, unknown) = discard_unknown_options(std::env::args_os());
    for option in &unknown {
        log::warn!("Unknown option: {option}. Argument discarded.");
    }

    let matches = Cli::command()
        .try_get_matches_from(args)
        .unwrap_or_else(|e| exit_on_clap_error(e));
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| exit_on_clap_error(e));

    let (selection, warnings) = resolve_options(&collect_occurrences(&matches))?;
    for warning in &warnings {
        log::warn!("{warning}");
    }
    validate_input(&selection.input)?;

    let orchestrator = Orchestrator::new(validate_threads(cli.threads)?)?;
    let filter = create_filter(selection.filter, cli.seed);

    log::info!("Input: {}", selection.input.display());
    let mut use_case = FilterImageUseCase::new(
        Box::new(BmpFileReader::new()),
        Box::new(BmpFileWriter::new()),
        filter,
        orchestrator,
        Box::new(StdoutPipelineLogger::new()),
    );
    use_case.execute(&selection.input, &selection.output)?;
    log::info!("Output: {}", selection.output.display());
    Ok(())
}

/// Prints a clap message as clap renders it, then exits with 0 for help and
/// 1 for every parse error.
fn exit_on_clap_error(e: clap::Error) -> ! {
    // Printing only fails when stderr is closed.
    let _ = e.print();
    process::exit(clap_exit_code(&e))
}

fn clap_exit_code(e: &clap::Error) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Strips single-letter options this tool does not know, returning the
/// remaining arguments and the discarded ones.
fn discard_unknown_options<I>(args: I) -> (Vec<OsString>, Vec<String>)
where
    I: IntoIterator<Item = OsString>,
{
    let mut kept = Vec::new();
    let mut discarded = Vec::new();
    let mut expecting_value = false;

    for (position, arg) in args.into_iter().enumerate() {
        if position == 0 || expecting_value {
            expecting_value = false;
            kept.push(arg);
            continue;
        }
        let text = arg.to_string_lossy();
        let mut chars = text.chars();
        let is_short = chars.next() == Some('-') && !text.starts_with("--");
        match (is_short, chars.next()) {
            (true, Some('i' | 'o' | 'f')) => {
                expecting_value = text.len() == 2;
                kept.push(arg);
            }
            (true, Some('h')) => kept.push(arg),
            (true, Some(_)) => discarded.push(text.into_owned()),
            _ => kept.push(arg),
        }
    }
    (kept, discarded)
}

fn collect_occurrences(matches: &ArgMatches) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();
    for kind in OptionKind::ALL {
        let (Some(indices), Some(values)) = (matches.indices_of(kind.id()), matches.get_raw(kind.id()))
        else {
            continue;
        };
        for (index, value) in indices.zip(values) {
            occurrences.push(Occurrence {
                index,
                kind,
                value: value.to_string_lossy().into_owned(),
            });
        }
    }
    occurrences.sort_by_key(|o| o.index);
    occurrences
}

/// Applies the positional rules to the options in command-line order.
///
/// The first `-i`, `-o` and `-f` must appear in that order. A repeat of an
/// option already set is discarded with a warning. Every `-f` value must be a
/// known filter code, repeats included.
fn resolve_options(occurrences: &[Occurrence]) -> Result<(Selection, Vec<String>), ArgError> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut filter: Option<FilterKind> = None;
    let mut next_slot = 0;
    let mut warnings = Vec::new();

    for occurrence in occurrences {
        let value = occurrence.value.as_str();
        let parsed_filter = match occurrence.kind {
            OptionKind::Filter => Some(
                FilterKind::from_code(value)
                    .ok_or_else(|| ArgError::InvalidFilter(value.to_string()))?,
            ),
            _ => None,
        };

        let already_set = match occurrence.kind {
            OptionKind::Input => input.is_some(),
            OptionKind::Output => output.is_some(),
            OptionKind::Filter => filter.is_some(),
        };
        if already_set {
            warnings.push(format!(
                "Extra argument for {}: {value}. Additional argument discarded.",
                occurrence.kind.id()
            ));
            continue;
        }
        if occurrence.kind.slot() != next_slot {
            return Err(ArgError::OutOfOrder(occurrence.kind));
        }
        next_slot += 1;

        match occurrence.kind {
            OptionKind::Input => input = Some(PathBuf::from(value)),
            OptionKind::Output => output = Some(PathBuf::from(value)),
            OptionKind::Filter => filter = parsed_filter,
        }
    }

    let selection = Selection {
        input: input.ok_or(ArgError::MissingInput)?,
        output: output.ok_or(ArgError::MissingOutput)?,
        filter: filter.ok_or(ArgError::MissingFilter)?,
    };
    Ok((selection, warnings))
}

fn validate_threads(threads: usize) -> Result<usize, ArgError> {
    if threads > MAX_WORKER_COUNT {
        return Err(ArgError::TooManyThreads {
            requested: threads,
            max: MAX_WORKER_COUNT,
        });
    }
    Ok(threads)
}

fn validate_input(path: &Path) -> Result<(), ArgError> {
    let is_bitmap = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == BITMAP_EXTENSION);
    if !is_bitmap || !path.exists() {
        return Err(ArgError::InvalidInput(path.to_path_buf()));
    }
    Ok(())
}
