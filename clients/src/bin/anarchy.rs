//! `anarchy`: Command-line access to the reversible chaos operations.
//!
//! **Commands:**
//! - `prng`: chained (or reversed) prng outputs
//! - `shuffle`: shuffled order of a cohort, or one index forwards/backwards
//! - `grid`: a width x height grid of shuffled cell indices
//! - `sample`: draws from the one-way samplers
//! - `distribute`: the implicit partition of items into segments
//! - `select`: reversible parent/child selection
//! - `hash`: string hash usable as a seed
//!
//! **Usage:**
//! ```
//! anarchy [--width 32|64] [--seed <n>] [-v...] <command> [args]
//! ```
//!
//! Numbers accept decimal or `0x` hex.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter, Log, Metadata, Record};

use anarchy::{
    expdist, flip, hash_string, idist, pgdist, prng, rev_prng, truncated_expdist, udist, Cohort,
    Distribution, Permutation, Selection, Word, DEFAULT_LAMBDA,
};

/// Seeded, reversible pseudo-random operations.
#[derive(Parser)]
#[command(
    name = "anarchy",
    about = "Reversible chaos: invertible prng, cohort shuffles and implicit distributions"
)]
struct Args {
    /// Word width in bits.
    #[arg(long, global = true, default_value_t = 64, value_parser = parse_width)]
    width: u32,

    /// Seed for every operation.
    #[arg(long, global = true, default_value = "0", value_parser = parse_number)]
    seed: u64,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print successive prng outputs starting from a value.
    Prng {
        /// Starting value.
        #[arg(value_parser = parse_number)]
        value: u64,

        /// Number of outputs.
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,

        /// Walk backwards with rev_prng.
        #[arg(long)]
        reverse: bool,
    },

    /// Shuffle a cohort.
    Shuffle {
        /// Cohort size.
        #[arg(value_parser = parse_number)]
        size: u64,

        /// Map only this index instead of printing the whole order.
        #[arg(long, value_parser = parse_number)]
        index: Option<u64>,

        /// Apply the inverse shuffle.
        #[arg(long)]
        reverse: bool,
    },

    /// Print a grid whose cells hold their shuffled index.
    Grid {
        /// Columns.
        #[arg(value_parser = parse_number)]
        columns: u64,

        /// Rows.
        #[arg(value_parser = parse_number)]
        rows: u64,
    },

    /// Draw values from a sampler.
    Sample {
        /// Which sampler.
        #[arg(value_enum)]
        kind: SampleKind,

        /// Number of draws.
        #[arg(long, short = 'n', default_value_t = 10)]
        count: usize,

        /// Lower bound for `integer`.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        low: i64,

        /// Upper bound (exclusive) for `integer`.
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        high: i64,

        /// Rate for `exponential` and `truncated`.
        #[arg(long, default_value_t = DEFAULT_LAMBDA)]
        lambda: f64,

        /// Probability of `true` for `flip`.
        #[arg(long, default_value_t = 0.5)]
        probability: f64,
    },

    /// Partition items across capacity-bounded segments.
    Distribute {
        /// Total number of items.
        #[arg(value_parser = parse_number)]
        total: u64,

        /// Number of segments.
        #[arg(value_parser = parse_number)]
        segments: u64,

        /// Capacity of each segment.
        #[arg(value_parser = parse_number)]
        capacity: u64,

        /// 0 splits evenly, 1 splits as randomly as capacity allows.
        #[arg(long, default_value_t = 0.5)]
        roughness: f64,

        /// Report which segment this item falls into.
        #[arg(long, value_parser = parse_number)]
        item: Option<u64>,
    },

    /// Relate children to parents: a child's parent, a parent's children, or
    /// the child counts of the first parent cohort.
    Select {
        /// Average number of children per parent.
        #[arg(value_parser = parse_number)]
        avg_arity: u64,

        /// Children per cohort.
        #[arg(value_parser = parse_number)]
        max_arity: u64,

        /// Report the parent of this child and its index among siblings.
        #[arg(long, value_parser = parse_number, conflicts_with = "parent")]
        child: Option<u64>,

        /// List the children of this parent.
        #[arg(long, value_parser = parse_number)]
        parent: Option<u64>,
    },

    /// Hash a string (the result can be used as a seed).
    Hash {
        /// Text to hash.
        text: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SampleKind {
    Uniform,
    Integer,
    Exponential,
    Truncated,
    Flip,
    Normalish,
}

// -----------------------------------------------------------------------------
// Logging
// -----------------------------------------------------------------------------

/// Writes log records to stderr; the level filter is the global max level.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    log::set_logger(&LOGGER).context("Failed to install logger")?;
    log::set_max_level(level);
    Ok(())
}

// -----------------------------------------------------------------------------
// Argument parsing
// -----------------------------------------------------------------------------

fn parse_number(s: &str) -> std::result::Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid number '{s}': {e}"))
}

fn parse_width(s: &str) -> std::result::Result<u32, String> {
    match s {
        "32" => Ok(32),
        "64" => Ok(64),
        _ => Err(format!("unsupported width '{s}' (expected 32 or 64)")),
    }
}

/// Narrows a parsed number to the selected word, refusing to truncate.
fn word<W: Word>(value: u64, what: &str) -> Result<W> {
    if value > W::MAX.to_u64() {
        bail!("{what} {value} does not fit in a {}-bit word", W::BITS);
    }
    Ok(W::from_u64(value))
}

// -----------------------------------------------------------------------------
// Commands
// -----------------------------------------------------------------------------

fn run<W: Word>(args: &Args) -> Result<()> {
    let seed: W = word(args.seed, "seed")?;
    info!("{}-bit words, seed {seed}", W::BITS);

    match &args.command {
        Command::Prng {
            value,
            count,
            reverse,
        } => {
            let mut x: W = word(*value, "value")?;
            for _ in 0..*count {
                x = if *reverse { rev_prng(x, seed) } else { prng(x, seed) };
                println!("{x}");
            }
        }

        Command::Shuffle {
            size,
            index,
            reverse,
        } => {
            let cohort = Cohort::new(word::<W>(*size, "cohort size")?, seed)
                .context("Invalid cohort")?;
            match index {
                Some(i) => {
                    let i: W = word(*i, "index")?;
                    let out = if *reverse {
                        cohort.invert(i)
                    } else {
                        cohort.apply(i)
                    }
                    .context("Invalid index")?;
                    println!("{out}");
                }
                None if *reverse => {
                    let mut i = W::ZERO;
                    while i < cohort.size() {
                        println!("{}", cohort.invert(i)?);
                        i = i.wrapping_add(W::ONE);
                    }
                }
                None => {
                    for out in &cohort {
                        println!("{out}");
                    }
                }
            }
        }

        Command::Grid { columns, rows } => {
            let cells = columns
                .checked_mul(*rows)
                .context("Grid has more cells than fit in 64 bits")?;
            let cohort = Cohort::new(word::<W>(cells, "cell count")?, seed)
                .context("Grid must have at least one cell")?;
            let digits = cells.saturating_sub(1).to_string().len();
            let mut order = cohort.iter();
            for _ in 0..*rows {
                let line: Vec<String> = order
                    .by_ref()
                    .take(usize::try_from(*columns).context("Too many columns")?)
                    .map(|cell| format!("{cell:>digits$}"))
                    .collect();
                println!("{}", line.join(" "));
            }
        }

        Command::Sample {
            kind,
            count,
            low,
            high,
            lambda,
            probability,
        } => {
            let mut r = seed;
            for _ in 0..*count {
                match kind {
                    SampleKind::Uniform => println!("{}", udist(r)),
                    SampleKind::Integer => println!("{}", idist(r, *low, *high)),
                    SampleKind::Exponential => println!("{}", expdist(r, *lambda)),
                    SampleKind::Truncated => println!("{}", truncated_expdist(r, *lambda)),
                    SampleKind::Flip => println!("{}", flip(*probability, r)),
                    SampleKind::Normalish => println!("{}", pgdist(r)),
                }
                r = prng(r, seed);
            }
        }

        Command::Distribute {
            total,
            segments,
            capacity,
            roughness,
            item,
        } => {
            let dist = Distribution::new(
                word::<W>(*total, "total")?,
                word::<W>(*segments, "segment count")?,
                word::<W>(*capacity, "capacity")?,
                *roughness,
                seed,
            )
            .context("Invalid distribution")?;
            match item {
                Some(i) => {
                    let segment = dist.segment(word(*i, "item")?).context("Invalid item")?;
                    println!("{segment}");
                }
                None => {
                    let mut segment = W::ZERO;
                    for portion in dist.portions() {
                        let before = dist.prior_sum(segment)?;
                        println!("segment {segment}: {portion} items (starting at {before})");
                        segment = segment.wrapping_add(W::ONE);
                    }
                }
            }
        }

        Command::Select {
            avg_arity,
            max_arity,
            child,
            parent,
        } => {
            let family = Selection::new(
                word::<W>(*avg_arity, "average arity")?,
                word::<W>(*max_arity, "maximum arity")?,
                seed,
            )
            .context("Invalid selection")?;
            match (child, parent) {
                (Some(c), _) => {
                    let (parent, index) = family.parent_and_index(word(*c, "child")?);
                    println!("parent {parent}, index {index}");
                }
                (None, Some(p)) => {
                    for child in family.children(word(*p, "parent")?) {
                        println!("{child}");
                    }
                }
                (None, None) => {
                    let mut parent = W::ZERO;
                    while parent < family.parents_per_cohort() {
                        println!("parent {parent}: {} children", family.child_count(parent));
                        parent = parent.wrapping_add(W::ONE);
                    }
                }
            }
        }

        Command::Hash { text } => {
            println!("{}", hash_string::<W>(text));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    match args.width {
        32 => run::<u32>(&args),
        _ => run::<u64>(&args),
    }
}
