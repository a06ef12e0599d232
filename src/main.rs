use std::io::{self, BufWriter, Write};

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use fplot::{GridPolicy, plot::PlotRequest};
use log::debug;

/// Log level for the application.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// fplot samples a single-variable function such as `sin(x) + 5` over a range
/// and prints the points as CSV, ready for any plotting tool.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// The function of x to plot, e.g. "x^2" or "sin(x) + 5".
    #[arg(allow_hyphen_values = true)]
    function: String,

    /// Lower bound of the range.
    #[arg(allow_hyphen_values = true)]
    x_min: String,

    /// Upper bound of the range.
    #[arg(allow_hyphen_values = true)]
    x_max: String,

    /// Distance between two sample points.
    #[arg(short, long, default_value_t = fplot::DEFAULT_STEP)]
    step: f64,

    /// Place points at exact multiples of the step from x min instead of
    /// repeatedly adding the step, so a whole number of steps always reaches
    /// x max.
    #[arg(short, long)]
    counted: bool,

    /// Log level (default: warn).
    #[arg(short, long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

impl Args {
    fn request(&self) -> PlotRequest {
        let policy = if self.counted { GridPolicy::Counted } else { GridPolicy::Accumulate };
        PlotRequest::new(self.function.as_str(), self.x_min.as_str(), self.x_max.as_str())
            .with_step(self.step)
            .with_policy(policy)
    }
}

fn init_logging(level: LogLevel) {
    env_logger::Builder::from_default_env().filter_level(level.to_level_filter())
                                           .init();
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level);

    let plot = match args.request().run() {
        Ok(plot) => plot,
        Err(e) => {
            debug!("Plot request failed: {e}");
            bail!(e.status_message());
        },
    };

    eprintln!("{}", plot.title());

    let mut out = BufWriter::new(io::stdout().lock());
    writeln!(out, "x,y")?;
    for (x, y) in plot.samples() {
        writeln!(out, "{x},{y}")?;
    }
    out.flush()?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
