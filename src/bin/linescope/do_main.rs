use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Parser;
use linescope::inspect::inspect_bytes;
use linescope::inspect::inspect_file;
use linescope::inspect::LineRange;
use linescope::inspect::Options;

use crate::Config;
use crate::Error;
use crate::Logger;

/// Print the characters and Unicode code points of a range of lines.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Configuration file.
    #[arg(
        short = 'c',
        long = "config",
        env = "LINESCOPE_CONFIG",
        value_name = "FILE"
    )]
    config_file: Option<PathBuf>,

    /// First line index (0-based, inclusive).
    #[arg(short = 's', long = "start", value_name = "INDEX")]
    start: Option<usize>,

    /// Last line index (0-based, exclusive).
    #[arg(short = 'e', long = "end", value_name = "INDEX")]
    end: Option<usize>,

    /// Line numbers (1-based, inclusive), e.g. `41..50`, `41-50` or `41`.
    #[arg(
        short = 'l',
        long = "lines",
        value_name = "RANGE",
        conflicts_with_all = ["start", "end"]
    )]
    lines: Option<LineRange>,

    /// Print only non-ASCII and control characters.
    #[arg(long = "suspicious-only")]
    suspicious_only: bool,

    /// Print more diagnostics on stderr.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Print errors only.
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// File to inspect; `-` reads standard input.
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
struct Settings {
    path: PathBuf,
    range: LineRange,
    options: Options,
}

impl Args {
    /// Command-line values take precedence over the configuration file.
    fn into_settings(self, config: Config) -> Result<Settings, Error> {
        let range = match self.lines {
            Some(range) => range,
            None => LineRange::from_bounds(
                self.start.or(config.start),
                self.end.or(config.end),
            )?,
        };
        let path = self.path.or(config.path).ok_or(Error::MissingPath)?;
        Ok(Settings {
            path,
            range,
            options: Options {
                suspicious_only: self.suspicious_only || config.suspicious_only,
            },
        })
    }
}

pub fn do_main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    Logger::init(Logger::level(args.verbose, args.quiet)).map_err(Error::Logger)?;
    let config = match args.config_file.as_ref() {
        Some(file) => Config::open(file)?,
        None => Config::default(),
    };
    let settings = args.into_settings(config)?;
    log::debug!("Inspecting lines {} of {}", settings.range, settings.path.display());
    let stdout = std::io::stdout().lock();
    let summary = if settings.path.as_os_str() == "-" {
        let mut bytes = Vec::new();
        std::io::stdin().lock().read_to_end(&mut bytes)?;
        inspect_bytes(&bytes, settings.range, settings.options, stdout)
    } else {
        inspect_file(&settings.path, settings.range, settings.options, stdout)
    }
    .map_err(Error::Inspect)?;
    log::info!("{summary}");
    Ok(ExitCode::SUCCESS)
}
