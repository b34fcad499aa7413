//! font2icons CLI (made by FontLab https://www.fontlab.com/)

use std::env;
use std::io::{self, IsTerminal, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, ValueEnum, ValueHint};
use log::LevelFilter;

use font2icons_core::config::{Config, DEFAULT_OUTPUT};
use font2icons_core::output::write_json_pretty;
use font2icons_core::pipeline::convert;
use font2icons_core::ExportReport;

/// Export every glyph of a font as its own SVG file.
#[derive(Debug, Parser)]
#[command(
    name = "font2icons",
    version,
    about = "Export every glyph of a font as an SVG icon (made by FontLab https://www.fontlab.com/)",
    override_usage = "font2icons [PATH] -o [OUTPUT] -c -v"
)]
pub struct Cli {
    /// Font file to convert
    #[arg(value_name = "PATH", value_hint = ValueHint::FilePath)]
    font: Option<PathBuf>,

    /// Font file to convert (takes precedence over the positional PATH)
    #[arg(short = 'p', long = "path", value_hint = ValueHint::FilePath)]
    path: Option<PathBuf>,

    /// Directory receiving one `<code>.svg` per glyph
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT, value_hint = ValueHint::DirPath)]
    output: PathBuf,

    /// Empty the output directory before writing
    #[arg(short = 'c', long = "clear", action = ArgAction::SetTrue)]
    clear: bool,

    /// Print progress information
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,

    /// Face to export from a TTC/OTC collection
    #[arg(short = 'i', long = "face-index", default_value_t = 0)]
    face_index: u32,

    /// Write files on this many worker threads
    #[arg(short = 'j', long = "jobs")]
    jobs: Option<NonZeroUsize>,

    /// Print the export report as JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal,
        }
    }
}

impl Cli {
    /// Build the run configuration, or `None` when no font was named at all.
    fn config(&self) -> Option<Config> {
        let input = self.path.clone().or_else(|| self.font.clone())?;
        Some(
            Config::new(input, self.output.clone())
                .verbose(self.verbose)
                .clear(self.clear)
                .face_index(self.face_index)
                .jobs(self.jobs.map(NonZeroUsize::get)),
        )
    }
}

/// Parse CLI args, run the export and map the outcome to an exit code.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let color = cli.color;

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = format!("error: {err:#}");
            let enabled = color.enabled(io::stderr().is_terminal());
            eprintln!("{}", apply_color(&message, enabled, AnsiColor::Red));
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let Some(config) = cli.config() else {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", Cli::command().render_help())?;
        return Ok(());
    };

    init_logging(config.verbose, cli.color);

    let cwd = env::current_dir().context("reading current directory")?;
    let report = convert(&config, &cwd)
        .with_context(|| format!("converting {}", config.input.display()))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if cli.json {
        write_json_pretty(&report, &mut handle)?;
        let enabled = cli.color.enabled(io::stderr().is_terminal());
        eprintln!("{}", apply_color(&done_message(&report), enabled, AnsiColor::Green));
    } else {
        let enabled = cli.color.enabled(handle.is_terminal());
        writeln!(
            handle,
            "{}",
            apply_color(&done_message(&report), enabled, AnsiColor::Green)
        )?;
    }

    Ok(())
}

fn init_logging(verbose: bool, color: ColorChoice) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    let style = match color {
        ColorChoice::Auto => env_logger::WriteStyle::Auto,
        ColorChoice::Always => env_logger::WriteStyle::Always,
        ColorChoice::Never => env_logger::WriteStyle::Never,
    };

    // A logger may already be installed when running inside tests.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .write_style(style)
        .try_init();
}

fn done_message(report: &ExportReport) -> String {
    let mut message = format!(
        "done! {} svg files in {}",
        report.written.len(),
        report.output.display()
    );
    if !report.failures.is_empty() {
        message.push_str(&format!(" ({} failed)", report.failures.len()));
    }
    message
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Red,
    Green,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Red => "31",
        AnsiColor::Green => "32",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}
