// SPDX-License-Identifier: MIT
//
// swatch — inspect a color and convert it between formats.
//
//   swatch convert "hsl(32, 100%, 50%)" --to rgb --to lab
//   swatch show "#ff8800"
//
// A thin shell over swatch-color:
//
//   argv → clap → Color::from_str → convert → stdout
//                                 └→ render (truecolor preview)
//
// Conversions cannot fail, only reading the input can. A color string or
// format tag that does not parse exits with status 2.

mod render;

use std::io::{self, Write};
use std::process;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, debug};
use thiserror::Error;

use swatch_color::math::clamp_alpha;
use swatch_color::{Color, ColorError, Format, Hex, convert, to_rgb};

// ─── Command line ────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "swatch", about = "Inspect a color and convert it between formats", version)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv); `RUST_LOG` overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print a color converted to one or more formats
    Convert {
        /// Color string: `#ff8800`, `rgb(255, 136, 0)`, `hsl(32, 100%, 50%)`, ...
        color: String,

        /// Target format (cmyk, hex, hsl, hsv, lab, rgb, sl, sv, xyz).
        /// Repeatable; every format when omitted
        #[arg(short, long = "to", value_name = "FORMAT")]
        to: Vec<String>,
    },
    /// Print a color in every format beside a truecolor preview
    Show {
        /// Color string
        color: String,

        /// Print without ANSI escapes
        #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
        plain: bool,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    const fn exit_code(&self) -> i32 {
        match self {
            Self::Color(_) => 2,
            Self::Io(_) => 1,
        }
    }
}

// ─── Entry point ─────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut out = io::stdout().lock();
    if let Err(e) = run(cli.command, &mut out) {
        eprintln!("swatch: {e}");
        process::exit(e.exit_code());
    }
}

/// Warnings by default, one level more per `-v`. `RUST_LOG` wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn targets(tags: &[String]) -> Result<Vec<Format>, ColorError> {
    if tags.is_empty() {
        return Ok(Format::ALL.to_vec());
    }
    tags.iter().map(|tag| tag.parse()).collect()
}

fn run(command: Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Convert { color, to } => {
            let color: Color = color.parse()?;
            let formats = targets(&to)?;
            debug!("convert {color:?} to {formats:?}");
            for target in formats {
                writeln!(out, "{target}: {}", convert(&color, target))?;
            }
        }
        Command::Show { color, plain } => {
            let color: Color = color.parse()?;
            debug!("show {color:?}");
            if !plain {
                let label = convert(&color, Format::Hex).to_string();
                render::swatch(out, to_rgb(&color), &label)?;
                writeln!(out)?;
            }
            for target in Format::ALL {
                writeln!(out, "{:>4}: {}", target.as_str(), convert(&color, target))?;
            }
            if let Color::Hex(Hex { alpha: Some(alpha), .. }) = &color {
                writeln!(out, "alpha: {}", clamp_alpha(alpha.opacity()))?;
            }
        }
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn output(command: Command) -> Result<String, CliError> {
        let mut buf = Vec::new();
        run(command, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    fn convert_cmd(color: &str, to: &[&str]) -> Command {
        Command::Convert {
            color: color.to_owned(),
            to: to.iter().map(|&t| t.to_owned()).collect(),
        }
    }

    // ── Argument parsing ─────────────────────────────────────────────────

    #[test]
    fn parses_repeated_targets() {
        let cli = Cli::try_parse_from(["swatch", "convert", "#ff0000", "--to", "rgb", "-t", "lab"])
            .unwrap();
        assert_eq!(cli.command, convert_cmd("#ff0000", &["rgb", "lab"]));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn verbose_is_global_and_counts() {
        let cli = Cli::try_parse_from(["swatch", "convert", "#fff000", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let cli = Cli::try_parse_from(["swatch", "-v", "convert", "#fff000"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn show_takes_plain() {
        let cli = Cli::try_parse_from(["swatch", "show", "rgb(1, 2, 3)", "--plain"]).unwrap();
        assert_eq!(cli.command, Command::Show { color: "rgb(1, 2, 3)".to_owned(), plain: true });
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["swatch"]).is_err());
    }

    // ── Running ──────────────────────────────────────────────────────────

    #[test]
    fn convert_prints_requested_formats_in_order() {
        let out = output(convert_cmd("rgb(255, 0, 0)", &["hex", "HSL", "cmyk"])).unwrap();
        assert_eq!(out, "hex: #ff0000\nhsl: hsl(0, 100%, 50%)\ncmyk: cmyk(0%, 100%, 100%, 0%)\n");
    }

    #[test]
    fn convert_defaults_to_every_format() {
        let out = output(convert_cmd("#000000", &[])).unwrap();
        let tags: Vec<&str> = out.lines().map(|line| line.split(':').next().unwrap()).collect();
        assert_eq!(tags, ["cmyk", "hex", "hsl", "hsv", "lab", "rgb", "sl", "sv", "xyz"]);
    }

    #[test]
    fn unknown_target_exits_with_2() {
        let err = output(convert_cmd("#000000", &["oklch"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "unknown color format `oklch`");
    }

    #[test]
    fn unparseable_color_exits_with_2() {
        let err = output(convert_cmd("not a color", &[])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(matches!(err, CliError::Color(ColorError::Parse { .. })));
    }

    #[test]
    fn show_plain_lists_every_format_and_alpha() {
        let out = output(Command::Show { color: "#00000080".to_owned(), plain: true }).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], " hex: #00000080");
        assert_eq!(lines[5], " rgb: rgb(0, 0, 0)");
        assert_eq!(lines[9], "alpha: 0.5");
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn show_leads_with_a_preview() {
        let out = output(Command::Show { color: "rgb(255, 255, 0)".to_owned(), plain: false }).unwrap();
        assert!(out.starts_with("\x1b[48;2;255;255;0m\x1b[38;2;0;0;0m #ffff00 \x1b[0m\n"));
    }
}
