use clap::{Parser, Subcommand};
use crossterm::style::{style, StyledContent, Stylize};
use glyph_core::{canonical_code, primary_table, subglyph_table};
use std::fmt::Display;
use std::io::{stderr, stdout, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Inspect the built-in Tunic glyph-sound tables.
#[derive(Parser, Debug)]
#[command(name = "glyph_table", version)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sound of each glyph code
    Lookup {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Print every entry of a table
    Dump {
        /// Dump the table keyed by symbol set
        #[arg(long)]
        subglyph: bool,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Renders styled text, dropping the escape codes when stdout is not a terminal.
fn paint<D: Display>(color: bool, content: StyledContent<D>) -> String {
    if color {
        content.to_string()
    } else {
        content.content().to_string()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let color = stdout().is_terminal();
    let result = match cli.command {
        Command::Lookup { codes } => lookup(&codes, color),
        Command::Dump { subglyph, json } => dump(subglyph, json, color),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn lookup(codes: &[String], color: bool) -> std::io::Result<ExitCode> {
    let mut out = stdout().lock();
    let mut missing = 0usize;

    for code in codes {
        let glyph = paint(color, style(code).cyan());
        if let Some(sound) = primary_table().get(code) {
            writeln!(out, "{} -> {}", glyph, paint(color, style(sound).bold()))?;
        } else if let Some(sound) = subglyph_table().lookup(code) {
            let canonical = canonical_code(code);
            tracing::info!(glyph = %code, canonical = %canonical, "matched by symbol set");
            writeln!(
                out,
                "{} -> {} {}",
                glyph,
                paint(color, style(sound).bold()),
                paint(color, style(format!("(as {})", canonical)).dark_grey())
            )?;
        } else {
            missing += 1;
            writeln!(out, "{} -> {}", glyph, paint(color, style("not found").red()))?;
        }
    }
    out.flush()?;

    Ok(if missing == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn dump(subglyph: bool, json: bool, color: bool) -> std::io::Result<ExitCode> {
    let mut out = stdout().lock();

    if json {
        if subglyph {
            serde_json::to_writer_pretty(&mut out, subglyph_table())?;
        } else {
            serde_json::to_writer_pretty(&mut out, primary_table())?;
        }
        writeln!(out)?;
        return Ok(ExitCode::SUCCESS);
    }

    let width = primary_table()
        .iter()
        .map(|e| e.glyph_code.chars().count())
        .max()
        .unwrap_or(0);

    let rows: Vec<(String, &str)> = if subglyph {
        subglyph_table()
            .iter()
            .map(|(set, sound)| (set.to_string(), sound))
            .collect()
    } else {
        primary_table()
            .iter()
            .map(|e| (e.glyph_code.clone(), e.sound.as_str()))
            .collect()
    };
    for (key, sound) in rows {
        let key = format!("{:<width$}", key, width = width);
        writeln!(
            out,
            "{}  {}",
            paint(color, style(key).cyan()),
            paint(color, style(sound).bold())
        )?;
    }
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
