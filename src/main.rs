use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use env_logger::Env;

use modal_keys::config::{self, Config};
use modal_keys::input::parse_key_notation;
use modal_keys::surface::TextRange;
use modal_keys::{Disposition, Interpreter, RawKeyEvent, RecordingSurface};

#[derive(Parser)]
#[command(
    name = "modal-keys",
    version,
    about = "Vim-style modal commands for keystroke-driven editing surfaces"
)]
struct Cli {
    /// Config file to use instead of ~/.config/modal-keys/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret keys written in Vim notation and print the surface calls
    Replay {
        /// Keys such as `5dd`, `ciw` or `i<C-o>w<Esc>`
        keys: String,
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
        /// Also print every status announcement
        #[arg(long)]
        status: bool,
    },
    /// Interpret keys typed in this terminal (Ctrl+C exits)
    Live {
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config(),
    };

    match cli.command {
        Commands::Replay { keys, json, status } => {
            let printer = Printer {
                json,
                status,
                line_end: "\n",
            };
            replay(&config, &keys, &printer)
        }
        Commands::Live { json } => {
            let printer = Printer {
                json,
                status: true,
                line_end: "\r\n",
            };
            live(&config, &printer)
        }
    }
}

fn replay(config: &Config, keys: &str, printer: &Printer) -> Result<()> {
    let events = parse_key_notation(keys)?;

    let mut interp: Interpreter<TextRange> = Interpreter::new(config);
    let mut surface = RecordingSurface::new();
    let mut out = io::stdout().lock();

    interp.start(&mut surface);
    printer.flush_surface(&mut out, &mut surface)?;

    for event in &events {
        let disposition = interp.handle_key_event(&mut surface, event);
        printer.print_disposition(&mut out, event, disposition)?;
        printer.flush_surface(&mut out, &mut surface)?;
    }

    Ok(())
}

fn live(config: &Config, printer: &Printer) -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = run_live(config, printer);
    terminal::disable_raw_mode()?;
    result
}

fn run_live(config: &Config, printer: &Printer) -> Result<()> {
    let mut interp: Interpreter<TextRange> = Interpreter::new(config);
    let mut surface = RecordingSurface::new();
    let mut out = io::stdout();

    write!(out, "Type Vim commands; Ctrl+C exits{}", printer.line_end)?;
    interp.start(&mut surface);
    printer.flush_surface(&mut out, &mut surface)?;
    out.flush()?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only process key press events (avoid duplicates)
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            break;
        }

        let raw = RawKeyEvent::from(key);
        let disposition = interp.handle_key_event(&mut surface, &raw);
        printer.print_disposition(&mut out, &raw, disposition)?;
        printer.flush_surface(&mut out, &mut surface)?;
        out.flush()?;
    }

    Ok(())
}

/// Renders what happened on the recorded surface
struct Printer {
    json: bool,
    status: bool,
    line_end: &'static str,
}

impl Printer {
    fn print_disposition(
        &self,
        out: &mut impl Write,
        event: &RawKeyEvent,
        disposition: Disposition,
    ) -> Result<()> {
        if disposition == Disposition::Suppress {
            return Ok(());
        }
        if self.json {
            let line = serde_json::json!({ "pass": event });
            write!(out, "{}{}", line, self.line_end)?;
        } else {
            write!(out, "pass {}{}", event.key, self.line_end)?;
        }
        Ok(())
    }

    fn flush_surface(&self, out: &mut impl Write, surface: &mut RecordingSurface) -> Result<()> {
        for call in surface.take_calls() {
            if self.json {
                write!(out, "{}{}", serde_json::to_string(&call)?, self.line_end)?;
            } else {
                write!(out, "{}{}", call, self.line_end)?;
            }
        }

        let announcements = surface.take_announcements();
        if !self.status {
            return Ok(());
        }
        for status in announcements {
            if self.json {
                let line = serde_json::json!({ "status": status });
                write!(out, "{}{}", line, self.line_end)?;
            } else {
                write!(out, "{}{}", status, self.line_end)?;
            }
        }
        Ok(())
    }
}
