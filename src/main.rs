use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{info, warn};

use talava_gesture::config::Config;
use talava_gesture::protocol::{encode_gesture, parse_frame_line};
use talava_gesture::session::SessionRegistry;

/// Replay recorded landmark frames through the gesture engine.
///
/// Input is JSON lines, one frame per line:
/// `{"clientId": "...", "width": 640, "height": 480, "hands": [...]}`.
/// Each emitted gesture is printed as `{"gesture": "..."}`.
#[derive(Parser)]
#[command(name = "gesture-replay")]
#[command(version)]
struct Cli {
    /// Frames file (JSON lines), `-` for stdin
    input: PathBuf,

    /// Engine configuration
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Also print the per-frame label and pointer to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "talava_gesture=info".into()),
        )
        .init();

    let cli = Cli::parse();
    info!("gesture-replay {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_VERSION"));

    let config = Config::load_or_default(&cli.config);
    info!(
        "pointer: alpha={}, deadzone={}..{}, max_step={}; debounce: {}",
        config.pointer.alpha,
        config.pointer.deadzone_min,
        config.pointer.deadzone_base,
        config.pointer.max_step,
        config.debounce.threshold
    );

    let reader: Box<dyn BufRead> = if cli.input.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&cli.input)
            .with_context(|| format!("opening {}", cli.input.display()))?;
        Box::new(BufReader::new(file))
    };

    let mut registry = SessionRegistry::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut frames = 0u64;
    let mut emitted = 0u64;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let msg = match parse_frame_line(&line) {
            Ok(msg) => msg,
            Err(e) => {
                warn!("line {}: {}", line_no + 1, e);
                continue;
            }
        };

        let outcome = match registry.process(&msg) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("line {}: {}", line_no + 1, e);
                continue;
            }
        };
        frames += 1;

        if cli.verbose {
            match outcome.pointer {
                Some(p) => eprintln!("[{}] {} pointer=({}, {})", msg.client_id, outcome.label, p.x, p.y),
                None => eprintln!("[{}] {}", msg.client_id, outcome.label),
            }
        }

        if let Some(label) = outcome.emitted {
            writeln!(out, "{}", encode_gesture(label)?)?;
            emitted += 1;
        }
    }

    out.flush()?;
    info!("{} frames, {} gestures, {} sessions", frames, emitted, registry.len());
    Ok(())
}
