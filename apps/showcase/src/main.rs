use std::{io, sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use media_integration::{SimulatedMediaProvider, SimulatedOptions};
use showcase_core::{DEFAULT_LOADING_DELAY, DEFAULT_VIDEO_ID};
use tokio::{
    io::{AsyncBufReadExt, BufReader, Lines, Stdin},
    time::{self, Instant},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;
mod session;

use commands::ShowcaseCommand;
use render::{render_json, render_text};
use session::{Showcase, Step};

#[derive(Parser, Debug)]
#[command(about = "Terminal rendition of the tournament showcase page")]
struct Args {
    /// How long the loading screen stays up.
    #[arg(long, default_value_t = DEFAULT_LOADING_DELAY.as_millis() as u64)]
    loader_delay_ms: u64,
    #[arg(long, default_value = DEFAULT_VIDEO_ID)]
    video_id: String,
    /// Simulated time until the media provider reports ready.
    #[arg(long, default_value_t = 400)]
    media_latency_ms: u64,
    /// Simulated provider error code reported instead of ready.
    #[arg(long)]
    media_error: Option<i32>,
    /// End the session after this many seconds.
    #[arg(long)]
    duration_secs: Option<u64>,
    /// Print one JSON snapshot per frame instead of text.
    #[arg(long)]
    json: bool,
    /// Ignore stdin; only timers drive the page.
    #[arg(long)]
    no_input: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let provider = Arc::new(SimulatedMediaProvider::new(SimulatedOptions {
        ready_latency: Duration::from_millis(args.media_latency_ms),
        fail_with: args.media_error,
    }));
    let mut showcase = Showcase::new(
        provider,
        &args.video_id,
        Duration::from_millis(args.loader_delay_ms),
    )?;
    if let Err(error) = showcase.start_player().await {
        warn!(%error, "continuing without background music");
    }

    let outcome = run(&showcase, &args).await;
    showcase.dispose();
    info!("showcase closed");
    outcome
}

async fn run(showcase: &Showcase, args: &Args) -> Result<()> {
    let mut contestants = showcase.watch_contestants();
    let mut guests = showcase.watch_guests();
    let mut player = showcase.watch_player();
    let gate_opened = showcase.ready_signal().wait();
    tokio::pin!(gate_opened);
    let mut gate_pending = true;

    let mut lines = (!args.no_input).then(|| BufReader::new(tokio::io::stdin()).lines());
    let deadline = args
        .duration_secs
        .map(|secs| Instant::now() + Duration::from_secs(secs));

    let mut status = None;
    loop {
        draw(showcase, args.json, status.take())?;

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                return Ok(());
            }
            _ = until(deadline) => {
                info!("run duration elapsed");
                return Ok(());
            }
            _ = &mut gate_opened, if gate_pending => gate_pending = false,
            Ok(()) = contestants.changed() => {}
            Ok(()) = guests.changed() => {}
            Ok(()) = player.changed() => {}
            line = next_line(&mut lines) => match line {
                Ok(Some(line)) if line.trim().is_empty() => {}
                Ok(Some(line)) => match line.parse::<ShowcaseCommand>() {
                    Ok(command) => match showcase.apply(command) {
                        Step::Continue(message) => status = message,
                        Step::Quit => return Ok(()),
                    },
                    Err(err) => status = Some(err.to_string()),
                },
                Ok(None) => {
                    info!("stdin closed; timers keep running");
                    lines = None;
                }
                Err(error) => {
                    warn!(%error, "failed to read stdin");
                    lines = None;
                }
            },
        }
    }
}

fn draw(showcase: &Showcase, json: bool, status: Option<String>) -> Result<()> {
    let view = showcase.view().with_status(status);
    if json {
        println!("{}", render_json(&view)?);
    } else {
        println!("{}", render_text(&view));
    }
    Ok(())
}

async fn until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

async fn next_line(lines: &mut Option<Lines<BufReader<Stdin>>>) -> io::Result<Option<String>> {
    match lines {
        Some(lines) => lines.next_line().await,
        None => std::future::pending().await,
    }
}
