use std::time::{Duration, Instant};

use clap::Parser;
use log::{error, info};

mod app;
mod board;
mod cli;
mod console;
mod util;

use app::SitlApp;
use cli::Args;
use console::LogSink;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut app = SitlApp::new(&args, LogSink::new())?;

    let period = Duration::from_secs_f64(1.0 / f64::from(args.rate_hz));
    let mut interval = tokio::time::interval(period);
    let started = Instant::now();
    info!("SITL running at {} Hz", args.rate_hz);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut interrupted = false;

    while !app.is_stopped() {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(err) = app.step(started.elapsed()) {
                    error!("Main loop failed in {:?}: {:?}", app.state(), err);
                    app.stop();
                }
            }
            // The signal future is created once; it must not be polled again after it fires
            _ = &mut ctrl_c, if !interrupted => {
                interrupted = true;
                info!("Interrupted");
                app.stop();
            }
        }
    }

    info!(
        "{} samples, {} ADC conversions, {} lines written",
        app.cycle(),
        app.accel().adc().reads(),
        app.console().lines()
    );
    Ok(())
}
