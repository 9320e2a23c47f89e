//! # Teleop Shaper
//!
//! Replays recorded gamepad samples through the joystick shaper and prints
//! the resulting telemetry.
//!
//! # Control Flow
//!
//! 1. **Initialization**
//!    - Set up logging with tracing subscriber (stderr)
//!    - Load configuration from the path given as the first argument, or use defaults
//!    - Build the field-centric drive and goal geometry
//!
//! 2. **Main Loop**
//!    - Read one JSON gamepad sample per line from stdin
//!    - Apply power-level requests, shape the sticks, rotate into the robot frame
//!    - Write one JSON telemetry record per sample to stdout
//!
//! 3. **Shutdown**
//!    - On EOF or Ctrl+C, log the number of samples processed
//!
//! # Examples
//!
//! ```bash
//! echo '{"left_stick_y": -0.5, "pose": {"x": 0, "y": 0, "heading": 0}}' \
//!     | cargo run --release -- config/default.toml
//! ```

use anyhow::{Context, Result};
use std::io::{self, Stdout};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use teleop_shaper::config::Config;
use teleop_shaper::field::{GoalField, Pose};
use teleop_shaper::telemetry::{TelemetryRecord, TelemetryWriter};
use teleop_shaper::teleop::encoders::EncoderBaseline;
use teleop_shaper::teleop::field_centric::FieldCentricDrive;
use teleop_shaper::teleop::sample::GamepadSample;

/// Number of samples between status log messages
const LOG_INTERVAL_SAMPLES: u64 = 1000;

/// Stick deflection below which a sample counts as idle
const IDLE_STICK_THRESHOLD: f64 = 0.05;

/// State carried across samples for one replay.
struct ReplaySession {
    drive: FieldCentricDrive,
    field: GoalField,
    shooter_offset: Pose,
    bearing_in_degrees: bool,
    encoder_min_counts: f64,
    baseline: Option<EncoderBaseline>,
    samples: u64,
    active_samples: u64,
}

impl ReplaySession {
    fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            drive: config.drive().context("invalid axis configuration")?,
            field: config.goal_field(),
            shooter_offset: config.shooter_offset(),
            bearing_in_degrees: config.telemetry.bearing_in_degrees,
            encoder_min_counts: config.telemetry.encoder_min_counts,
            baseline: None,
            samples: 0,
            active_samples: 0,
        })
    }

    /// Processes one input line. Returns `Ok(None)` for blank lines.
    fn handle_line(&mut self, line: &str) -> teleop_shaper::error::Result<Option<TelemetryRecord>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let sample = GamepadSample::from_json_line(line)?;
        self.drive.apply_power_request(&sample);
        let command = self.drive.drive_command(&sample)?;

        let mut record = TelemetryRecord::new(
            sample.pose_or_origin(),
            command,
            self.drive.active_level(),
            &self.field,
            self.shooter_offset,
            self.bearing_in_degrees,
        );

        if let Some(reading) = sample.encoders {
            let baseline = *self.baseline.get_or_insert_with(|| {
                debug!("Captured encoder baseline: {:?}", reading);
                EncoderBaseline::capture(reading)
            });
            let deltas = baseline.deltas(reading);

            if let Some(push) = sample.push {
                for fault in deltas.check(push, self.encoder_min_counts) {
                    warn!("{:?} push: {}", push, fault);
                }
            }
            record = record.with_encoders(deltas);
        }

        self.samples += 1;
        if sample.any_stick_moved(IDLE_STICK_THRESHOLD) {
            self.active_samples += 1;
        }
        Ok(Some(record))
    }
}

fn emit(
    session: &mut ReplaySession,
    writer: &mut TelemetryWriter<Stdout>,
    line: &str,
    line_number: u64,
) -> Result<()> {
    match session.handle_line(line) {
        Ok(Some(record)) => {
            writer.write_record(&record).context("failed to write telemetry")?;
            if session.samples % LOG_INTERVAL_SAMPLES == 0 {
                info!("Processed {} samples", session.samples);
            }
        }
        Ok(None) => {}
        Err(e) => warn!("Skipping line {}: {}", line_number, e),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stdout carries telemetry
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Teleop Shaper v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let config = Config::load(&path)
                .with_context(|| format!("failed to load config from {}", path))?;
            info!("Loaded configuration from {}", path);
            config
        }
        None => {
            info!("No config file given, using defaults");
            Config::default()
        }
    };

    let mut session = ReplaySession::from_config(&config)?;
    let mut writer = TelemetryWriter::new(io::stdout());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_number: u64 = 0;

    info!("Reading gamepad samples from stdin");

    loop {
        tokio::select! {
            next = lines.next_line() => {
                match next.context("failed to read stdin")? {
                    Some(line) => {
                        line_number += 1;
                        emit(&mut session, &mut writer, &line, line_number)?;
                    }
                    None => {
                        info!("End of input");
                        break;
                    }
                }
            }

            // Handle Ctrl+C for graceful shutdown
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
        }
    }

    info!(
        "Total samples processed: {} ({} with stick input)",
        session.samples, session.active_samples
    );

    Ok(())
}
