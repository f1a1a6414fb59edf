use std::f64::consts::TAU;
use std::time::Duration;

use driver::AnalogAccelerometer;
use hal::{Channel, LineSink};
use log::info;

use crate::board::{SimulatedAdc, Tilt};
use crate::cli::Args;

/// Analog channels the sensor is wired to (A0, A1, A2)
pub const CHANNELS: [Channel; 3] = [Channel(0), Channel(1), Channel(2)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Initializing,
    Calibrating,
    Running,
    Stopping,
    Stopped,
}

/// Board motion and loop limits
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub cycles: u64,
    pub dump_every: u64,
    pub sway_deg: f64,
    pub sway_hz: f64,
    pub calibrate: bool,
}

impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        Self {
            cycles: args.cycles,
            dump_every: args.dump_every,
            sway_deg: args.sway_deg,
            sway_hz: args.sway_hz,
            calibrate: !args.skip_calibration,
        }
    }
}

/// The firmware main loop running against a simulated board
pub struct SitlApp<S: LineSink> {
    state: State,
    accel: AnalogAccelerometer<SimulatedAdc>,
    console: S,
    settings: Settings,
    cycle: u64,
}

impl<S> SitlApp<S>
where
    S: LineSink,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    pub fn new(args: &Args, console: S) -> anyhow::Result<Self> {
        let adc = SimulatedAdc::new(CHANNELS, args.scale, args.midpoint).with_offset(args.offset());
        let accel = AnalogAccelerometer::with_config(adc, CHANNELS, args.reader_config())?;
        Ok(Self {
            state: State::Initializing,
            accel,
            console,
            settings: Settings::from(args),
            cycle: 0,
        })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn accel(&self) -> &AnalogAccelerometer<SimulatedAdc> {
        &self.accel
    }

    pub fn console(&self) -> &S {
        &self.console
    }

    /// Where the board is after `elapsed` of swaying
    fn tilt_at(&self, elapsed: Duration) -> Tilt {
        let phase = TAU * self.settings.sway_hz * elapsed.as_secs_f64();
        Tilt {
            roll: self.settings.sway_deg * phase.sin(),
            pitch: Tilt::LEVEL.pitch + 0.5 * self.settings.sway_deg * phase.cos(),
        }
    }

    /// Run one pass of the main loop
    pub fn step(&mut self, elapsed: Duration) -> anyhow::Result<()> {
        match self.state {
            State::Initializing => {
                info!("Initializing, sensor on channels {:?}", self.accel.channels());
                self.accel.adc_mut().set_tilt(Tilt::LEVEL);
                self.state = if self.settings.calibrate {
                    State::Calibrating
                } else {
                    State::Running
                };
            }
            State::Calibrating => {
                self.accel.calibrate()?;
                info!("Calibrated, bias {:?}", self.accel.bias());
                self.state = State::Running;
            }
            State::Running => {
                let tilt = self.tilt_at(elapsed);
                self.accel.adc_mut().set_tilt(tilt);
                self.accel.tick()?;
                self.cycle += 1;

                if self.cycle % self.settings.dump_every == 0 {
                    self.accel.dump(&mut self.console)?;
                }
                if self.settings.cycles != 0 && self.cycle >= self.settings.cycles {
                    self.state = State::Stopping;
                }
            }
            State::Stopping => {
                info!("Stopping after {} samples, board at {:?}", self.cycle, self.accel.adc().tilt());
                self.state = State::Stopped;
            }
            State::Stopped => {}
        }
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.state != State::Stopped {
            self.state = State::Stopping;
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.state == State::Stopped
    }
}
