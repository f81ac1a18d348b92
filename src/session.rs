//! Shared ownership of a board between edit handlers and a periodic stepper.
//!
//! A [`Session`] holds the board behind one mutex. Each edit and each step
//! takes the lock for its whole duration, so a step never observes a
//! half-applied edit and always replaces the alive set before the next reader.
//!
//! A [`Ticker`] drives [`Session::step`] on a fixed interval and hands every
//! step's verdicts to a [`VerdictSink`] in one batch.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::automaton::coord::{AliveSet, Coordinate};
use crate::automaton::seeding::{self, Pattern, DEFAULT_FILL_DENSITY};
use crate::automaton::stepping::Stepper;
use crate::config::LifeConfig;
use crate::error::{LifeError, Result};
use crate::state::{Board, StepReport};

/// Receives the full verdict batch after each scheduled step.
pub trait VerdictSink: Send {
    fn apply(&mut self, report: &StepReport);
}

impl<F> VerdictSink for F
where
    F: FnMut(&StepReport) + Send,
{
    fn apply(&mut self, report: &StepReport) {
        self(report)
    }
}

/// A board plus the stepper that advances it.
pub struct Session {
    board: Mutex<Board>,
    stepper: Stepper,
    fill_density: f64,
    seed: Option<u64>,
}

impl Session {
    pub fn new(rows: usize, cols: usize, stepper: Stepper) -> Result<Self> {
        Ok(Session {
            board: Mutex::new(Board::new(rows, cols)?),
            stepper,
            fill_density: DEFAULT_FILL_DENSITY,
            seed: None,
        })
    }

    /// Empty session sized, pooled and seeded from `config`.
    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        config.validate()?;
        let mut session = Self::new(config.rows, config.cols, Stepper::new(config.threads)?)?;
        session.fill_density = config.fill_density;
        session.seed = config.seed;
        Ok(session)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Board>> {
        self.board.lock().map_err(|_| LifeError::Poisoned)
    }

    pub fn dimensions(&self) -> Result<(usize, usize)> {
        let board = self.lock()?;
        Ok((board.rows(), board.cols()))
    }

    pub fn generation(&self) -> Result<u64> {
        Ok(self.lock()?.generation())
    }

    pub fn is_alive(&self, coord: Coordinate) -> Result<bool> {
        Ok(self.lock()?.is_alive(coord))
    }

    /// Copy of the current alive set.
    pub fn snapshot(&self) -> Result<AliveSet> {
        Ok(self.lock()?.alive().clone())
    }

    pub fn set_alive(&self, coord: Coordinate, alive: bool) -> Result<bool> {
        self.lock()?.set_alive(coord, alive)
    }

    pub fn toggle(&self, coord: Coordinate) -> Result<bool> {
        self.lock()?.toggle(coord)
    }

    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }

    pub fn random_fill<R: Rng + ?Sized>(&self, density: f64, rng: &mut R) -> Result<()> {
        seeding::random_fill(&mut *self.lock()?, density, rng)
    }

    /// Refill the board at the session's density.
    ///
    /// With a configured seed every call produces the same population,
    /// otherwise the thread-local generator is used.
    pub fn randomize(&self) -> Result<()> {
        match self.seed {
            Some(seed) => self.random_fill(self.fill_density, &mut StdRng::seed_from_u64(seed)),
            None => self.random_fill(self.fill_density, &mut rand::rng()),
        }
    }

    pub fn stamp(&self, pattern: &Pattern, origin: Coordinate) -> Result<()> {
        seeding::stamp(&mut *self.lock()?, pattern, origin)
    }

    /// Advance one generation.
    pub fn step(&self) -> Result<StepReport> {
        self.lock()?.advance(&self.stepper)
    }
}

/// A running periodic stepper. Dropping it also ends the loop, but only
/// [`Ticker::stop`] waits for the in-flight step to finish.
pub struct Ticker {
    stop_tx: oneshot::Sender<()>,
    handle: JoinHandle<u64>,
}

impl Ticker {
    /// Start stepping `session` every `interval` on the current tokio runtime.
    ///
    /// The first step happens one full interval after spawning. Steps run on
    /// the blocking pool so classification never stalls a runtime worker. A
    /// failed step is logged and ends the loop. A zero `interval` is rejected.
    pub fn spawn<S>(session: Arc<Session>, interval: Duration, mut sink: S) -> Result<Self>
    where
        S: VerdictSink + 'static,
    {
        if interval.is_zero() {
            return Err(LifeError::ZeroInterval);
        }
        let (stop_tx, mut stop_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first tick completes immediately.
            timer.tick().await;

            info!(interval_ms = interval.as_millis() as u64, "ticker started");
            let mut steps: u64 = 0;

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = timer.tick() => {
                        let stepping = Arc::clone(&session);
                        match tokio::task::spawn_blocking(move || stepping.step()).await {
                            Ok(Ok(report)) => {
                                steps += 1;
                                sink.apply(&report);
                            }
                            Ok(Err(e)) => {
                                warn!(error = %e, "step failed, stopping ticker");
                                break;
                            }
                            Err(e) => {
                                warn!(error = %e, "step task aborted, stopping ticker");
                                break;
                            }
                        }
                    }
                }
            }

            info!(steps, "ticker stopped");
            steps
        });

        Ok(Ticker { stop_tx, handle })
    }

    /// Whether the loop has ended on its own.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop stepping and return how many steps completed.
    pub async fn stop(self) -> u64 {
        // Err means the loop already ended.
        let _ = self.stop_tx.send(());
        match self.handle.await {
            Ok(steps) => steps,
            Err(e) => {
                warn!(error = %e, "ticker task did not finish cleanly");
                0
            }
        }
    }
}
