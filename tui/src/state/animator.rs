use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;

/// How often the animation perturbs the parameters.
pub const NUDGE_INTERVAL: Duration = Duration::from_millis(200);

/// Largest slope change per tick.
pub const SLOPE_DELTA: f64 = 0.1;

/// Largest intercept change per tick.
pub const INTERCEPT_DELTA: f64 = 1.0;

/// Random parameter perturbation emitted by the animation task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nudge {
    pub d_slope: f64,
    pub d_intercept: f64,
}

impl Nudge {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            d_slope: rng.random_range(-SLOPE_DELTA..=SLOPE_DELTA),
            d_intercept: rng.random_range(-INTERCEPT_DELTA..=INTERCEPT_DELTA),
        }
    }
}

/// Cancellable periodic task behind the Animate toggle.
///
/// While running, a worker thread sends a [`Nudge`] over the channel every
/// [`NUDGE_INTERVAL`]; the session drains them on its frame tick. `stop()`
/// clears the flag and joins the worker, so disabling the toggle (or
/// dropping the owner) never leaves orphaned periodic work behind.
pub struct Animator {
    tx: mpsc::UnboundedSender<Nudge>,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl Animator {
    /// Creates a stopped animator that will send on `tx` once started.
    pub fn new(tx: mpsc::UnboundedSender<Nudge>) -> Self {
        Self {
            tx,
            running: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Starts the periodic task. No-op if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.running.store(true, Ordering::Relaxed);

        let tx = self.tx.clone();
        let running = Arc::clone(&self.running);
        self.worker = Some(thread::spawn(move || {
            let mut rng = rand::rng();
            while running.load(Ordering::Relaxed) {
                thread::sleep(NUDGE_INTERVAL);
                if !running.load(Ordering::Relaxed) {
                    break;
                }
                // Receiver gone means the session is tearing down.
                if tx.send(Nudge::random(&mut rng)).is_err() {
                    break;
                }
            }
        }));
    }

    /// Stops the periodic task and joins the worker thread.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("animation worker panicked during shutdown");
            }
        }
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.stop();
    }
}
