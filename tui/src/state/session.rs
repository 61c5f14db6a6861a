use fit_core::{generate, least_squares, mse, FitResult, Parameters, Point, DEFAULT_POINT_COUNT};
use rand::rngs::ThreadRng;
use tokio::sync::mpsc;

use super::animator::{Animator, Nudge};
use super::model::{Control, LabView, LogLine};

const MAX_LOGS: usize = 200;

/// Owns the regression lab state: the point set, the user's parameters,
/// the derived fit, and the animation task.
///
/// The fit is recomputed whenever the point set changes; MSE is derived
/// from the current parameters on every snapshot. Both are pure
/// recomputations, no caching.
pub struct SessionState {
    points: Vec<Point>,
    params: Parameters,
    fit: FitResult,
    selected: Control,
    show_best_fit: bool,
    logs: Vec<LogLine>,
    animator: Animator,
    nudges: mpsc::UnboundedReceiver<Nudge>,
    rng: ThreadRng,
}

impl SessionState {
    /// Creates a session with an initial point set around the default line.
    pub fn new() -> Self {
        let (tx, nudges) = mpsc::unbounded_channel();
        let params = Parameters::default();
        let mut rng = rand::rng();
        let points = generate(DEFAULT_POINT_COUNT, &params, &mut rng);
        let fit = least_squares(&points);

        let mut session = Self {
            points,
            params,
            fit,
            selected: Control::Slope,
            show_best_fit: true,
            logs: Vec::new(),
            animator: Animator::new(tx),
            nudges,
            rng,
        };
        session.push_log(
            "INFO",
            format!(
                "generated {DEFAULT_POINT_COUNT} points around y = {:.2}x + {:.2}",
                params.slope(),
                params.intercept()
            ),
        );
        session
    }

    /// Returns the current snapshot for rendering.
    pub fn view(&self) -> LabView {
        LabView {
            points: self.points.clone(),
            params: self.params,
            fit: self.fit,
            mse: mse(&self.points, &self.params),
            animating: self.animator.is_running(),
            show_best_fit: self.show_best_fit,
            selected: self.selected,
            logs: self.logs.clone(),
        }
    }

    /// Drains pending animation nudges. Non-blocking; called once per frame.
    pub fn tick(&mut self) {
        while let Ok(nudge) = self.nudges.try_recv() {
            self.apply_nudge(nudge);
        }
    }

    /// Regenerates the point set with the current parameters and refits.
    pub fn new_data(&mut self) {
        self.stop_animation();
        self.points = generate(DEFAULT_POINT_COUNT, &self.params, &mut self.rng);
        self.fit = least_squares(&self.points);
        log::info!("regenerated {} points", self.points.len());
        self.push_log(
            "INFO",
            format!(
                "new data: {} points, best fit y = {:.3}x + {:.3}",
                self.points.len(),
                self.fit.slope,
                self.fit.intercept
            ),
        );
    }

    /// Sets the parameters to the best-fit line and stops the animation.
    pub fn snap_to_fit(&mut self) {
        self.stop_animation();
        self.params.set_slope(self.fit.slope);
        self.params.set_intercept(self.fit.intercept);
        self.push_log(
            "INFO",
            format!(
                "snapped to best fit y = {:.3}x + {:.3}",
                self.fit.slope, self.fit.intercept
            ),
        );
    }

    /// Starts or stops the periodic parameter perturbation.
    pub fn toggle_animation(&mut self) {
        if self.animator.is_running() {
            self.stop_animation();
            self.push_log("INFO", "animation paused");
        } else {
            self.animator.start();
            self.push_log("INFO", "animation started");
        }
    }

    /// Shows or hides the best-fit line overlay.
    pub fn toggle_best_fit(&mut self) {
        self.show_best_fit = !self.show_best_fit;
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// Moves the focused slider by `direction` steps (clamped by the setters).
    pub fn step_selected(&mut self, direction: f64) {
        match self.selected {
            Control::Slope => self.params.nudge_slope(direction * Parameters::SLOPE_STEP),
            Control::Intercept => self
                .params
                .nudge_intercept(direction * Parameters::INTERCEPT_STEP),
            Control::Noise => self.params.nudge_noise(direction * Parameters::NOISE_STEP),
        }
    }

    /// Stops background work before the screen is torn down.
    pub fn shutdown(&mut self) {
        self.stop_animation();
    }

    /// Stops the periodic task and discards nudges still queued in the
    /// channel; a stale nudge from a stopped run must never displace the
    /// parameters on a later frame.
    fn stop_animation(&mut self) {
        self.animator.stop();
        while self.nudges.try_recv().is_ok() {}
    }

    fn apply_nudge(&mut self, nudge: Nudge) {
        self.params.nudge_slope(nudge.d_slope);
        self.params.nudge_intercept(nudge.d_intercept);
    }

    fn push_log(&mut self, level: &'static str, message: impl Into<String>) {
        self.logs.push(LogLine {
            level,
            message: message.into(),
        });
        if self.logs.len() > MAX_LOGS {
            let drain = self.logs.len() - MAX_LOGS;
            self.logs.drain(0..drain);
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_a_full_point_set_and_fit() {
        let session = SessionState::new();
        let view = session.view();

        assert_eq!(view.points.len(), DEFAULT_POINT_COUNT);
        assert!(!view.animating);
        assert!(view.show_best_fit);
        // 50 noisy points around a real line always carry x-variance.
        assert_ne!(view.fit, FitResult::default());
    }

    #[test]
    fn new_data_replaces_points_and_refits() {
        let mut session = SessionState::new();
        let before: Vec<_> = session.view().points;

        session.new_data();
        let after = session.view();

        assert_eq!(after.points.len(), DEFAULT_POINT_COUNT);
        assert_ne!(after.points, before);
        assert_eq!(after.fit, least_squares(&after.points));
    }

    #[test]
    fn snap_adopts_fit_parameters_and_stops_animation() {
        let mut session = SessionState::new();
        session.toggle_animation();
        assert!(session.view().animating);

        session.snap_to_fit();
        let view = session.view();

        assert!(!view.animating);
        assert_eq!(view.params.slope(), view.fit.slope);
        assert_eq!(view.params.intercept(), view.fit.intercept);
    }

    #[test]
    fn nudges_respect_parameter_clamps() {
        let mut session = SessionState::new();
        for _ in 0..1000 {
            session.apply_nudge(Nudge {
                d_slope: 0.1,
                d_intercept: 1.0,
            });
        }

        let view = session.view();
        assert_eq!(view.params.slope(), Parameters::SLOPE_MAX);
        assert_eq!(view.params.intercept(), Parameters::INTERCEPT_MAX);
    }

    #[test]
    fn slider_focus_and_steps_move_within_bounds() {
        let mut session = SessionState::new();
        assert_eq!(session.view().selected, Control::Slope);

        session.select_next();
        session.select_next();
        session.select_next();
        assert_eq!(session.view().selected, Control::Noise);

        for _ in 0..100 {
            session.step_selected(1.0);
        }
        assert_eq!(session.view().params.noise(), Parameters::NOISE_MAX);

        session.select_prev();
        assert_eq!(session.view().selected, Control::Intercept);
    }

    #[test]
    fn snap_discards_nudges_queued_before_the_stop() {
        use std::time::Duration;

        let mut session = SessionState::new();
        session.toggle_animation();

        // Give the worker time to queue nudges that nobody has drained yet.
        std::thread::sleep(Duration::from_millis(450));

        session.snap_to_fit();
        session.tick();

        // The snapped parameters must survive the next frame untouched.
        let view = session.view();
        assert_eq!(view.params.slope(), view.fit.slope);
        assert_eq!(view.params.intercept(), view.fit.intercept);
    }

    #[test]
    fn pause_discards_nudges_queued_before_the_stop() {
        use std::time::Duration;

        let mut session = SessionState::new();
        session.toggle_animation();
        std::thread::sleep(Duration::from_millis(450));
        session.toggle_animation();

        let before = session.view().params;
        session.tick();
        assert_eq!(session.view().params, before);
    }

    #[test]
    fn snap_then_no_other_pair_beats_the_mse() {
        let mut session = SessionState::new();
        session.snap_to_fit();
        let view = session.view();
        let best = view.mse;

        for offset in [-1.0, 1.0] {
            let mut worse = view.params;
            worse.set_intercept(worse.intercept() + offset * 5.0);
            assert!(best <= mse(&view.points, &worse));
        }
    }
}
