use fit_core::{FitResult, Parameters, Point};

/// Which slider row currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Slope,
    Intercept,
    Noise,
}

impl Control {
    pub fn next(self) -> Self {
        match self {
            Control::Slope => Control::Intercept,
            Control::Intercept => Control::Noise,
            Control::Noise => Control::Noise,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Control::Slope => Control::Slope,
            Control::Intercept => Control::Slope,
            Control::Noise => Control::Intercept,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::Slope => "Slope (m)",
            Control::Intercept => "Intercept (b)",
            Control::Noise => "Noise",
        }
    }
}

/// A single log entry shown in the events panel.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub level: &'static str,
    pub message: String,
}

/// Full snapshot rendered by the lab screen.
#[derive(Debug, Clone)]
pub struct LabView {
    pub points: Vec<Point>,
    pub params: Parameters,
    pub fit: FitResult,
    pub mse: f64,
    pub animating: bool,
    pub show_best_fit: bool,
    pub selected: Control,
    pub logs: Vec<LogLine>,
}
