use ratatui::style::{Color, Modifier, Style};

/// Dark plotter theme.
///
/// Base aesthetic:
/// - soft white foreground on near-black
/// - blue data points, red user line, green best-fit line
///   (the classic regression-demo color coding)
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(12, 12, 16);
    pub const FG: Color = Color::Rgb(220, 220, 225);
    pub const FG_DIM: Color = Color::Rgb(140, 145, 155);
    pub const FG_MUTED: Color = Color::Rgb(85, 90, 100);

    // Chart colors
    pub const POINTS: Color = Color::Rgb(96, 165, 250);
    pub const USER_LINE: Color = Color::Rgb(239, 68, 68);
    pub const BEST_LINE: Color = Color::Rgb(16, 185, 129);

    // Accents
    pub const ACCENT_YELLOW: Color = Color::Rgb(250, 204, 21);
    pub const ACCENT_RED: Color = Color::Rgb(255, 80, 80);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM).bg(Self::BG)
    }

    /// Titles (bold).
    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    /// Regular text.
    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    /// Secondary/dim text.
    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Muted/disabled text.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Numeric readouts.
    pub fn value() -> Style {
        Style::default()
            .fg(Self::ACCENT_YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    pub fn scatter() -> Style {
        Style::default().fg(Self::POINTS)
    }

    pub fn user_line() -> Style {
        Style::default().fg(Self::USER_LINE)
    }

    pub fn best_line() -> Style {
        Style::default().fg(Self::BEST_LINE)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }
}
