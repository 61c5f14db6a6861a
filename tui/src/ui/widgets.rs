use fit_core::Parameters;
use ratatui::{
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
};

use crate::state::model::{Control, LabView};
use crate::ui::theme::Theme;

const SLIDER_TRACK: usize = 18;

/// The user's line renders dotted so it stays distinguishable from the
/// best-fit overlay without relying on color alone.
const USER_MARKER: symbols::Marker = symbols::Marker::Dot;
const BEST_MARKER: symbols::Marker = symbols::Marker::Braille;

/// Scatter + line chart of the current session.
///
/// `user` and `best` are two-point endpoint slices over the data's x span;
/// the best-fit dataset is omitted while the overlay is toggled off.
pub fn chart<'a>(
    view: &LabView,
    scatter: &'a [(f64, f64)],
    user: &'a [(f64, f64)],
    best: &'a [(f64, f64)],
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
) -> Chart<'a> {
    let mut datasets = vec![Dataset::default()
        .name("points")
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Theme::scatter())
        .data(scatter)];

    if view.show_best_fit {
        datasets.push(
            Dataset::default()
                .name("best fit")
                .marker(BEST_MARKER)
                .graph_type(GraphType::Line)
                .style(Theme::best_line())
                .data(best),
        );
    }

    datasets.push(
        Dataset::default()
            .name("your line")
            .marker(USER_MARKER)
            .graph_type(GraphType::Line)
            .style(Theme::user_line())
            .data(user),
    );

    let title = if view.animating {
        " Regression Plot ▸ animating "
    } else {
        " Regression Plot "
    };

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(title)
                .title_style(Theme::title()),
        )
        .x_axis(
            Axis::default()
                .style(Theme::dim())
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .style(Theme::dim())
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        )
}

/// The three slider rows; the focused one is highlighted.
pub fn sliders(view: &LabView) -> Paragraph<'_> {
    let p = &view.params;
    let rows = [
        (
            Control::Slope,
            p.slope(),
            Parameters::SLOPE_MIN,
            Parameters::SLOPE_MAX,
        ),
        (
            Control::Intercept,
            p.intercept(),
            Parameters::INTERCEPT_MIN,
            Parameters::INTERCEPT_MAX,
        ),
        (
            Control::Noise,
            p.noise(),
            Parameters::NOISE_MIN,
            Parameters::NOISE_MAX,
        ),
    ];

    let mut lines = Vec::with_capacity(rows.len() * 2);
    for (control, value, min, max) in rows {
        let selected = control == view.selected;
        let (prefix, label_style) = if selected {
            ("▶ ", Theme::title())
        } else {
            ("  ", Theme::dim())
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, label_style),
            Span::styled(format!("{:<14}", control.label()), label_style),
            Span::styled(
                format!("{value:>6.2}"),
                if selected { Theme::value() } else { Theme::text() },
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(slider_track(value, min, max), Theme::dim()),
        ]));
    }

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .title(" Parameters ")
            .title_style(Theme::title()),
    )
}

/// Equations and fit-quality readouts.
pub fn stats(view: &LabView) -> Paragraph<'_> {
    let p = &view.params;
    let lines = vec![
        Line::from(vec![
            Span::styled("Your line  ", Theme::dim()),
            Span::styled(
                format!("y = {:.2}x + {:.2}", p.slope(), p.intercept()),
                Theme::user_line(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best fit   ", Theme::dim()),
            Span::styled(
                format!("y = {:.3}x + {:.3}", view.fit.slope, view.fit.intercept),
                Theme::best_line(),
            ),
        ]),
        Line::from(vec![
            Span::styled("R²         ", Theme::dim()),
            Span::styled(format!("{:.3}", view.fit.r2), Theme::value()),
        ]),
        Line::from(vec![
            Span::styled("MSE        ", Theme::dim()),
            Span::styled(format!("{:.2}", view.mse), Theme::value()),
        ]),
        Line::from(vec![
            Span::styled("Points     ", Theme::dim()),
            Span::styled(view.points.len().to_string(), Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Best fit overlay: ", Theme::muted()),
            Span::styled(
                if view.show_best_fit { "on" } else { "off" },
                Theme::dim(),
            ),
        ]),
    ];

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" Statistics ")
                .title_style(Theme::title()),
        )
        .wrap(Wrap { trim: true })
}

/// Recent session events, newest last.
pub fn events(view: &LabView) -> Paragraph<'_> {
    let tail = view.logs.iter().rev().take(8).rev();

    let lines = tail
        .map(|l| {
            let level_style = if l.level == "ERROR" {
                Theme::error()
            } else {
                Theme::muted()
            };
            Line::from(vec![
                Span::styled(format!("[{}] ", l.level), level_style),
                Span::styled(l.message.as_str(), Theme::dim()),
            ])
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" Events ")
                .title_style(Theme::title()),
        )
        .wrap(Wrap { trim: true })
}

/// One-line key legend under the panels.
pub fn hints(view: &LabView) -> Paragraph<'_> {
    let animate = if view.animating { "pause" } else { "animate" };
    let spans = vec![
        Span::styled("↑↓", Theme::dim()),
        Span::styled(" select  ", Theme::muted()),
        Span::styled("←→", Theme::dim()),
        Span::styled(" adjust  ", Theme::muted()),
        Span::styled("a", Theme::dim()),
        Span::styled(format!(" {animate}  "), Theme::muted()),
        Span::styled("n", Theme::dim()),
        Span::styled(" new data  ", Theme::muted()),
        Span::styled("f", Theme::dim()),
        Span::styled(" snap to fit  ", Theme::muted()),
        Span::styled("b", Theme::dim()),
        Span::styled(" overlay  ", Theme::muted()),
        Span::styled("q", Theme::dim()),
        Span::styled(" menu", Theme::muted()),
    ];

    Paragraph::new(Line::from(spans))
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![
        Span::styled(format!("{:.0}", bounds[0]), Theme::muted()),
        Span::styled(format!("{mid:.0}"), Theme::muted()),
        Span::styled(format!("{:.0}", bounds[1]), Theme::muted()),
    ]
}

fn slider_track(value: f64, min: f64, max: f64) -> String {
    let span = max - min;
    let ratio = if span > 0.0 {
        ((value - min) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let knob = (ratio * (SLIDER_TRACK - 1) as f64).round() as usize;

    (0..SLIDER_TRACK)
        .map(|i| if i == knob { '█' } else { '─' })
        .collect()
}
