use ratatui::{widgets::Block, Frame};

use crate::state::model::LabView;
use crate::ui::theme::Theme;

use super::{layout, widgets};

/// Draws the entire lab screen.
pub fn draw(f: &mut Frame, view: &LabView) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (body_area, hints_area) = layout::vertical(area);
    let (chart_area, side_area) = layout::body(body_area);
    let (params_area, stats_area, events_area) = layout::side(side_area);

    let scatter: Vec<(f64, f64)> = view.points.iter().map(|p| (p.x, p.y)).collect();
    let user = endpoints(view, view.params.slope(), view.params.intercept());
    let best = endpoints(view, view.fit.slope, view.fit.intercept);

    let x_bounds = x_bounds(view);
    let y_bounds = y_bounds(view, &user, &best);

    f.render_widget(
        widgets::chart(view, &scatter, &user, &best, x_bounds, y_bounds),
        chart_area,
    );
    f.render_widget(widgets::sliders(view), params_area);
    f.render_widget(widgets::stats(view), stats_area);
    f.render_widget(widgets::events(view), events_area);
    f.render_widget(widgets::hints(view), hints_area);
}

/// Line endpoints over the data's x span; empty when there are no points.
fn endpoints(view: &LabView, slope: f64, intercept: f64) -> Vec<(f64, f64)> {
    let (min_x, max_x) = match x_span(view) {
        Some(span) => span,
        None => return Vec::new(),
    };

    vec![
        (min_x, slope * min_x + intercept),
        (max_x, slope * max_x + intercept),
    ]
}

fn x_span(view: &LabView) -> Option<(f64, f64)> {
    let first = view.points.first()?;
    let last = view.points.last()?;
    // Points are kept sorted by x.
    Some((first.x, last.x))
}

fn x_bounds(view: &LabView) -> [f64; 2] {
    match x_span(view) {
        Some((min_x, max_x)) => [min_x - 1.0, max_x + 1.0],
        None => [0.0, fit_core::X_MAX],
    }
}

fn y_bounds(view: &LabView, user: &[(f64, f64)], best: &[(f64, f64)]) -> [f64; 2] {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    let ys = view
        .points
        .iter()
        .map(|p| p.y)
        .chain(user.iter().map(|&(_, y)| y))
        .chain(best.iter().filter(|_| view.show_best_fit).map(|&(_, y)| y));
    for y in ys {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_y > max_y {
        return [0.0, 50.0];
    }
    [min_y - 5.0, max_y + 5.0]
}
