use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::layout::centered;
use crate::ui::theme::Theme;

use super::{Action, Screen};

const LOGO: &str = r#"
 ███████╗██╗████████╗    ██╗      █████╗ ██████╗
 ██╔════╝██║╚══██╔══╝    ██║     ██╔══██╗██╔══██╗
 █████╗  ██║   ██║       ██║     ███████║██████╔╝
 ██╔══╝  ██║   ██║       ██║     ██╔══██║██╔══██╗
 ██║     ██║   ██║       ███████╗██║  ██║██████╔╝
 ╚═╝     ╚═╝   ╚═╝       ╚══════╝╚═╝  ╚═╝╚═════╝

 interactive linear regression
"#;

const ITEMS: &[&str] = &["Start Lab", "Quit"];

pub struct MenuState {
    selected: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_down(&mut self) {
        self.selected = (self.selected + 1).min(ITEMS.len() - 1);
    }
}

pub fn handle_key(state: &mut MenuState, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_up();
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_down();
            Action::None
        }
        KeyCode::Enter if state.selected == 0 => {
            Action::Transition(Screen::Lab(super::lab::LabScreen::new()))
        }
        KeyCode::Enter | KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}

pub fn draw(f: &mut Frame, state: &MenuState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered(60, 70, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11),
            Constraint::Length(ITEMS.len() as u16 + 2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(outer);

    let logo: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l, Theme::title())))
        .collect();
    f.render_widget(Paragraph::new(logo).alignment(Alignment::Center), rows[0]);

    let items: Vec<Line> = ITEMS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if i == state.selected {
                Line::from(vec![
                    Span::styled("▶ ", Theme::value()),
                    Span::styled(*label, Theme::title()),
                ])
            } else {
                Line::from(Span::styled(format!("  {label}"), Theme::dim()))
            }
        })
        .collect();
    f.render_widget(
        Paragraph::new(items)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Theme::border())),
        rows[1],
    );

    let hint = Line::from(vec![
        Span::styled("↑↓", Theme::dim()),
        Span::styled(" navigate  ", Theme::muted()),
        Span::styled("enter", Theme::dim()),
        Span::styled(" select  ", Theme::muted()),
        Span::styled("q", Theme::dim()),
        Span::styled(" quit", Theme::muted()),
    ]);
    f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), rows[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_saturates_at_both_ends() {
        let mut state = MenuState::new();

        handle_key(&mut state, KeyCode::Up);
        assert_eq!(state.selected, 0);

        handle_key(&mut state, KeyCode::Down);
        handle_key(&mut state, KeyCode::Down);
        assert_eq!(state.selected, ITEMS.len() - 1);
    }

    #[test]
    fn enter_on_the_quit_row_quits() {
        let mut state = MenuState::new();
        handle_key(&mut state, KeyCode::Down);

        assert!(matches!(handle_key(&mut state, KeyCode::Enter), Action::Quit));
        assert!(matches!(handle_key(&mut state, KeyCode::Char('q')), Action::Quit));
    }
}
