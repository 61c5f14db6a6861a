use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::state::session::SessionState;
use crate::ui::draw;

use super::{Action, Screen};

/// The regression lab: chart, sliders, statistics, events.
pub struct LabScreen {
    session: SessionState,
}

impl LabScreen {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
        }
    }

    /// Drains animation nudges; called once per frame.
    pub fn tick(&mut self) {
        self.session.tick();
    }

    pub fn draw(&self, f: &mut Frame) {
        draw::draw(f, &self.session.view());
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.session.shutdown();
                Action::Transition(Screen::Menu(super::menu::MenuState::new()))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.session.select_prev();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.session.select_next();
                Action::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.session.step_selected(-1.0);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.session.step_selected(1.0);
                Action::None
            }
            KeyCode::Char('a') => {
                self.session.toggle_animation();
                Action::None
            }
            KeyCode::Char('n') => {
                self.session.new_data();
                Action::None
            }
            KeyCode::Char('f') => {
                self.session.snap_to_fit();
                Action::None
            }
            KeyCode::Char('b') => {
                self.session.toggle_best_fit();
                Action::None
            }
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_drive_the_session() {
        let mut screen = LabScreen::new();

        screen.handle_key(KeyCode::Char('a'));
        assert!(screen.session.view().animating);

        // New data stops the animation per the control contract.
        screen.handle_key(KeyCode::Char('n'));
        assert!(!screen.session.view().animating);

        screen.handle_key(KeyCode::Char('b'));
        assert!(!screen.session.view().show_best_fit);

        screen.handle_key(KeyCode::Char('f'));
        let view = screen.session.view();
        assert_eq!(view.params.slope(), view.fit.slope);
    }

    #[test]
    fn leaving_the_lab_stops_background_work() {
        let mut screen = LabScreen::new();
        screen.handle_key(KeyCode::Char('a'));

        let action = screen.handle_key(KeyCode::Esc);
        assert!(matches!(action, Action::Transition(Screen::Menu(_))));
        assert!(!screen.session.view().animating);
    }
}
