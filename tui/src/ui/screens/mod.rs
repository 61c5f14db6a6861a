pub mod lab;
pub mod menu;

use crossterm::event::KeyCode;
use ratatui::Frame;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

pub enum Screen {
    Menu(menu::MenuState),
    Lab(lab::LabScreen),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Menu(s) => menu::draw(f, s),
            Screen::Lab(s) => s.draw(f),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match self {
            Screen::Menu(s) => menu::handle_key(s, key),
            Screen::Lab(s) => s.handle_key(key),
        }
    }

    /// Advances per-frame state; a no-op outside the lab screen.
    pub fn tick(&mut self) {
        match self {
            Screen::Menu(_) => {}
            Screen::Lab(s) => s.tick(),
        }
    }
}
