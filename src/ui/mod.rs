pub mod game;
pub mod menu;
pub mod sprites;

use ratatui::prelude::*;

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.screen {
        Screen::Menu => menu::render_menu(frame, area, app.menu_choice),
        Screen::Match => {
            if let Some(m) = &app.match_state {
                if m.outcome.is_some() {
                    game::render_end(frame, area, m);
                } else {
                    game::render_match(frame, area, m);
                }
            }
        }
    }
}
