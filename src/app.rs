use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::state::{MatchState, Mode, TickInput};

#[derive(Clone, Copy, PartialEq)]
pub enum Screen {
    Menu,
    Match,
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    /// Highlighted mode on the menu: 0 = single, 1 = multi.
    pub menu_choice: usize,
    pub match_state: Option<MatchState>,
    /// Key state accumulated between ticks and consumed by the next one.
    pub input: TickInput,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            screen: Screen::Menu,
            menu_choice: 0,
            match_state: None,
            input: TickInput::default(),
        }
    }

    pub fn start_match(&mut self, mode: Mode) {
        self.match_state = Some(MatchState::new(mode, rand::random()));
        self.input.clear();
        self.screen = Screen::Match;
    }

    /// Full teardown back to mode selection. Idempotent: resetting with
    /// no active match is a no-op.
    pub fn reset_match(&mut self) {
        self.match_state = None;
        self.input.clear();
        self.screen = Screen::Menu;
    }

    pub fn on_tick(&mut self) {
        if self.screen != Screen::Match {
            return;
        }
        if let Some(m) = &mut self.match_state {
            if m.outcome.is_none() {
                m.tick(&self.input);
            }
        }
        self.input.clear();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Menu => self.on_menu_key(key),
            Screen::Match => self.on_match_key(key),
        }
    }

    fn on_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('1') => self.start_match(Mode::Single),
            KeyCode::Char('2') => self.start_match(Mode::Multi),
            KeyCode::Up | KeyCode::Down => {
                self.menu_choice = 1 - self.menu_choice;
            }
            KeyCode::Enter => {
                let mode = if self.menu_choice == 0 {
                    Mode::Single
                } else {
                    Mode::Multi
                };
                self.start_match(mode);
            }
            _ => {}
        }
    }

    fn on_match_key(&mut self, key: KeyEvent) {
        let ended = self
            .match_state
            .as_ref()
            .map(|m| m.outcome.is_some())
            .unwrap_or(true);

        if ended {
            // Restart only accepted from the terminal screen
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                self.reset_match();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.reset_match(),
            // Player 1: arrows + space
            KeyCode::Up => self.input.p1.up = true,
            KeyCode::Down => self.input.p1.down = true,
            KeyCode::Left => self.input.p1.left = true,
            KeyCode::Right => self.input.p1.right = true,
            KeyCode::Char(' ') => self.input.p1_fire = true,
            // Player 2: WASD + F (ignored by the match in single mode)
            KeyCode::Char('w') | KeyCode::Char('W') => self.input.p2.up = true,
            KeyCode::Char('s') | KeyCode::Char('S') => self.input.p2.down = true,
            KeyCode::Char('a') | KeyCode::Char('A') => self.input.p2.left = true,
            KeyCode::Char('d') | KeyCode::Char('D') => self.input.p2.right = true,
            KeyCode::Char('f') | KeyCode::Char('F') => self.input.p2_fire = true,
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}
