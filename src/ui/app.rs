use crate::game::{GameEngine, Piece, COLS};
use crate::render::{describe_outcome, Glyphs};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    engine: GameEngine,
    glyphs: Glyphs,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(glyphs: Glyphs) -> Self {
        App {
            engine: GameEngine::new(),
            glyphs,
            selected_column: 0,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = 0;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.engine.game_state() != Piece::Invalid {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let player = self.engine.current_player();
        match self.engine.drop_piece(self.selected_column as i32) {
            Piece::Blank => {
                self.message = Some(format!("Column is full! {} loses the turn.", player.name()));
            }
            Piece::Invalid => {
                self.message = Some("Invalid column!".to_string());
            }
            Piece::X | Piece::O => {
                let outcome = self.engine.game_state();
                if outcome != Piece::Invalid {
                    self.message = Some(format!("Game over: {}", describe_outcome(outcome)));
                }
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            &self.glyphs,
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Glyphs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_column_selection_is_clamped() {
        let mut app = App::default();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_column(), 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), COLS - 1);
    }

    #[test]
    fn test_enter_drops_piece() {
        let mut app = App::default();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine().piece_at(0, 1), Piece::X);
        assert_eq!(app.engine().current_player(), Player::O);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::default();
        for _ in 0..3 {
            press(&mut app, KeyCode::Char(' '));
        }
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.message(), Some("Column is full! O loses the turn."));
        assert_eq!(app.engine().current_player(), Player::X);
    }

    #[test]
    fn test_game_over_and_restart() {
        let mut app = App::default();
        for col in 0..COLS {
            for _ in 0..3 {
                press(&mut app, KeyCode::Enter);
            }
            if col < COLS - 1 {
                press(&mut app, KeyCode::Right);
            }
        }
        assert_eq!(app.message(), Some("Game over: draw"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine(), &GameEngine::new());
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
