use crate::config::AppConfig;
use crate::game::{DropOutcome, GameState, MoveError, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// What the app is currently showing: the live board, or the end-of-game
/// dialog offering a new game or quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Playing,
    EndDialog(Player),
}

pub struct App {
    game: GameState,
    selected_column: usize,
    mode: Mode,
    message: Option<String>,
    tick_rate: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            game: GameState::new(config.board.rows, config.board.cols),
            selected_column: config.board.cols / 2,
            mode: Mode::Playing,
            message: None,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // The end dialog is modal: it swallows everything except its own
        // choices.
        if let Mode::EndDialog(_) = self.mode {
            match key.code {
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

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
                if self.selected_column < self.game.board().cols() - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => self.new_game(),
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game.drop_piece(self.selected_column) {
            Ok(DropOutcome::Continue) => {}
            Ok(DropOutcome::Win(player)) => {
                self.mode = Mode::EndDialog(player);
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over! Press 'r' to restart.".to_string());
            }
        }
    }

    fn new_game(&mut self) {
        self.game.reset();
        self.selected_column = self.game.board().cols() / 2;
        self.mode = Mode::Playing;
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            self.selected_column,
            &self.message,
            self.mode,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn win_as_red(app: &mut App) {
        // Red fills row 0 of columns 0..=3 while Black stacks in column 6.
        for col in 0..3 {
            app.selected_column = col;
            app.drop_piece(); // Red
            app.selected_column = 6;
            app.drop_piece(); // Black
        }
        app.selected_column = 3;
        app.drop_piece(); // Red wins
    }

    #[test]
    fn test_selector_stays_in_bounds() {
        let mut app = App::default();
        for _ in 0..20 {
            app.handle_key(press(KeyCode::Left));
        }
        assert_eq!(app.selected_column, 0);
        for _ in 0..20 {
            app.handle_key(press(KeyCode::Right));
        }
        assert_eq!(app.selected_column, app.game.board().cols() - 1);
    }

    #[test]
    fn test_win_opens_end_dialog() {
        let mut app = App::default();
        win_as_red(&mut app);
        assert_eq!(app.mode, Mode::EndDialog(Player::Red));
    }

    #[test]
    fn test_end_dialog_new_game_resets_engine() {
        let mut app = App::default();
        win_as_red(&mut app);

        app.handle_key(press(KeyCode::Char('n')));
        assert_eq!(app.mode, Mode::Playing);
        assert!(!app.game.is_terminal());
        assert_eq!(app.game.current_player(), Player::Red);
    }

    #[test]
    fn test_end_dialog_quit() {
        let mut app = App::default();
        win_as_red(&mut app);

        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_end_dialog_swallows_other_input() {
        let mut app = App::default();
        win_as_red(&mut app);

        app.handle_key(press(KeyCode::Left));
        app.handle_key(press(KeyCode::Char(' ')));
        assert_eq!(app.mode, Mode::EndDialog(Player::Red));
        assert!(app.game.is_terminal());
    }

    #[test]
    fn test_full_column_sets_message() {
        let mut app = App::default();
        app.selected_column = 0;
        for _ in 0..app.game.board().rows() {
            app.drop_piece();
        }
        app.drop_piece();
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
    }
}
