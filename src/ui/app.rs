use crate::error::MoveError;
use crate::game::{Controller, GameOutcome, Phase, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

pub struct App {
    controller: Controller,
    computer_delay: Duration,
    computer_due: Option<Instant>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// Set when the computer could not move; ends the session.
    fatal: Option<MoveError>,
}

impl App {
    pub fn new(controller: Controller, computer_delay: Duration) -> Self {
        App {
            controller,
            computer_delay,
            computer_due: None,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
            fatal: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if let Some(err) = &self.fatal {
                return Err(io::Error::other(format!("computer could not move: {err}")));
            }
            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Play the computer's reply once its delay has elapsed.
    fn tick(&mut self, now: Instant) {
        match self.computer_due {
            Some(due) if now >= due => {
                self.computer_due = None;
                self.computer_turn();
            }
            _ => {}
        }
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.human_move();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.human_move();
            }
            KeyCode::Char('r') => {
                self.controller.on_reset();
                self.computer_due = None;
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column
    fn human_move(&mut self) {
        match self.controller.on_human_move(self.selected_column) {
            Ok(GameOutcome::InProgress) => {
                self.message = None;
                self.computer_due = Some(Instant::now() + self.computer_delay);
            }
            Ok(outcome) => self.message = Some(outcome_message(outcome)),
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::IllegalTurn { .. }) => {
                self.message = Some("Wait for the computer...".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn computer_turn(&mut self) {
        match self.controller.on_computer_turn() {
            Ok((_, GameOutcome::InProgress)) => {}
            Ok((_, outcome)) => self.message = Some(outcome_message(outcome)),
            Err(err) => {
                self.message = Some(format!("Computer error: {err}"));
                self.fatal = Some(err);
                self.should_quit = true;
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.controller,
            self.selected_column,
            &self.message,
        );
    }
}

fn outcome_message(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(Player::Human) => "Congratulations, You Win!!".to_string(),
        GameOutcome::Winner(Player::Computer) => "Connect Bot wins!".to_string(),
        GameOutcome::Draw => "It's a draw!".to_string(),
        GameOutcome::InProgress => String::new(),
    }
}

/// Whether the human may act right now.
pub(super) fn awaiting_human(phase: Phase) -> bool {
    phase == Phase::AwaitingHuman
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Agent;
    use crate::config::EngineConfig;
    use crate::error::SearchError;
    use crate::game::Board;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let controller = Controller::from_config(&EngineConfig {
            search_depth: 2,
            blunder_probability: 0.0,
            seed: Some(5),
        })
        .unwrap();
        App::new(controller, Duration::from_millis(500))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn computer_waits_for_delay() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.phase(), Phase::AwaitingComputer);

        let due = app.computer_due.unwrap();
        app.tick(due - Duration::from_millis(1));
        assert_eq!(app.controller.phase(), Phase::AwaitingComputer);

        app.tick(due);
        assert_eq!(app.controller.phase(), Phase::AwaitingHuman);
        assert_eq!(app.computer_due, None);
        assert_eq!(app.controller.board().piece_count(), 2);
    }

    #[test]
    fn keys_move_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_column, 1);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, COLS - 1);
    }

    #[test]
    fn digit_drops_directly() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.controller.last_move(), Some((5, 0)));
    }

    #[test]
    fn move_during_computer_turn_shows_message() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Wait for the computer..."));
        assert_eq!(app.controller.board().piece_count(), 1);
    }

    #[test]
    fn reset_cancels_pending_reply() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.computer_due, None);
        assert!(awaiting_human(app.controller.phase()));
        assert_eq!(app.controller.board().piece_count(), 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    struct Broken;

    impl Agent for Broken {
        fn select_column(&mut self, _board: &Board) -> Result<usize, SearchError> {
            Err(SearchError::NoValidColumns)
        }

        fn name(&self) -> &str {
            "Broken"
        }
    }

    #[test]
    fn computer_failure_ends_session() {
        let mut app = App::new(Controller::new(Box::new(Broken)), Duration::ZERO);
        press(&mut app, KeyCode::Enter);
        app.tick(app.computer_due.unwrap());

        assert!(app.should_quit);
        assert_eq!(
            app.fatal,
            Some(MoveError::Search(SearchError::NoValidColumns))
        );

        let mut terminal = Terminal::new(TestBackend::new(70, 26)).unwrap();
        let err = app.run(&mut terminal).unwrap_err();
        assert!(err.to_string().contains("computer could not move"), "{err}");
    }
}
