use crate::ai::{Agent, ExpectimaxAgent};
use crate::game::{Dice, GameState, Move, MoveError, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Interactive game: the human plays White, the search engine plays Black.
pub struct App {
    game_state: GameState,
    engine: ExpectimaxAgent,
    rng: StdRng,
    /// Current roll for the human turn; `None` until rolled.
    dice: Option<Dice>,
    legal: Vec<Move>,
    selected: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(search_depth: u32) -> Self {
        App {
            game_state: GameState::initial(),
            engine: ExpectimaxAgent::new(search_depth),
            rng: StdRng::from_os_rng(),
            dice: None,
            legal: Vec::new(),
            selected: 0,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.advance_turn();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Roll for the human, or let the engine take a whole Black turn.
    fn advance_turn(&mut self) {
        if self.game_state.is_terminal() {
            return;
        }
        match self.game_state.current_player() {
            Player::White => {
                if self.dice.is_none() {
                    let dice = Dice::roll(&mut self.rng);
                    self.dice = Some(dice);
                    self.legal = self.game_state.legal_moves(dice);
                    self.selected = 0;
                    if self.legal.is_empty() {
                        self.message = Some(format!(
                            "White rolled {} and has no move - press Enter to pass",
                            dice
                        ));
                    }
                }
            }
            Player::Black => {
                let dice = Dice::roll(&mut self.rng);
                match self.engine.select_move(&mut self.game_state, dice) {
                    Some(mv) => {
                        self.game_state
                            .apply(mv)
                            .unwrap_or_else(|e| panic!("engine move {} rejected: {:?}", mv, e));
                        self.message = Some(format!("Black rolled {}, played {}", dice, mv));
                    }
                    None => {
                        self.game_state.pass_turn();
                        self.message = Some(format!("Black rolled {} and cannot move", dice));
                    }
                }
                if let Some(winner) = self.game_state.winner() {
                    self.message = Some(format!("{} wins!", winner.name()));
                }
            }
        }
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
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if !self.legal.is_empty() {
                    self.selected = (self.selected + self.legal.len() - 1) % self.legal.len();
                }
            }
            KeyCode::Right => {
                if !self.legal.is_empty() {
                    self.selected = (self.selected + 1) % self.legal.len();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_selected();
            }
            KeyCode::Char('r') => {
                // Reset game
                self.game_state = GameState::initial();
                self.dice = None;
                self.legal.clear();
                self.selected = 0;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Commit the highlighted move (or pass when the roll is dead).
    fn play_selected(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.game_state.current_player() != Player::White || self.dice.is_none() {
            return;
        }

        if self.legal.is_empty() {
            self.game_state.pass_turn();
            self.dice = None;
            self.message = Some("White passes".to_string());
            return;
        }

        let mv = self.legal[self.selected];
        match self.game_state.apply(mv) {
            Ok(()) => {
                self.dice = None;
                self.legal.clear();
                self.selected = 0;
                self.message = match self.game_state.winner() {
                    Some(winner) => Some(format!("{} wins!", winner.name())),
                    None => Some(format!("White played {}", mv)),
                };
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
            Err(_) => {
                self.message = Some("Illegal move!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let highlight = if self.game_state.current_player() == Player::White {
            self.legal.get(self.selected).copied()
        } else {
            None
        };
        super::game_view::render(
            frame,
            &self.game_state,
            self.dice,
            highlight,
            self.selected,
            self.legal.len(),
            &self.message,
        );
    }
}
