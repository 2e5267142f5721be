//! Screen state: start menu, play view, and the running session.

use crate::input::AppInput;
use crate::runner::{advance, process_input, RunnerGame, TickOutcome, Tuning, Variant};
use rand::Rng;
use tracing::info;

/// Which view is visible. Game input only reaches the session while
/// `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
}

pub struct App {
    pub screen: Screen,
    /// Variant highlighted on the menu.
    pub selected: Variant,
    /// Present while a session exists (also kept frozen after game over).
    pub game: Option<RunnerGame>,
    /// Highest score reached since the program started. Not saved.
    pub best_score: u64,
    pub running: bool,
    /// Replaces the variant preset when set (from `--tuning`).
    tuning_override: Option<Tuning>,
}

impl App {
    pub fn new(selected: Variant, tuning_override: Option<Tuning>) -> Self {
        Self {
            screen: Screen::Menu,
            selected,
            game: None,
            best_score: 0,
            running: true,
            tuning_override,
        }
    }

    /// Tuning a new session of `variant` will use.
    pub fn tuning_for(&self, variant: Variant) -> Tuning {
        self.tuning_override
            .clone()
            .unwrap_or_else(|| variant.tuning())
    }

    pub fn has_tuning_override(&self) -> bool {
        self.tuning_override.is_some()
    }

    /// Apply one mapped input. Returns true if anything visible changed.
    pub fn handle_input(&mut self, input: AppInput) -> bool {
        match (self.screen, input) {
            (_, AppInput::Quit) => {
                self.running = false;
                true
            }
            (_, AppInput::None) => false,

            (Screen::Menu, AppInput::MenuUp) => {
                let count = Variant::ALL.len();
                self.selected = Variant::from_index((self.selected.index() + count - 1) % count);
                true
            }
            (Screen::Menu, AppInput::MenuDown) => {
                let count = Variant::ALL.len();
                self.selected = Variant::from_index((self.selected.index() + 1) % count);
                true
            }
            (Screen::Menu, AppInput::MenuSelect(index)) => {
                if index >= Variant::ALL.len() {
                    return false;
                }
                self.selected = Variant::from_index(index);
                true
            }
            (Screen::Menu, AppInput::Start) => {
                self.start();
                true
            }
            // The menu hides the play view; nothing reaches the session
            (Screen::Menu, _) => false,

            (Screen::Playing, AppInput::Back) => {
                self.record_best();
                self.screen = Screen::Menu;
                true
            }
            (Screen::Playing, AppInput::Game(game_input)) => match self.game.as_mut() {
                Some(game) => process_input(game, game_input),
                None => false,
            },
            (Screen::Playing, _) => false,
        }
    }

    /// Start a fresh session with the highlighted variant.
    pub fn start(&mut self) {
        let variant = self.selected;
        let game = RunnerGame::with_tuning(variant, self.tuning_for(variant));
        info!(variant = variant.name(), "session started");
        self.game = Some(game);
        self.screen = Screen::Playing;
    }

    /// Advance the running session by `dt_ms` of wall-clock time.
    pub fn update<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> TickOutcome {
        if self.screen != Screen::Playing {
            return TickOutcome::Running;
        }
        let outcome = match self.game.as_mut() {
            Some(game) => advance(game, dt_ms, rng),
            None => return TickOutcome::Running,
        };
        self.record_best();
        outcome
    }

    fn record_best(&mut self) {
        if let Some(game) = &self.game {
            self.best_score = self.best_score.max(game.score);
        }
    }
}
