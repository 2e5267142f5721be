pub mod game_common;
pub mod menu_scene;
pub mod runner_scene;

use crate::app::{App, Screen};
use ratatui::Frame;

/// Draw whichever screen is visible.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    match (app.screen, app.game.as_ref()) {
        (Screen::Playing, Some(game)) => {
            runner_scene::render_runner_scene(frame, area, game, app.best_score)
        }
        _ => menu_scene::render_menu_scene(frame, area, app),
    }
}
