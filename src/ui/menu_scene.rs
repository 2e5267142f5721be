//! Start menu: variant picker with a short tuning summary.

use crate::app::App;
use crate::constants::TICKS_PER_SECOND;
use crate::runner::{Tuning, Variant};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MENU_WIDTH: u16 = 56;
const MENU_HEIGHT: u16 = 18;

pub fn render_menu_scene(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);

    let width = MENU_WIDTH.min(area.width);
    let height = MENU_HEIGHT.min(area.height);
    let menu_area = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let block = Block::default()
        .title(" Dino Blast ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightYellow));
    let inner = block.inner(menu_area);
    frame.render_widget(block, menu_area);

    let mut lines = vec![
        Line::from(Span::styled(
            "JUMP  -  SHOOT  -  SURVIVE",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, variant) in Variant::ALL.iter().enumerate() {
        let selected = *variant == app.selected;
        let marker = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::LightYellow)),
            Span::styled(format!("[{}] {:<8}", i + 1, variant.name()), style),
            Span::styled(variant.tagline(), Style::default().fg(Color::DarkGray)),
        ]));
    }

    let tuning = app.tuning_for(app.selected);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        tuning_summary(&tuning),
        Style::default().fg(Color::Gray),
    )));
    if app.has_tuning_override() {
        lines.push(Line::from(Span::styled(
            "(custom tuning file loaded)",
            Style::default().fg(Color::Cyan),
        )));
    }

    if app.best_score > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Best this run: {}", app.best_score),
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter/Space] Start   [Up/Down] Choose   [Q] Quit",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "In game: [Space] Jump  [A] Fire  [R] Restart",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// One-line description of a tuning, e.g. "Speed 5 px/tick | Reload 3s | Spawn gate off".
pub fn tuning_summary(tuning: &Tuning) -> String {
    let reload_secs = (tuning.shoot_cooldown_ticks as u64).div_ceil(TICKS_PER_SECOND);
    let gate = match tuning.obstacle_cooldown_ticks {
        Some(ticks) => format!("Spawn gate {} ticks", ticks),
        None => "Spawn gate off".to_string(),
    };
    format!(
        "Speed {} px/tick | Reload {}s | {}",
        tuning.obstacle_speed, reload_secs, gate
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_menu_scene(f, f.size(), app))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_tuning_summary() {
        assert_eq!(
            tuning_summary(&Tuning::classic()),
            "Speed 5 px/tick | Reload 3s | Spawn gate off"
        );
        assert_eq!(
            tuning_summary(&Tuning::sky()),
            "Speed 9 px/tick | Reload 3s | Spawn gate 25 ticks"
        );
    }

    #[test]
    fn test_menu_lists_variants_and_marks_selection() {
        let app = App::new(Variant::Sky, None);
        let text = screen_text(&app, 80, 24);
        assert!(text.contains("[1] Classic"));
        assert!(text.contains("> [2] Sky"));
        assert!(!text.contains("Best this run"));
    }

    #[test]
    fn test_menu_shows_best_score() {
        let mut app = App::new(Variant::Classic, None);
        app.best_score = 4321;
        let text = screen_text(&app, 80, 24);
        assert!(text.contains("Best this run: 4321"));
    }

    #[test]
    fn test_menu_survives_tiny_terminal() {
        let app = App::new(Variant::Classic, None);
        screen_text(&app, 10, 4);
    }
}
