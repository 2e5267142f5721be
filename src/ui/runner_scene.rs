//! Play view rendering.
//!
//! The play field uses a cell buffer: logical pixel rectangles are scaled
//! down to terminal cells, painted back to front (background, ground,
//! obstacles, projectiles, character) and emitted as styled lines. Nothing
//! here mutates the session.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
};
use crate::constants::{GROUND_TOP, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::runner::{CooldownStatus, ObstacleSize, Rect as Bounds, RunnerGame, Variant};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows the play field keeps before the status bar gives way.
const FIELD_MIN_HEIGHT: u16 = 4;
const INFO_PANEL_WIDTH: u16 = 24;

/// Cell in the render buffer with foreground and background colors.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Cell {
    const fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self { ch, fg, bg }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', Color::Reset, Color::Reset)
    }
}

/// Glyphs and colors standing in for the sprite images of each variant.
struct Sprites {
    title: &'static str,
    border: Color,
    character: Cell,
    small_obstacle: Cell,
    large_obstacle: Cell,
    projectile: Cell,
    ground: Cell,
    /// Background fill; `None` leaves the field blank.
    sky: Option<Color>,
    /// Legend names: character, small obstacle, large obstacle.
    names: [&'static str; 3],
}

fn sprites(variant: Variant) -> Sprites {
    let orange = Color::Rgb(255, 165, 0);
    match variant {
        Variant::Classic => Sprites {
            title: " Dino Blast: Classic ",
            border: Color::LightYellow,
            character: Cell::new('█', Color::LightYellow, Color::Reset),
            small_obstacle: Cell::new('▒', Color::Rgb(170, 120, 80), Color::Reset),
            large_obstacle: Cell::new('║', Color::Rgb(60, 160, 60), Color::Reset),
            projectile: Cell::new('━', orange, Color::Reset),
            ground: Cell::new('▓', Color::Rgb(110, 110, 110), Color::Rgb(83, 83, 83)),
            sky: None,
            names: ["Scott", "Obstacle", "Pipe"],
        },
        Variant::Sky => Sprites {
            title: " Dino Blast: Sky ",
            border: Color::LightCyan,
            character: Cell::new('█', Color::LightGreen, Color::Reset),
            small_obstacle: Cell::new('|', Color::Rgb(40, 140, 40), Color::Reset),
            large_obstacle: Cell::new('#', Color::Rgb(20, 100, 20), Color::Reset),
            projectile: Cell::new('━', orange, Color::Reset),
            ground: Cell::new(' ', Color::Black, Color::Black),
            sky: Some(Color::Rgb(120, 190, 235)),
            names: ["Dino", "Cactus", "Big cactus"],
        },
    }
}

/// Logical-pixel canvas scaled onto a grid of terminal cells.
struct CellBuffer {
    width: usize,
    height: usize,
    x_scale: f64,
    y_scale: f64,
    cells: Vec<Vec<Cell>>,
}

impl CellBuffer {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width: width as usize,
            height: height as usize,
            x_scale: width as f64 / SURFACE_WIDTH,
            y_scale: height as f64 / SURFACE_HEIGHT,
            cells: vec![vec![Cell::default(); width as usize]; height as usize],
        }
    }

    /// Column and row ranges covered by a logical rectangle, clipped to the
    /// buffer. Anything visible covers at least one cell.
    fn span(&self, bounds: &Bounds) -> Option<(std::ops::Range<usize>, std::ops::Range<usize>)> {
        let cols = Self::axis(bounds.x, bounds.right(), self.x_scale, self.width)?;
        let rows = Self::axis(bounds.y, bounds.bottom(), self.y_scale, self.height)?;
        Some((cols, rows))
    }

    fn axis(start: f64, end: f64, scale: f64, limit: usize) -> Option<std::ops::Range<usize>> {
        let from = start * scale;
        let to = end * scale;
        if to <= 0.0 || from >= limit as f64 || limit == 0 {
            return None;
        }
        let first = from.floor().max(0.0) as usize;
        let last = (to.ceil() as usize).min(limit).max(first + 1).min(limit);
        (first < last).then_some(first..last)
    }

    /// Paint a rectangle. A `Reset` background keeps whatever is below.
    fn fill(&mut self, bounds: &Bounds, cell: Cell) {
        let Some((cols, rows)) = self.span(bounds) else {
            return;
        };
        for row in rows {
            for col in cols.clone() {
                let target = &mut self.cells[row][col];
                let bg = if cell.bg == Color::Reset { target.bg } else { cell.bg };
                *target = Cell { bg, ..cell };
            }
        }
    }

    /// Write text starting at (col, row), clipped at the right edge.
    fn put_text(&mut self, col: usize, row: usize, text: &str, fg: Color) {
        if row >= self.height {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let c = col + i;
            if c >= self.width {
                break;
            }
            let bg = self.cells[row][c].bg;
            self.cells[row][c] = Cell::new(ch, fg, bg);
        }
    }

    /// Merge runs of equal style into spans, one line per row.
    fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .into_iter()
            .map(|row| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut current = String::new();
                let mut style = Style::default();
                for cell in row {
                    let cell_style = Style::default().fg(cell.fg).bg(cell.bg);
                    if cell_style != style && !current.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut current), style));
                    }
                    style = cell_style;
                    current.push(cell.ch);
                }
                if !current.is_empty() {
                    spans.push(Span::styled(current, style));
                }
                Line::from(spans)
            })
            .collect()
    }
}

/// Render the play view for a session.
pub fn render_runner_scene(frame: &mut Frame, area: Rect, game: &RunnerGame, best_score: u64) {
    let sprites = sprites(game.variant);
    let layout = create_game_layout(
        frame,
        area,
        sprites.title,
        sprites.border,
        FIELD_MIN_HEIGHT,
        INFO_PANEL_WIDTH,
    );

    render_play_field(frame, layout.content, game, &sprites);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game, best_score, &sprites);

    if game.game_over {
        render_game_over_banner(
            frame,
            layout.content,
            "GAME OVER",
            &format!("Final score: {}", game.score),
            "[R] Restart   [Esc] Menu",
        );
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &RunnerGame, sprites: &Sprites) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    let mut buffer = CellBuffer::new(area.width, area.height);
    paint_field(&mut buffer, game, sprites);
    frame.render_widget(Paragraph::new(buffer.into_lines()), area);
}

fn paint_field(buffer: &mut CellBuffer, game: &RunnerGame, sprites: &Sprites) {
    // ── Background ────────────────────────────────────────────────────
    if let Some(sky) = sprites.sky {
        let whole = Bounds::new(0.0, 0.0, SURFACE_WIDTH, GROUND_TOP);
        buffer.fill(&whole, Cell::new(' ', Color::White, sky));

        // Clouds drift slower than the obstacles
        let drift = (game.tick_count as f64 * 0.5) % SURFACE_WIDTH;
        for &(base_x, y, w) in &[(120.0, 30.0, 60.0), (430.0, 60.0, 90.0), (680.0, 20.0, 50.0)] {
            let x = (base_x - drift).rem_euclid(SURFACE_WIDTH);
            buffer.fill(&Bounds::new(x, y, w, 12.0), Cell::new('~', Color::White, sky));
        }
    }

    // ── Ground bar ────────────────────────────────────────────────────
    let ground = Bounds::new(0.0, GROUND_TOP, SURFACE_WIDTH, SURFACE_HEIGHT - GROUND_TOP);
    buffer.fill(&ground, sprites.ground);

    // ── Obstacles ─────────────────────────────────────────────────────
    for obstacle in &game.obstacles {
        let cell = match obstacle.size {
            ObstacleSize::Small => sprites.small_obstacle,
            ObstacleSize::Large => sprites.large_obstacle,
        };
        buffer.fill(&obstacle.bounds(), cell);
    }

    // ── Projectiles ───────────────────────────────────────────────────
    for projectile in &game.projectiles {
        buffer.fill(&projectile.bounds(), sprites.projectile);
    }

    // ── Character ─────────────────────────────────────────────────────
    buffer.fill(&game.character.bounds(), sprites.character);

    // ── Score (top-right) ─────────────────────────────────────────────
    let score_text = format!("Score: {}", game.score);
    let start = buffer.width.saturating_sub(score_text.len() + 1);
    buffer.put_text(start, 0, &score_text, Color::White);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    if game.game_over {
        render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[("[R]", "Restart"), ("[Esc]", "Menu")],
        );
        return;
    }

    render_status_bar(
        frame,
        area,
        "Run!",
        Color::LightYellow,
        &[
            ("[Space]", "Jump"),
            ("[A]", "Fire"),
            ("[Esc]", "Menu"),
        ],
    );
}

fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    game: &RunnerGame,
    best_score: u64,
    sprites: &Sprites,
) {
    let inner = render_info_panel_frame(frame, area);

    let cooldown = CooldownStatus::of(game);
    let cooldown_color = match cooldown {
        CooldownStatus::Ready => Color::Green,
        CooldownStatus::Reloading { .. } => Color::Red,
    };

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
    let legend = |cell: Cell, name: &'static str| {
        Line::from(vec![
            Span::styled(format!(" {} ", cell.ch), Style::default().fg(cell.fg)),
            Span::styled(name, Style::default().fg(Color::DarkGray)),
        ])
    };

    let lines: Vec<Line> = vec![
        Line::from(vec![
            label("Variant: "),
            Span::styled(game.variant.name(), Style::default().fg(sprites.border)),
        ]),
        Line::from(vec![
            label("Score: "),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Best: "),
            Span::styled(
                best_score.max(game.score).to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            label("Shot down: "),
            Span::styled(
                game.obstacles_destroyed.to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            cooldown.to_string(),
            Style::default().fg(cooldown_color),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        legend(sprites.character, sprites.names[0]),
        legend(sprites.small_obstacle, sprites.names[1]),
        legend(sprites.large_obstacle, sprites.names[2]),
        legend(sprites.projectile, "Shot"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{process_input, Obstacle, RunnerInput};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(game: &RunnerGame, best: u64) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| render_runner_scene(f, f.size(), game, best))
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
    fn test_span_maps_full_surface_to_full_buffer() {
        let buffer = CellBuffer::new(80, 30);
        let (cols, rows) = buffer
            .span(&Bounds::new(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT))
            .unwrap();
        assert_eq!(cols, 0..80);
        assert_eq!(rows, 0..30);
    }

    #[test]
    fn test_span_clips_partially_visible() {
        let buffer = CellBuffer::new(80, 30);
        // Half off the left edge: logical -20..20 -> cells 0..2
        let (cols, _) = buffer.span(&Bounds::new(-20.0, 100.0, 40.0, 10.0)).unwrap();
        assert_eq!(cols, 0..2);
        // Entirely off the right edge
        assert!(buffer.span(&Bounds::new(SURFACE_WIDTH, 100.0, 30.0, 10.0)).is_none());
    }

    #[test]
    fn test_span_tiny_rect_still_visible() {
        let buffer = CellBuffer::new(40, 10);
        let (cols, rows) = buffer.span(&Bounds::new(100.0, 100.0, 1.0, 1.0)).unwrap();
        assert_eq!(cols.len(), 1);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_fill_keeps_background_under_transparent_sprite() {
        let mut buffer = CellBuffer::new(80, 30);
        let sky = Color::Rgb(1, 2, 3);
        buffer.fill(
            &Bounds::new(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT),
            Cell::new(' ', Color::White, sky),
        );
        buffer.fill(
            &Bounds::new(100.0, 100.0, 10.0, 10.0),
            Cell::new('#', Color::Green, Color::Reset),
        );
        let cell = buffer.cells[10][10];
        assert_eq!(cell.ch, '#');
        assert_eq!(cell.bg, sky);
    }

    #[test]
    fn test_obstacle_sprite_keyed_by_size_class() {
        let mut game = RunnerGame::new(Variant::Classic);
        let mut small = Obstacle::new(ObstacleSize::Small, &game.tuning);
        small.x = 400.0;
        let mut large = Obstacle::new(ObstacleSize::Large, &game.tuning);
        large.x = 600.0;
        game.obstacles.push(small);
        game.obstacles.push(large);
        let sprites = sprites(Variant::Classic);

        let mut buffer = CellBuffer::new(80, 30);
        paint_field(&mut buffer, &game, &sprites);

        // Ground starts at row 25; both obstacles reach row 24.
        assert_eq!(buffer.cells[24][41].ch, sprites.small_obstacle.ch);
        assert_eq!(buffer.cells[24][61].ch, sprites.large_obstacle.ch);
        assert_eq!(buffer.cells[27][0].ch, sprites.ground.ch);
    }

    #[test]
    fn test_scene_shows_score_and_ready_indicator() {
        let mut game = RunnerGame::new(Variant::Classic);
        game.score = 1234;

        let text = screen_text(&game, 0);

        assert!(text.contains("Score: 1234"));
        assert!(text.contains("Shot ready!"));
        assert!(text.contains("Classic"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn test_scene_shows_reload_countdown() {
        let mut game = RunnerGame::new(Variant::Sky);
        game.character.on_ground = true;
        process_input(&mut game, RunnerInput::Fire);

        let text = screen_text(&game, 0);

        assert!(text.contains("Reloading... (3s)"));
    }

    #[test]
    fn test_scene_shows_final_score_on_game_over() {
        let mut game = RunnerGame::new(Variant::Sky);
        game.score = 777;
        game.game_over = true;

        let text = screen_text(&game, 900);

        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Final score: 777"));
        assert!(text.contains("Best: 900"));
    }

    #[test]
    fn test_rendering_does_not_mutate_session() {
        let mut game = RunnerGame::new(Variant::Classic);
        game.score = 10;
        let before = format!("{:?}", game);
        screen_text(&game, 0);
        assert_eq!(format!("{:?}", game), before);
    }
}
