use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::entity::{BlastStyle, Entity, HeroId, Kind};
use crate::game::state::{MatchState, Mode};
use crate::game::wave::Outcome;
use crate::game::{BOSS_HEALTH, FIELD_HEIGHT, FIELD_WIDTH};
use crate::ui::sprites::{self, DotMap};

const BG: Color = Color::Rgb(0, 0, 5);

pub fn render_match(frame: &mut Frame, area: Rect, m: &MatchState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 160, 255)))
        .title(" Starshot ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(120, 200, 255))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(status_line(m)), chunks[0]);

    let fw = chunks[1].width as usize;
    let fh = chunks[1].height as usize;
    if fw > 0 && fh > 0 {
        let lines = render_field(m, fw, fh);
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    frame.render_widget(Paragraph::new(help_line(m)), chunks[2]);
}

fn status_line(m: &MatchState) -> Line<'static> {
    let sep = Span::styled(" | ", Style::default().fg(Color::DarkGray));
    let mut spans = vec![
        Span::styled(
            format!(" Score: {} ", m.total_points()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
    ];
    match m.mode {
        Mode::Single => {
            if let Some(hero) = m.hero(HeroId::One) {
                spans.push(Span::styled(
                    format!("Lives: {}", "\u{2665} ".repeat(hero.life as usize)),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ));
            }
        }
        Mode::Multi => {
            if let Some(hero) = m.hero(HeroId::One) {
                spans.push(Span::styled(
                    format!("P1: {}", "\u{2665} ".repeat(hero.life as usize)),
                    Style::default().fg(Color::Cyan),
                ));
            }
            spans.push(sep.clone());
            if let Some(hero) = m.hero(HeroId::Two) {
                spans.push(Span::styled(
                    format!("P2: {}", "\u{2665} ".repeat(hero.life as usize)),
                    Style::default().fg(Color::Yellow),
                ));
            }
        }
    }
    spans.push(sep);
    spans.push(Span::styled(
        format!("Wave: {} ", m.waves.current),
        Style::default().fg(Color::Green),
    ));
    Line::from(spans)
}

fn help_line(m: &MatchState) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let hot = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    match m.mode {
        Mode::Single => Line::from(vec![
            Span::styled(" \u{2190}\u{2191}\u{2193}\u{2192} Move ", dim),
            Span::styled("| ", dim),
            Span::styled("Space Fire ", hot),
            Span::styled("| ", dim),
            Span::styled("Esc Menu", dim),
        ]),
        Mode::Multi => Line::from(vec![
            Span::styled(" P1 \u{2190}\u{2191}\u{2193}\u{2192}+Space ", dim),
            Span::styled("| ", dim),
            Span::styled("P2 WASD+F ", hot),
            Span::styled("| ", dim),
            Span::styled("Esc Menu", dim),
        ]),
    }
}

fn render_field(m: &MatchState, w: usize, h: usize) -> Vec<Line<'static>> {
    let bw = (w * 2) as i32;
    let bh = (h * 4) as i32;
    let bsx = bw as f32 / FIELD_WIDTH;
    let bsy = bh as f32 / FIELD_HEIGHT;

    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(BG)); w]; h];

    for e in &m.entities {
        if e.dead {
            continue;
        }
        draw_entity(&mut grid, e, bsx, bsy, w, h, bw, bh);
    }

    // Heroes on top of everything else
    for hero in m.heroes.iter().filter(|hero| hero.alive()) {
        let mut map: DotMap = DotMap::new();
        let (x0, y0, x1, y1) = dot_rect(hero.x, hero.y, hero.width, hero.height, bsx, bsy);
        sprites::ship_up(&mut map, x0, y0, x1, y1, bw, bh);
        let color = match hero.id {
            HeroId::One => Color::Rgb(80, 255, 80),
            HeroId::Two => Color::Rgb(255, 220, 80),
        };
        sprites::write_layer(&mut grid, &map, w, h, color, BG, true);
    }

    // Cell-level overlays: boss health bar, then fading banners
    for e in &m.entities {
        if e.dead {
            continue;
        }
        match &e.kind {
            Kind::Boss { health, .. } => {
                draw_health_bar(&mut grid, e, *health, bsx, bsy, w, h);
            }
            Kind::Banner { text, rise, .. } => {
                let base = if *rise {
                    Color::Rgb(255, 220, 80)
                } else {
                    Color::Rgb(255, 70, 70)
                };
                let color = sprites::dim(base, e.banner_alpha());
                draw_centered_text(&mut grid, text, (e.y * bsy / 4.0) as i32, color, w, h);
            }
            _ => {}
        }
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn dot_rect(x: f32, y: f32, width: f32, height: f32, bsx: f32, bsy: f32) -> (i32, i32, i32, i32) {
    (
        (x * bsx) as i32,
        (y * bsy) as i32,
        ((x + width) * bsx) as i32,
        ((y + height) * bsy) as i32,
    )
}

#[allow(clippy::too_many_arguments)]
fn draw_entity(
    grid: &mut [Vec<(char, Style)>],
    e: &Entity,
    bsx: f32,
    bsy: f32,
    w: usize,
    h: usize,
    bw: i32,
    bh: i32,
) {
    let mut map: DotMap = DotMap::new();
    let (x0, y0, x1, y1) = dot_rect(e.x, e.y, e.width, e.height, bsx, bsy);
    let (color, bold) = match &e.kind {
        Kind::Enemy => {
            sprites::ship_down(&mut map, x0, y0, x1, y1, bw, bh);
            (Color::Rgb(255, 80, 80), false)
        }
        Kind::Boss { .. } => {
            sprites::saucer(&mut map, x0, y0, x1, y1, bw, bh);
            (Color::Rgb(200, 120, 255), true)
        }
        Kind::Meteor { big } => {
            sprites::fill_ellipse(&mut map, x0, y0, x1, y1, bw, bh);
            let color = if *big {
                Color::Rgb(200, 160, 110)
            } else {
                Color::Rgb(170, 150, 120)
            };
            (color, false)
        }
        Kind::Laser { origin } => {
            sprites::bolt(&mut map, (x0 + x1) / 2, y0, y1, bw, bh);
            let color = match origin.blast_style() {
                BlastStyle::Red => Color::Rgb(255, 100, 100),
                BlastStyle::Green => Color::Rgb(100, 255, 140),
            };
            (color, true)
        }
        Kind::BossLaser { .. } => {
            sprites::bolt(&mut map, (x0 + x1) / 2, y0, y1, bw, bh);
            (Color::Rgb(255, 80, 200), true)
        }
        Kind::Escort { .. } => {
            sprites::ship_up(&mut map, x0, y0, x1, y1, bw, bh);
            (Color::Rgb(100, 220, 255), false)
        }
        Kind::Explosion { style, .. } => {
            let cx = (x0 + x1) / 2;
            let cy = (y0 + y1) / 2;
            sprites::starburst(&mut map, cx, cy, (x1 - x0).max(2) / 2, bw, bh);
            let color = match style {
                BlastStyle::Red => Color::Rgb(255, 150, 60),
                BlastStyle::Green => Color::Rgb(150, 255, 120),
            };
            (color, true)
        }
        // Banners are drawn as cell text, not dots
        Kind::Banner { .. } => return,
    };
    sprites::write_layer(grid, &map, w, h, color, BG, bold);
}

fn draw_health_bar(
    grid: &mut [Vec<(char, Style)>],
    boss: &Entity,
    health: u32,
    bsx: f32,
    bsy: f32,
    w: usize,
    h: usize,
) {
    let row = ((boss.y * bsy / 4.0) as i32 - 1).max(0) as usize;
    if row >= h {
        return;
    }
    let left = ((boss.x * bsx / 2.0) as i32).max(0) as usize;
    let right = (((boss.x + boss.width) * bsx / 2.0) as i32).max(0) as usize;
    if right <= left {
        return;
    }
    let width = right - left;
    let filled = (health as f32 / BOSS_HEALTH as f32 * width as f32).round() as usize;
    for (i, col) in (left..right).enumerate() {
        if col >= w {
            break;
        }
        let (ch, color) = if i < filled {
            ('\u{2588}', Color::Rgb(80, 255, 80))
        } else {
            ('\u{2591}', Color::Rgb(160, 40, 40))
        };
        grid[row][col] = (ch, Style::default().fg(color).bg(BG));
    }
}

fn draw_centered_text(
    grid: &mut [Vec<(char, Style)>],
    text: &str,
    row: i32,
    color: Color,
    w: usize,
    h: usize,
) {
    if row < 0 || row as usize >= h {
        return;
    }
    let row = row as usize;
    let chars: Vec<char> = text.chars().collect();
    let start = (w.saturating_sub(chars.len())) / 2;
    let style = Style::default()
        .fg(color)
        .bg(BG)
        .add_modifier(Modifier::BOLD);
    for (i, ch) in chars.into_iter().enumerate() {
        let col = start + i;
        if col < w {
            grid[row][col] = (ch, style);
        }
    }
}

/// Terminal screen: frozen field replaced by the final result.
pub fn render_end(frame: &mut Frame, area: Rect, m: &MatchState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 160, 255)))
        .title(" Starshot ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let won = m.outcome == Some(Outcome::Won);
    let (title, title_color, subtitle) = if won {
        (
            "*** VICTORY ***",
            Color::Rgb(255, 215, 0),
            "Boss defeated!".to_string(),
        )
    } else {
        (
            "GAME OVER",
            Color::Rgb(255, 70, 70),
            format!("Wave {} reached", m.waves.current),
        )
    };

    let mut lines = vec![Line::from(""); (inner.height as usize).saturating_sub(7) / 2];
    lines.push(Line::from(Span::styled(
        title,
        Style::default()
            .fg(title_color)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        subtitle,
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(Span::styled(
        format!("Final Score: {}", m.total_points()),
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to return to the menu",
        Style::default().fg(Color::Rgb(255, 220, 80)),
    )));

    let p = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(p, inner);
}
