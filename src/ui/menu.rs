use ratatui::prelude::*;
use ratatui::widgets::*;

const BANNER: &str = r#"
 ╔════════════════════════════════════════════════╗
 ║  ███████╗████████╗ █████╗ ██████╗              ║
 ║  ██╔════╝╚══██╔══╝██╔══██╗██╔══██╗             ║
 ║  ███████╗   ██║   ███████║██████╔╝             ║
 ║  ╚════██║   ██║   ██╔══██║██╔══██╗             ║
 ║  ███████║   ██║   ██║  ██║██║  ██║ SHOT        ║
 ║  ╚══════╝   ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═╝             ║
 ╚════════════════════════════════════════════════╝"#;

struct ModeTile {
    key: &'static str,
    name: &'static str,
    desc: &'static str,
    color: Color,
}

const MODE_TILES: [ModeTile; 2] = [
    ModeTile {
        key: "1",
        name: "Single Player",
        desc: "Arrows + Space, with two auto-firing escorts",
        color: Color::Rgb(80, 200, 255),
    },
    ModeTile {
        key: "2",
        name: "Multiplayer",
        desc: "P1: Arrows + Space   P2: WASD + F",
        color: Color::Rgb(255, 220, 80),
    },
];

pub fn render_menu(frame: &mut Frame, area: Rect, selected: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 160, 255)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = BANNER
        .lines()
        .map(|l| {
            Line::from(Span::styled(
                l.to_string(),
                Style::default().fg(Color::Rgb(120, 200, 255)),
            ))
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Five waves of enemies, falling meteors, then the mothership.",
        Style::default().fg(Color::Rgb(140, 140, 160)),
    )));
    lines.push(Line::from(""));

    for (i, tile) in MODE_TILES.iter().enumerate() {
        let marker = if i == selected { "\u{25b6} " } else { "  " };
        let name_style = if i == selected {
            Style::default().fg(tile.color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(tile.color)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{marker}[{}] ", tile.key),
                Style::default()
                    .fg(Color::Rgb(255, 220, 80))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(tile.name, name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("       {}", tile.desc),
            Style::default().fg(Color::Rgb(120, 120, 140)),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(
            "\u{2191}\u{2193}",
            Style::default().fg(Color::Rgb(80, 200, 255)),
        ),
        Span::styled(" select  ", Style::default().fg(Color::Rgb(120, 120, 140))),
        Span::styled("Enter", Style::default().fg(Color::Rgb(80, 200, 255))),
        Span::styled(" start  ", Style::default().fg(Color::Rgb(120, 120, 140))),
        Span::styled("Q", Style::default().fg(Color::Rgb(80, 200, 255))),
        Span::styled(" quit", Style::default().fg(Color::Rgb(120, 120, 140))),
    ]));

    let p = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(p, inner);
}
