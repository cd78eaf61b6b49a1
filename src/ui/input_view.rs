use crate::app::App;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP_LINES: &[(&str, &str)] = &[
    (":start", "start reading the text"),
    (":load PATH", "load a text file"),
    (":paste", "load the clipboard"),
    ("Enter", "add the line (blank: new paragraph)"),
    (":wpm N", "set speed (50-1500) and fix it"),
    (":seek N", "jump to word N"),
    (":clear", "discard the text"),
    ("Space", "pause / resume"),
    ("← →", "step one word"),
    ("↑ ↓", "speed ±50"),
    ("+ -", "speed ±25"),
    ("f", "fix speed (stop speeding up)"),
    ("r", "restart from the first word"),
    ("Esc", "back to the text"),
    (":q", "quit"),
];

/// `"12 words • starts at 300 wpm"`
pub fn buffer_summary(text: &str, wpm: u32) -> String {
    let words = text.split_whitespace().count();
    let noun = if words == 1 { "word" } else { "words" };
    format!("{} {} • starts at {} wpm", words, noun, wpm)
}

/// Text panel shown while nothing is being read
pub fn render_input_screen(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let body: Paragraph = if app.text().trim().is_empty() {
        Paragraph::new("Paste or type the text to read, or load it with :load PATH / :paste")
            .style(Style::default().fg(theme.dimmed))
            .alignment(Alignment::Center)
    } else {
        // keep the tail of long buffers visible
        let visible = rows[0].height.saturating_sub(2) as usize;
        let lines: Vec<&str> = app.text().lines().collect();
        let start = lines.len().saturating_sub(visible.max(1));
        Paragraph::new(lines[start..].join("\n"))
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false })
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dimmed))
        .title(Span::styled(
            " QUICKREAD ",
            Style::default().fg(theme.anchor).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.background));
    frame.render_widget(body.block(block), rows[0]);

    let summary = Line::from(Span::styled(
        buffer_summary(app.text(), app.initial_wpm()),
        Style::default().fg(theme.dimmed),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(Paragraph::new(summary), rows[1]);
}

pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    let width = 52.min(area.width);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!(" {:<10}", key), Style::default().fg(theme.anchor)),
                Span::styled(*what, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" help ")
                .border_style(Style::default().fg(theme.dimmed))
                .style(Style::default().bg(theme.background)),
        ),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppEvent;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_buffer_summary() {
        assert_eq!(buffer_summary("", 300), "0 words • starts at 300 wpm");
        assert_eq!(buffer_summary("one", 300), "1 word • starts at 300 wpm");
        assert_eq!(buffer_summary("a b\nc", 450), "3 words • starts at 450 wpm");
    }

    #[test]
    fn test_input_screen_shows_buffer() {
        let mut app = App::new();
        app.handle_event(AppEvent::AppendText("The quick brown fox".to_string()), 0);

        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|f| render_input_screen(f, f.area(), &app, &Theme::midnight()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("QUICKREAD"));
        assert!(text.contains("The quick brown fox"));
        assert!(text.contains("4 words"));
    }

    #[test]
    fn test_help_fits_small_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal
            .draw(|f| render_help(f, f.area(), &Theme::midnight()))
            .unwrap();
        assert!(screen_text(&terminal).contains("help"));
    }

    #[test]
    fn test_help_lists_load_commands() {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal
            .draw(|f| render_help(f, f.area(), &Theme::midnight()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains(":start"));
        assert!(text.contains(":load PATH"));
        assert!(text.contains(":paste"));
        assert!(!text.contains("@@"));
    }
}
