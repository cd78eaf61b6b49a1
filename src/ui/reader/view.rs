use crate::app::RenderState;
use crate::reading::OrpSegments;
use crate::ui::keys::CommandLine;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Column (within the word column) where the anchor letter is drawn
pub const ANCHOR_COLUMN: usize = 10;
/// Width of the centre column holding the current word
pub const WORD_COLUMN_WIDTH: u16 = 30;

const CONTEXT_GAP: &str = "   ";

/// Spaces needed before the word so its anchor sits on `ANCHOR_COLUMN`.
pub fn anchor_padding(before: &str) -> usize {
    ANCHOR_COLUMN.saturating_sub(before.width())
}

pub fn render_word_display(segments: &OrpSegments, theme: &Theme) -> Paragraph<'static> {
    let text_style = Style::default().fg(theme.text);
    let anchor_style = Style::default()
        .fg(theme.anchor)
        .add_modifier(Modifier::BOLD);

    let spans = vec![
        Span::raw(" ".repeat(anchor_padding(&segments.before))),
        Span::styled(segments.before.clone(), text_style),
        Span::styled(segments.anchor.clone(), anchor_style),
        Span::styled(segments.after.clone(), text_style),
    ];

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(Style::default().bg(theme.background))
}

/// Tick above and below the word marking the anchor column
pub fn render_focus_marker(glyph: &'static str, theme: &Theme) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::raw(" ".repeat(ANCHOR_COLUMN)),
        Span::styled(glyph, Style::default().fg(theme.dimmed)),
    ]);
    Paragraph::new(line).style(Style::default().bg(theme.background))
}

/// First `max` graphemes of `word`
pub fn truncate_word(word: &str, max: usize) -> String {
    word.graphemes(true).take(max).collect()
}

/// Join context words, skipping the blank padding slots.
pub fn context_text(words: &[String], truncate: usize) -> String {
    words
        .iter()
        .filter(|w| !w.is_empty())
        .map(|w| truncate_word(w, truncate))
        .collect::<Vec<_>>()
        .join(CONTEXT_GAP)
}

pub fn render_context_left(words: &[String], truncate: usize, theme: &Theme) -> Paragraph<'static> {
    let mut text = context_text(words, truncate);
    if !text.is_empty() {
        text.push_str(CONTEXT_GAP);
    }

    Paragraph::new(text)
        .alignment(Alignment::Right)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}

pub fn render_context_right(words: &[String], truncate: usize, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(context_text(words, truncate))
        .alignment(Alignment::Left)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}

/// Number of filled cells for `percent` of a `width`-cell bar
pub fn progress_fill(percent: f64, width: usize) -> usize {
    let clamped = percent.clamp(0.0, 100.0);
    ((clamped / 100.0) * width as f64).round() as usize
}

pub fn render_progress_bar(percent: f64, width: usize, theme: &Theme) -> Line<'static> {
    let filled = progress_fill(percent, width);
    Line::from(vec![
        Span::styled("━".repeat(filled), Style::default().fg(theme.anchor)),
        Span::styled("─".repeat(width - filled), Style::default().fg(theme.dimmed)),
    ])
}

pub fn render_progress_label(state: &RenderState, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        state.progress_label(),
        Style::default().fg(theme.dimmed),
    ))
    .alignment(Alignment::Center)
}

pub fn render_status(status: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        status,
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
}

pub fn speed_text(speed: u32, locked: bool) -> String {
    if locked {
        format!("{} wpm • FIXED", speed)
    } else {
        format!("{} wpm", speed)
    }
}

pub fn render_speed(state: &RenderState, theme: &Theme) -> Line<'static> {
    let hint = "space pause  ←/→ step  ↑/↓ speed  f fixed  r restart  : command  esc back";
    Line::from(vec![
        Span::styled(
            speed_text(state.speed, state.speed_locked),
            Style::default().fg(theme.text),
        ),
        Span::styled(format!("   {}", hint), Style::default().fg(theme.dimmed)),
    ])
    .alignment(Alignment::Center)
}

/// The whole reading screen
pub fn render_reader(
    frame: &mut Frame,
    area: Rect,
    state: &RenderState,
    truncate: usize,
    theme: &Theme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // progress bar
            Constraint::Length(1), // progress label
            Constraint::Min(0),
            Constraint::Length(1), // marker
            Constraint::Length(1), // word
            Constraint::Length(1), // marker
            Constraint::Length(1), // status
            Constraint::Min(0),
            Constraint::Length(1), // speed and hints
        ])
        .split(area);

    let bar_width = rows[0].width as usize;
    frame.render_widget(
        Paragraph::new(render_progress_bar(state.percent, bar_width, theme)),
        rows[0],
    );
    frame.render_widget(Paragraph::new(render_progress_label(state, theme)), rows[1]);

    let word_row = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(WORD_COLUMN_WIDTH),
                Constraint::Fill(1),
            ])
            .split(row)
    };

    frame.render_widget(render_focus_marker("╷", theme), word_row(rows[3])[1]);

    let columns = word_row(rows[4]);
    frame.render_widget(
        render_context_left(&state.context.before, truncate, theme),
        columns[0],
    );
    frame.render_widget(render_word_display(&state.segments, theme), columns[1]);
    frame.render_widget(
        render_context_right(&state.context.after, truncate, theme),
        columns[2],
    );

    frame.render_widget(render_focus_marker("╵", theme), word_row(rows[5])[1]);
    frame.render_widget(Paragraph::new(render_status(state.status, theme)), rows[6]);
    frame.render_widget(Paragraph::new(render_speed(state, theme)), rows[8]);
}

/// One-line command deck with a left accent bar
pub fn render_command_deck(
    frame: &mut Frame,
    area: Rect,
    line: &CommandLine,
    message: Option<&str>,
    theme: &Theme,
) {
    frame.render_widget(Clear, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let accent_bar =
        Paragraph::new("▌").style(Style::default().fg(theme.anchor).bg(theme.background));
    frame.render_widget(accent_bar, layout[0]);

    let content = if !line.as_str().is_empty() || line.is_active() {
        Line::from(vec![
            Span::styled(format!(" {}", line.as_str()), Style::default().fg(theme.text)),
            Span::styled("█", Style::default().fg(theme.dimmed)),
        ])
    } else if let Some(msg) = message {
        Line::from(Span::styled(format!(" {}", msg), Style::default().fg(theme.anchor)))
    } else {
        Line::from(Span::styled(
            " Type or paste text, :start to read  •  :load PATH  :paste  :wpm N  :help  :q",
            Style::default().fg(theme.dimmed),
        ))
    };

    let input_widget = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.dimmed)),
        )
        .style(Style::default().bg(theme.background));

    frame.render_widget(input_widget, layout[1]);
}
