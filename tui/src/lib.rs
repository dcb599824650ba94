//! TUI rendering for nncalc using ratatui.

mod input;
mod theme;

pub use input::{InputPump, KeyAction, apply_event, handle_events, key_action};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use nncalc_engine::{App, Digit, DigitEntryState, Display, Operation, StatusKind};

const KEYPAD_HEIGHT: u16 = 6;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Fill(1),              // Top register
            Constraint::Fill(1),              // Bottom register
            Constraint::Length(KEYPAD_HEIGHT), // Key pad
            Constraint::Length(1),            // Status bar
        ])
        .split(frame.area());

    let display = app.display();
    draw_register(frame, "Top", display.top(), chunks[0], &palette, &glyphs);
    draw_register(frame, "Bottom", display.bottom(), chunks[1], &palette, &glyphs);
    draw_keypad(frame, display, chunks[2], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);
}

fn draw_register(
    frame: &mut Frame,
    name: &str,
    value: &str,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let digits = value.len();
    let unit = if digits == 1 { "digit" } else { "digits" };
    let title = Line::from(vec![
        Span::styled(format!(" {name} "), styles::register_title(palette)),
        Span::styled(
            format!("{} {digits} {unit} ", glyphs.separator),
            styles::key_hint(palette),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .title(title);

    let inner = block.inner(area);
    let lines: Vec<Line> = fit_digits(
        value,
        usize::from(inner.width),
        usize::from(inner.height),
        glyphs.ellipsis,
    )
    .into_iter()
    .map(|row| Line::from(Span::styled(row, styles::register_value(palette))))
    .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Splits a digit string into rows of `width` characters.
///
/// When the value needs more than `height` rows, the leading digits are
/// dropped and replaced with `ellipsis`, so the most recently typed
/// (least significant) digits stay visible.
#[must_use]
pub fn fit_digits(value: &str, width: usize, height: usize, ellipsis: &str) -> Vec<String> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let capacity = width * height;
    let visible = if value.len() <= capacity {
        value.to_string()
    } else {
        let ellipsis_width = ellipsis.width().min(capacity);
        let keep = capacity - ellipsis_width;
        format!("{ellipsis}{}", &value[value.len() - keep..])
    };

    let chars: Vec<char> = visible.chars().collect();
    chars
        .chunks(width)
        .map(|row| row.iter().collect())
        .collect()
}

struct KeyCap {
    key: &'static str,
    label: &'static str,
    op: Option<Operation>,
}

const fn cap(key: &'static str, label: &'static str, op: Operation) -> KeyCap {
    KeyCap {
        key,
        label,
        op: Some(op),
    }
}

fn keypad_rows(glyphs: &Glyphs) -> [Vec<KeyCap>; 4] {
    [
        vec![
            cap("+", "add", Operation::Add),
            cap("-", "subtract", Operation::Subtract),
            cap("c", "clear", Operation::Clear),
        ],
        vec![
            cap("*", "multiply", Operation::Multiply),
            cap("/", "divide", Operation::Divide),
            cap("s", "swap", Operation::Swap),
        ],
        vec![
            cap("^", "power", Operation::Power),
            cap("r", "root", Operation::Root),
            cap(glyphs.enter_key, "enter", Operation::Enter),
        ],
        vec![KeyCap {
            key: "q",
            label: "quit",
            op: None,
        }],
    ]
}

const DIGIT_ROWS: [&[u8]; 4] = [&[7, 8, 9], &[4, 5, 6], &[1, 2, 3], &[0]];

fn draw_keypad(frame: &mut Frame, display: &Display, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let rows = keypad_rows(glyphs);
    let mut lines = Vec::with_capacity(rows.len());

    for (digits, caps) in DIGIT_ROWS.iter().zip(rows.iter()) {
        let mut spans = vec![Span::raw(" ")];
        for slot in 0..3 {
            let text = digits
                .get(slot)
                .and_then(|d| Digit::new(*d).ok())
                .map_or_else(|| "  ".to_string(), |d| format!("{d} "));
            spans.push(Span::styled(text, styles::key_highlight(palette)));
        }
        spans.push(Span::raw("  "));

        for cap in caps {
            let enabled = cap.op.is_none_or(|op| display.allows(op));
            let (key_style, label_style) = if enabled {
                (styles::key_highlight(palette), styles::key_hint(palette))
            } else {
                (styles::key_disabled(palette), styles::key_disabled(palette))
            };
            spans.push(Span::styled(format!("{:>3}", cap.key), key_style));
            spans.push(Span::styled(format!(" {:<10}", cap.label), label_style));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(Span::styled(" Keys ", styles::key_hint(palette)));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn entry_state_label(state: DigitEntryState) -> &'static str {
    match state {
        DigitEntryState::Cleared => "ready",
        DigitEntryState::EnteredOrSwapped => "next digit starts a new operand",
        DigitEntryState::AfterOperator => "next digit pushes the result",
        DigitEntryState::AfterDigit => "entering digits",
    }
}

pub(crate) fn draw_status_bar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let (status_text, status_style) = if let Some(op) = app.pending_operation() {
        let spinner = spinner_frame(app.tick_count(), app.ui_options());
        (
            format!("{spinner} Computing {op}..."),
            Style::default().fg(palette.primary),
        )
    } else if let Some((kind, message)) = app.status() {
        let color = match kind {
            StatusKind::Warning => palette.warning,
            StatusKind::Info => palette.text_secondary,
        };
        (message.to_string(), Style::default().fg(color))
    } else {
        let mut text = format!(
            "{} {}",
            glyphs.status_ready,
            entry_state_label(app.entry_state())
        );
        if let Some(last) = app.display().last_operation() {
            text.push_str(&format!(
                " {} {} {:.1?}",
                glyphs.separator, last.op, last.elapsed
            ));
        }
        (text, Style::default().fg(palette.green))
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(status_text, status_style.add_modifier(Modifier::BOLD)),
    ]));
    frame.render_widget(status, area);
}
