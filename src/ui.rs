use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

use crate::celebration::Celebration;
use crate::progression::format_target;
use crate::session::InputMode;
use crate::timer::TimerStatus;
use crate::App;

const CELEBRATION_COLORS: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Length(4), // header
                Constraint::Min(3),    // drill table
                Constraint::Length(1), // status line
                Constraint::Length(1), // key hints
            ])
            .split(area);

        render_header(self, chunks[0], buf);

        if self.view.drills.is_empty() {
            let empty = Paragraph::new("No drills for this sport.")
                .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            empty.render(chunks[1], buf);
        } else {
            render_drill_table(self, chunks[1], buf);
        }

        render_status_line(self, chunks[2], buf);
        render_key_hints(self, chunks[3], buf);

        if self.celebration.is_active {
            render_celebration(&self.celebration, area, buf);
        }
    }
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let ctx = &app.view.context;

    let session_line = Line::from(vec![
        Span::styled(
            ctx.sport.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " · {} · Week {} · Session {} · {}",
            ctx.setting,
            ctx.week,
            ctx.session,
            Local::now().format("%a %d %b")
        )),
    ]);

    let r = &ctx.readiness;
    let readiness_line = Line::from(Span::styled(
        format!(
            "readiness {:.1}/5  (sleep {} · soreness {} · energy {})",
            r.mean(),
            r.sleep_quality,
            r.soreness,
            r.energy
        ),
        Style::default().fg(Color::Gray),
    ));

    let header = Paragraph::new(vec![session_line, readiness_line])
        .block(Block::default().borders(Borders::ALL).title(" reps "))
        .alignment(Alignment::Left);
    header.render(area, buf);
}

fn render_drill_table(app: &App, area: Rect, buf: &mut Buffer) {
    let view = &app.view;

    let header = Row::new(vec![
        Cell::from("Drill"),
        Cell::from("Target"),
        Cell::from("Rest"),
        Cell::from("RPE"),
        Cell::from("Result"),
        Cell::from("Timer"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let result_width = area.width.saturating_sub(30 + 14 + 6 + 5 + 7 + 12).max(10);

    let rows: Vec<Row> = view
        .drills
        .iter()
        .enumerate()
        .map(|(idx, drill)| {
            let selected = idx == view.selected;
            let entry = &view.entries[idx];
            let timer = &view.timers[idx];

            let marker = if selected { "▸ " } else { "  " };
            let demo_marker = if drill.demo_link.is_some() { " ▶" } else { "" };
            let name = format!("{marker}{}{demo_marker}", drill.name);

            let target = view
                .target_for(idx)
                .map(|t| format!("{} {}", format_target(t), drill.unit))
                .unwrap_or_default();

            let result = if entry.result_text.is_empty() {
                Cell::from("—").style(Style::default().fg(Color::DarkGray))
            } else {
                Cell::from(truncate_to_width(&entry.result_text, result_width))
            };

            let timer_cell = match timer.status() {
                TimerStatus::Idle => Cell::from(""),
                TimerStatus::Running => Cell::from(timer.display()).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                TimerStatus::Finished => Cell::from("Go!").style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            };

            let row = Row::new(vec![
                Cell::from(name),
                Cell::from(target),
                Cell::from(drill.rest_duration.clone()),
                Cell::from(entry.rpe.to_string()),
                result,
                timer_cell,
            ]);

            if selected {
                row.style(Style::default().bg(Color::DarkGray))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(30),
            Constraint::Length(14),
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Min(12),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(format!(
        " {} drills ",
        view.drills.len()
    )));

    Widget::render(table, area, buf);
}

fn render_status_line(app: &App, area: Rect, buf: &mut Buffer) {
    let view = &app.view;

    let (text, style) = if view.input_mode == InputMode::EditingResult {
        let drill = view
            .selected_drill()
            .map(|d| d.name.clone())
            .unwrap_or_default();
        (
            format!("logging result for {drill} — enter to finish, esc to cancel"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
        )
    } else if let Some(timer) = view.selected_timer().filter(|t| t.is_running()) {
        (
            format!("resting — {} (input paused until 00:00)", timer.display()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else if let Some(flash) = &view.flash {
        (flash.clone(), Style::default().fg(Color::Green))
    } else {
        (String::new(), Style::default())
    };

    Paragraph::new(Span::styled(text, style))
        .alignment(Alignment::Left)
        .render(area, buf);
}

fn render_key_hints(app: &App, area: Rect, buf: &mut Buffer) {
    let hints = if app.view.input_mode == InputMode::EditingResult {
        "type result text · (enter) done · (esc) cancel"
    } else {
        "(↑/↓) select · (t) rest timer · (e) result · (+/-) rpe · (d) demo · (s) save · (r) reset · (esc) quit"
    };

    Paragraph::new(hints)
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_celebration(celebration: &Celebration, area: Rect, buf: &mut Buffer) {
    for p in &celebration.particles {
        let x = p.x.round();
        let y = p.y.round();
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let (x, y) = (x as u16, y as u16);
        if x < area.left() || x >= area.right() || y < area.top() || y >= area.bottom() {
            continue;
        }

        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(p.symbol)
                .set_style(Style::default().fg(CELEBRATION_COLORS[p.color_index % 7]));
        }
    }
}

/// Clip a string to at most `max` display columns, unicode-aware.
fn truncate_to_width(s: &str, max: u16) -> String {
    let mut width = 0u16;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0) as u16;
        if width + w > max {
            out.push('…');
            break;
        }
        width += w;
        out.push(c);
    }
    out
}
