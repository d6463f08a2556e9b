use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::console::digits::big_text;
use crate::ui::console::layout::{centered_rect_by_size, layout_regions};
use crate::ui::session::ViewName;
use crate::ui::surface::SurfaceModel;
use crate::ui::theme::{self, Rgba};

const PASSWORD_FRAME_WIDTH: u16 = 30;
const HINT: &str = "Type your password · Enter: unlock · Esc: clear";

fn color(rgba: Rgba) -> Color {
    Color::Rgb(rgba.0, rgba.1, rgba.2)
}

pub fn draw(frame: &mut Frame<'_>, model: &SurfaceModel) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(color(theme::FALLBACK_BG))),
        area,
    );

    let (top, center, hint) = layout_regions(area);
    draw_top_bar(frame, top, model);
    match model.view() {
        ViewName::Idle => draw_idle(frame, center, model),
        ViewName::Typing => draw_typing(frame, center, model),
    }
    frame.render_widget(
        Paragraph::new(HINT)
            .style(Style::default().fg(color(theme::FG_DIM)))
            .alignment(Alignment::Center),
        hint,
    );
}

fn draw_top_bar(frame: &mut Frame<'_>, area: Rect, model: &SurfaceModel) {
    let date = &model.ambient.clock.date;
    let battery = &model.ambient.battery;
    let inner = Rect {
        x: area.x + 2,
        y: area.y + area.height.min(1),
        width: area.width.saturating_sub(4),
        height: area.height.min(1),
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(date.chars().count() as u16 + 2),
            Constraint::Min(0),
            Constraint::Length(battery.chars().count() as u16 + 2),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(date.as_str()).style(Style::default().fg(color(theme::FG))),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(model.quote.as_str())
            .style(
                Style::default()
                    .fg(color(theme::ACCENT))
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center),
        columns[1],
    );
    frame.render_widget(
        Paragraph::new(battery.as_str())
            .style(Style::default().fg(color(theme::GREEN)))
            .alignment(Alignment::Right),
        columns[2],
    );
}

fn clock_lines(text: &str) -> Vec<Line<'static>> {
    let style = Style::default()
        .fg(color(theme::FG))
        .add_modifier(Modifier::BOLD);
    big_text(text)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect()
}

fn error_line(error: Option<&str>) -> Line<'static> {
    match error {
        Some(error) => Line::from(Span::styled(
            format!("{} {}", theme::ERROR_ICON, error),
            Style::default().fg(color(theme::RED)),
        )),
        None => Line::from(""),
    }
}

fn draw_idle(frame: &mut Frame<'_>, area: Rect, model: &SurfaceModel) {
    let mut lines = clock_lines(&model.ambient.clock.hour);
    lines.push(Line::from(""));
    lines.extend(clock_lines(&model.ambient.clock.minute));
    lines.push(Line::from(""));
    lines.push(error_line(model.directive.error.as_deref()));

    let height = lines.len() as u16;
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let target = centered_rect_by_size(area, width.max(1), height);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}

fn draw_typing(frame: &mut Frame<'_>, area: Rect, model: &SurfaceModel) {
    let hour = clock_lines(&model.ambient.clock.hour);
    let minute = clock_lines(&model.ambient.clock.minute);
    let clock_height = hour.len() as u16;
    // hour, gap, frame (3), error, gap, minute
    let height = clock_height * 2 + 6;
    let width = PASSWORD_FRAME_WIDTH.max(
        hour.iter()
            .chain(minute.iter())
            .map(Line::width)
            .max()
            .unwrap_or(0) as u16,
    );
    let target = centered_rect_by_size(area, width, height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(clock_height),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(clock_height),
        ])
        .split(target);

    frame.render_widget(Paragraph::new(hour).alignment(Alignment::Center), rows[0]);

    let password_frame = centered_rect_by_size(rows[2], PASSWORD_FRAME_WIDTH, 3);
    let dots = Paragraph::new(model.directive.dots_text())
        .style(Style::default().fg(color(theme::FG)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color(theme::ACCENT)))
                .style(Style::default().bg(color(theme::SURFACE))),
        );
    frame.render_widget(dots, password_frame);

    frame.render_widget(
        Paragraph::new(error_line(model.directive.error.as_deref())).alignment(Alignment::Center),
        rows[3],
    );
    frame.render_widget(Paragraph::new(minute).alignment(Alignment::Center), rows[5]);
}
