//! TUI rendering — orchestrates all panes.

pub mod employee_detail;
pub mod employee_form;
pub mod employee_list;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Screen};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " roster  [/] search  [a] add  [q] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{date} "), Style::default().fg(Color::DarkGray));

  // Simple left-right header: pad the middle.
  let left_width = left.content.len() as u16;
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  // Split into left list pane (35%) and right pane (65%).
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
    .split(area);

  employee_list::draw(f, cols[0], app);

  match (&app.screen, &app.form, &app.selected) {
    (Screen::Form, Some(form), _) => employee_form::draw(f, cols[1], form),
    (_, _, Some(employee)) => {
      employee_detail::draw(f, cols[1], employee, app.screen == Screen::EmployeeDetail)
    }
    _ => draw_empty_detail(f, cols[1]),
  }
}

fn draw_empty_detail(f: &mut Frame, area: Rect) {
  let block = Block::default()
    .title(" Detail ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new(Line::from(vec![Span::styled(
      "No employee selected.",
      Style::default().fg(Color::DarkGray),
    )])),
    inner,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let confirm;
  let (mode_label, hints) = if let Some(employee) = &app.pending_delete {
    confirm = format!(
      "Delete {} {}? y to confirm, any other key cancels",
      employee.firstname, employee.lastname
    );
    ("CONFIRM", confirm.as_str())
  } else {
    match &app.screen {
      Screen::EmployeeList if app.search_active => {
        ("SEARCH", "Type a first name  Enter search  Esc cancel")
      }
      Screen::EmployeeList => (
        "NORMAL",
        "↑↓/jk navigate  Enter view  / search  a add  e edit  d delete  r reload  q quit",
      ),
      Screen::EmployeeDetail => (
        "DETAIL",
        "Esc back  [ prev  ] next  e edit  d delete  q quit",
      ),
      Screen::Form => (
        "FORM",
        "Tab/↑↓ field  Space toggle married  Enter save  Esc cancel",
      ),
    }
  };

  // Confirmation prompts always win over stale status messages.
  let status = if app.status_msg.is_empty() || app.pending_delete.is_some() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(format!("  {status}"), Style::default().fg(Color::DarkGray));

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
