//! Add / edit form pane — right panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::form::{EmployeeForm, Field, FormKind};

pub fn draw(f: &mut Frame, area: Rect, form: &EmployeeForm) {
  let title = match form.kind {
    FormKind::Add => " Add employee ",
    FormKind::Edit(_) => " Edit employee ",
  };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));

  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines: Vec<Line> = Field::ALL
    .iter()
    .map(|&field| {
      let focused = field == form.focus;
      let value = match field {
        Field::Firstname => form.firstname.clone(),
        Field::Lastname => form.lastname.clone(),
        Field::Age => form.age.clone(),
        Field::Married => (if form.married { "[x]" } else { "[ ]" }).to_string(),
      };
      let cursor = if focused && field != Field::Married { "_" } else { "" };
      let label_style = if focused {
        Style::default()
          .fg(Color::Yellow)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::Cyan)
      };
      Line::from(vec![
        Span::styled(format!("{:<12}", field.label()), label_style),
        Span::raw(format!("{value}{cursor}")),
      ])
    })
    .collect();

  lines.push(Line::from(""));
  lines.push(Line::from(vec![Span::styled(
    "Enter saves, Esc discards.",
    Style::default().fg(Color::DarkGray),
  )]));

  f.render_widget(Paragraph::new(lines), inner);
}
