//! Employee detail pane — right panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};
use roster_core::employee::Employee;

/// Render `employee` into `area`. The border is highlighted when the pane has
/// keyboard focus.
pub fn draw(f: &mut Frame, area: Rect, employee: &Employee, focused: bool) {
  let border = if focused { Color::Cyan } else { Color::DarkGray };
  let block = Block::default()
    .title(format!(" {} {} ", employee.firstname, employee.lastname))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border));

  let inner = block.inner(area);
  f.render_widget(block, area);

  let married = if employee.is_married { "yes" } else { "no" };
  let lines = vec![
    row("First name", employee.firstname.clone()),
    row("Last name", employee.lastname.clone()),
    row("Age", employee.age.to_string()),
    row("Married", married.to_string()),
    Line::from(""),
    Line::from(vec![Span::styled(
      format!("id {}", employee.id),
      Style::default().fg(Color::DarkGray),
    )]),
  ];

  f.render_widget(Paragraph::new(lines), inner);
}

fn row(label: &str, value: String) -> Line<'static> {
  Line::from(vec![
    Span::styled(
      format!("{label:<12}"),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
    Span::raw(value),
  ])
}
