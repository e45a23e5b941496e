//! Employee list pane — left panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;

/// Render the employee list (or the current search results) into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let visible = app.visible_employees();

  let title = match &app.search_results {
    Some((query, results)) => format!(" Search {query:?} ({}) ", results.len()),
    None => format!(" Employees ({}) ", app.employees.len()),
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let items: Vec<ListItem> = visible
    .iter()
    .map(|employee| {
      ListItem::new(Line::from(vec![
        Span::raw(format!("{} {}", employee.firstname, employee.lastname)),
        Span::styled(
          format!("  {}", employee.age),
          Style::default().fg(Color::DarkGray),
        ),
      ]))
    })
    .collect();

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  // While typing a search, reserve the bottom line for the query.
  if app.search_active && inner_area.height > 1 {
    let input_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y + inner_area.height - 1,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.height -= 1;

    f.render_widget(
      Paragraph::new(format!("/{}_", app.search_input))
        .style(Style::default().fg(Color::Yellow)),
      input_area,
    );
  }

  if visible.is_empty() {
    f.render_widget(
      Paragraph::new("No employees.").style(Style::default().fg(Color::DarkGray)),
      inner_area,
    );
    return;
  }

  // Scrollable list with cursor tracking.
  let mut state = ListState::default();
  state.select(Some(app.list_cursor));

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol(""),
    inner_area,
    &mut state,
  );
}
