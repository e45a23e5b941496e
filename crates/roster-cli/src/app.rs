//! Application state machine and event dispatcher.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roster_core::employee::Employee;
use uuid::Uuid;

use crate::{
  client::ApiClient,
  form::{EmployeeForm, FormKind},
};

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
  /// Focus on the employee list; right pane shows the last viewed record.
  EmployeeList,
  /// Focus on the detail pane.
  EmployeeDetail,
  /// The add / edit form occupies the right pane.
  Form,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// Every employee, as last returned by `GET /employees`.
  pub employees: Vec<Employee>,

  /// Result of the last server-side search, shown instead of `employees`.
  pub search_results: Option<(String, Vec<Employee>)>,

  /// Search query being typed (only meaningful while `search_active`).
  pub search_input: String,

  /// Whether the user is typing a search query.
  pub search_active: bool,

  /// Cursor position within the visible list.
  pub list_cursor: usize,

  /// The record shown in the detail pane.
  pub selected: Option<Employee>,

  /// The open add / edit form.
  pub form: Option<EmployeeForm>,

  /// Employee awaiting a y/n delete confirmation.
  pub pending_delete: Option<Employee>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  /// Shared HTTP client.
  pub client: Arc<ApiClient>,
}

impl App {
  /// Create an [`App`] with an empty employee list.
  pub fn new(client: ApiClient) -> Self {
    Self {
      screen: Screen::EmployeeList,
      employees: Vec::new(),
      search_results: None,
      search_input: String::new(),
      search_active: false,
      list_cursor: 0,
      selected: None,
      form: None,
      pending_delete: None,
      status_msg: String::new(),
      client: Arc::new(client),
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Fetch all employees from the API and populate `self.employees`.
  pub async fn load_employees(&mut self) -> anyhow::Result<()> {
    self.status_msg = "Loading employees…".into();
    match self.client.list().await {
      Ok(employees) => {
        self.employees = employees;
        self.clamp_cursor();
        self.status_msg = String::new();
        Ok(())
      }
      Err(e) => {
        self.status_msg = format!("Error: {e}");
        Err(e)
      }
    }
  }

  /// Reload after a mutation; failures only reach the status bar.
  async fn refresh(&mut self) {
    let keep = std::mem::take(&mut self.status_msg);
    if self.load_employees().await.is_ok() {
      self.status_msg = keep;
    }
    self.search_results = None;
    self.clamp_cursor();
  }

  // ── Visible list ──────────────────────────────────────────────────────────

  /// The employees shown in the list pane: search results if a search is
  /// applied, otherwise everyone.
  pub fn visible_employees(&self) -> &[Employee] {
    match &self.search_results {
      Some((_, results)) => results,
      None => &self.employees,
    }
  }

  /// The employee under the list cursor, if any.
  pub fn cursor_employee(&self) -> Option<&Employee> {
    self.visible_employees().get(self.list_cursor)
  }

  fn clamp_cursor(&mut self) {
    let len = self.visible_employees().len();
    self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    if self.pending_delete.is_some() {
      self.handle_confirm_key(key).await;
      return Ok(true);
    }

    if self.search_active {
      self.handle_search_key(key).await;
      return Ok(true);
    }

    match self.screen {
      Screen::EmployeeList => self.handle_list_key(key).await,
      Screen::EmployeeDetail => self.handle_detail_key(key).await,
      Screen::Form => {
        self.handle_form_key(key).await;
        Ok(true)
      }
    }
  }

  async fn handle_search_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.search_active = false;
        self.search_input.clear();
      }
      KeyCode::Enter => {
        self.search_active = false;
        let query = self.search_input.trim().to_owned();
        // An empty query is ignored rather than sent.
        if !query.is_empty() {
          self.run_search(query).await;
        }
      }
      KeyCode::Backspace => {
        self.search_input.pop();
      }
      KeyCode::Char(c) => self.search_input.push(c),
      _ => {}
    }
  }

  async fn run_search(&mut self, query: String) {
    match self.client.search(&query).await {
      Ok(results) => {
        self.status_msg = format!("{} match(es) for {query:?}", results.len());
        self.search_results = Some((query, results));
        self.list_cursor = 0;
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  async fn handle_list_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      // Quit
      KeyCode::Char('q') => return Ok(false),

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        if self.list_cursor + 1 < self.visible_employees().len() {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      // Open detail
      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        if let Some(id) = self.cursor_employee().map(|e| e.id) {
          self.open_detail(id).await;
        }
      }

      // Search
      KeyCode::Char('/') => {
        self.search_active = true;
        self.search_input.clear();
      }
      KeyCode::Esc => {
        if self.search_results.take().is_some() {
          self.list_cursor = 0;
          self.status_msg.clear();
        }
      }

      // Mutations
      KeyCode::Char('a') => self.open_form(EmployeeForm::add()),
      KeyCode::Char('e') => {
        if let Some(form) = self.cursor_employee().map(EmployeeForm::edit) {
          self.open_form(form);
        }
      }
      KeyCode::Char('d') => {
        self.pending_delete = self.cursor_employee().cloned();
      }
      KeyCode::Char('r') => self.refresh().await,

      _ => {}
    }
    Ok(true)
  }

  async fn handle_detail_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      // Quit
      KeyCode::Char('q') => return Ok(false),

      // Back to list
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.screen = Screen::EmployeeList;
      }

      // Navigate list from detail (for quick switching)
      KeyCode::Char(']') | KeyCode::PageDown => {
        if self.list_cursor + 1 < self.visible_employees().len() {
          self.list_cursor += 1;
          if let Some(id) = self.cursor_employee().map(|e| e.id) {
            self.open_detail(id).await;
          }
        }
      }
      KeyCode::Char('[') | KeyCode::PageUp => {
        if self.list_cursor > 0 {
          self.list_cursor -= 1;
          if let Some(id) = self.cursor_employee().map(|e| e.id) {
            self.open_detail(id).await;
          }
        }
      }

      KeyCode::Char('e') => {
        if let Some(form) = self.selected.as_ref().map(EmployeeForm::edit) {
          self.open_form(form);
        }
      }
      KeyCode::Char('d') => {
        self.pending_delete = self.selected.clone();
      }

      _ => {}
    }
    Ok(true)
  }

  async fn handle_form_key(&mut self, key: KeyEvent) {
    let Some(form) = self.form.as_mut() else {
      self.screen = Screen::EmployeeList;
      return;
    };
    match key.code {
      KeyCode::Esc => {
        self.form = None;
        self.screen = Screen::EmployeeList;
        self.status_msg.clear();
      }
      KeyCode::Tab | KeyCode::Down => form.next_field(),
      KeyCode::BackTab | KeyCode::Up => form.prev_field(),
      KeyCode::Backspace => form.backspace(),
      KeyCode::Enter => self.submit_form().await,
      KeyCode::Char(c) => form.input(c),
      _ => {}
    }
  }

  async fn handle_confirm_key(&mut self, key: KeyEvent) {
    let Some(employee) = self.pending_delete.take() else {
      return;
    };
    if !matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
      self.status_msg = "Delete cancelled".into();
      return;
    }
    match self.client.delete(employee.id).await {
      Ok(()) => {
        self.status_msg =
          format!("Deleted {} {}", employee.firstname, employee.lastname);
        if self.selected.as_ref().is_some_and(|s| s.id == employee.id) {
          self.selected = None;
          self.screen = Screen::EmployeeList;
        }
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
    self.refresh().await;
  }

  // ── Transitions ───────────────────────────────────────────────────────────

  /// Transition to `EmployeeDetail` for `id`, fetching the record.
  async fn open_detail(&mut self, id: Uuid) {
    self.status_msg = "Loading…".into();
    match self.client.get(id).await {
      Ok(employee) => {
        self.selected = Some(employee);
        self.screen = Screen::EmployeeDetail;
        self.status_msg.clear();
      }
      Err(e) => {
        self.status_msg = format!("Error: {e}");
        self.refresh().await;
      }
    }
  }

  fn open_form(&mut self, form: EmployeeForm) {
    self.form = Some(form);
    self.screen = Screen::Form;
    self.status_msg.clear();
  }

  async fn submit_form(&mut self) {
    let Some(form) = self.form.as_ref() else {
      return;
    };
    let kind = form.kind;
    let submission = match form.submission() {
      Ok(s) => s,
      Err(msg) => {
        self.status_msg = msg.to_owned();
        return;
      }
    };

    let result = match kind {
      FormKind::Add => self.client.create(&submission.into_draft()).await,
      FormKind::Edit(id) => self.client.update(id, &submission.into_patch()).await,
    };

    match result {
      Ok(employee) => {
        let verb = match kind {
          FormKind::Add => "Added",
          FormKind::Edit(_) => "Updated",
        };
        self.status_msg =
          format!("{verb} {} {}", employee.firstname, employee.lastname);
        if self.selected.as_ref().is_some_and(|s| s.id == employee.id) {
          self.selected = Some(employee);
        }
        self.form = None;
        self.screen = Screen::EmployeeList;
        self.refresh().await;
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }
}
