//! TUI application - main event loop and terminal management.
//!
//! Which screen and which overlays are visible is derived from panel state
//! (selection, pending gate, open draft) rather than stored separately, so
//! the keyboard handling and the rendering can never disagree about what
//! the user is looking at.

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::commands::DisplayOptions;
use crate::config::ResolvedConfig;
use crate::panel::{EpisodePanel, PanelAction, PanelView};
use crate::roster::MemberField;

use super::logging;
use super::notifications::NotificationManager;
use super::views::{
    ConfirmModalView, CreateField, CreateFormState, EditRosterView, EpisodeDetailView,
    EpisodeListView, RosterFocus,
};

/// TUI application state
pub struct App {
    /// Episode panel: store, selection, roster editor, and confirmation gate
    panel: EpisodePanel,
    /// Episode list view state
    list_view: EpisodeListView,
    /// Episode detail view state
    detail_view: EpisodeDetailView,
    /// Roster editor modal state
    edit_view: EditRosterView,
    /// Confirmation modal state
    confirm_view: ConfirmModalView,
    /// Creation form, when open
    create_form: Option<CreateFormState>,
    /// Toast notifications
    notifications: NotificationManager,
    /// Formatting options from config
    display: DisplayOptions,
    /// Required approval passphrase, when configured
    passphrase: Option<String>,
    /// Whether to quit the application
    should_quit: bool,
}

impl App {
    /// Create the application with a freshly seeded panel
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            panel: EpisodePanel::new(),
            list_view: EpisodeListView::new(),
            detail_view: EpisodeDetailView::new(),
            edit_view: EditRosterView::new(),
            confirm_view: ConfirmModalView::new(),
            create_form: None,
            notifications: NotificationManager::new(),
            display: DisplayOptions::from_config(config),
            passphrase: config.edit_passphrase().map(str::to_string),
            should_quit: false,
        }
    }

    /// Handle keyboard events, dispatched by what is currently on screen
    fn handle_key(&mut self, key: KeyCode) {
        if self.panel.gate().is_pending() {
            self.handle_confirm_key(key);
        } else if self.panel.is_editing() {
            self.handle_roster_key(key);
        } else if self.create_form.is_some() {
            self.handle_form_key(key);
        } else if self.panel.selection().is_some() {
            self.handle_detail_key(key);
        } else {
            self.handle_list_key(key);
        }
    }

    fn handle_list_key(&mut self, key: KeyCode) {
        let len = self.panel.store().len();
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.list_view.select_next(len),
            KeyCode::Char('k') | KeyCode::Up => self.list_view.select_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.list_view.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.list_view.select_last(len),
            KeyCode::Enter => {
                if let Some(episode) = self.panel.store().episodes().get(self.list_view.selected) {
                    let id = episode.id.clone();
                    tracing::info!(id = %id, "open episode");
                    self.panel.select(id);
                }
            }
            KeyCode::Char('n') => {
                self.create_form = Some(CreateFormState::new());
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => {
                self.panel.clear_selection();
            }
            KeyCode::Char('e') => {
                self.panel.request_edit_team();
                if self.panel.gate().is_pending() {
                    self.confirm_view.clear_input();
                    tracing::debug!("confirmation gate armed");
                } else {
                    self.notifications.warning("Nothing to edit here");
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.panel.dismiss_gate();
                self.confirm_view.clear_input();
                tracing::debug!("confirmation dismissed");
            }
            KeyCode::Enter => {
                if let Some(required) = &self.passphrase {
                    if self.confirm_view.passphrase_input != *required {
                        self.confirm_view.clear_input();
                        self.notifications.warning("Incorrect passphrase");
                        tracing::warn!("passphrase rejected");
                        return;
                    }
                }
                self.confirm_view.clear_input();
                if let Some(PanelAction::EditTeam) = self.panel.approve_gate() {
                    let count = self.member_count();
                    self.edit_view.reset(count);
                    tracing::info!("team edit approved");
                }
            }
            KeyCode::Char(c) => {
                if self.passphrase.is_some() {
                    self.confirm_view.passphrase_input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.confirm_view.passphrase_input.pop();
            }
            _ => {}
        }
    }

    fn handle_roster_key(&mut self, key: KeyCode) {
        let member_count = self.member_count();
        match key {
            KeyCode::Esc => {
                self.panel.cancel_edit();
                self.notifications.info("Edit cancelled");
                tracing::info!("roster edit cancelled");
            }
            KeyCode::Tab => self.edit_view.focus_next(member_count),
            KeyCode::BackTab => self.edit_view.focus_previous(member_count),
            KeyCode::Down => self.edit_view.row_down(member_count),
            KeyCode::Up => self.edit_view.row_up(member_count),
            KeyCode::Delete => {
                if let RosterFocus::Member { row, .. } = self.edit_view.focus {
                    if let Some(draft) = self.panel.editing_mut() {
                        draft.remove_member(row);
                        let remaining = draft.members().len();
                        self.edit_view.clamp(remaining);
                    }
                }
            }
            KeyCode::Enter => {
                if let RosterFocus::Staged(_) = self.edit_view.focus {
                    if let Some(draft) = self.panel.editing_mut() {
                        if draft.can_add_staged() {
                            draft.add_staged();
                            self.edit_view.focus = RosterFocus::Staged(MemberField::Name);
                            return;
                        }
                        if !draft.staged.name.is_empty() || !draft.staged.role.is_empty() {
                            self.notifications
                                .warning("Member needs both a name and a role");
                            return;
                        }
                    }
                }
                self.save_roster();
            }
            KeyCode::Char(c) => self.edit_focused_field(|s| s.push(c)),
            KeyCode::Backspace => self.edit_focused_field(|s| {
                s.pop();
            }),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        let Some(form) = self.create_form.as_mut() else {
            return;
        };
        match key {
            KeyCode::Esc => {
                self.create_form = None;
            }
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
            KeyCode::Left => {
                if form.focus == CreateField::Status {
                    form.cycle_status(false);
                }
            }
            KeyCode::Right => {
                if form.focus == CreateField::Status {
                    form.cycle_status(true);
                }
            }
            KeyCode::Enter => match form.to_draft() {
                Ok(draft) => {
                    let episode = self.panel.create_episode(draft);
                    self.notifications
                        .success(format!("Created {}", episode.id));
                    tracing::info!(id = %episode.id, "episode created");
                    self.panel.select(episode.id);
                    self.create_form = None;
                }
                Err(e) => self.notifications.warning(e.to_string()),
            },
            KeyCode::Char(c) => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    /// Member count of the open draft, zero when not editing
    fn member_count(&self) -> usize {
        self.panel
            .editing()
            .map(|d| d.members().len())
            .unwrap_or(0)
    }

    /// Apply a text edit to whichever draft field has focus
    fn edit_focused_field(&mut self, apply: impl FnOnce(&mut String)) {
        let focus = self.edit_view.focus;
        let Some(draft) = self.panel.editing_mut() else {
            return;
        };
        match focus {
            RosterFocus::Member { row, field } => {
                let member = &draft.members()[row];
                let mut value = match field {
                    MemberField::Name => member.name.clone(),
                    MemberField::Role => member.role.clone(),
                };
                apply(&mut value);
                draft.update_member(row, field, value);
            }
            RosterFocus::Staged(MemberField::Name) => {
                let mut value = draft.staged.name.clone();
                apply(&mut value);
                draft.stage_name(value);
            }
            RosterFocus::Staged(MemberField::Role) => {
                let mut value = draft.staged.role.clone();
                apply(&mut value);
                draft.stage_role(value);
            }
        }
    }

    fn save_roster(&mut self) {
        match self.panel.save_team() {
            Ok(true) => {
                self.notifications.success("Team roster saved");
                tracing::info!("team roster saved");
            }
            Ok(false) => {}
            Err(e) => {
                self.notifications.error(format!("Save failed: {}", e));
                tracing::error!(error = %e, "team roster save failed");
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(5),    // Main content
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        self.render_title_bar(frame, chunks[0]);

        if let Some(form) = &self.create_form {
            form.render(frame, chunks[1]);
        } else {
            match self.panel.view() {
                PanelView::List(episodes) => {
                    self.list_view.clamp(episodes.len());
                    self.list_view
                        .render(frame, chunks[1], episodes, &self.display);
                }
                PanelView::Detail(episode) => {
                    self.detail_view
                        .render(frame, chunks[1], episode, &self.display);
                }
                PanelView::NotFound(id) => {
                    let missing = Paragraph::new(format!("Episode {} not found", id))
                        .style(Style::default().fg(Color::Red))
                        .block(Block::default().borders(Borders::ALL));
                    frame.render_widget(missing, chunks[1]);
                }
            }
        }

        if let Some(draft) = self.panel.editing() {
            self.edit_view.render(frame, area, draft);
        }
        if let Some(request) = self.panel.gate().pending() {
            self.confirm_view
                .render(frame, area, request, self.passphrase.is_some());
        }

        self.render_status_bar(frame, chunks[2]);
        self.render_toasts(frame, chunks[1]);
    }

    /// Render the title bar with episode count and current mode
    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let mode = if self.panel.gate().is_pending() {
            "confirm"
        } else if self.panel.is_editing() {
            "edit team"
        } else if self.create_form.is_some() {
            "new episode"
        } else if self.panel.selection().is_some() {
            "detail"
        } else {
            "episodes"
        };

        let left = format!(" Showrunner {}", crate::cli::package_version());
        let right = format!("{} episodes | {} ", self.panel.store().len(), mode);
        let padding = area
            .width
            .saturating_sub(left.len() as u16 + right.len() as u16 + 2);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(left, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(padding as usize)),
            Span::styled(right, Style::default().fg(Color::DarkGray)),
        ]))
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(title, area);
    }

    /// Render the status bar with keybindings for the current mode
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let hints = if self.panel.gate().is_pending() {
            " Enter:Approve  Esc:Dismiss"
        } else if self.panel.is_editing() {
            " Tab:Next Field  Enter:Add/Save  Del:Remove  Esc:Cancel"
        } else if self.create_form.is_some() {
            " Tab:Next Field  Left/Right:Status  Enter:Create  Esc:Cancel"
        } else if self.panel.selection().is_some() {
            " e:Edit Team  Esc:Back  q:Quit"
        } else {
            " j/k:Navigate  Enter:Open  n:New Episode  q:Quit"
        };

        let status = Paragraph::new(hints)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, area);
    }

    /// Render active toasts in the top-right corner of the content area
    fn render_toasts(&self, frame: &mut Frame, area: Rect) {
        for (i, toast) in self.notifications.visible_toasts().enumerate() {
            let text = format!(" {} {} ", toast.level.icon(), toast.message);
            let width = (text.chars().count() as u16).min(area.width);
            let y = area.y + 1 + i as u16;
            if y >= area.bottom() {
                break;
            }
            let rect = Rect::new(area.x + area.width.saturating_sub(width + 1), y, width, 1);
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(Color::Black).bg(toast.level.color())),
                rect,
            );
        }
    }
}

/// Setup the terminal for TUI mode
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application until the user quits.
pub fn run(config: &ResolvedConfig) -> crate::Result<()> {
    let _guard = logging::init();
    tracing::info!(version = crate::cli::package_version(), "tui session start");

    let mut terminal = setup_terminal()?;
    let mut app = App::new(config);
    let result = run_loop(&mut terminal, &mut app);
    restore_terminal()?;
    tracing::info!("tui session end");
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> crate::Result<()> {
    loop {
        app.notifications.cleanup();
        terminal.draw(|f| app.render(f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
