//! Episode creation form.
//!
//! A full-screen form with text fields for name, concept, dates, and money,
//! plus a cycling status selector. Submission validates everything at once
//! and hands back an [`EpisodeDraft`].

use chrono::NaiveDate;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{EpisodeDraft, EpisodeStatus};
use crate::{Error, Result};

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateField {
    Name,
    Concept,
    Status,
    StartDate,
    LaunchDate,
    Budget,
    Target,
    Members,
}

impl CreateField {
    fn label(&self) -> &'static str {
        match self {
            CreateField::Name => "Name",
            CreateField::Concept => "Concept",
            CreateField::Status => "Status",
            CreateField::StartDate => "Start date",
            CreateField::LaunchDate => "Launch date",
            CreateField::Budget => "Budget",
            CreateField::Target => "Target revenue",
            CreateField::Members => "Team",
        }
    }

    fn next(&self) -> CreateField {
        match self {
            CreateField::Name => CreateField::Concept,
            CreateField::Concept => CreateField::Status,
            CreateField::Status => CreateField::StartDate,
            CreateField::StartDate => CreateField::LaunchDate,
            CreateField::LaunchDate => CreateField::Budget,
            CreateField::Budget => CreateField::Target,
            CreateField::Target => CreateField::Members,
            CreateField::Members => CreateField::Name,
        }
    }

    fn previous(&self) -> CreateField {
        match self {
            CreateField::Name => CreateField::Members,
            CreateField::Concept => CreateField::Name,
            CreateField::Status => CreateField::Concept,
            CreateField::StartDate => CreateField::Status,
            CreateField::LaunchDate => CreateField::StartDate,
            CreateField::Budget => CreateField::LaunchDate,
            CreateField::Target => CreateField::Budget,
            CreateField::Members => CreateField::Target,
        }
    }
}

/// State for the episode creation form
#[derive(Debug)]
pub struct CreateFormState {
    pub name: String,
    pub concept: String,
    pub status: EpisodeStatus,
    /// Typed as YYYY-MM-DD
    pub start_date: String,
    /// Typed as YYYY-MM-DD
    pub launch_date: String,
    /// Digits only
    pub budget: String,
    /// Digits only
    pub target: String,
    /// Initial roster as semicolon-separated "Name:Role" pairs
    pub members: String,
    pub focus: CreateField,
}

impl Default for CreateFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateFormState {
    pub fn new() -> Self {
        let today = chrono::Local::now().date_naive().to_string();
        Self {
            name: String::new(),
            concept: String::new(),
            status: EpisodeStatus::Planning,
            start_date: today.clone(),
            launch_date: today,
            budget: String::new(),
            target: String::new(),
            members: String::new(),
            focus: CreateField::Name,
        }
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Cycle the status selector. `forward` moves down the lifecycle.
    pub fn cycle_status(&mut self, forward: bool) {
        let all = EpisodeStatus::all();
        let idx = all.iter().position(|s| *s == self.status).unwrap_or(0);
        let next = if forward {
            (idx + 1) % all.len()
        } else {
            (idx + all.len() - 1) % all.len()
        };
        self.status = all[next];
    }

    /// Type a character into the focused field. Money fields accept digits
    /// only; date fields accept digits and dashes; Status ignores typing.
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            CreateField::Name => self.name.push(c),
            CreateField::Concept => self.concept.push(c),
            CreateField::Status => {}
            CreateField::StartDate | CreateField::LaunchDate => {
                if c.is_ascii_digit() || c == '-' {
                    self.date_buffer_mut().push(c);
                }
            }
            CreateField::Budget => {
                if c.is_ascii_digit() {
                    self.budget.push(c);
                }
            }
            CreateField::Target => {
                if c.is_ascii_digit() {
                    self.target.push(c);
                }
            }
            CreateField::Members => self.members.push(c),
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        match self.focus {
            CreateField::Name => {
                self.name.pop();
            }
            CreateField::Concept => {
                self.concept.pop();
            }
            CreateField::Status => {}
            CreateField::StartDate | CreateField::LaunchDate => {
                self.date_buffer_mut().pop();
            }
            CreateField::Budget => {
                self.budget.pop();
            }
            CreateField::Target => {
                self.target.pop();
            }
            CreateField::Members => {
                self.members.pop();
            }
        }
    }

    fn date_buffer_mut(&mut self) -> &mut String {
        match self.focus {
            CreateField::StartDate => &mut self.start_date,
            _ => &mut self.launch_date,
        }
    }

    /// Validate the form and build a draft. Name and concept are required;
    /// empty money fields become zero.
    pub fn to_draft(&self) -> Result<EpisodeDraft> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidInput("Name is required".to_string()));
        }
        if self.concept.trim().is_empty() {
            return Err(Error::InvalidInput("Concept is required".to_string()));
        }

        let mut draft = EpisodeDraft::new(self.name.trim(), self.concept.trim());
        draft.status = self.status;
        draft.start_date = parse_form_date(&self.start_date)?;
        draft.launch_date = parse_form_date(&self.launch_date)?;
        draft.budget = parse_form_money(&self.budget)?;
        draft.target_revenue = parse_form_money(&self.target)?;
        for spec in self.members.split(';') {
            let spec = spec.trim();
            if spec.is_empty() {
                continue;
            }
            draft.team_members.push(crate::commands::parse_member(spec)?);
        }
        Ok(draft)
    }

    /// Render the form
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" New Episode ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let focused = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = Vec::new();
        for field in [
            CreateField::Name,
            CreateField::Concept,
            CreateField::Status,
            CreateField::StartDate,
            CreateField::LaunchDate,
            CreateField::Budget,
            CreateField::Target,
            CreateField::Members,
        ] {
            let is_focused = field == self.focus;
            let label_style = if is_focused { focused } else { bold };
            let mut value_style = Style::default();
            let value = match field {
                CreateField::Name => self.name.clone(),
                CreateField::Concept => self.concept.clone(),
                CreateField::Status => {
                    if is_focused {
                        format!("< {} >", self.status)
                    } else {
                        self.status.to_string()
                    }
                }
                CreateField::StartDate => self.start_date.clone(),
                CreateField::LaunchDate => self.launch_date.clone(),
                CreateField::Budget => self.budget.clone(),
                CreateField::Target => self.target.clone(),
                CreateField::Members => {
                    if self.members.is_empty() {
                        value_style = Style::default().fg(Color::DarkGray);
                        "Name:Role; Name:Role".to_string()
                    } else {
                        self.members.clone()
                    }
                }
            };
            let cursor = if is_focused && field != CreateField::Status {
                "_"
            } else {
                ""
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<16}", field.label()), label_style),
                Span::styled(value, value_style),
                Span::styled(cursor, focused),
            ]));
            lines.push(Line::from(""));
        }

        let form = Paragraph::new(lines);
        frame.render_widget(form, inner);
    }
}

fn parse_form_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| Error::InvalidInput(format!("Invalid date \"{}\" (use YYYY-MM-DD)", s)))
}

fn parse_form_money(s: &str) -> Result<u64> {
    if s.is_empty() {
        return Ok(0);
    }
    s.parse::<u64>()
        .map_err(|_| Error::InvalidInput(format!("Invalid amount \"{}\"", s)))
}
