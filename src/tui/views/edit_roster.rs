//! Team roster editor modal.
//!
//! Overlays the detail view while a roster draft is open. Every keystroke
//! edits the draft only; the committed roster changes when the draft is
//! saved and not before.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::roster::{MemberField, RosterDraft};

use super::centered_rect;

/// Focus position inside the roster editor modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFocus {
    /// A field of an existing draft member
    Member { row: usize, field: MemberField },
    /// A field of the staged (not yet added) member
    Staged(MemberField),
}

/// State for the roster editor modal
#[derive(Debug)]
pub struct EditRosterView {
    pub focus: RosterFocus,
}

impl Default for EditRosterView {
    fn default() -> Self {
        Self::new()
    }
}

impl EditRosterView {
    pub fn new() -> Self {
        Self {
            focus: RosterFocus::Staged(MemberField::Name),
        }
    }

    /// Reset focus for a freshly opened draft
    pub fn reset(&mut self, member_count: usize) {
        self.focus = if member_count > 0 {
            RosterFocus::Member {
                row: 0,
                field: MemberField::Name,
            }
        } else {
            RosterFocus::Staged(MemberField::Name)
        };
    }

    /// Move focus to the next field, row by row, ending at the staged row
    pub fn focus_next(&mut self, member_count: usize) {
        self.focus = match self.focus {
            RosterFocus::Member { row, field: MemberField::Name } => RosterFocus::Member {
                row,
                field: MemberField::Role,
            },
            RosterFocus::Member { row, field: MemberField::Role } => {
                if row + 1 < member_count {
                    RosterFocus::Member {
                        row: row + 1,
                        field: MemberField::Name,
                    }
                } else {
                    RosterFocus::Staged(MemberField::Name)
                }
            }
            RosterFocus::Staged(MemberField::Name) => RosterFocus::Staged(MemberField::Role),
            RosterFocus::Staged(MemberField::Role) => {
                if member_count > 0 {
                    RosterFocus::Member {
                        row: 0,
                        field: MemberField::Name,
                    }
                } else {
                    RosterFocus::Staged(MemberField::Name)
                }
            }
        };
    }

    /// Move focus to the previous field
    pub fn focus_previous(&mut self, member_count: usize) {
        self.focus = match self.focus {
            RosterFocus::Member { row, field: MemberField::Role } => RosterFocus::Member {
                row,
                field: MemberField::Name,
            },
            RosterFocus::Member { row, field: MemberField::Name } => {
                if row > 0 {
                    RosterFocus::Member {
                        row: row - 1,
                        field: MemberField::Role,
                    }
                } else {
                    RosterFocus::Staged(MemberField::Role)
                }
            }
            RosterFocus::Staged(MemberField::Role) => RosterFocus::Staged(MemberField::Name),
            RosterFocus::Staged(MemberField::Name) => {
                if member_count > 0 {
                    RosterFocus::Member {
                        row: member_count - 1,
                        field: MemberField::Role,
                    }
                } else {
                    RosterFocus::Staged(MemberField::Role)
                }
            }
        };
    }

    /// Move focus down one row, keeping the column
    pub fn row_down(&mut self, member_count: usize) {
        self.focus = match self.focus {
            RosterFocus::Member { row, field } => {
                if row + 1 < member_count {
                    RosterFocus::Member { row: row + 1, field }
                } else {
                    RosterFocus::Staged(field)
                }
            }
            RosterFocus::Staged(field) => RosterFocus::Staged(field),
        };
    }

    /// Move focus up one row, keeping the column
    pub fn row_up(&mut self, member_count: usize) {
        self.focus = match self.focus {
            RosterFocus::Member { row, field } => RosterFocus::Member {
                row: row.saturating_sub(1),
                field,
            },
            RosterFocus::Staged(field) => {
                if member_count > 0 {
                    RosterFocus::Member {
                        row: member_count - 1,
                        field,
                    }
                } else {
                    RosterFocus::Staged(field)
                }
            }
        };
    }

    /// Keep focus valid after a member was removed
    pub fn clamp(&mut self, member_count: usize) {
        if let RosterFocus::Member { row, field } = self.focus {
            if row >= member_count {
                self.focus = if member_count > 0 {
                    RosterFocus::Member {
                        row: member_count - 1,
                        field,
                    }
                } else {
                    RosterFocus::Staged(field)
                };
            }
        }
    }

    /// Render the modal over the given (full-frame) area
    pub fn render(&self, frame: &mut Frame, area: Rect, draft: &RosterDraft) {
        let height = (draft.members().len() as u16 + 9).min(area.height);
        let modal = centered_rect(64, height, area);
        frame.render_widget(Clear, modal);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" EDIT TEAM ")
            .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let mut lines: Vec<Line> = Vec::new();

        for (row, member) in draft.members().iter().enumerate() {
            lines.push(self.member_line(
                &member.name,
                &member.role,
                RosterFocus::Member { row, field: MemberField::Name },
                RosterFocus::Member { row, field: MemberField::Role },
            ));
        }

        lines.push(Line::from(Span::styled(
            " ".repeat(inner.width as usize),
            Style::default().fg(Color::DarkGray),
        )));

        let staged_style = if draft.can_add_staged() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut staged = self.member_line(
            &draft.staged.name,
            &draft.staged.role,
            RosterFocus::Staged(MemberField::Name),
            RosterFocus::Staged(MemberField::Role),
        );
        staged.spans.insert(0, Span::styled("+", staged_style));
        lines.push(staged);

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Tab:Next  Enter:Add/Save  Del:Remove  Esc:Cancel",
            Style::default().fg(Color::DarkGray),
        )));

        let body = Paragraph::new(lines);
        frame.render_widget(body, inner);
    }

    /// Build one two-column row, highlighting whichever field has focus
    fn member_line(
        &self,
        name: &str,
        role: &str,
        name_focus: RosterFocus,
        role_focus: RosterFocus,
    ) -> Line<'static> {
        let focused = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let name_focused = self.focus == name_focus;
        let role_focused = self.focus == role_focus;

        let name_text = if name_focused {
            format!(" {}_", name)
        } else {
            format!(" {}", name)
        };
        let role_text = if role_focused {
            format!("{}_", role)
        } else {
            role.to_string()
        };

        Line::from(vec![
            Span::styled(
                format!("{:<28}", name_text),
                if name_focused { focused } else { Style::default() },
            ),
            Span::styled(
                role_text,
                if role_focused {
                    focused
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            ),
        ])
    }
}
