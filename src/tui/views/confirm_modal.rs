//! Confirmation gate modal.
//!
//! Rendered whenever the panel has a pending gate request. When a
//! passphrase is configured the modal carries a masked input; otherwise a
//! plain Enter approves.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::gate::GateRequest;
use crate::panel::PanelAction;

use super::centered_rect;

/// State for the confirmation modal
#[derive(Debug, Default)]
pub struct ConfirmModalView {
    /// Typed passphrase attempt (never rendered in clear text)
    pub passphrase_input: String,
}

impl ConfirmModalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the current passphrase attempt
    pub fn clear_input(&mut self) {
        self.passphrase_input.clear();
    }

    /// Render the modal over the given (full-frame) area
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        request: &GateRequest<PanelAction>,
        needs_passphrase: bool,
    ) {
        let height = if needs_passphrase { 9 } else { 7 };
        let modal = centered_rect(56, height, area);
        frame.render_widget(Clear, modal);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", request.title))
            .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::raw(format!(" {}", request.description))));

        if needs_passphrase {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(
                    " Passphrase: ",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("*".repeat(self.passphrase_input.chars().count())),
                Span::styled("_", Style::default().fg(Color::Yellow)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Enter:Approve  Esc:Dismiss",
            Style::default().fg(Color::DarkGray),
        )));

        let body = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(body, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_input() {
        let mut view = ConfirmModalView::new();
        view.passphrase_input.push_str("winter-drop");
        view.clear_input();
        assert!(view.passphrase_input.is_empty());
    }
}
