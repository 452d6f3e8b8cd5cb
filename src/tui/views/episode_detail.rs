//! Episode detail view.
//!
//! Shows the full record for the selected episode: concept, schedule,
//! money, and the committed team roster.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::commands::DisplayOptions;
use crate::format::{format_date, format_money};
use crate::models::Episode;

use super::status_color;

/// State for the episode detail view
#[derive(Debug, Default)]
pub struct EpisodeDetailView;

impl EpisodeDetailView {
    pub fn new() -> Self {
        Self
    }

    /// Render the view
    pub fn render(&self, frame: &mut Frame, area: Rect, episode: &Episode, display: &DisplayOptions) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),     // Episode info
                Constraint::Length(10), // Team roster
            ])
            .split(area);

        self.render_info(frame, chunks[0], episode, display);
        self.render_roster(frame, chunks[1], episode);
    }

    /// Render the episode information section
    fn render_info(&self, frame: &mut Frame, area: Rect, episode: &Episode, display: &DisplayOptions) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", episode.id));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let bold = Style::default().add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("Name: ", bold),
            Span::raw(episode.name.as_str()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Status: ", bold),
            Span::styled(
                episode.status.to_string(),
                Style::default().fg(status_color(episode.status)),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Start: ", bold),
            Span::raw(format_date(episode.start_date, &display.date_format)),
            Span::raw("   "),
            Span::styled("Launch: ", bold),
            Span::raw(format_date(episode.launch_date, &display.date_format)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Budget: ", bold),
            Span::raw(format_money(episode.budget, &display.currency_symbol)),
            Span::raw("   "),
            Span::styled("Target: ", bold),
            Span::raw(format_money(episode.target_revenue, &display.currency_symbol)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![Span::styled("Concept", bold)]));
        lines.push(Line::from(Span::raw(episode.concept.as_str())));

        let info = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(info, inner);
    }

    /// Render the committed team roster
    fn render_roster(&self, frame: &mut Frame, area: Rect, episode: &Episode) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Team ({}) ", episode.team_members.len()));

        if episode.team_members.is_empty() {
            let empty = Paragraph::new("No team members")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = episode
            .team_members
            .iter()
            .map(|member| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!(" {:<24}", member.name)),
                    Span::styled(
                        member.role.as_str(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }
}
