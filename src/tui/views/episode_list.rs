//! Episode list view - the default screen.
//!
//! Shows every episode with status, launch date, budget, and team size.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::commands::DisplayOptions;
use crate::format::{format_date, format_money};
use crate::models::Episode;

use super::status_color;

/// State for the episode list view
pub struct EpisodeListView {
    /// Selected row index
    pub selected: usize,
    /// List widget state
    pub list_state: ListState,
}

impl Default for EpisodeListView {
    fn default() -> Self {
        Self::new()
    }
}

impl EpisodeListView {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    /// Move selection down
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
        self.list_state.select(Some(self.selected));
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.list_state.select(Some(self.selected));
    }

    /// Jump to top
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.list_state.select(Some(0));
    }

    /// Jump to bottom
    pub fn select_last(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = len - 1;
        self.list_state.select(Some(self.selected));
    }

    /// Keep the selection inside the list after it shrinks
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
        self.list_state.select(Some(self.selected));
    }

    /// Render the view
    pub fn render(&mut self, frame: &mut Frame, area: Rect, episodes: &[Episode], display: &DisplayOptions) {
        if episodes.is_empty() {
            let empty = Paragraph::new("No episodes")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title(" Episodes "));
            frame.render_widget(empty, area);
            return;
        }

        let name_width = area.width.saturating_sub(52) as usize;

        let list_items: Vec<ListItem> = episodes
            .iter()
            .enumerate()
            .map(|(idx, ep)| {
                let marker = if idx == self.selected { ">" } else { " " };
                let name = if ep.name.len() > name_width && name_width > 3 {
                    format!("{}...", &ep.name[..name_width - 3])
                } else {
                    ep.name.clone()
                };

                let line = Line::from(vec![
                    Span::raw(format!(" {} ", marker)),
                    Span::styled(format!("{:<8}", ep.id), Style::default().fg(Color::Blue)),
                    Span::styled(
                        format!("{:<12}", ep.status.to_string()),
                        Style::default().fg(status_color(ep.status)),
                    ),
                    Span::raw(format!(
                        "{:<14}",
                        format_date(ep.launch_date, &display.date_format)
                    )),
                    Span::raw(format!(
                        "{:>10}",
                        format_money(ep.budget, &display.currency_symbol)
                    )),
                    Span::styled(
                        format!("  {:>2} ", ep.team_members.len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(name),
                ]);

                let item_style = if idx == self.selected {
                    Style::default().bg(Color::DarkGray)
                } else {
                    Style::default()
                };
                ListItem::new(line).style(item_style)
            })
            .collect();

        let list = List::new(list_items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Episodes ({}) ", episodes.len())),
        );

        frame.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_clamps_at_ends() {
        let mut view = EpisodeListView::new();
        view.select_previous();
        assert_eq!(view.selected, 0);

        view.select_next(3);
        view.select_next(3);
        view.select_next(3);
        assert_eq!(view.selected, 2);

        view.select_first();
        assert_eq!(view.selected, 0);
        view.select_last(3);
        assert_eq!(view.selected, 2);
    }

    #[test]
    fn test_navigation_ignores_empty_list() {
        let mut view = EpisodeListView::new();
        view.select_next(0);
        view.select_last(0);
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut view = EpisodeListView::new();
        view.select_last(5);
        assert_eq!(view.selected, 4);
        view.clamp(2);
        assert_eq!(view.selected, 1);
        view.clamp(0);
        assert_eq!(view.selected, 0);
    }
}
