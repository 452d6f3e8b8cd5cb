//! TUI Views module
//!
//! Contains the view implementations for the TUI: the episode list, the
//! episode detail pane, the creation form, and the two modal overlays
//! (confirmation gate and roster editor).

mod confirm_modal;
mod create_form;
mod edit_roster;
mod episode_detail;
mod episode_list;

pub use confirm_modal::ConfirmModalView;
pub use create_form::{CreateField, CreateFormState};
pub use edit_roster::{EditRosterView, RosterFocus};
pub use episode_detail::EpisodeDetailView;
pub use episode_list::EpisodeListView;

use ratatui::prelude::*;

use crate::models::EpisodeStatus;

/// Color used when rendering an episode status.
pub(crate) fn status_color(status: EpisodeStatus) -> Color {
    match status {
        EpisodeStatus::Planning => Color::Blue,
        EpisodeStatus::InProgress => Color::Yellow,
        EpisodeStatus::Production => Color::Cyan,
        EpisodeStatus::Marketing => Color::Magenta,
        EpisodeStatus::Launched => Color::Green,
        EpisodeStatus::Completed => Color::DarkGray,
    }
}

/// Compute a centered rectangle of the given size, clamped to `area`.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
