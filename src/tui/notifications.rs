//! Toast notifications for the TUI.
//!
//! Short status messages (roster saved, episode created, passphrase
//! rejected) that appear in the top-right corner and auto-dismiss.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of toasts to display at once
const MAX_VISIBLE_TOASTS: usize = 3;

/// Default auto-dismiss duration in seconds
const DEFAULT_DISMISS_SECONDS: u64 = 4;

/// Notification level (determines styling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Informational message
    Info,
    /// Success message (saved, created)
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl NotificationLevel {
    /// Get the color for this level
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            NotificationLevel::Info => Color::Blue,
            NotificationLevel::Success => Color::Green,
            NotificationLevel::Warning => Color::Yellow,
            NotificationLevel::Error => Color::Red,
        }
    }

    /// Get the icon prefix for this level
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "i",
            NotificationLevel::Success => "+",
            NotificationLevel::Warning => "!",
            NotificationLevel::Error => "x",
        }
    }
}

/// A single toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    /// Notification level
    pub level: NotificationLevel,
    /// Message content
    pub message: String,
    /// When the toast was created
    pub created_at: Instant,
    /// How long before auto-dismiss
    pub duration: Duration,
}

impl Toast {
    /// Create a new toast
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_secs(DEFAULT_DISMISS_SECONDS),
        }
    }

    /// Check if this toast has outlived its display duration
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Holds active toasts, newest first.
#[derive(Debug, Default)]
pub struct NotificationManager {
    toasts: VecDeque<Toast>,
}

impl NotificationManager {
    /// Create an empty notification manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new notification
    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.toasts.push_front(Toast::new(level, message));
    }

    /// Add an info notification
    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, message);
    }

    /// Add a success notification
    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Success, message);
    }

    /// Add a warning notification
    pub fn warning(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Warning, message);
    }

    /// Add an error notification
    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, message);
    }

    /// Drop expired toasts
    pub fn cleanup(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// Dismiss all toasts immediately
    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    /// Get visible toasts (limited by MAX_VISIBLE_TOASTS)
    pub fn visible_toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().take(MAX_VISIBLE_TOASTS)
    }

    /// Check if there are any visible toasts
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Count of toasts not displayed due to the visibility cap
    pub fn overflow_count(&self) -> usize {
        self.toasts.len().saturating_sub(MAX_VISIBLE_TOASTS)
    }
}
