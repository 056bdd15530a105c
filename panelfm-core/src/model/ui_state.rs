//! Transient UI state: status line notifications and the redraw flag.

use std::time::{Duration, Instant};

use compact_str::CompactString;

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NotificationLevel {
    Info = 0,
    Success = 1,
    Warning = 2,
    Error = 3,
}

/// Status line message with the moment it was raised.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: CompactString,
    pub level: NotificationLevel,
    pub timestamp: Instant,
    pub auto_dismiss: Duration,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.timestamp) >= self.auto_dismiss
    }
}

#[derive(Debug, Clone)]
pub struct UIState {
    pub notification: Option<Notification>,
    /// How long a status message stays up.
    pub status_duration: Duration,
    redraw: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl UIState {
    pub fn new(status_duration: Duration) -> Self {
        Self {
            notification: None,
            status_duration,
            redraw: true,
        }
    }

    #[inline]
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Returns whether a redraw was pending and clears the flag.
    #[inline]
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.redraw, false)
    }

    pub fn show_notification(&mut self, message: impl Into<CompactString>, level: NotificationLevel) {
        self.notification = Some(Notification {
            message: message.into(),
            level,
            timestamp: Instant::now(),
            auto_dismiss: self.status_duration,
        });
        self.request_redraw();
    }

    #[inline]
    pub fn show_info(&mut self, message: impl Into<CompactString>) {
        self.show_notification(message, NotificationLevel::Info);
    }

    #[inline]
    pub fn show_success(&mut self, message: impl Into<CompactString>) {
        self.show_notification(message, NotificationLevel::Success);
    }

    #[inline]
    pub fn show_error(&mut self, message: impl Into<CompactString>) {
        self.show_notification(message, NotificationLevel::Error);
    }

    /// Drop the notification once it has been up long enough.
    pub fn update_notification(&mut self, now: Instant) -> bool {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
            self.request_redraw();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_expires_after_duration() {
        let mut ui = UIState::new(Duration::from_millis(50));
        ui.show_error("This path does not exist");
        let shown = ui.notification.as_ref().unwrap().timestamp;

        assert!(!ui.update_notification(shown + Duration::from_millis(10)));
        assert!(ui.notification.is_some());

        assert!(ui.update_notification(shown + Duration::from_millis(50)));
        assert!(ui.notification.is_none());
    }

    #[test]
    fn test_redraw_flag_is_taken_once() {
        let mut ui = UIState::default();
        assert!(ui.take_redraw());
        assert!(!ui.take_redraw());
        ui.show_info("hi");
        assert!(ui.take_redraw());
    }
}
