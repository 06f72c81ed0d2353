//! Notification banner renderer.

use crate::ui::helpers::{position_cursor, truncate_end};
use crate::ui::layout::NOTIFICATION_ROW;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NotificationInfo;

/// Draws the message right-aligned on the top row.
pub fn render_notification(note: &NotificationInfo, theme: &Theme, cols: usize) {
    let color = if note.is_error {
        &theme.colors.notification_error
    } else {
        &theme.colors.notification_success
    };
    let icon = if note.is_error { "✗" } else { "✓" };
    let text = truncate_end(&format!(" {icon} {} ", note.message), cols);
    let col = cols.saturating_sub(text.chars().count()) + 1;

    position_cursor(NOTIFICATION_ROW, col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", Theme::reset());
}
