//! Modal viewer renderer.
//!
//! Drawn last, over whatever the table shows, inside the box
//! [`ModalRect::centered`] computes. Controls sit at the positions hit testing
//! expects: close in the top border, prev/next on the row above the bottom
//! border.
//!
//! ```text
//! ┌─ Name ───────────────────[x]─┐
//! │                              │
//! │  image: aman.jpg             │
//! │  Name — caption (2024)       │
//! │                              │
//! │                              │
//! │                   3 / 8      │
//! │ < Prev             Next >    │
//! └──────────────────────────────┘
//! ```

use crate::ui::helpers::{centre_padding, position_cursor, truncate_end};
use crate::ui::layout::{ModalRect, MODAL_CLOSE_LABEL, MODAL_NEXT_LABEL, MODAL_PREV_LABEL};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalView;

pub fn render_modal(modal: &ModalView, theme: &Theme, rows: usize, cols: usize) {
    let rect = ModalRect::centered(rows, cols);
    let inner = rect.width.saturating_sub(2);
    if inner < 4 {
        return;
    }

    render_top_border(&rect, &modal.name, theme);

    let body = [
        String::new(),
        format!("  image: {}", modal.image),
        format!("  {}", modal.caption),
        String::new(),
        String::new(),
    ];
    for (offset, line) in body.iter().enumerate() {
        let text_fg = if offset == 1 {
            &theme.colors.text_dim
        } else {
            &theme.colors.text_normal
        };
        render_body_line(rect.top + 1 + offset, &rect, &truncate_end(line, inner), text_fg, theme);
    }

    let counter_padding = centre_padding(modal.counter.chars().count(), inner);
    let counter_line = format!("{}{}", " ".repeat(counter_padding), modal.counter);
    render_body_line(rect.nav_row() - 1, &rect, &counter_line, &theme.colors.year_fg, theme);

    render_nav_row(&rect, theme);
    render_bottom_border(&rect, theme);
}

fn render_top_border(rect: &ModalRect, name: &str, theme: &Theme) {
    let inner = rect.width.saturating_sub(2);
    let title = truncate_end(&format!(" {name} "), inner.saturating_sub(MODAL_CLOSE_LABEL.len() + 3));
    let title_len = title.chars().count() + 1;
    let close_start = rect.close_span().start - rect.left;

    position_cursor(rect.top, rect.left);
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("┌─");
    print!("{}{title}", Theme::bold());
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("{}", "─".repeat(close_start.saturating_sub(title_len + 1)));
    print!("{}{MODAL_CLOSE_LABEL}", Theme::fg(&theme.colors.notification_error));
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("─┐");
    print!("{}", Theme::reset());
}

fn render_body_line(row: usize, rect: &ModalRect, text: &str, text_fg: &str, theme: &Theme) {
    let inner = rect.width.saturating_sub(2);
    position_cursor(row, rect.left);
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("│");
    print!("{}", Theme::fg(text_fg));
    print!("{text}");
    print!("{}", " ".repeat(inner.saturating_sub(text.chars().count())));
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("│");
    print!("{}", Theme::reset());
}

fn render_nav_row(rect: &ModalRect, theme: &Theme) {
    render_body_line(rect.nav_row(), rect, &nav_line(rect), &theme.colors.header_fg, theme);
}

/// Prev/next labels at their hit-test offsets, or blank when the box is too
/// narrow to hold both.
fn nav_line(rect: &ModalRect) -> String {
    let inner = rect.width.saturating_sub(2);
    if inner < MODAL_PREV_LABEL.len() + MODAL_NEXT_LABEL.len() + 2 {
        return String::new();
    }
    let prev_offset = rect.prev_span().start.saturating_sub(rect.left + 1);
    let next_offset = rect.next_span().start.saturating_sub(rect.left + 1);
    let gap = next_offset.saturating_sub(prev_offset + MODAL_PREV_LABEL.len());
    let line = format!("{}{MODAL_PREV_LABEL}{}{MODAL_NEXT_LABEL}", " ".repeat(prev_offset), " ".repeat(gap));
    truncate_end(&line, inner)
}

fn render_bottom_border(rect: &ModalRect, theme: &Theme) {
    position_cursor(rect.bottom(), rect.left);
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("└{}┘", "─".repeat(rect.width.saturating_sub(2)));
    print!("{}", Theme::reset());
}
