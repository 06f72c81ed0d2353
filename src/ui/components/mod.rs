//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at the rows defined in
//! [`layout`](crate::ui::layout):
//!
//! - [`notification`]: Transient status banner
//! - [`header`]: Title with visible/total counts
//! - [`filters`]: Category tabs
//! - [`search`]: Search input box
//! - [`table`]: Card table (NAME, YEAR, DESCRIPTION)
//! - [`empty`]: Empty state in place of the table
//! - [`contact`]: Contact form in place of the table
//! - [`modal`]: Viewer overlay
//! - [`footer`]: Keybinding hints
//!
//! [`render_page`] draws everything below the modal; the renderer draws the
//! modal on top afterwards.

mod contact;
mod empty;
mod filters;
mod footer;
mod header;
mod modal;
mod notification;
mod search;
mod table;

pub use modal::render_modal;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{self, CARD_TOP_ROW, FILTER_ROW, HEADER_ROW, SEARCH_TOP_ROW, TABLE_HEADER_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use contact::render_contact_form;
use empty::render_empty_state;
use filters::render_filter_tabs;
use footer::render_footer;
use header::render_header;
use notification::render_notification;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal separator at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the page layout:
///
/// ```text
/// [Notification]
/// [Header]
/// [Border]
/// [Filter tabs]
/// [Search box - 3 lines]
/// [Table headers | contact title]
/// [Cards | empty state | contact fields]
/// [Border]
/// [Footer]
/// ```
pub fn render_page(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(note) = &vm.notification {
        render_notification(note, theme, cols);
    }

    let mut current_row = render_header(HEADER_ROW, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    debug_assert_eq!(current_row, FILTER_ROW);
    current_row = render_filter_tabs(current_row, &vm.filter_tabs, theme, cols);
    debug_assert_eq!(current_row, SEARCH_TOP_ROW);
    render_search_bar(current_row, &vm.search_bar, theme, cols);

    if let Some(form) = &vm.contact {
        render_contact_form(form, theme, cols);
    } else if let Some(empty) = &vm.empty_state {
        render_table_headers(TABLE_HEADER_ROW, theme);
        render_empty_state(CARD_TOP_ROW + 1, empty, theme, cols);
    } else {
        render_table_headers(TABLE_HEADER_ROW, theme);
        render_table_rows(CARD_TOP_ROW, &vm.display_cards, theme, cols);
    }

    render_border(layout::footer_border_row(rows), &theme.colors.border, cols);
    render_footer(layout::footer_row(rows), &vm.footer, theme, cols);
}
