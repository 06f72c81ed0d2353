//! Filter tab bar renderer.
//!
//! Tabs are drawn as ` label ` with one column of gap, at the spans
//! [`filter_tab_spans`] computes, so clicks resolve to the tab under the
//! pointer. The active tab is drawn inverted.

use crate::ui::helpers::position_cursor;
use crate::ui::layout::filter_tab_spans;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterTab;

pub fn render_filter_tabs(row: usize, tabs: &[FilterTab], theme: &Theme, cols: usize) -> usize {
    let spans = filter_tab_spans(tabs.iter().map(|tab| tab.label.as_str()));

    position_cursor(row, 1);
    print!("{}", " ".repeat(cols));

    for (tab, span) in tabs.iter().zip(spans) {
        if span.end > cols + 1 {
            break;
        }
        position_cursor(row, span.start);
        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.filter_active_fg));
            print!("{}", Theme::bg(&theme.colors.filter_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!(" {} ", tab.label);
        print!("{}", Theme::reset());
    }
    row + 1
}
