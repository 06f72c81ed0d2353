//! Card table renderer.
//!
//! Each visible card is one row with NAME, YEAR and DESCRIPTION columns.
//! The focused card is drawn with the selection colors; search matches in
//! the name are highlighted.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::layout::{NAME_COLUMN_WIDTH, YEAR_COLUMN_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayCard;

pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "  {:<name$}{:<year$}{}",
        "NAME",
        "YEAR",
        "DESCRIPTION",
        name = NAME_COLUMN_WIDTH - 2,
        year = YEAR_COLUMN_WIDTH
    );
    print!("{}", Theme::reset());
    row + 1
}

pub fn render_table_rows(row: usize, cards: &[DisplayCard], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_table_row(current_row, card, theme, cols);
    }
    current_row
}

fn render_table_row(row: usize, card: &DisplayCard, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base_fg = if card.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };
    print!("{}", Theme::fg(base_fg));

    print!("{}", if card.is_selected { "▶ " } else { "  " });
    helpers::render_highlighted_text(&card.name, &card.highlight_ranges, theme, card.is_selected);
    let name_len = card.name.chars().count();
    print!("{}", " ".repeat((NAME_COLUMN_WIDTH - 2).saturating_sub(name_len)));

    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.year_fg));
    }
    print!("{:<width$}", card.year_label, width = YEAR_COLUMN_WIDTH);

    if card.is_selected {
        print!("{}", Theme::fg(base_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", card.description);

    let line_len = NAME_COLUMN_WIDTH + YEAR_COLUMN_WIDTH + card.description.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
