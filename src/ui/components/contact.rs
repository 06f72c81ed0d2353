//! Contact form renderer.
//!
//! The title sits on the table header row and one field per row follows
//! from [`CONTACT_FIELD_ROW`], in [`ContactField::ALL`](crate::domain::ContactField::ALL)
//! order, which is what hit testing assumes.

use crate::ui::helpers::{position_cursor, truncate_end};
use crate::ui::layout::{CONTACT_FIELD_ROW, TABLE_HEADER_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ContactFieldView, ContactFormView};

const LABEL_WIDTH: usize = 12;

pub fn render_contact_form(form: &ContactFormView, theme: &Theme, cols: usize) {
    position_cursor(TABLE_HEADER_ROW, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("  CONTACT US");
    print!("{}", Theme::reset());

    for (offset, field) in form.fields.iter().enumerate() {
        render_field(CONTACT_FIELD_ROW + offset, field, theme, cols);
    }
}

fn render_field(row: usize, field: &ContactFieldView, theme: &Theme, cols: usize) {
    position_cursor(row, 1);

    let marker = if field.is_required { "*" } else { " " };
    let label = format!("{}{marker}", field.label);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  {label:<LABEL_WIDTH$}");

    let value_width = cols.saturating_sub(LABEL_WIDTH + 3);
    let value = if field.is_focused {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        truncate_end(&format!("{}█", field.value), value_width)
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        truncate_end(&field.value, value_width)
    };
    print!("{value}");
    print!("{}", " ".repeat(value_width.saturating_sub(value.chars().count())));
    print!("{}", Theme::reset());
}
