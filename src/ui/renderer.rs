//! Top-level rendering coordinator.
//!
//! Rendering is two steps: `AppState::compute_viewmodel` turns state into a
//! [`UIViewModel`], then components print it as ANSI output. The modal is
//! drawn last so it sits above the page.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; Zellij hands the plugin a fresh frame per
/// render call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    components::render_page(vm, theme, rows, cols);

    if let Some(modal) = &vm.modal {
        components::render_modal(modal, theme, rows, cols);
    }
}
