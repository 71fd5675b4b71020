//! Launcher/panel visibility.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which of the two widget surfaces is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Only the launcher bubble is visible.
    #[default]
    Collapsed,
    /// The chat panel is visible and the launcher is hidden.
    Expanded,
}

/// UI chrome state for the widget.
///
/// Held in an `RwSignal` by the `ChatWidget` component.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub visibility: Visibility,
}

impl UiState {
    /// Show the panel and hide the launcher.
    pub fn open(&mut self) {
        self.visibility = Visibility::Expanded;
    }

    /// Hide the panel and show the launcher.
    pub fn close(&mut self) {
        self.visibility = Visibility::Collapsed;
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.visibility == Visibility::Expanded
    }
}
