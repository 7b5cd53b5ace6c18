use crate::settings::SettingsDialog;
use crate::ui::mvi::UiState;

/// Editable value of the simple dialog currently requested by the owner.
///
/// Seeded from the view-state whenever a dialog kind appears, so every
/// open starts from the persisted amount.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AmountEditorState {
    #[default]
    Hidden,
    Editing {
        dialog: SettingsDialog,
        seconds: u32,
    },
}

impl UiState for AmountEditorState {}

impl AmountEditorState {
    /// Edited value if the editor belongs to `dialog`.
    pub fn seconds_for(&self, dialog: SettingsDialog) -> Option<u32> {
        match self {
            Self::Editing { dialog: d, seconds } if *d == dialog => Some(*seconds),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_only_for_matching_dialog() {
        let state = AmountEditorState::Editing {
            dialog: SettingsDialog::SeekTime,
            seconds: 15,
        };
        assert_eq!(state.seconds_for(SettingsDialog::SeekTime), Some(15));
        assert_eq!(state.seconds_for(SettingsDialog::AutoRewindAmount), None);
        assert_eq!(AmountEditorState::Hidden.seconds_for(SettingsDialog::SeekTime), None);
    }
}
