use crate::settings::SettingsDialog;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AmountIntent {
    /// Align with the owner's current dialog and persisted amount.
    Sync {
        requested: Option<(SettingsDialog, u32)>,
    },
    Increase,
    Decrease,
}

impl Intent for AmountIntent {}
