use std::ops::RangeInclusive;

use crate::settings::{AutoSleepDraft, SettingsDialog, SettingsViewState};
use crate::ui::amount::AmountEditorState;
use crate::ui::auto_sleep::{AutoSleepDialogState, AutoSleepField};
use crate::ui::screen::rows::SettingsRow;

/// Rendered settings screen, independent of any terminal backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenTree {
    pub use_dark_theme: bool,
    pub rows: Vec<SettingsRow>,
    pub focused: usize,
    pub app_version: String,
    pub error: Option<String>,
    /// Bottom to top.
    pub overlays: Vec<Overlay>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    AutoSleep(AutoSleepView),
    Amount(AmountView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoSleepView {
    pub draft: AutoSleepDraft,
    pub focus: AutoSleepField,
    /// Empty while the draft is disabled.
    pub text_fields: Vec<TextFieldView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldView {
    pub field: AutoSleepField,
    pub value: String,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountView {
    pub dialog: SettingsDialog,
    pub seconds: u32,
    pub range: RangeInclusive<u32>,
}

impl ScreenTree {
    pub(crate) fn build(
        view: &SettingsViewState,
        focused: usize,
        auto_sleep: &AutoSleepDialogState,
        amount: &AmountEditorState,
    ) -> Self {
        let rows = SettingsRow::visible_rows(view);
        let focused = focused.min(rows.len().saturating_sub(1));

        let mut overlays = Vec::new();
        if let AutoSleepDialogState::Open { draft, focus } = auto_sleep {
            overlays.push(Overlay::AutoSleep(AutoSleepView::new(draft, *focus)));
        }
        if let Some(dialog) = view.dialog {
            let seconds = amount
                .seconds_for(dialog)
                .unwrap_or_else(|| dialog.clamp(view.seconds_for(dialog)));
            overlays.push(Overlay::Amount(AmountView {
                dialog,
                seconds,
                range: dialog.seconds_range(),
            }));
        }

        Self {
            use_dark_theme: view.use_dark_theme,
            rows,
            focused,
            app_version: view.app_version.clone(),
            error: view.error.clone(),
            overlays,
        }
    }

    /// The simple dialog, if rendered.
    pub fn simple_dialog(&self) -> Option<&AmountView> {
        self.overlays.iter().find_map(|overlay| match overlay {
            Overlay::Amount(view) => Some(view),
            Overlay::AutoSleep(_) => None,
        })
    }

    pub fn auto_sleep(&self) -> Option<&AutoSleepView> {
        self.overlays.iter().find_map(|overlay| match overlay {
            Overlay::AutoSleep(view) => Some(view),
            Overlay::Amount(_) => None,
        })
    }

    pub fn focused_row(&self) -> Option<&SettingsRow> {
        self.rows.get(self.focused)
    }
}

impl AutoSleepView {
    fn new(draft: &AutoSleepDraft, focus: AutoSleepField) -> Self {
        let text_fields = if draft.enabled {
            AutoSleepField::TEXT_FIELDS
                .iter()
                .map(|&field| TextFieldView {
                    field,
                    value: draft.text(field).unwrap_or_default().to_string(),
                    focused: field == focus,
                })
                .collect()
        } else {
            Vec::new()
        };
        Self {
            draft: draft.clone(),
            focus,
            text_fields,
        }
    }

    /// Value shown in a text field, if that field is rendered.
    pub fn field_value(&self, field: AutoSleepField) -> Option<&str> {
        self.text_fields
            .iter()
            .find(|text| text.field == field)
            .map(|text| text.value.as_str())
    }
}
