use crate::settings::AutoSleepDraft;
use crate::ui::mvi::UiState;

/// Focusable parts of the auto-sleep dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoSleepField {
    #[default]
    Enabled,
    StartTime,
    EndTime,
    Duration,
    Save,
    Cancel,
}

const FOCUS_ENABLED: &[AutoSleepField] = &[
    AutoSleepField::Enabled,
    AutoSleepField::StartTime,
    AutoSleepField::EndTime,
    AutoSleepField::Duration,
    AutoSleepField::Save,
    AutoSleepField::Cancel,
];

const FOCUS_DISABLED: &[AutoSleepField] = &[
    AutoSleepField::Enabled,
    AutoSleepField::Save,
    AutoSleepField::Cancel,
];

impl AutoSleepField {
    /// The three free-text fields, in display order.
    pub const TEXT_FIELDS: [AutoSleepField; 3] = [Self::StartTime, Self::EndTime, Self::Duration];

    pub fn label(self) -> &'static str {
        match self {
            Self::Enabled => "Auto sleep timer",
            Self::StartTime => "Start time",
            Self::EndTime => "End time",
            Self::Duration => "Duration (minutes)",
            Self::Save => "Save",
            Self::Cancel => "Cancel",
        }
    }

    pub fn is_text(self) -> bool {
        Self::TEXT_FIELDS.contains(&self)
    }

    /// Tab order; text fields only exist while the draft is enabled.
    pub fn focus_order(enabled: bool) -> &'static [AutoSleepField] {
        if enabled {
            FOCUS_ENABLED
        } else {
            FOCUS_DISABLED
        }
    }
}

impl AutoSleepDraft {
    /// Text of a free-text field; `None` for non-text fields.
    pub fn text(&self, field: AutoSleepField) -> Option<&str> {
        match field {
            AutoSleepField::StartTime => Some(&self.start_time),
            AutoSleepField::EndTime => Some(&self.end_time),
            AutoSleepField::Duration => Some(&self.duration_minutes),
            _ => None,
        }
    }

    pub(crate) fn text_mut(&mut self, field: AutoSleepField) -> Option<&mut String> {
        match field {
            AutoSleepField::StartTime => Some(&mut self.start_time),
            AutoSleepField::EndTime => Some(&mut self.end_time),
            AutoSleepField::Duration => Some(&mut self.duration_minutes),
            _ => None,
        }
    }
}

/// Local state of the auto-sleep configuration dialog.
///
/// The draft exists only while `Open` and is never written back except
/// through an explicit save.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AutoSleepDialogState {
    #[default]
    Closed,
    Open {
        draft: AutoSleepDraft,
        focus: AutoSleepField,
    },
}

impl UiState for AutoSleepDialogState {}

impl AutoSleepDialogState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn draft(&self) -> Option<&AutoSleepDraft> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    pub fn focus(&self) -> Option<AutoSleepField> {
        match self {
            Self::Open { focus, .. } => Some(*focus),
            Self::Closed => None,
        }
    }
}
