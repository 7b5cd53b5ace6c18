//! Reference behavior owner for the settings screen.
//!
//! Applies intents to the preferences store, decides which simple dialog
//! is shown, and produces the view-state the screen renders.

use crate::config::{Config, LinksConfig, Preferences, PreferencesStore};
use crate::links::{LinkOpener, LinkTarget};
use crate::settings::auto_sleep::{AutoSleepDraft, AutoSleepSchedule};
use crate::settings::intent::SettingsIntent;
use crate::settings::listener::SettingsListener;
use crate::settings::view_state::{SettingsDialog, SettingsViewState};

pub struct SettingsModel<O> {
    store: PreferencesStore,
    links: LinksConfig,
    opener: O,
    show_dark_theme_pref: bool,
    app_version: String,
    dialog: Option<SettingsDialog>,
    error: Option<String>,
    close_requested: bool,
}

impl<O: LinkOpener> SettingsModel<O> {
    pub fn new(
        store: PreferencesStore,
        config: &Config,
        opener: O,
        app_version: impl Into<String>,
    ) -> Self {
        Self {
            store,
            links: config.links.clone(),
            opener,
            show_dark_theme_pref: config.ui.allow_theme_override,
            app_version: app_version.into(),
            dialog: None,
            error: None,
            close_requested: false,
        }
    }

    /// Snapshot for the next render.
    pub fn view_state(&self) -> SettingsViewState {
        let prefs = self.store.get();
        SettingsViewState {
            use_dark_theme: prefs.dark_theme,
            show_dark_theme_pref: self.show_dark_theme_pref,
            seek_time_seconds: prefs.seek_time_seconds,
            auto_rewind_seconds: prefs.auto_rewind_seconds,
            use_grid: prefs.grid,
            is_auto_sleep_enabled: prefs.auto_sleep.enabled,
            auto_sleep_start_time: prefs.auto_sleep.start_time,
            auto_sleep_end_time: prefs.auto_sleep.end_time,
            auto_sleep_duration_minutes: prefs.auto_sleep.duration_minutes.to_string(),
            app_version: self.app_version.clone(),
            dialog: self.dialog,
            error: self.error.clone(),
        }
    }

    /// True once the screen asked to close.
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    pub fn store(&self) -> &PreferencesStore {
        &self.store
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    fn persist<F>(&mut self, what: &str, change: F)
    where
        F: FnOnce(&mut Preferences),
    {
        match self.store.update(change) {
            Ok(()) => {
                tracing::debug!(setting = what, "Preference updated");
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(setting = what, error = %err, "Failed to save preference");
                self.error = Some(err.to_string());
            }
        }
    }

    fn request_dialog(&mut self, dialog: SettingsDialog) {
        match self.dialog {
            None => self.dialog = Some(dialog),
            Some(current) => {
                tracing::debug!(?current, requested = ?dialog, "Dialog already shown, request ignored");
            }
        }
    }

    fn open_link(&mut self, target: LinkTarget) {
        let result = self
            .links
            .url_for(target)
            .map(str::to_owned)
            .and_then(|url| {
                tracing::info!(link = target.as_str(), %url, "Opening link");
                self.opener.open(&url)
            });
        if let Err(err) = result {
            tracing::warn!(link = target.as_str(), error = %err, "Link not opened");
            self.error = Some(err.to_string());
        }
    }

    /// Validates and applies a committed auto-sleep set.
    ///
    /// A rejected commit leaves every persisted value untouched. When the
    /// committed set is disabled, only the flag is required to be valid:
    /// an unparseable hidden window keeps its previous persisted value.
    fn save_auto_sleep(&mut self, draft: AutoSleepDraft) {
        match AutoSleepSchedule::try_from(&draft) {
            Ok(schedule) => self.persist("auto_sleep", |p| {
                p.auto_sleep.enabled = schedule.enabled;
                p.auto_sleep.start_time = schedule.start.to_string();
                p.auto_sleep.end_time = schedule.end.to_string();
                p.auto_sleep.duration_minutes = schedule.duration_minutes;
            }),
            Err(err) if !draft.enabled => {
                tracing::debug!(error = %err, "Disabled auto-sleep with invalid window, keeping old window");
                self.persist("auto_sleep.enabled", |p| p.auto_sleep.enabled = false);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Rejected auto-sleep settings");
                self.error = Some(err.to_string());
            }
        }
    }
}

impl<O: LinkOpener> SettingsListener for SettingsModel<O> {
    fn on_intent(&mut self, intent: SettingsIntent) {
        tracing::trace!(intent = intent.name(), "Settings intent");
        match intent {
            SettingsIntent::Close => self.close_requested = true,
            SettingsIntent::ToggleDarkTheme => {
                if self.show_dark_theme_pref {
                    self.persist("dark_theme", |p| p.dark_theme = !p.dark_theme);
                }
            }
            SettingsIntent::SeekAmountRowClicked => self.request_dialog(SettingsDialog::SeekTime),
            SettingsIntent::AutoRewindRowClicked => {
                self.request_dialog(SettingsDialog::AutoRewindAmount)
            }
            SettingsIntent::SeekAmountChanged(seconds) => {
                let seconds = SettingsDialog::SeekTime.clamp(seconds);
                self.persist("seek_time_seconds", |p| p.seek_time_seconds = seconds);
                self.dialog = None;
            }
            SettingsIntent::AutoRewindAmountChanged(seconds) => {
                let seconds = SettingsDialog::AutoRewindAmount.clamp(seconds);
                self.persist("auto_rewind_seconds", |p| p.auto_rewind_seconds = seconds);
                self.dialog = None;
            }
            SettingsIntent::DismissDialog => self.dialog = None,
            SettingsIntent::OpenTranslations => self.open_link(LinkTarget::Translations),
            SettingsIntent::GetSupport => self.open_link(LinkTarget::Support),
            SettingsIntent::SuggestIdea => self.open_link(LinkTarget::SuggestIdea),
            SettingsIntent::OpenBugReport => self.open_link(LinkTarget::BugReport),
            SettingsIntent::ToggleGrid => self.persist("grid", |p| p.grid = !p.grid),
            SettingsIntent::AutoSleepStartTimeChanged(_)
            | SettingsIntent::AutoSleepEndTimeChanged(_)
            | SettingsIntent::AutoSleepDurationChanged(_) => {
                // Drafts live in the screen until SaveAutoSleep.
            }
            SettingsIntent::SaveAutoSleep(draft) => self.save_auto_sleep(draft),
            SettingsIntent::ToggleAutoSleep(enabled) => {
                self.persist("auto_sleep.enabled", |p| p.auto_sleep.enabled = enabled)
            }
        }
    }
}
