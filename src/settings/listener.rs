use crate::settings::intent::SettingsIntent;

/// Sink for intents raised by the settings screen.
///
/// The screen receives its listener at construction time and calls it
/// synchronously from the UI thread.
pub trait SettingsListener {
    fn on_intent(&mut self, intent: SettingsIntent);
}

/// Records every intent in order. Handy for previews and tests.
impl SettingsListener for Vec<SettingsIntent> {
    fn on_intent(&mut self, intent: SettingsIntent) {
        self.push(intent);
    }
}
