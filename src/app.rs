use adw::prelude::*;
use adw::Application;
use directories::BaseDirs;
use gtk4 as gtk;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use crate::ui::display::DisplayScreen;
use crate::ui::entry::EntryScreen;
use crate::ui::form::FormScreen;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    /// Optional notification backend override: "toast", "alert" or "inline".
    pub notifier: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("no config directory available")]
    NoConfigDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}

impl Settings {
    fn path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("widget-tour.toml"))
    }

    fn try_load() -> Result<Self, SettingsError> {
        let path = Self::path().ok_or(SettingsError::NoConfigDir)?;
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn load() -> Self {
        match Self::try_load() {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                log::warn!("settings unreadable ({e}), using defaults");
                Self::default()
            }
        }
    }
}

pub fn build_ui(app: &Application) {
    let settings = Settings::load();

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Widget Tour")
        .default_width(420)
        .default_height(680)
        .build();

    // Screens are pages of one stack; navigating is switching the visible
    // page, so the form keeps its field values across a round trip.
    let stack = gtk::Stack::new();
    stack.set_transition_type(gtk::StackTransitionType::SlideLeftRight);
    stack.set_vexpand(true);

    // Host for the inline notification banner.
    let float = gtk::Overlay::new();
    float.set_child(Some(&stack));

    let toasts = adw::ToastOverlay::new();
    toasts.set_child(Some(&float));

    let notifier = crate::notify::build(&settings, window.upcast_ref(), &toasts, &float);

    let display = Rc::new(DisplayScreen::new(&stack));
    let form = FormScreen::new(&stack, display.clone());
    let entry = EntryScreen::new(&stack, notifier);

    stack.add_named(&entry.widget(), Some(crate::ui::PAGE_ENTRY));
    stack.add_named(&form.widget(), Some(crate::ui::PAGE_FORM));
    stack.add_named(&display.widget(), Some(crate::ui::PAGE_DISPLAY));

    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk::Label::new(Some("Widget Tour"));
    header.set_title_widget(Some(&title));
    container.append(&header);
    container.append(&toasts);
    window.set_content(Some(&container));

    window.present();
}

#[cfg(test)]
mod tests {
    use super::Settings;

    #[test]
    fn notifier_override_parses() {
        let settings: Settings = toml::from_str("notifier = \"inline\"").unwrap();
        assert_eq!(settings.notifier.as_deref(), Some("inline"));
    }

    #[test]
    fn empty_settings_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert!(settings.notifier.is_none());
    }
}
