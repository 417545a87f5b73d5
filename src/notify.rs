use adw::prelude::*;
use gtk4 as gtk;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::app::Settings;

const INLINE_DISMISS: Duration = Duration::from_millis(2_500);

/// One transient message, one channel. The backend is picked once at
/// startup; call sites hold an `Rc<dyn Notifier>` and never branch.
pub trait Notifier {
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Toast,
    Alert,
    Inline,
}

impl Backend {
    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "toast" => Some(Self::Toast),
            "alert" => Some(Self::Alert),
            "inline" => Some(Self::Inline),
            _ => None,
        }
    }
}

/// Backend selection: an explicit override wins, otherwise the desktop
/// identity decides, otherwise the inline banner. No fallback chaining
/// happens after this point.
pub fn choose(override_name: Option<&str>, desktop: Option<&str>) -> Backend {
    if let Some(name) = override_name {
        if let Some(backend) = Backend::from_name(name) {
            return backend;
        }
        log::warn!("unknown notifier {name:?}, detecting instead");
    }
    match desktop {
        Some(d) if d.to_ascii_lowercase().contains("gnome") => Backend::Toast,
        Some(d) if !d.is_empty() => Backend::Alert,
        _ => Backend::Inline,
    }
}

pub fn build(
    settings: &Settings,
    window: &gtk::Window,
    toasts: &adw::ToastOverlay,
    float: &gtk::Overlay,
) -> Rc<dyn Notifier> {
    let override_name = std::env::var("WIDGET_TOUR_NOTIFY")
        .ok()
        .or_else(|| settings.notifier.clone());
    let desktop = std::env::var("XDG_CURRENT_DESKTOP").ok();
    let backend = choose(override_name.as_deref(), desktop.as_deref());
    log::info!("notifications via {backend:?} backend");
    match backend {
        Backend::Toast => Rc::new(ToastNotifier {
            overlay: toasts.clone(),
        }),
        Backend::Alert => Rc::new(AlertNotifier {
            window: window.clone(),
        }),
        Backend::Inline => Rc::new(InlineNotifier::attach(float)),
    }
}

/// Short-lived, non-blocking toast on the window's overlay.
struct ToastNotifier {
    overlay: adw::ToastOverlay,
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str) {
        log::debug!("toast: {message}");
        let toast = adw::Toast::builder().title(message).timeout(2).build();
        self.overlay.add_toast(toast);
    }
}

/// Modal dialog dismissed only by explicit acknowledgment.
struct AlertNotifier {
    window: gtk::Window,
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        log::debug!("alert: {message}");
        let dialog = gtk::MessageDialog::builder()
            .transient_for(&self.window)
            .modal(true)
            .message_type(gtk::MessageType::Info)
            .buttons(gtk::ButtonsType::Ok)
            .text(message)
            .build();
        dialog.connect_response(|dialog, _| dialog.close());
        dialog.present();
    }
}

/// Floating in-view banner with a timed dismissal, for sessions where
/// neither native surface is appropriate.
struct InlineNotifier {
    revealer: gtk::Revealer,
    label: gtk::Label,
    pending: Rc<RefCell<Option<glib::SourceId>>>,
}

impl InlineNotifier {
    fn attach(float: &gtk::Overlay) -> Self {
        let label = gtk::Label::new(None);
        label.set_margin_top(8);
        label.set_margin_bottom(8);
        label.set_margin_start(14);
        label.set_margin_end(14);

        let body = gtk::Box::new(gtk::Orientation::Horizontal, 0);
        body.add_css_class("osd");
        body.append(&label);

        let revealer = gtk::Revealer::builder()
            .transition_type(gtk::RevealerTransitionType::Crossfade)
            .transition_duration(200)
            .halign(gtk::Align::End)
            .valign(gtk::Align::Start)
            .margin_top(12)
            .margin_end(12)
            .build();
        revealer.set_can_target(false);
        revealer.set_child(Some(&body));
        float.add_overlay(&revealer);

        Self {
            revealer,
            label,
            pending: Rc::new(RefCell::new(None)),
        }
    }
}

impl Notifier for InlineNotifier {
    fn notify(&self, message: &str) {
        log::debug!("inline: {message}");
        self.label.set_text(message);
        // A replacement message must not be hidden by the previous
        // message's timer.
        if let Some(source) = self.pending.borrow_mut().take() {
            source.remove();
        }
        self.revealer.set_reveal_child(true);
        let revealer = self.revealer.clone();
        let pending = self.pending.clone();
        let source = glib::timeout_add_local_once(INLINE_DISMISS, move || {
            pending.borrow_mut().take();
            revealer.set_reveal_child(false);
        });
        *self.pending.borrow_mut() = Some(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        assert_eq!(choose(Some("alert"), Some("GNOME")), Backend::Alert);
        assert_eq!(choose(Some("toast"), None), Backend::Toast);
    }

    #[test]
    fn override_names_parse_case_insensitively() {
        assert_eq!(choose(Some(" Inline "), Some("GNOME")), Backend::Inline);
        assert_eq!(choose(Some("TOAST"), None), Backend::Toast);
    }

    #[test]
    fn unknown_override_falls_through_to_detection() {
        assert_eq!(choose(Some("growl"), Some("KDE")), Backend::Alert);
        assert_eq!(choose(Some("growl"), None), Backend::Inline);
    }

    #[test]
    fn gnome_sessions_get_toasts() {
        assert_eq!(choose(None, Some("GNOME")), Backend::Toast);
        assert_eq!(choose(None, Some("ubuntu:GNOME")), Backend::Toast);
    }

    #[test]
    fn other_desktops_get_dialogs() {
        assert_eq!(choose(None, Some("KDE")), Backend::Alert);
        assert_eq!(choose(None, Some("XFCE")), Backend::Alert);
    }

    #[test]
    fn headless_sessions_get_the_inline_banner() {
        assert_eq!(choose(None, None), Backend::Inline);
        assert_eq!(choose(None, Some("")), Backend::Inline);
    }
}
