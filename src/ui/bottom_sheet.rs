use gtk4::prelude::*;
use gtk4 as gtk;
use std::cell::RefCell;
use std::rc::Rc;

/// Dismissible panel sliding up from the bottom edge of an overlay.
/// Owns its own show/hide transition; the host supplies the content and
/// decides when to open or close it. Tapping the area above the panel
/// fires the close callback.
#[derive(Clone)]
pub struct BottomSheet {
    root: gtk::Box,
    revealer: gtk::Revealer,
    on_close: Rc<RefCell<Option<Box<dyn Fn()>>>>,
}

impl BottomSheet {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
        root.set_visible(false);

        // Click-catcher above the panel.
        let scrim = gtk::Box::new(gtk::Orientation::Vertical, 0);
        scrim.set_vexpand(true);
        let on_close: Rc<RefCell<Option<Box<dyn Fn()>>>> = Rc::new(RefCell::new(None));
        let click = gtk::GestureClick::new();
        {
            let on_close = on_close.clone();
            click.connect_released(move |_, _, _, _| {
                if let Some(callback) = on_close.borrow().as_ref() {
                    callback();
                }
            });
        }
        scrim.add_controller(click);

        let revealer = gtk::Revealer::builder()
            .transition_type(gtk::RevealerTransitionType::SlideUp)
            .transition_duration(250)
            .build();
        {
            // The container stays mapped until the hide transition ends,
            // then stops intercepting input.
            let root = root.clone();
            revealer.connect_child_revealed_notify(move |revealer| {
                if !revealer.is_child_revealed() {
                    root.set_visible(false);
                }
            });
        }

        root.append(&scrim);
        root.append(&revealer);
        Self {
            root,
            revealer,
            on_close,
        }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn set_content(&self, child: &impl IsA<gtk::Widget>) {
        self.revealer.set_child(Some(child));
    }

    pub fn is_open(&self) -> bool {
        self.revealer.reveals_child()
    }

    pub fn set_open(&self, open: bool) {
        if open {
            self.root.set_visible(true);
        }
        self.revealer.set_reveal_child(open);
    }

    pub fn connect_close(&self, callback: impl Fn() + 'static) {
        *self.on_close.borrow_mut() = Some(Box::new(callback));
    }
}
