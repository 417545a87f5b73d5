use adw::prelude::*;
use gtk4 as gtk;
use std::cell::Cell;
use std::f64::consts::PI;
use std::rc::Rc;

use crate::model::{ITEMS, MENU_OPTIONS};
use crate::notify::Notifier;
use crate::ui::bottom_sheet::BottomSheet;

const SPIN_DURATION_MS: u32 = 1_000;

pub struct EntryScreen {
    root: gtk::Overlay,
}

impl EntryScreen {
    pub fn new(stack: &gtk::Stack, notifier: Rc<dyn Notifier>) -> Self {
        let content = gtk::Box::new(gtk::Orientation::Vertical, 12);
        content.set_margin_top(16);
        content.set_margin_bottom(16);
        content.set_margin_start(16);
        content.set_margin_end(16);

        // Items list
        let items_title = gtk::Label::new(Some("Items"));
        items_title.add_css_class("heading");
        items_title.set_halign(gtk::Align::Start);
        content.append(&items_title);

        let list = gtk::ListBox::new();
        list.add_css_class("boxed-list");
        list.set_selection_mode(gtk::SelectionMode::None);
        for item in ITEMS {
            let row = gtk::ListBoxRow::new();
            row.set_widget_name(item.id);
            let label = gtk::Label::new(Some(item.name));
            label.set_margin_top(10);
            label.set_margin_bottom(10);
            label.set_margin_start(10);
            label.set_margin_end(10);
            label.set_halign(gtk::Align::Start);
            row.set_child(Some(&label));
            list.append(&row);
        }
        {
            let notifier = notifier.clone();
            list.connect_row_activated(move |_, row| {
                if let Some(item) = ITEMS.get(row.index() as usize) {
                    notifier.notify(&click_message(item.name));
                }
            });
        }
        content.append(&list);

        // Rotating badge
        let angle = Rc::new(Cell::new(0.0_f64));
        let area = gtk::DrawingArea::new();
        area.set_content_width(110);
        area.set_content_height(110);
        area.set_halign(gtk::Align::Center);
        area.set_margin_top(8);
        {
            let angle = angle.clone();
            area.set_draw_func(move |_, cr, width, height| {
                draw_badge(cr, width, height, angle.get());
            });
        }

        let target = adw::CallbackAnimationTarget::new({
            let angle = angle.clone();
            let area = area.clone();
            move |value| {
                angle.set(value);
                area.queue_draw();
            }
        });
        let spin = adw::TimedAnimation::builder()
            .widget(&area)
            .value_from(0.0)
            .value_to(360.0)
            .duration(SPIN_DURATION_MS)
            .target(&target)
            .build();
        {
            // Back to the start value so the sweep can replay.
            let angle = angle.clone();
            let area = area.clone();
            spin.connect_done(move |_| {
                angle.set(0.0);
                area.queue_draw();
            });
        }
        content.append(&area);

        let rotate_btn = gtk::Button::with_label("Rotate Image");
        rotate_btn.add_css_class("suggested-action");
        rotate_btn.set_halign(gtk::Align::Center);
        {
            let notifier = notifier.clone();
            rotate_btn.connect_clicked(move |_| {
                spin.reset();
                spin.play();
                notifier.notify("Image rotating");
            });
        }
        content.append(&rotate_btn);

        // Bottom row: menu toggle and navigation to the form
        let bottom = gtk::Box::new(gtk::Orientation::Horizontal, 12);
        bottom.set_homogeneous(true);
        bottom.set_vexpand(true);
        bottom.set_valign(gtk::Align::End);

        let menu_btn = gtk::Button::with_label("Menu");
        bottom.append(&menu_btn);

        let form_btn = gtk::Button::with_label("Contact Form");
        form_btn.add_css_class("suggested-action");
        {
            let stack = stack.clone();
            let notifier = notifier.clone();
            form_btn.connect_clicked(move |_| {
                stack.set_visible_child_name(super::PAGE_FORM);
                notifier.notify("Opening contact form");
            });
        }
        bottom.append(&form_btn);
        content.append(&bottom);

        // Menu sheet
        let sheet = BottomSheet::new();

        let menu_list = gtk::ListBox::new();
        menu_list.add_css_class("boxed-list");
        menu_list.set_selection_mode(gtk::SelectionMode::None);
        for &option in MENU_OPTIONS {
            let row = gtk::ListBoxRow::new();
            let label = gtk::Label::new(Some(option));
            label.set_margin_top(14);
            label.set_margin_bottom(14);
            label.set_margin_start(12);
            label.set_margin_end(12);
            label.set_halign(gtk::Align::Start);
            row.set_child(Some(&label));
            menu_list.append(&row);
        }
        {
            let sheet = sheet.clone();
            let notifier = notifier.clone();
            menu_list.connect_row_activated(move |_, row| {
                sheet.set_open(false);
                if let Some(option) = MENU_OPTIONS.get(row.index() as usize) {
                    notifier.notify(&format!("{option} selected"));
                }
            });
        }

        let menu_body = gtk::Box::new(gtk::Orientation::Vertical, 0);
        menu_body.add_css_class("background");
        menu_list.set_margin_top(12);
        menu_list.set_margin_bottom(12);
        menu_list.set_margin_start(12);
        menu_list.set_margin_end(12);
        menu_body.append(&menu_list);
        sheet.set_content(&menu_body);

        {
            let sheet = sheet.clone();
            menu_btn.connect_clicked(move |_| sheet.set_open(!sheet.is_open()));
        }
        {
            let sheet_for_close = sheet.clone();
            sheet.connect_close(move || sheet_for_close.set_open(false));
        }

        let root = gtk::Overlay::new();
        root.set_child(Some(&content));
        root.add_overlay(&sheet.widget());
        Self { root }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }
}

fn click_message(name: &str) -> String {
    format!("Clicked: {name}")
}

// Circular badge with a red ring and an off-center dot so the spin reads.
fn draw_badge(cr: &gtk::cairo::Context, width: i32, height: i32, degrees: f64) {
    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    let radius = cx.min(cy) - 6.0;
    cr.translate(cx, cy);
    cr.rotate(degrees.to_radians());

    cr.set_source_rgb(0.13, 0.13, 0.13);
    cr.arc(0.0, 0.0, radius, 0.0, 2.0 * PI);
    let _ = cr.fill();

    cr.set_source_rgb(0.80, 0.0, 0.0);
    cr.rectangle(-radius * 0.45, -3.0, radius * 0.9, 6.0);
    cr.rectangle(-3.0, -radius * 0.45, 6.0, radius * 0.9);
    let _ = cr.fill();
    cr.arc(0.0, -radius * 0.62, 5.0, 0.0, 2.0 * PI);
    let _ = cr.fill();

    cr.set_line_width(3.0);
    cr.arc(0.0, 0.0, radius - 1.5, 0.0, 2.0 * PI);
    let _ = cr.stroke();
}

#[cfg(test)]
mod tests {
    use super::click_message;

    #[test]
    fn item_clicks_announce_the_item() {
        assert_eq!(click_message("Fortnite"), "Clicked: Fortnite");
    }
}
