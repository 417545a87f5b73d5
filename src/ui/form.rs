use gtk4::prelude::*;
use gtk4 as gtk;
use std::rc::Rc;

use crate::model::{self, ContactRecord};
use crate::ui::display::DisplayScreen;

pub struct FormScreen {
    root: gtk::ScrolledWindow,
}

impl FormScreen {
    pub fn new(stack: &gtk::Stack, display: Rc<DisplayScreen>) -> Self {
        let column = gtk::Box::new(gtk::Orientation::Vertical, 12);
        column.set_margin_top(16);
        column.set_margin_bottom(16);
        column.set_margin_start(16);
        column.set_margin_end(16);

        let title = gtk::Label::new(Some("New Contact"));
        title.add_css_class("title-2");
        column.append(&title);

        let subtitle = gtk::Label::new(Some("Enter contact information"));
        subtitle.add_css_class("dim-label");
        column.append(&subtitle);

        // Personal group
        let personal = group(&column, "Personal Information");
        let first_name = field(&personal, "First Name", gtk::InputPurpose::FreeForm);
        let last_name = field(&personal, "Last Name", gtk::InputPurpose::FreeForm);
        let age = field(&personal, "Age", gtk::InputPurpose::Number);
        let occupation = field(&personal, "Occupation", gtk::InputPurpose::FreeForm);

        // Contact group
        let contact = group(&column, "Contact Information");
        let phone_number = field(&contact, "Phone Number", gtk::InputPurpose::Phone);
        let email = field(&contact, "Email Address", gtk::InputPurpose::Email);
        let address = field(&contact, "Home Address", gtk::InputPurpose::FreeForm);

        // Insensitive until every required field holds something; this is
        // the only validation feedback the form gives.
        let submit = gtk::Button::with_label("Submit");
        submit.add_css_class("suggested-action");
        submit.set_sensitive(false);
        column.append(&submit);

        let refresh: Rc<dyn Fn()> = Rc::new({
            let first_name = first_name.clone();
            let last_name = last_name.clone();
            let phone_number = phone_number.clone();
            let email = email.clone();
            let age = age.clone();
            let submit = submit.clone();
            move || {
                submit.set_sensitive(model::required_filled(
                    &first_name.text(),
                    &last_name.text(),
                    &phone_number.text(),
                    &email.text(),
                    &age.text(),
                ));
            }
        });
        for entry in [&first_name, &last_name, &phone_number, &email, &age] {
            let refresh = refresh.clone();
            entry.connect_changed(move |_| (refresh)());
        }

        {
            let stack = stack.clone();
            submit.connect_clicked(move |_| {
                let record = ContactRecord::from_inputs(
                    first_name.text().as_str(),
                    last_name.text().as_str(),
                    phone_number.text().as_str(),
                    email.text().as_str(),
                    age.text().as_str(),
                    address.text().as_str(),
                    occupation.text().as_str(),
                );
                display.set_record(&record);
                stack.set_visible_child_name(super::PAGE_DISPLAY);
            });
        }

        let root = gtk::ScrolledWindow::builder()
            .hscrollbar_policy(gtk::PolicyType::Never)
            .vexpand(true)
            .build();
        root.set_child(Some(&column));
        Self { root }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }
}

fn group(column: &gtk::Box, heading: &str) -> gtk::Box {
    let frame = gtk::Box::new(gtk::Orientation::Vertical, 8);
    frame.add_css_class("card");
    frame.set_margin_top(4);

    let label = gtk::Label::new(Some(heading));
    label.add_css_class("heading");
    label.set_halign(gtk::Align::Start);
    label.set_margin_top(12);
    label.set_margin_start(12);
    frame.append(&label);

    column.append(&frame);
    frame
}

fn field(frame: &gtk::Box, placeholder: &str, purpose: gtk::InputPurpose) -> gtk::Entry {
    let entry = gtk::Entry::new();
    entry.set_placeholder_text(Some(placeholder));
    entry.set_input_purpose(purpose);
    entry.set_hexpand(true);
    entry.set_margin_start(12);
    entry.set_margin_end(12);
    entry.set_margin_bottom(12);
    frame.append(&entry);
    entry
}
