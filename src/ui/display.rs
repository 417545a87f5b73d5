use gtk4::prelude::*;
use gtk4 as gtk;

use crate::model::ContactRecord;

/// Read-only view of whatever record the form handed over. Values are
/// rendered as plain text; rows stay empty until a record arrives.
pub struct DisplayScreen {
    root: gtk::ScrolledWindow,
    first_name: gtk::Label,
    last_name: gtk::Label,
    age: gtk::Label,
    occupation: gtk::Label,
    phone_number: gtk::Label,
    email: gtk::Label,
    address: gtk::Label,
}

impl DisplayScreen {
    pub fn new(stack: &gtk::Stack) -> Self {
        let column = gtk::Box::new(gtk::Orientation::Vertical, 12);
        column.set_margin_top(16);
        column.set_margin_bottom(16);
        column.set_margin_start(16);
        column.set_margin_end(16);

        let title = gtk::Label::new(Some("Contact Summary"));
        title.add_css_class("title-2");
        column.append(&title);

        let subtitle = gtk::Label::new(Some("Received contact information"));
        subtitle.add_css_class("dim-label");
        column.append(&subtitle);

        let personal = section(&column, "Personal Information");
        let first_name = info_row(&personal, "First Name");
        let last_name = info_row(&personal, "Last Name");
        let age = info_row(&personal, "Age");
        let occupation = info_row(&personal, "Occupation");

        let contact = section(&column, "Contact Information");
        let phone_number = info_row(&contact, "Phone Number");
        let email = info_row(&contact, "Email");
        let address = info_row(&contact, "Address");

        let back = gtk::Button::with_label("Go Back");
        back.add_css_class("suggested-action");
        {
            let stack = stack.clone();
            back.connect_clicked(move |_| {
                stack.set_visible_child_name(super::PAGE_FORM);
            });
        }
        column.append(&back);

        let root = gtk::ScrolledWindow::builder()
            .hscrollbar_policy(gtk::PolicyType::Never)
            .vexpand(true)
            .build();
        root.set_child(Some(&column));

        Self {
            root,
            first_name,
            last_name,
            age,
            occupation,
            phone_number,
            email,
            address,
        }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn set_record(&self, record: &ContactRecord) {
        self.first_name.set_text(&record.first_name);
        self.last_name.set_text(&record.last_name);
        self.age.set_text(&record.age.to_string());
        self.occupation.set_text(&record.occupation);
        self.phone_number.set_text(&record.phone_number);
        self.email.set_text(&record.email);
        self.address.set_text(&record.address);
    }
}

fn section(column: &gtk::Box, heading: &str) -> gtk::Box {
    let frame = gtk::Box::new(gtk::Orientation::Vertical, 4);
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

fn info_row(frame: &gtk::Box, name: &str) -> gtk::Label {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    row.set_margin_start(12);
    row.set_margin_end(12);
    row.set_margin_bottom(8);

    let name_label = gtk::Label::new(Some(name));
    name_label.add_css_class("dim-label");
    name_label.set_width_chars(14);
    name_label.set_xalign(0.0);
    name_label.set_valign(gtk::Align::Start);
    row.append(&name_label);

    let value = gtk::Label::new(None);
    value.set_xalign(0.0);
    value.set_hexpand(true);
    value.set_wrap(true);
    value.set_selectable(true);
    row.append(&value);

    frame.append(&row);
    value
}
