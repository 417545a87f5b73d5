use crate::utils::parse_age;

/// The payload handed from the form screen to the display screen. Lives
/// only for the duration of that hop; nothing stores it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub age: i32,
    pub address: String,
    pub occupation: String,
}

impl ContactRecord {
    pub fn from_inputs(
        first_name: &str,
        last_name: &str,
        phone_number: &str,
        email: &str,
        age: &str,
        address: &str,
        occupation: &str,
    ) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone_number: phone_number.to_string(),
            email: email.to_string(),
            age: parse_age(age),
            address: address.to_string(),
            occupation: occupation.to_string(),
        }
    }
}

/// Submit gate: all five required fields must be non-empty strings.
/// Age is only checked for presence here, not for being numeric.
pub fn required_filled(first: &str, last: &str, phone: &str, email: &str, age: &str) -> bool {
    !first.is_empty() && !last.is_empty() && !phone.is_empty() && !email.is_empty() && !age.is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem {
    pub id: &'static str,
    pub name: &'static str,
}

// Seed data for the entry screen list. Never mutated at runtime.
pub const ITEMS: &[ListItem] = &[
    ListItem { id: "1", name: "Dota 2" },
    ListItem { id: "2", name: "League of Legends" },
    ListItem { id: "3", name: "Counter-Strike: Global Offensive" },
    ListItem { id: "5", name: "Fortnite" },
    ListItem { id: "6", name: "Apex Legends" },
];

pub const MENU_OPTIONS: &[&str] = &["Profile", "Settings", "Logout"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_needs_every_required_field() {
        assert!(required_filled("Jane", "Doe", "555-1234", "j@x.com", "30"));
        assert!(!required_filled("", "Doe", "555-1234", "j@x.com", "30"));
        assert!(!required_filled("Jane", "", "555-1234", "j@x.com", "30"));
        assert!(!required_filled("Jane", "Doe", "", "j@x.com", "30"));
        assert!(!required_filled("Jane", "Doe", "555-1234", "", "30"));
        assert!(!required_filled("Jane", "Doe", "555-1234", "j@x.com", ""));
        assert!(!required_filled("", "", "", "", ""));
    }

    #[test]
    fn presence_is_not_trimmed() {
        // A lone space is a non-empty string and passes the gate.
        assert!(required_filled(" ", "Doe", "555-1234", "j@x.com", "30"));
    }

    #[test]
    fn optional_fields_pass_through_unmodified() {
        let record = ContactRecord::from_inputs(
            "Jane", "Doe", "555-1234", "j@x.com", "30", "10 Main St", "Engineer",
        );
        assert_eq!(
            record,
            ContactRecord {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                phone_number: "555-1234".into(),
                email: "j@x.com".into(),
                age: 30,
                address: "10 Main St".into(),
                occupation: "Engineer".into(),
            }
        );
    }

    #[test]
    fn unparsable_age_becomes_zero() {
        let record = ContactRecord::from_inputs("Jane", "Doe", "555-1234", "j@x.com", "abc", "", "");
        assert_eq!(record.age, 0);
        assert_eq!(record.address, "");
        assert_eq!(record.occupation, "");
    }

    #[test]
    fn seed_items_are_well_formed() {
        assert!(ITEMS.iter().any(|item| item.name == "Fortnite"));
        for (i, a) in ITEMS.iter().enumerate() {
            for b in &ITEMS[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate item id {}", a.id);
            }
        }
    }

    #[test]
    fn menu_has_three_fixed_options() {
        assert_eq!(MENU_OPTIONS, &["Profile", "Settings", "Logout"]);
    }
}
