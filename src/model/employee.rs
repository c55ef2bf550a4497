use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reference-table employee record (sprpersonal).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub tab_number: u32,
    pub full_name: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,

    pub position: Option<String>,
    pub category: Option<String>,
    pub qualification: Option<String>,

    pub hire_date: Option<NaiveDate>,
    pub department: Option<String>,
    pub shift: Option<String>,

    pub license_number: Option<String>,
    pub license_category: Option<String>,
    pub license_expiry: Option<NaiveDate>,

    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,

    pub is_active: bool,
    pub notes: Option<String>,
}

impl Employee {
    /// "№<tab> - <full name>" when a tab number is assigned.
    pub fn display_name(&self) -> String {
        if self.tab_number != 0 {
            format!("№{} - {}", self.tab_number, self.full_name)
        } else {
            self.full_name.clone()
        }
    }

    /// "Фамилия И.О." short form, falling back to the full name when the
    /// split parts are absent.
    pub fn short_name(&self) -> String {
        match (&self.last_name, &self.first_name) {
            (Some(last), Some(first)) => {
                let first_initial = first.chars().next().map(|c| c.to_string()).unwrap_or_default();
                match &self.middle_name {
                    Some(middle) => {
                        let middle_initial =
                            middle.chars().next().map(|c| c.to_string()).unwrap_or_default();
                        format!("{} {}.{}.", last, first_initial, middle_initial)
                    }
                    None => format!("{} {}.", last, first_initial),
                }
            }
            _ => self.full_name.clone(),
        }
    }

    pub fn is_driver(&self) -> bool {
        self.category
            .as_deref()
            .map(|c| c.to_lowercase().contains("водитель"))
            .unwrap_or(false)
    }

    pub fn is_conductor(&self) -> bool {
        self.category
            .as_deref()
            .map(|c| c.to_lowercase().contains("кондуктор"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> Employee {
        Employee {
            id: 1,
            tab_number: 1042,
            full_name: "Петренко Іван Олексійович".into(),
            last_name: Some("Петренко".into()),
            first_name: Some("Іван".into()),
            middle_name: Some("Олексійович".into()),
            category: Some("Водитель трамвая".into()),
            is_active: true,
            ..Default::default()
        }
    }

    #[test]
    fn display_and_short_names() {
        let e = employee();
        assert_eq!(e.display_name(), "№1042 - Петренко Іван Олексійович");
        assert_eq!(e.short_name(), "Петренко І.О.");

        let mut no_parts = e.clone();
        no_parts.first_name = None;
        assert_eq!(no_parts.short_name(), "Петренко Іван Олексійович");

        let mut no_middle = e;
        no_middle.middle_name = None;
        assert_eq!(no_middle.short_name(), "Петренко І.");
    }

    #[test]
    fn category_detection_is_case_insensitive() {
        let mut e = employee();
        assert!(e.is_driver());
        assert!(!e.is_conductor());
        e.category = Some("КОНДУКТОР".into());
        assert!(e.is_conductor());
        e.category = None;
        assert!(!e.is_driver());
    }
}
