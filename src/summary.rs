//! Confirmation summary: submitted values projected into fixed sections

use crate::state::{names, FormData};

/// Placeholder for fields left empty
pub const NOT_PROVIDED: &str = "Not provided";

struct SectionLayout {
    title: &'static str,
    fields: &'static [(&'static str, &'static str)],
}

const LAYOUT: &[SectionLayout] = &[
    SectionLayout {
        title: "Personal Information",
        fields: &[
            (names::FIRST_NAME, "First Name"),
            (names::LAST_NAME, "Last Name"),
            (names::DATE_OF_BIRTH, "Date of Birth"),
            (names::GENDER, "Gender"),
        ],
    },
    SectionLayout {
        title: "Contact Information",
        fields: &[
            (names::EMAIL, "Email"),
            (names::PHONE, "Phone"),
            (names::ADDRESS, "Address"),
        ],
    },
    SectionLayout {
        title: "Academic Information",
        fields: &[
            (names::COURSE, "Course"),
            (names::ACADEMIC_YEAR, "Academic Year"),
            (names::PREVIOUS_EDUCATION, "Previous Education"),
        ],
    },
    SectionLayout {
        title: "Emergency Contact",
        fields: &[
            (names::EMERGENCY_NAME, "Contact Name"),
            (names::EMERGENCY_PHONE, "Contact Phone"),
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub title: &'static str,
    pub items: Vec<SummaryItem>,
}

/// Human-readable projection of a registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub sections: Vec<SummarySection>,
}

impl Summary {
    pub fn from_data(data: &FormData) -> Self {
        let sections = LAYOUT
            .iter()
            .map(|layout| SummarySection {
                title: layout.title,
                items: layout
                    .fields
                    .iter()
                    .map(|&(key, label)| SummaryItem {
                        label,
                        value: data
                            .get(key)
                            .filter(|v| !v.is_empty())
                            .cloned()
                            .unwrap_or_else(|| NOT_PROVIDED.to_string()),
                    })
                    .collect(),
            })
            .collect();
        Self { sections }
    }

    /// Printable rendition with a heading block
    pub fn to_plain_text(&self, id: &str, date: &str) -> String {
        let mut out = String::new();
        out.push_str("Student Registration\n");
        out.push_str(&format!("Registration ID: {id}\n"));
        out.push_str(&format!("Registered: {date}\n"));

        let label_width = self
            .sections
            .iter()
            .flat_map(|s| s.items.iter())
            .map(|i| i.label.len())
            .max()
            .unwrap_or(0);

        for section in &self.sections {
            out.push('\n');
            out.push_str(section.title);
            out.push('\n');
            out.push_str(&"-".repeat(section.title.len()));
            out.push('\n');
            for item in &section.items {
                out.push_str(&format!(
                    "{:<width$}  {}\n",
                    item.label,
                    item.value,
                    width = label_width
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_four_sections_in_order() {
        let summary = Summary::from_data(&FormData::new());
        let titles: Vec<_> = summary.sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Personal Information",
                "Contact Information",
                "Academic Information",
                "Emergency Contact"
            ]
        );
    }

    #[test]
    fn test_missing_and_empty_values_render_placeholder() {
        let data = FormData::from([
            (names::FIRST_NAME.to_string(), "Ada".to_string()),
            (names::GENDER.to_string(), String::new()),
        ]);
        let summary = Summary::from_data(&data);
        let personal = &summary.sections[0];

        assert_eq!(
            personal.items,
            vec![
                SummaryItem {
                    label: "First Name",
                    value: "Ada".to_string()
                },
                SummaryItem {
                    label: "Last Name",
                    value: NOT_PROVIDED.to_string()
                },
                SummaryItem {
                    label: "Date of Birth",
                    value: NOT_PROVIDED.to_string()
                },
                SummaryItem {
                    label: "Gender",
                    value: NOT_PROVIDED.to_string()
                },
            ]
        );
    }

    #[test]
    fn test_emergency_labels() {
        let data = FormData::from([(names::EMERGENCY_PHONE.to_string(), "(555) 123-4567".to_string())]);
        let summary = Summary::from_data(&data);
        let emergency = &summary.sections[3];
        assert_eq!(emergency.items[0].label, "Contact Name");
        assert_eq!(emergency.items[1].value, "(555) 123-4567");
    }

    #[test]
    fn test_plain_text() {
        let data = FormData::from([(names::COURSE.to_string(), "Data Science".to_string())]);
        let text = Summary::from_data(&data).to_plain_text("STU20260007", "today");

        assert!(text.starts_with("Student Registration\nRegistration ID: STU20260007\n"));
        assert!(text.contains("Academic Information\n--------------------\n"));
        assert!(text.contains("Course"));
        assert!(text.contains("Data Science"));
        assert!(text.contains(NOT_PROVIDED));
    }
}
