//! Fixed option lists for the select fields

pub const GENDERS: &[&str] = &["Male", "Female", "Other", "Prefer not to say"];

pub const ACADEMIC_YEARS: &[&str] = &[
    "First Year",
    "Second Year",
    "Third Year",
    "Fourth Year",
    "Graduate",
];

pub const COURSES: &[&str] = &[
    "Computer Science",
    "Information Technology",
    "Software Engineering",
    "Data Science",
    "Cybersecurity",
    "Web Development",
    "Mobile App Development",
    "AI/Machine Learning",
];

pub const EDUCATION_LEVELS: &[&str] = &[
    "High School",
    "Associate Degree",
    "Bachelor's Degree",
    "Master's Degree",
    "Doctorate",
];

/// Academic year that restricts the course list
pub const GRADUATE_YEAR: &str = "Graduate";

const GRADUATE_COURSE_MARKERS: &[&str] = &["AI/Machine Learning", "Data Science", "Cybersecurity"];

/// Courses offered for an academic year
pub fn courses_for_year(academic_year: &str) -> Vec<String> {
    COURSES
        .iter()
        .filter(|course| {
            academic_year != GRADUATE_YEAR
                || GRADUATE_COURSE_MARKERS
                    .iter()
                    .any(|marker| course.contains(marker))
        })
        .map(|course| course.to_string())
        .collect()
}

/// Convert a static list into owned options
pub fn to_options(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undergraduate_gets_every_course() {
        assert_eq!(courses_for_year("First Year").len(), COURSES.len());
        assert_eq!(courses_for_year("").len(), COURSES.len());
    }

    #[test]
    fn test_graduate_courses() {
        assert_eq!(
            courses_for_year("Graduate"),
            vec!["Data Science", "Cybersecurity", "AI/Machine Learning"]
        );
    }
}
