use serde::{Deserialize, Serialize};

/// A course the student is enrolled in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: u32,
    pub name: String,
    pub teacher: String,
    /// Completion, in percent.
    pub progress: u8,
    /// Sessions attended, in percent.
    pub attendance: u8,
}

impl Course {
    fn new(id: u32, name: &str, teacher: &str, progress: u8, attendance: u8) -> Self {
        Self {
            id,
            name: name.to_string(),
            teacher: teacher.to_string(),
            progress,
            attendance,
        }
    }
}

/// Placeholder enrollment list. Built fresh on every call and never tied to
/// the signed-in user.
pub fn mock_courses() -> Vec<Course> {
    vec![
        Course::new(1, "AI Powered Learning", "Dr. Fariha", 65, 90),
        Course::new(2, "Interactive Video Ecosystem", "Mr. Ali", 40, 85),
        Course::new(3, "Web Development", "Ms. Sara", 80, 95),
    ]
}

/// Clamp a percentage to 0..=100.
pub fn clamp_percent(value: u8) -> u8 {
    value.min(100)
}

/// CSS width for a progress bar fill.
pub fn percent_width(value: u8) -> String {
    format!("{}%", clamp_percent(value))
}

/// Mean of a percentage field across courses, rounded down. Zero for an empty list.
pub fn average_percent(courses: &[Course], field: impl Fn(&Course) -> u8) -> u8 {
    if courses.is_empty() {
        return 0;
    }
    let total: u32 = courses.iter().map(|c| u32::from(clamp_percent(field(c)))).sum();
    (total / courses.len() as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mock_courses_are_stable() {
        assert_eq!(mock_courses(), mock_courses());
        assert_eq!(mock_courses().len(), 3);
    }

    #[test]
    fn mock_course_ids_are_unique() {
        let mut ids: Vec<u32> = mock_courses().iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn percent_width_clamps() {
        assert_eq!(percent_width(65), "65%");
        assert_eq!(percent_width(0), "0%");
        assert_eq!(percent_width(250), "100%");
    }

    #[test]
    fn average_progress_of_mock_courses() {
        let courses = mock_courses();
        // (65 + 40 + 80) / 3 = 61
        assert_eq!(average_percent(&courses, |c| c.progress), 61);
        // (90 + 85 + 95) / 3 = 90
        assert_eq!(average_percent(&courses, |c| c.attendance), 90);
    }

    #[test]
    fn average_of_empty_list_is_zero() {
        assert_eq!(average_percent(&[], |c| c.progress), 0);
    }
}
