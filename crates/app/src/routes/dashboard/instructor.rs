use dioxus::prelude::*;
use shared_types::{average_percent, mock_courses, UserRole};

use super::{StaffDashboard, SummaryCard};

/// Instructor landing page after sign-in.
#[component]
pub fn InstructorDashboard() -> Element {
    let courses = mock_courses();
    let cards = vec![
        SummaryCard {
            label: "Active Courses",
            value: courses.len().to_string(),
        },
        SummaryCard {
            label: "Average Progress",
            value: format!("{}%", average_percent(&courses, |c| c.progress)),
        },
        SummaryCard {
            label: "Average Attendance",
            value: format!("{}%", average_percent(&courses, |c| c.attendance)),
        },
    ];

    rsx! {
        StaffDashboard {
            title: "Instructor Dashboard",
            role: UserRole::Instructor,
            cards,
        }
    }
}
