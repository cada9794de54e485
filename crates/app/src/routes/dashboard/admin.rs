use std::collections::BTreeSet;

use dioxus::prelude::*;
use shared_types::{mock_courses, UserRole, ALL_ROLES};

use super::{StaffDashboard, SummaryCard};

#[component]
pub fn AdminDashboard() -> Element {
    let courses = mock_courses();
    let instructors: BTreeSet<&str> = courses.iter().map(|c| c.teacher.as_str()).collect();
    let cards = vec![
        SummaryCard {
            label: "Courses",
            value: courses.len().to_string(),
        },
        SummaryCard {
            label: "Instructors",
            value: instructors.len().to_string(),
        },
        SummaryCard {
            label: "User Roles",
            value: ALL_ROLES.len().to_string(),
        },
    ];

    rsx! {
        StaffDashboard {
            title: "Admin Dashboard",
            role: UserRole::Admin,
            cards,
        }
    }
}
