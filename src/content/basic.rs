//! Basic demo catalog: the smallest template, everything is To Do/Doing/Done.

use crate::models::{BacklogItemSeed, EpicSeed, FeatureSeed};

pub(super) const TASK_TEMPLATES: &[(&str, &str)] = &[
    ("Setup", "Initial setup and configuration"),
    ("Implementation", "Core implementation work"),
    ("Testing", "Test the implementation"),
    ("Documentation", "Update documentation"),
];

pub(super) fn epics(team: &str) -> Vec<EpicSeed> {
    if team == "Frontend" {
        vec![
            EpicSeed::new("Website Redesign", "Complete redesign of company website", "Doing"),
            EpicSeed::new("Mobile App Launch", "Launch new mobile application", "To Do"),
        ]
    } else {
        vec![
            EpicSeed::new("API Development", "Build RESTful API for platform", "Doing"),
            EpicSeed::new("Infrastructure Setup", "Set up cloud infrastructure", "To Do"),
        ]
    }
}

pub(super) fn features(_team: &str, epic_title: &str) -> Vec<FeatureSeed> {
    if epic_title.contains("Website Redesign") {
        vec![
            FeatureSeed::new("Homepage Redesign", "Update homepage with new design", "Doing"),
            FeatureSeed::new("Navigation Update", "Improve site navigation", "To Do"),
            FeatureSeed::new("Footer Refresh", "Update footer section", "Done"),
        ]
    } else if epic_title.contains("API Development") {
        vec![
            FeatureSeed::new("User Endpoints", "Create user management endpoints", "Doing"),
            FeatureSeed::new("Product Endpoints", "Create product management endpoints", "To Do"),
        ]
    } else {
        vec![
            FeatureSeed::new(&format!("{epic_title} - Phase 1"), "Initial phase", "To Do"),
            FeatureSeed::new(&format!("{epic_title} - Phase 2"), "Second phase", "To Do"),
        ]
    }
}

pub(super) fn backlog_items(_team: &str, feature_title: &str) -> Option<Vec<BacklogItemSeed>> {
    if feature_title.contains("Homepage") {
        Some(vec![
            BacklogItemSeed::new(
                "Update hero section",
                "Redesign hero section with new branding",
                5,
                "Done",
            ),
            BacklogItemSeed::new(
                "Add featured products section",
                "Display featured products on homepage",
                8,
                "Doing",
            ),
            BacklogItemSeed::new(
                "Implement testimonials carousel",
                "Add customer testimonials",
                5,
                "To Do",
            ),
        ])
    } else {
        None
    }
}
