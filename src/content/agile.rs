//! Agile demo catalog: user-story flavoured content for two teams.

use crate::models::{BacklogItemSeed, EpicSeed, FeatureSeed};

pub(super) const TASK_TEMPLATES: &[(&str, &str)] = &[
    ("Design UI mockups", "Create wireframes and mockups"),
    ("Implement frontend", "Build user interface components"),
    ("Develop backend API", "Create supporting backend services"),
    ("Write tests", "Create unit and integration tests"),
    ("Review and refine", "Code review and improvements"),
];

pub(super) fn epics(team: &str) -> Vec<EpicSeed> {
    if team == "Frontend" {
        vec![
            EpicSeed::new(
                "Customer Experience Enhancement",
                "Improve overall customer experience across web and mobile platforms",
                "Active",
            ),
            EpicSeed::new(
                "Mobile First Initiative",
                "Redesign for mobile-first approach",
                "New",
            ),
            EpicSeed::new(
                "Performance Optimization",
                "Optimize application performance and loading times",
                "Active",
            ),
        ]
    } else {
        vec![
            EpicSeed::new(
                "Cloud Migration",
                "Migrate infrastructure to cloud-native services",
                "Active",
            ),
            EpicSeed::new(
                "Security Hardening",
                "Enhance security across all services",
                "New",
            ),
            EpicSeed::new(
                "Scalability Improvements",
                "Improve system scalability and reliability",
                "Active",
            ),
        ]
    }
}

pub(super) fn features(team: &str, epic_title: &str) -> Vec<FeatureSeed> {
    if team == "Frontend" {
        if epic_title.contains("Customer Experience") {
            vec![
                FeatureSeed::new(
                    "Personalized Homepage",
                    "Create personalized homepage based on user preferences",
                    "Active",
                ),
                FeatureSeed::new(
                    "Enhanced Search",
                    "Improve search with filters and suggestions",
                    "New",
                ),
                FeatureSeed::new("Streamlined Checkout", "Simplify checkout process", "Active"),
            ]
        } else if epic_title.contains("Mobile First") {
            vec![
                FeatureSeed::new(
                    "Responsive Design System",
                    "Build mobile-first design system",
                    "New",
                ),
                FeatureSeed::new(
                    "Touch Optimizations",
                    "Optimize UI for touch interactions",
                    "New",
                ),
            ]
        } else {
            vec![
                FeatureSeed::new(
                    "Code Splitting",
                    "Implement code splitting for faster load",
                    "Active",
                ),
                FeatureSeed::new("Image Optimization", "Optimize and lazy-load images", "Active"),
            ]
        }
    } else if epic_title.contains("Cloud Migration") {
        vec![
            FeatureSeed::new("Containerization", "Containerize all services", "Active"),
            FeatureSeed::new("Kubernetes Deployment", "Deploy to Kubernetes cluster", "New"),
        ]
    } else if epic_title.contains("Security") {
        vec![
            FeatureSeed::new(
                "Authentication Upgrade",
                "Implement modern auth standards",
                "New",
            ),
            FeatureSeed::new("Data Encryption", "Encrypt sensitive data at rest", "New"),
        ]
    } else {
        vec![
            FeatureSeed::new("Auto-Scaling", "Implement auto-scaling for services", "Active"),
            FeatureSeed::new("Load Balancing", "Improve load balancing strategy", "Active"),
        ]
    }
}

pub(super) fn backlog_items(_team: &str, feature_title: &str) -> Option<Vec<BacklogItemSeed>> {
    if feature_title.contains("Personalized Homepage") {
        Some(vec![
            BacklogItemSeed::new(
                "Display recommended products",
                "As a user, I want to see products recommended for me",
                8,
                "Active",
            ),
            BacklogItemSeed::new(
                "Show recent activity",
                "As a user, I want to see my recent browsing history",
                5,
                "Resolved",
            ),
            BacklogItemSeed::new(
                "Customize layout preferences",
                "As a user, I want to customize my homepage layout",
                13,
                "New",
            ),
        ])
    } else {
        None
    }
}
