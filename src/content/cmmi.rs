//! CMMI demo catalog: compliance-flavoured requirements with REQ-numbered
//! curated items.

use crate::models::{BacklogItemSeed, EpicSeed, FeatureSeed};

pub(super) const TASK_TEMPLATES: &[(&str, &str)] = &[
    (
        "Requirements analysis",
        "Analyze and document detailed requirements",
    ),
    ("Design specification", "Create technical design specification"),
    ("Implementation", "Develop the solution"),
    ("Unit testing", "Create and execute unit tests"),
    ("Integration testing", "Perform integration testing"),
    ("Documentation", "Create technical and user documentation"),
    ("Code review", "Conduct peer code review"),
    ("Validation", "Validate against requirements"),
];

pub(super) fn epics(team: &str) -> Vec<EpicSeed> {
    if team == "Frontend" {
        vec![
            EpicSeed::new(
                "Compliance Dashboard Implementation",
                "Build comprehensive compliance and reporting dashboard",
                "Active",
            ),
            EpicSeed::new(
                "Audit Trail System",
                "Implement complete audit trail for all user actions",
                "Proposed",
            ),
            EpicSeed::new(
                "Accessibility Compliance",
                "Ensure WCAG 2.1 AA compliance across platform",
                "Active",
            ),
        ]
    } else {
        vec![
            EpicSeed::new(
                "Regulatory Compliance System",
                "Implement system for regulatory compliance tracking",
                "Active",
            ),
            EpicSeed::new(
                "Quality Assurance Framework",
                "Build comprehensive QA framework",
                "Proposed",
            ),
            EpicSeed::new(
                "Risk Management Platform",
                "Develop risk assessment and management system",
                "Active",
            ),
        ]
    }
}

pub(super) fn features(team: &str, epic_title: &str) -> Vec<FeatureSeed> {
    if team == "Frontend" {
        if epic_title.contains("Compliance Dashboard") {
            vec![
                FeatureSeed::new(
                    "Compliance Metrics Visualization",
                    "Display compliance metrics and KPIs",
                    "Active",
                ),
                FeatureSeed::new("Report Generation", "Generate compliance reports", "Proposed"),
                FeatureSeed::new(
                    "Real-time Monitoring",
                    "Monitor compliance status in real-time",
                    "Active",
                ),
            ]
        } else if epic_title.contains("Audit Trail") {
            vec![
                FeatureSeed::new("Action Logging", "Log all user actions", "Proposed"),
                FeatureSeed::new("Audit Search", "Search and filter audit logs", "Proposed"),
            ]
        } else {
            vec![
                FeatureSeed::new(
                    "Screen Reader Support",
                    "Full screen reader compatibility",
                    "Active",
                ),
                FeatureSeed::new(
                    "Keyboard Navigation",
                    "Complete keyboard navigation support",
                    "Active",
                ),
            ]
        }
    } else if epic_title.contains("Regulatory") {
        vec![
            FeatureSeed::new(
                "Compliance Rule Engine",
                "Build rule engine for compliance checks",
                "Active",
            ),
            FeatureSeed::new(
                "Regulatory Reporting",
                "Automated regulatory reporting",
                "Proposed",
            ),
        ]
    } else if epic_title.contains("Quality") {
        vec![
            FeatureSeed::new(
                "Automated Testing Framework",
                "Comprehensive test automation",
                "Proposed",
            ),
            FeatureSeed::new("Quality Metrics Dashboard", "Track quality metrics", "Proposed"),
        ]
    } else {
        vec![
            FeatureSeed::new("Risk Assessment Module", "Assess and score risks", "Active"),
            FeatureSeed::new(
                "Risk Mitigation Tracking",
                "Track risk mitigation efforts",
                "Active",
            ),
        ]
    }
}

pub(super) fn backlog_items(_team: &str, feature_title: &str) -> Option<Vec<BacklogItemSeed>> {
    if feature_title.contains("Compliance Metrics") {
        Some(vec![
            BacklogItemSeed::new(
                "REQ-001: Display compliance score",
                "System shall display overall compliance score based on all metrics",
                8,
                "Active",
            ),
            BacklogItemSeed::new(
                "REQ-002: Show trend analysis",
                "System shall show compliance trends over time",
                5,
                "Resolved",
            ),
            BacklogItemSeed::new(
                "REQ-003: Alert on threshold breach",
                "System shall alert when compliance falls below threshold",
                8,
                "Proposed",
            ),
        ])
    } else if feature_title.contains("Rule Engine") {
        Some(vec![
            BacklogItemSeed::new(
                "REQ-101: Configure compliance rules",
                "System shall allow configuration of compliance rules",
                13,
                "Active",
            ),
            BacklogItemSeed::new(
                "REQ-102: Execute rule validation",
                "System shall validate data against configured rules",
                8,
                "Active",
            ),
            BacklogItemSeed::new(
                "REQ-103: Log rule violations",
                "System shall log all rule violations",
                5,
                "Resolved",
            ),
        ])
    } else {
        None
    }
}
