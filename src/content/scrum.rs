//! Scrum demo catalog: two teams worth of epics, features, and curated
//! backlog items, plus the task template pool.

use crate::models::{BacklogItemSeed, EpicSeed, FeatureSeed};

pub(super) const TASK_TEMPLATES: &[(&str, &str)] = &[
    (
        "Create component/service structure",
        "Set up basic structure and dependencies",
    ),
    ("Implement core functionality", "Develop main business logic"),
    ("Add unit tests", "Write comprehensive unit tests"),
    ("Add integration tests", "Create integration test suite"),
    (
        "Code review and refactoring",
        "Review code and refactor as needed",
    ),
    ("Update documentation", "Document API/component usage"),
];

pub(super) fn epics(team: &str) -> Vec<EpicSeed> {
    if team == "Frontend" {
        vec![
            EpicSeed::new(
                "[UI] Legacy System Migration",
                "Complete migration from legacy PHP system to modern React-based architecture - COMPLETED",
                "Done",
            ),
            EpicSeed::new(
                "[UI] E-Commerce Platform Modernization",
                "Modernize the entire e-commerce platform with a new frontend architecture using React and improved backend APIs",
                "In Progress",
            ),
            EpicSeed::new(
                "[UI] Mobile App Development",
                "Develop native mobile applications for iOS and Android with feature parity to web application",
                "New",
            ),
            EpicSeed::new(
                "[UI] Analytics Dashboard",
                "Build comprehensive analytics and reporting dashboard for business insights",
                "New",
            ),
        ]
    } else {
        vec![
            EpicSeed::new(
                "[API] Infrastructure Modernization",
                "Migrate from on-premise infrastructure to Azure cloud services - COMPLETED",
                "Done",
            ),
            EpicSeed::new(
                "[API] Microservices Architecture Migration",
                "Migrate monolithic backend to microservices architecture for better scalability and maintainability",
                "In Progress",
            ),
            EpicSeed::new(
                "[API] Gateway Implementation",
                "Implement API Gateway with authentication, rate limiting, and monitoring capabilities",
                "New",
            ),
            EpicSeed::new(
                "[API] Data Platform Upgrade",
                "Upgrade data platform with improved caching, database optimization, and data analytics capabilities",
                "In Progress",
            ),
        ]
    }
}

pub(super) fn features(team: &str, epic_title: &str) -> Vec<FeatureSeed> {
    if team == "Frontend" {
        if epic_title.contains("Legacy System") {
            vec![
                FeatureSeed::new(
                    "[UI] Database Migration",
                    "Migrate from MySQL to PostgreSQL",
                    "In Progress",
                ),
                FeatureSeed::new(
                    "[UI] API Modernization",
                    "Convert REST endpoints to modern standards",
                    "In Progress",
                ),
                FeatureSeed::new(
                    "[UI] Component Library",
                    "Build reusable React component library",
                    "In Progress",
                ),
            ]
        } else if epic_title.contains("E-Commerce") {
            vec![
                FeatureSeed::new(
                    "[UI] Product Catalog Redesign",
                    "Redesign the product catalog interface with improved search, filtering, and responsive design",
                    "In Progress",
                ),
                FeatureSeed::new(
                    "[UI] Shopping Cart Enhancement",
                    "Enhance shopping cart with real-time updates, saved carts, and guest checkout",
                    "New",
                ),
                FeatureSeed::new(
                    "[UI] Checkout Flow Optimization",
                    "Streamline checkout process to reduce cart abandonment",
                    "New",
                ),
                FeatureSeed::new(
                    "[UI] User Account Dashboard",
                    "Create comprehensive user account management interface",
                    "In Progress",
                ),
            ]
        } else if epic_title.contains("Mobile App") {
            vec![
                FeatureSeed::new(
                    "[UI] Mobile Navigation System",
                    "Implement bottom tab navigation and drawer menu for mobile apps",
                    "New",
                ),
                FeatureSeed::new(
                    "[UI] Push Notifications",
                    "Enable push notifications for orders, promotions, and updates",
                    "New",
                ),
                FeatureSeed::new(
                    "[UI] Offline Mode Support",
                    "Allow basic browsing and cart management in offline mode",
                    "New",
                ),
            ]
        } else {
            vec![
                FeatureSeed::new(
                    "[UI] Sales Analytics Visualization",
                    "Create interactive charts and graphs for sales data",
                    "New",
                ),
                FeatureSeed::new(
                    "[UI] Customer Insights Dashboard",
                    "Build dashboard showing customer behavior and trends",
                    "New",
                ),
            ]
        }
    } else if epic_title.contains("Infrastructure Modernization") {
        vec![
            FeatureSeed::new("[API] Azure Migration", "Migrate all services to Azure", "In Progress"),
            FeatureSeed::new(
                "[API] Monitoring Setup",
                "Configure Application Insights and monitoring",
                "In Progress",
            ),
            FeatureSeed::new(
                "[API] CI/CD Pipeline",
                "Setup automated deployment pipelines",
                "In Progress",
            ),
        ]
    } else if epic_title.contains("Microservices") {
        vec![
            FeatureSeed::new(
                "[API] Order Service Extraction",
                "Extract order processing into dedicated microservice",
                "In Progress",
            ),
            FeatureSeed::new(
                "[API] Product Catalog Service",
                "Create independent product catalog microservice with caching",
                "In Progress",
            ),
            FeatureSeed::new(
                "[API] User Service Implementation",
                "Build user management and authentication microservice",
                "New",
            ),
            FeatureSeed::new(
                "[API] Payment Service Integration",
                "Develop payment processing microservice with multiple provider support",
                "New",
            ),
        ]
    } else if epic_title.contains("Gateway") {
        vec![
            FeatureSeed::new(
                "[API] Authentication & Authorization",
                "Implement JWT-based auth with OAuth2 support",
                "New",
            ),
            FeatureSeed::new(
                "[API] Rate Limiting & Throttling",
                "Add configurable rate limiting per client/endpoint",
                "New",
            ),
            FeatureSeed::new(
                "[API] Monitoring & Logging",
                "Implement comprehensive logging and monitoring solution",
                "New",
            ),
        ]
    } else {
        vec![
            FeatureSeed::new(
                "[API] Redis Caching Layer",
                "Implement distributed caching with Redis",
                "In Progress",
            ),
            FeatureSeed::new(
                "[API] Database Performance Optimization",
                "Optimize queries and add appropriate indexes",
                "In Progress",
            ),
            FeatureSeed::new(
                "[API] Data Warehouse Integration",
                "Set up data pipeline to analytics warehouse",
                "New",
            ),
        ]
    }
}

pub(super) fn backlog_items(team: &str, feature_title: &str) -> Option<Vec<BacklogItemSeed>> {
    if feature_title.contains("Database Migration") {
        Some(vec![
            BacklogItemSeed::new(
                "[UI] Setup PostgreSQL Database",
                "Configure PostgreSQL instance in Azure",
                5,
                "Done",
            ),
            BacklogItemSeed::new(
                "[UI] Migrate User Tables",
                "Migrate user and authentication tables",
                8,
                "Done",
            ),
            BacklogItemSeed::new(
                "[UI] Migrate Product Data",
                "Migrate product catalog and inventory",
                13,
                "Done",
            ),
        ])
    } else if feature_title.contains("API Modernization") {
        Some(vec![
            BacklogItemSeed::new(
                "[UI] Standardize Response Format",
                "Implement consistent JSON response structure",
                5,
                "Done",
            ),
            BacklogItemSeed::new(
                "[UI] Add API Versioning",
                "Implement API versioning strategy",
                8,
                "Done",
            ),
        ])
    } else if feature_title.contains("Component Library") {
        Some(vec![
            BacklogItemSeed::new(
                "[UI] Create Button Components",
                "Build reusable button components",
                3,
                "Done",
            ),
            BacklogItemSeed::new(
                "[UI] Create Form Components",
                "Build input, select, and form controls",
                8,
                "Done",
            ),
            BacklogItemSeed::new(
                "[UI] Create Layout Components",
                "Build grid, container, and layout utilities",
                5,
                "Done",
            ),
        ])
    } else if feature_title.contains("Azure Migration") {
        Some(vec![
            BacklogItemSeed::new(
                "[API] Provision Azure Resources",
                "Setup resource groups and services",
                8,
                "Done",
            ),
            BacklogItemSeed::new(
                "[API] Migrate Application Servers",
                "Move app servers to Azure App Service",
                13,
                "Done",
            ),
            BacklogItemSeed::new(
                "[API] Configure Networking",
                "Setup VNets and security groups",
                5,
                "Done",
            ),
        ])
    } else if feature_title.contains("Monitoring Setup") {
        Some(vec![
            BacklogItemSeed::new(
                "[API] Configure Application Insights",
                "Setup telemetry and logging",
                5,
                "Done",
            ),
            BacklogItemSeed::new("[API] Create Dashboards", "Build monitoring dashboards", 3, "Done"),
        ])
    } else if feature_title.contains("CI/CD Pipeline") {
        Some(vec![
            BacklogItemSeed::new(
                "[API] Setup Azure DevOps Pipeline",
                "Configure build and release pipelines",
                8,
                "Done",
            ),
            BacklogItemSeed::new(
                "[API] Implement Automated Testing",
                "Add automated tests to pipeline",
                5,
                "Done",
            ),
        ])
    } else if team == "Frontend" && feature_title.contains("Product Catalog") {
        Some(vec![
            BacklogItemSeed::new(
                "[UI] Implement Product Card Component",
                "As a customer, I want to see product information in an attractive card format\n\nAcceptance Criteria:\n- Card displays image, name, price, rating\n- Responsive design\n- Hover effects",
                8,
                "Done",
            ),
            BacklogItemSeed::new(
                "[UI] Add Advanced Filtering",
                "As a customer, I want to filter products by multiple criteria",
                13,
                "Committed",
            ),
            BacklogItemSeed::new(
                "[UI] Implement Search Autocomplete",
                "As a customer, I want search suggestions as I type",
                5,
                "Approved",
            ),
            BacklogItemSeed::new(
                "[UI] Add Product Comparison Feature",
                "As a customer, I want to compare multiple products side-by-side",
                8,
                "New",
            ),
        ])
    } else if team == "Backend" && feature_title.contains("Order Service") {
        Some(vec![
            BacklogItemSeed::new(
                "[API] Create Order Processing API",
                "Implement RESTful API for order creation and management",
                13,
                "Committed",
            ),
            BacklogItemSeed::new(
                "[API] Order Status Tracking",
                "Implement order status updates and notifications",
                8,
                "Committed",
            ),
            BacklogItemSeed::new(
                "[API] Order Validation Logic",
                "Add comprehensive validation for order data",
                5,
                "Done",
            ),
        ])
    } else {
        None
    }
}
