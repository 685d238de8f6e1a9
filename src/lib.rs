//! Demo backlog seeding for Azure DevOps projects.
//!
//! boardseed fills a project with a realistic work item hierarchy (epics,
//! features, backlog items, tasks) for demos and training, simulates a few
//! sprints of history, and can sweep everything away again. Runs are
//! idempotent: items are identified by title and area path, and whatever
//! already exists is left alone.

pub mod cleanup;
pub mod config;
pub mod content;
pub mod models;
pub mod remote;
pub mod sync;
