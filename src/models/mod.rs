//! Domain models for boardseed.
//!
//! # Core Concepts
//!
//! ## Remote-owned
//!
//! - [`WorkItemId`]: identity assigned by the tracking store; never invented
//!   locally.
//! - [`WorkItemKind`]: the four hierarchy levels and their deletion ranks.
//! - [`WorkItemSummary`]: the slice of a stored item cleanup works with.
//!
//! ## Requests
//!
//! - [`NewWorkItem`]: one creation call; desired state travels separately
//!   because the store only accepts default states at creation.
//! - [`FieldUpdate`]: one field assignment in an update call.
//!
//! ## Local
//!
//! - [`TeamConfig`]: a configured team (name, area path, iteration path).
//! - Seed records ([`EpicSeed`], [`FeatureSeed`], [`BacklogItemSeed`],
//!   [`TaskSeed`]): ephemeral desired-item values from a content provider,
//!   consumed once by the synchronizer.

mod seeds;
mod team;
mod work_item;

pub use seeds::*;
pub use team::*;
pub use work_item::*;
