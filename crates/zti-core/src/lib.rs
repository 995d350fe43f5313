//! # zti-core
//!
//! Tag resolution and inventory building for ZeroTier networks.
//!
//! The controller reports member tags as numeric `(tag id, enum id)` pairs.
//! This crate turns the network's tag schema and a flat member list into a
//! two-level group hierarchy (`tag -> enum value -> hosts`):
//! - [`schema`] re-keys the controller's tag schema by id and inverts enum maps
//! - [`eligibility`] drops hidden, unauthorized, and unaddressed members
//! - [`resolve`] maps tag pairs to group names, skipping unknown pairs
//! - [`builder`] drives an [`InventorySink`] from the resolved groups
//! - [`inventory`] provides the in-memory sink and its Ansible JSON rendering

pub mod builder;
pub mod eligibility;
pub mod errors;
pub mod inventory;
pub mod member;
pub mod resolve;
pub mod schema;

pub use builder::{BuildOptions, BuildReport, build, build_with_options};
pub use eligibility::is_eligible;
pub use errors::CoreError;
pub use inventory::{Group, Inventory, InventorySink};
pub use member::Member;
pub use resolve::{ResolvedGroup, resolve};
pub use schema::{TagSchema, TagSchemaEntry, normalize};
