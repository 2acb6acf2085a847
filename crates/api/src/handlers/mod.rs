//! HTTP handler functions, one module per content surface.
//!
//! Handlers hold the service-layer rules (category referential checks,
//! notice view counting, bulk-payload shape checks); everything below
//! them is plain repository CRUD.

pub mod about;
pub mod categories;
pub mod downloads;
pub mod main_cards;
pub mod notices;
pub mod page_sections;
pub mod portfolio;
