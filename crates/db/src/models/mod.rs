//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct for API responses (derived from a
//!   `FromRow` row struct where content columns need decoding)
//! - A `Deserialize` write DTO; updates replace all mutable fields, so
//!   create and update share a DTO where the field sets coincide

pub mod about;
pub mod category;
pub mod download;
pub mod main_card;
pub mod notice;
pub mod page_section;
pub mod portfolio;
