//! Route handlers organized by resource

pub mod accounts;
pub mod assets;
pub mod events;
pub mod health;
pub mod images;
pub mod persons;
pub mod tagging;
