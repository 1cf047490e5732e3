pub mod close_approach;
pub mod constants;
mod conversion;
pub mod database;
pub mod extract;
pub mod neo;
pub mod neocad_errors;
pub mod serialize;
pub mod time;
pub mod write;

pub use close_approach::{ApproachRecord, CloseApproach};
pub use database::NeoDatabase;
pub use neo::{NearEarthObject, NeoRecord};
pub use neocad_errors::NeoCadError;
