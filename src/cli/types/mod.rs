//! Type-safe wrappers and enums for NFL stats data.

pub mod category;
pub mod division;
pub mod format;
pub mod ids;
pub mod position;
pub mod team;
pub mod time;

pub use category::StatCategory;
pub use division::{Conference, Division};
pub use format::ExportFormat;
pub use ids::PlayerId;
pub use position::Position;
pub use team::TeamAbbr;
pub use time::Season;
