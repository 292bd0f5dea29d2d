pub mod config;
pub mod explorer;
pub mod logging;
pub mod render;

pub use explorer::error::ExplorerError;
pub use explorer::membership::is_member_of;
pub use explorer::table::{PhaseBucket, ResultTable, Row, VersionCheck};
pub use explorer::{evaluate, evaluate_with, render_candidate_table};
pub use render::TableFormat;
