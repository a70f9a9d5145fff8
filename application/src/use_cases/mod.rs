//! Use cases (application services)

pub mod resolve_function;
pub mod update_track_table;
