//! CLI command modules

pub mod activities;
pub mod serve;

pub use activities::{execute_activities_command, ActivitiesArgs};
pub use serve::{execute_serve_command, ServeArgs};
