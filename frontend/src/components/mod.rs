//! UI components.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with wallet connection
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`ProfileList`] - Profiles rebuilt from chain events
//! - [`CreateProfileForm`] - Signs and submits `creat_profile`
//! - [`LogsPanel`] - Activity log

mod header;
mod hero;
mod profile_list;
mod create_profile;
mod footer;
mod logs;

pub use header::*;
pub use hero::*;
pub use profile_list::*;
pub use create_profile::*;
pub use footer::*;
pub use logs::*;
