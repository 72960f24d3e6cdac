//! `clubsite` - The website of a college coding club
//!
//! Groups, projects, members and resources are read from JSON fixtures into an
//! immutable [`Catalog`] and rendered as HTML, either served over HTTP or
//! exported as a static tree. The projects page filters by group and free
//! text; the join form runs a simulated, cancellable submission.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod filter;
pub mod join;
pub mod logging;
pub mod model;
pub mod render;
pub mod server;

pub use config::Config;
pub use content::{Catalog, ContentSource, JsonFixtures, StaticContent};
pub use error::{Error, Result};
pub use filter::{filter_projects, GroupFilter, ProjectQuery};
pub use join::{JoinApplication, JoinForm, JoinStatus, SimulatedSubmitter, Submitter};
pub use logging::init_logging;
pub use render::Renderer;
