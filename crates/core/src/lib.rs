pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod registry;
pub mod render;
pub mod report;
pub mod site;

pub use config::SiteConfig;
pub use error::{DocgenError, Result};
pub use output::{WriteMode, write_folder};
pub use registry::{FactoryEntry, FactoryRegistry};
pub use report::ErrorReport;
pub use site::{SiteBuilder, SiteGenerator, SiteIndex};
