pub mod factory;
pub mod plugin;
pub mod registration;

pub use docgen_api::BoxError;
pub use factory::{NodeFactory, NodeResolver};
pub use plugin::{DocgenPlugin, PluginInfo};
pub use registration::FactoryDeclaration;
