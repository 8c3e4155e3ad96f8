pub mod builder;
pub mod paths;

pub use builder::DependencyTree;
pub use paths::enumerate_paths;
