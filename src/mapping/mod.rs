pub mod builder;
pub mod tags;

pub use builder::build_project;
pub use tags::parse_tags;
