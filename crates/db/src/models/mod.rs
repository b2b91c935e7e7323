pub mod education;
pub mod project;
pub mod stats;
