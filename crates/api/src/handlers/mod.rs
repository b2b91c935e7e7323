pub mod education;
pub mod project;
pub mod resume;
pub mod stats;
