pub mod archive;
pub mod compose;
pub mod edit;
pub mod reset;
pub mod schedule;
