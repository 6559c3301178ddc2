mod staged;

pub use staged::{GitIndex, StagedFiles};

#[cfg(test)]
#[path = "staged_tests.rs"]
mod tests;
