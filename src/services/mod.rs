pub mod completion;
pub mod prompt;
pub mod secrets;
pub mod summary;
