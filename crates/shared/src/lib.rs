pub mod domain;
pub mod error;
pub mod forms;
pub mod protocol;
