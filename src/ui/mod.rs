pub mod chrome;
pub mod composer;
pub mod event;
pub mod transcript;
