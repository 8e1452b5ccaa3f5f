// Module exports for models

pub mod event;
pub mod grid;
pub mod professional;
pub mod settings;
pub mod status;
