// Service module exports

pub mod backend;
pub mod drag;
pub mod grid;
pub mod interaction;
pub mod layout;
pub mod settings;
pub mod snapshot;
pub mod view_context;
