// Salon Agenda Library
// Time-grid layout engine for appointment-based scheduling dashboards

pub mod models;
pub mod services;
pub mod utils;
