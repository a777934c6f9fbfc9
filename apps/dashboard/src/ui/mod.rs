pub mod cards;
pub mod filters;
pub mod format;
pub mod kpi;
pub mod notifications;
pub mod performance;
pub mod queue;
pub mod urgent;
