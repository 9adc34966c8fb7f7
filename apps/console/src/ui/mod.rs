pub mod delete_modal;
pub mod filters;
pub mod notifications;
pub mod reports;
pub mod stats;
pub mod table;
