pub mod assignments;
pub mod clients;
pub mod clinicians;
pub mod health;
pub mod reports;
pub mod settings;
pub mod templates;
