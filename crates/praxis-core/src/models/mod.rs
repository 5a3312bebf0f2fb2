pub mod assignment;
pub mod client;
pub mod clinician;
pub mod practice;
pub mod report;
pub mod response;
pub mod template;
pub mod token_count;
