pub mod employee;
pub mod employment_status;
pub mod job_title;
pub mod settings;
