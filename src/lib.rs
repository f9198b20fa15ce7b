pub mod constants;
pub mod orrery;
pub mod orrery_errors;
pub mod planet;
pub mod time;
