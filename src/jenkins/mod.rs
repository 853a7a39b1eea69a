pub mod jenkins_model;
pub mod query;
pub mod util;
