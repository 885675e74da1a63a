pub mod uid;
pub mod validate;
