pub mod ical;
pub mod jscal;
