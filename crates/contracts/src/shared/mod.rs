pub mod page;
pub mod query;
pub mod responses;
