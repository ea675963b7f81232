pub mod org_manager;
pub mod organization;
