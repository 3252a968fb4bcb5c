pub mod addon_domain_error;
pub mod addon_operation;
