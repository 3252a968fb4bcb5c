pub mod operation_result;
pub mod provision_addon_result;
