use async_trait::async_trait;

use crate::addon::domain::model::{
    commands::addon_request::AddonRequest,
    results::{operation_result::OperationResult, provision_addon_result::ProvisionAddonResult},
};

/// The three add-on workflows. Failures are reported through the returned result;
/// none of these calls can fail at the type level.
#[async_trait]
pub trait MySqlAddonCommandService: Send + Sync {
    async fn handle_provision(&self, request: AddonRequest) -> ProvisionAddonResult;

    async fn handle_deprovision(&self, request: AddonRequest) -> OperationResult;

    async fn handle_test(&self, request: AddonRequest) -> OperationResult;
}
