use serde::Serialize;

#[derive(Clone, Eq, PartialEq, Serialize)]
pub struct ProvisionAddonResult {
    pub success: bool,
    pub message: String,
    /// Tenant connection string; `None` whenever provisioning failed.
    pub connection_string: Option<String>,
}

impl ProvisionAddonResult {
    pub fn succeeded(message: impl Into<String>, connection_string: String) -> Self {
        Self {
            success: true,
            message: message.into(),
            connection_string: Some(connection_string),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            connection_string: None,
        }
    }
}

impl std::fmt::Debug for ProvisionAddonResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvisionAddonResult")
            .field("success", &self.success)
            .field("message", &self.message)
            .field(
                "connection_string",
                &self.connection_string.as_ref().map(|_| "***"),
            )
            .finish()
    }
}
