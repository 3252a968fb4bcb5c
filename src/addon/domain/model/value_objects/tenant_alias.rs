use crate::addon::domain::model::enums::addon_domain_error::AddonDomainError;

lazy_static::lazy_static! {
    static ref TENANT_ALIAS_REGEX: regex::Regex =
        regex::Regex::new("^[A-Za-z0-9_]{1,64}$").expect("valid regex");
}

/// One half of a tenant identity: a team alias or an instance alias.
///
/// Aliases are spliced unquoted into DDL, so only `[A-Za-z0-9_]` is accepted.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TenantAlias(String);

impl TenantAlias {
    pub fn new(value: String) -> Result<Self, AddonDomainError> {
        if !TENANT_ALIAS_REGEX.is_match(&value) {
            return Err(AddonDomainError::InvalidTenantIdentity(format!(
                "alias '{value}' must match [A-Za-z0-9_] with length 1..64"
            )));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
