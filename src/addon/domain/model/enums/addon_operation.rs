#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddonOperation {
    Provision,
    Deprovision,
    Test,
}

impl AddonOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provision => "provision",
            Self::Deprovision => "deprovision",
            Self::Test => "test",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Provision => "Successfully created a MySQL database.",
            Self::Deprovision => "Successfully removed a MySQL database.",
            Self::Test => "Successfully created and removed a MySQL database.",
        }
    }
}
