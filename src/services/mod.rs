mod credential_store;

pub use credential_store::CredentialStore;

#[cfg(test)]
pub(crate) use credential_store::test_support;
