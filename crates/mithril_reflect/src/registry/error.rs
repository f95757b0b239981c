use alloc::string::String;

/// Failure to record extra lookup keys in a [`TypeRegistry`](crate::registry::TypeRegistry).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The alias target was never registered.
    #[error("cannot alias `{alias}`: type `{type_path}` is not registered")]
    NotRegistered { alias: String, type_path: String },
    /// The alias already names another type, or is a registered type path.
    #[error("alias `{alias}` already resolves to `{existing}`")]
    AliasConflict { alias: String, existing: String },
}
