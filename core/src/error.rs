use ipdb_common::error::AddressError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    /// A host record carries an address the engine cannot use.
    #[error("host '{key}': {error}")]
    Address {
        key: String,
        #[source]
        error: AddressError,
    },
    /// The input is not shaped like fleet route records or a manifest.
    #[error("failed to decode input: {0}")]
    Decode(#[from] serde_json::Error),
}
