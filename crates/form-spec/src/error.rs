use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a screen config. Rendering never fails.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("failed to read screen config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse screen config: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to parse values: {0}")]
    Values(#[source] serde_json::Error),
    #[error("failed to encode values as JSON: {0}")]
    EncodeJson(#[source] serde_json::Error),
    #[error("failed to encode values as CBOR: {0}")]
    EncodeCbor(#[source] serde_cbor::Error),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn encode_errors_keep_their_source() {
        let json_err = serde_json::from_str::<u8>("x").unwrap_err();
        let error = FormError::EncodeJson(json_err);
        assert!(error.source().is_some());
        assert!(error.to_string().starts_with("failed to encode values as JSON"));

        let cbor_err = serde_cbor::from_slice::<u8>(&[0xff]).unwrap_err();
        let error = FormError::EncodeCbor(cbor_err);
        let source = error.source().expect("cbor source");
        assert!(source.downcast_ref::<serde_cbor::Error>().is_some());
    }
}
