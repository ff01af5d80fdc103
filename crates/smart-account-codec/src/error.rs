use thiserror::Error;

/// Wire codec errors.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("length overflow: {0}")]
    LengthOverflow(String),

    #[error("truncated buffer: {0}")]
    TruncatedBuffer(String),

    #[error("invalid item encoding: {0}")]
    InvalidItemEncoding(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl CodecError {
    /// Prefix a nested decode failure with the field being decoded.
    ///
    /// Truncation keeps its kind so a short read is still recognizable at
    /// any nesting depth; any other nested failure surfaces as
    /// `InvalidItemEncoding`.
    pub(crate) fn in_field(self, field: &str) -> CodecError {
        match self {
            CodecError::TruncatedBuffer(msg) => {
                CodecError::TruncatedBuffer(format!("{field}: {msg}"))
            }
            other => CodecError::InvalidItemEncoding(format!("{field}: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_length_overflow() {
        let err = CodecError::LengthOverflow("256 items".into());
        assert_eq!(err.to_string(), "length overflow: 256 items");
    }

    #[test]
    fn display_truncated_buffer() {
        let err = CodecError::TruncatedBuffer("need 8 bytes".into());
        assert_eq!(err.to_string(), "truncated buffer: need 8 bytes");
    }

    #[test]
    fn display_invalid_item_encoding() {
        let err = CodecError::InvalidItemEncoding("bad item".into());
        assert_eq!(err.to_string(), "invalid item encoding: bad item");
    }

    #[test]
    fn display_invalid_address() {
        let err = CodecError::InvalidAddress("base58 decode failed".into());
        assert_eq!(err.to_string(), "invalid address: base58 decode failed");
    }

    #[test]
    fn in_field_preserves_truncation_kind() {
        let err = CodecError::TruncatedBuffer("need 2 bytes at offset 0".into());
        let wrapped = err.in_field("data");
        assert!(matches!(wrapped, CodecError::TruncatedBuffer(_)));
        assert!(wrapped.to_string().contains("data:"));
    }

    #[test]
    fn in_field_wraps_other_kinds() {
        let err = CodecError::InvalidAddress("garbage".into());
        let wrapped = err.in_field("account_key");
        assert!(matches!(wrapped, CodecError::InvalidItemEncoding(_)));
        assert!(wrapped.to_string().contains("account_key"));
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> =
            Box::new(CodecError::TruncatedBuffer("test".into()));
        assert!(err.to_string().contains("test"));
    }
}
