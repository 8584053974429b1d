//! File encoding for upload. The raw bytes come from the platform file
//! picker; everything here is deterministic and allocation-only.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::FileReadError;
use crate::types::FilePayload;

/// Extensions the upload zone accepts, mirrored in the sidebar hint.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.txt,.md,.doc,.docx";

/// Encode raw file bytes into the payload shipped to the provider.
///
/// The MIME type is taken from the file name, not sniffed from content;
/// a mismatch surfaces as a provider error, not a local one.
pub fn encode_file(name: &str, bytes: &[u8]) -> Result<FilePayload, FileReadError> {
    if bytes.is_empty() {
        return Err(FileReadError::EmptyFile);
    }

    Ok(FilePayload {
        name: name.to_string(),
        mime_type: mime_for_name(name).to_string(),
        data: STANDARD.encode(bytes),
    })
}

/// Declared MIME type for an uploaded file name. The file picker on this
/// platform exposes no type metadata, so the extension stands in for it.
pub fn mime_for_name(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_rejected() {
        let err = encode_file("notes.txt", &[]).unwrap_err();
        assert!(matches!(err, FileReadError::EmptyFile));
    }

    #[test]
    fn encodes_standard_base64() {
        let payload = encode_file("brief.txt", b"quarterly planning").unwrap();
        assert_eq!(payload.name, "brief.txt");
        assert_eq!(payload.mime_type, "text/plain");
        assert_eq!(payload.data, "cXVhcnRlcmx5IHBsYW5uaW5n");
    }

    #[test]
    fn mime_mapping_covers_accepted_extensions() {
        assert_eq!(mime_for_name("a.pdf"), "application/pdf");
        assert_eq!(mime_for_name("a.MD"), "text/markdown");
        assert!(mime_for_name("a.docx").starts_with("application/vnd.openxmlformats"));
        assert_eq!(mime_for_name("no-extension"), "application/octet-stream");
        assert_eq!(mime_for_name("a.zip"), "application/octet-stream");
    }
}
