use deepreader::domain::{AnalysisInput, ContentType, DOCX_MIME};

#[test]
fn given_docx_extension_when_detecting_then_returns_docx() {
    assert_eq!(
        ContentType::detect("季度报告.DOCX", Some("application/octet-stream")),
        Some(ContentType::Docx)
    );
}

#[test]
fn given_docx_mime_without_extension_when_detecting_then_returns_docx() {
    assert_eq!(
        ContentType::detect("upload", Some(DOCX_MIME)),
        Some(ContentType::Docx)
    );
}

#[test]
fn given_legacy_doc_file_when_detecting_then_returns_none() {
    assert_eq!(ContentType::detect("old.doc", Some("application/msword")), None);
}

#[test]
fn given_whitespace_only_text_when_building_input_then_input_is_missing() {
    assert!(matches!(
        AnalysisInput::pasted(" \n\t "),
        AnalysisInput::Missing
    ));
}

#[test]
fn given_text_when_building_input_then_keeps_it_untrimmed() {
    match AnalysisInput::pasted("  正文  ") {
        AnalysisInput::PastedText(text) => assert_eq!(text, "  正文  "),
        other => panic!("unexpected input: {other:?}"),
    }
}
