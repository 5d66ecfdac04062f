use std::sync::Arc;

use deepreader::application::services::{
    AnalysisOptions, AnalysisService, PipelineError, ReaderService,
};
use deepreader::domain::{AnalysisInput, ContentType, Document};

use crate::helpers::{
    FailingFileLoader, GatedLlmClient, RecordingLlmClient, SAMPLE_ANSWER, SAMPLE_ARTICLE,
    docx_bytes, reader_service,
};

fn docx_input(data: Vec<u8>) -> AnalysisInput {
    AnalysisInput::UploadedDocument {
        document: Document::new("article.docx".to_string(), ContentType::Docx, data.len() as u64),
        data,
    }
}

#[tokio::test]
async fn given_missing_input_when_running_then_warns_without_calling_model() {
    let llm = RecordingLlmClient::answering(SAMPLE_ANSWER);
    let service = reader_service(llm.clone(), 1);

    let outcome = service.run(AnalysisInput::pasted("   ")).await;

    assert_eq!(outcome, Err(PipelineError::InputMissing));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_pasted_text_when_running_then_returns_result() {
    let llm = RecordingLlmClient::answering(SAMPLE_ANSWER);
    let service = reader_service(llm.clone(), 1);

    let result = service
        .run(AnalysisInput::pasted(SAMPLE_ARTICLE))
        .await
        .unwrap();

    assert_eq!(result.result, "文中未提及");
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn given_docx_upload_when_running_then_sends_paragraph_text() {
    let llm = RecordingLlmClient::answering(SAMPLE_ANSWER);
    let service = reader_service(llm.clone(), 1);

    service
        .run(docx_input(docx_bytes(&["第一段", "第二段"])))
        .await
        .unwrap();

    assert!(llm.requests()[0].user_message.ends_with("第一段\n第二段"));
}

#[tokio::test]
async fn given_docx_with_only_empty_paragraphs_when_running_then_input_is_missing() {
    let llm = RecordingLlmClient::answering(SAMPLE_ANSWER);
    let service = reader_service(llm.clone(), 1);

    let outcome = service.run(docx_input(docx_bytes(&["", ""]))).await;

    assert_eq!(outcome, Err(PipelineError::InputMissing));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_corrupt_document_when_running_then_returns_document_format_error() {
    let llm = RecordingLlmClient::answering(SAMPLE_ANSWER);
    let service = ReaderService::new(
        Arc::new(FailingFileLoader),
        AnalysisService::new(llm.clone(), AnalysisOptions::default()),
        1,
    );

    let outcome = service.run(docx_input(b"not a zip".to_vec())).await;

    assert!(matches!(outcome, Err(PipelineError::DocumentFormat(_))));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_model_failure_when_running_then_returns_analysis_error_with_message() {
    let llm = RecordingLlmClient::failing("HTTP 401: invalid api key");
    let service = reader_service(llm, 1);

    let outcome = service.run(AnalysisInput::pasted(SAMPLE_ARTICLE)).await;

    match outcome {
        Err(PipelineError::Analysis(message)) => assert!(message.contains("invalid api key")),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn given_analysis_in_flight_when_triggering_again_then_second_is_rejected() {
    let llm = GatedLlmClient::new();
    let service = Arc::new(reader_service(llm.clone(), 1));

    let first = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.run(AnalysisInput::pasted(SAMPLE_ARTICLE)).await })
    };
    llm.entered.notified().await;

    let second = service.run(AnalysisInput::pasted(SAMPLE_ARTICLE)).await;
    assert_eq!(second, Err(PipelineError::Busy));

    llm.release.notify_one();
    assert!(first.await.unwrap().is_ok());

    llm.release.notify_one();
    assert!(
        service
            .run(AnalysisInput::pasted(SAMPLE_ARTICLE))
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn given_analysis_in_flight_when_uploading_document_then_rejects_before_extraction() {
    let llm = GatedLlmClient::new();
    let service = Arc::new(ReaderService::new(
        Arc::new(FailingFileLoader),
        AnalysisService::new(llm.clone(), AnalysisOptions::default()),
        1,
    ));

    let first = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.run(AnalysisInput::pasted(SAMPLE_ARTICLE)).await })
    };
    llm.entered.notified().await;

    // The loader always fails, so a document-format error would mean it ran.
    let second = service.run(docx_input(b"not a zip".to_vec())).await;
    assert_eq!(second, Err(PipelineError::Busy));

    llm.release.notify_one();
    assert!(first.await.unwrap().is_ok());
}

#[tokio::test]
async fn given_missing_input_while_analysis_in_flight_then_still_reports_missing_input() {
    let llm = GatedLlmClient::new();
    let service = Arc::new(reader_service(llm.clone(), 1));

    let first = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.run(AnalysisInput::pasted(SAMPLE_ARTICLE)).await })
    };
    llm.entered.notified().await;

    let second = service.run(AnalysisInput::Missing).await;
    assert_eq!(second, Err(PipelineError::InputMissing));

    llm.release.notify_one();
    assert!(first.await.unwrap().is_ok());
}
