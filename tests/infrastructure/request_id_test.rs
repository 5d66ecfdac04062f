use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use deepreader::infrastructure::observability::REQUEST_ID_HEADER;

use crate::helpers::{RecordingLlmClient, SAMPLE_ANSWER, create_test_app};

#[tokio::test]
async fn given_request_id_header_when_calling_then_echoes_it() {
    let app = create_test_app(RecordingLlmClient::answering(SAMPLE_ANSWER));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(REQUEST_ID_HEADER, "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");
}

#[tokio::test]
async fn given_no_request_id_when_calling_then_generates_one() {
    let app = create_test_app(RecordingLlmClient::answering(SAMPLE_ANSWER));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let generated = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert_eq!(generated.len(), 36);
}
