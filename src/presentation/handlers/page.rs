use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::PipelineError;
use crate::domain::AnalysisInput;
use crate::presentation::state::AppState;
use crate::presentation::view::{InputMethod, PageModel, ReportView, render_page};

use super::upload::Upload;

pub async fn index_handler() -> Html<String> {
    Html(render_page(&PageModel::default()))
}

#[derive(Default)]
struct SubmittedForm {
    method: InputMethod,
    text: String,
    upload: Option<Upload>,
}

impl SubmittedForm {
    async fn read(multipart: &mut Multipart) -> Result<Self, PipelineError> {
        let mut form = Self::default();

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read form");
                    return Err(PipelineError::InvalidForm(format!(
                        "failed to read form: {e}"
                    )));
                }
            };

            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("input_method") => {
                    form.method = InputMethod::parse(&read_text(field).await?);
                }
                Some("text") => {
                    form.text = read_text(field).await?;
                }
                Some("file") => {
                    form.upload = Some(Upload::read(field).await?);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Only the selected surface is read; the other one is ignored even if filled.
    fn into_input(self) -> (PageModel, Result<AnalysisInput, PipelineError>) {
        let mut page = PageModel {
            method: self.method,
            pasted_text: self.text,
            ..PageModel::default()
        };

        let input = match self.method {
            InputMethod::Paste => Ok(AnalysisInput::pasted(page.pasted_text.clone())),
            InputMethod::Upload => match self.upload {
                Some(upload) if !upload.is_empty() => {
                    page.uploaded_filename = Some(upload.filename.clone());
                    upload.into_input()
                }
                _ => Ok(AnalysisInput::Missing),
            },
        };

        (page, input)
    }
}

async fn read_text(field: Field<'_>) -> Result<String, PipelineError> {
    let name = field.name().unwrap_or_default().to_string();
    field.text().await.map_err(|e| {
        tracing::error!(error = %e, field = %name, "Failed to read form field");
        PipelineError::InvalidForm(format!("failed to read `{name}`: {e}"))
    })
}

/// Handles the page's analyze button and redraws the page with the outcome.
#[tracing::instrument(skip(state, multipart))]
pub async fn submit_handler<F, L>(
    State(state): State<AppState<F, L>>,
    mut multipart: Multipart,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let form = match SubmittedForm::read(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            let page = PageModel {
                view: Some(ReportView::from_outcome(&Err(e))),
                ..PageModel::default()
            };
            return (StatusCode::BAD_REQUEST, Html(render_page(&page))).into_response();
        }
    };

    let (mut page, input) = form.into_input();

    let outcome = match input {
        Ok(input) => state.reader_service.run(input).await,
        Err(e) => Err(e),
    };

    if let Err(e) = &outcome {
        tracing::info!(kind = e.kind(), "Analysis trigger ended without a report");
    }

    page.view = Some(ReportView::from_outcome(&outcome));
    Html(render_page(&page)).into_response()
}
