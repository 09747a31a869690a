use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use ytcs_core::{ClassifiedComment, SentimentLabel, MAX_RESULTS, MIN_RESULTS};

use crate::middleware::RequestId;

use super::{map_pipeline_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    pub video_id: String,
    pub max_results: u32,
}

/// One row of the comment table.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub(super) struct CommentItem {
    pub author: String,
    pub sentiment: SentimentLabel,
    pub comment: String,
}

impl From<ClassifiedComment> for CommentItem {
    fn from(c: ClassifiedComment) -> Self {
        Self {
            author: c.author,
            sentiment: c.sentiment,
            comment: c.text,
        }
    }
}

pub(super) fn validate_analyze(req: &AnalyzeRequest) -> Result<(), String> {
    if req.video_id.trim().is_empty() {
        return Err("video_id must not be empty".to_string());
    }
    if !(MIN_RESULTS..=MAX_RESULTS).contains(&req.max_results) {
        return Err(format!(
            "max_results must be between {MIN_RESULTS} and {MAX_RESULTS}"
        ));
    }
    Ok(())
}

pub(super) async fn analyze_comments(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Vec<CommentItem>>>, ApiError> {
    let Json(body) =
        body.map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.body_text()))?;
    validate_analyze(&body)
        .map_err(|msg| ApiError::new(req_id.0.clone(), "validation_error", msg))?;

    let video_id = body.video_id.trim();
    let comments = state
        .pipeline
        .run(video_id, body.max_results)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: comments.into_iter().map(CommentItem::from).collect(),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn list_comments(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<CommentItem>>>, ApiError> {
    let comments = state
        .pipeline
        .read_all()
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: comments.into_iter().map(CommentItem::from).collect(),
        meta: ResponseMeta::new(req_id.0),
    }))
}
