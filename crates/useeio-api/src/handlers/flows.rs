//! Flow handlers for `/api/{model}/flows` and `/api/{model}/flows/{id}`
//!
//! Both handlers read the model's flow file on every request. Any load
//! failure, whether a missing folder or a corrupt file, is answered with the
//! same plain-text 404; the details only go to the log.

use axum::{
    extract::{
        path::ErrorKind,
        rejection::PathRejection,
        Path, State,
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use tracing::{debug, error, info, warn};
use useeio_flows::{load_flows_with, model_folder, FlowSet};

use crate::types::ApiState;

/// List all flows of a model
pub async fn list_flows(
    State(state): State<ApiState>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let model = match path {
        Ok(Path(model)) => model,
        Err(rejection) => {
            warn!("Rejected path {}: {}", uri.path(), rejection);
            return no_flows_for_model(raw_segment(&uri, MODEL_SEGMENT));
        }
    };
    info!("Listing flows for model: {}", model);

    match load_model_flows(&state, &model).await {
        Some(flows) => Json(flows).into_response(),
        None => no_flows_for_model(&model),
    }
}

/// Get a single flow of a model by its id or uuid
pub async fn get_flow(
    State(state): State<ApiState>,
    uri: Uri,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Response {
    let (model, id) = match path {
        Ok(Path(params)) => params,
        Err(rejection) => {
            warn!("Rejected path {}: {}", uri.path(), rejection);
            let model = raw_segment(&uri, MODEL_SEGMENT);
            // Every loaded id and uuid is valid UTF-8, so an undecodable id
            // can never match.
            return if is_undecodable_id(&rejection) {
                no_flow_with_id(raw_segment(&uri, ID_SEGMENT), model)
            } else {
                no_flows_for_model(model)
            };
        }
    };
    info!("Getting flow {} for model: {}", id, model);

    let Some(flows) = load_model_flows(&state, &model).await else {
        return no_flows_for_model(&model);
    };

    match flows.find(&id) {
        Ok(flow) => Json(flow).into_response(),
        Err(e) => {
            debug!("Lookup in model {} failed: {}", model, e);
            no_flow_with_id(&id, &model)
        }
    }
}

/// Positions of `{model}` and `{id}` in `/api/{model}/flows/{id}`
const MODEL_SEGMENT: usize = 2;
const ID_SEGMENT: usize = 4;

/// A path segment exactly as sent, still percent-encoded
fn raw_segment(uri: &Uri, position: usize) -> &str {
    uri.path().split('/').nth(position).unwrap_or_default()
}

fn is_undecodable_id(rejection: &PathRejection) -> bool {
    match rejection {
        PathRejection::FailedToDeserializePathParams(e) => {
            matches!(e.kind(), ErrorKind::InvalidUtf8InPathParam { key } if key == "id")
        }
        _ => false,
    }
}

fn no_flow_with_id(id: &str, model: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        format!("no flow with id {id} for model {model} found"),
    )
        .into_response()
}

fn no_flows_for_model(model: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        format!("no flows for model {model} found"),
    )
        .into_response()
}

/// A model name must stay a single folder below the data directory
fn is_valid_model_name(model: &str) -> bool {
    !model.is_empty() && model != "." && model != ".." && !model.contains(['/', '\\'])
}

async fn load_model_flows(state: &ApiState, model: &str) -> Option<FlowSet> {
    if !is_valid_model_name(model) {
        warn!("Rejected model name: {:?}", model);
        return None;
    }

    let folder = model_folder(state.data_dir(), model);
    let policy = state.index_policy;
    let result = tokio::task::spawn_blocking(move || load_flows_with(&folder, policy)).await;

    match result {
        Ok(Ok(flows)) => {
            debug!("Model {} has {} flow slots", model, flows.len());
            Some(flows)
        }
        Ok(Err(e)) if e.is_missing_file() => {
            info!("No flows for model {}: {}", model, e);
            None
        }
        Ok(Err(e)) => {
            error!(
                "Failed to load flows for model {} ({:?}): {:?}",
                model,
                e.kind(),
                e
            );
            None
        }
        Err(e) => {
            error!("Flow loading task for model {} failed: {}", model, e);
            None
        }
    }
}
