//! JSON API handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::AppError;
use crate::models::{ComponentInfo, Control, PreviewState, PropDefinition};
use crate::services::controls::{control_for, initial_state};
use crate::services::{Catalogue, CatalogueService, Envelope};

/// Detail payload: the component, its source, and the editor setup for its props.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDetailResponse {
    pub component: ComponentInfo,
    pub content: String,
    pub props: Vec<PropDefinition>,
    pub controls: Vec<Control>,
    pub initial_props: PreviewState,
}

/// `GET /api/components`
pub async fn list_components(
    State(service): State<CatalogueService>,
) -> Result<Json<Envelope<Catalogue>>, AppError> {
    let catalogue = service.catalogue().await?;
    Ok(Json(Envelope::success(catalogue)))
}

/// `GET /api/components/:app/*path`
pub async fn component_detail(
    State(service): State<CatalogueService>,
    Path((app, path)): Path<(String, String)>,
) -> Result<Json<ComponentDetailResponse>, AppError> {
    let detail = service.component(app, path).await?;
    let controls = detail.props.iter().map(|p| control_for(&p.type_expr)).collect();
    let initial_props = initial_state(&detail.props);

    Ok(Json(ComponentDetailResponse {
        component: detail.component,
        content: detail.content,
        props: detail.props,
        controls,
        initial_props,
    }))
}
