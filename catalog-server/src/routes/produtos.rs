use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, Result},
    models::Produto,
    queries::produto_queries,
    AppState,
};

pub async fn list_produtos(State(state): State<AppState>) -> Result<Json<Vec<Produto>>> {
    let produtos = produto_queries::list_all(&state.db).await?;

    Ok(Json(produtos))
}

pub async fn get_produto(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Produto>> {
    let produto = produto_queries::find_by_id(&state.db, &id)
        .await?
        .ok_or(AppError::NotFound("Produto não encontrado".to_string()))?;

    Ok(Json(produto))
}
