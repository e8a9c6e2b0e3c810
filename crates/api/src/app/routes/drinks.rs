use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Extension, Path};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};

use barkeep_auth::Permission;
use barkeep_core::{DrinkPatch, RecipeInput};
use barkeep_infra::StoreError;

use crate::app::{dto, errors};
use crate::authz;
use crate::context::AppContext;

/// Route table for the drinks resource.
///
/// Delete requires `patch:drinks`, the same permission as update: the
/// issuer's permission scheme defines no separate delete permission.
pub fn router() -> Router {
    Router::new()
        .route("/drinks", get(list_drinks).post(create_drink))
        .route("/drinks-detail", get(drinks_detail))
        .route("/drinks/:id", patch(update_drink).delete(delete_drink))
}

/// Public listing, short projection.
pub async fn list_drinks(Extension(ctx): Extension<Arc<AppContext>>) -> Response {
    match ctx.store.list_all().await {
        Ok(drinks) => {
            let drinks = drinks.iter().map(|d| d.short()).collect();
            (StatusCode::OK, Json(dto::DrinksResponse::new(drinks))).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "listing drinks failed");
            errors::internal_error()
        }
    }
}

/// Long projection of the same listing, for `get:drinks-detail` holders.
pub async fn drinks_detail(
    Extension(ctx): Extension<Arc<AppContext>>,
    headers: HeaderMap,
) -> Response {
    if let Err(err) = authz::authorize(
        &headers,
        ctx.verifier.as_ref(),
        Permission::new("get:drinks-detail"),
    ) {
        return errors::auth_error_to_response(err);
    }

    match ctx.store.list_all().await {
        Ok(drinks) => {
            let drinks = drinks.iter().map(|d| d.long()).collect();
            (StatusCode::OK, Json(dto::DrinksResponse::new(drinks))).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "listing drink detail failed");
            errors::internal_error()
        }
    }
}

pub async fn create_drink(
    Extension(ctx): Extension<Arc<AppContext>>,
    headers: HeaderMap,
    body: Result<Json<dto::CreateDrinkRequest>, JsonRejection>,
) -> Response {
    if let Err(err) = authz::authorize(
        &headers,
        ctx.verifier.as_ref(),
        Permission::new("post:drinks"),
    ) {
        return errors::auth_error_to_response(err);
    }

    // Missing keys and undecodable bodies share the same outcome.
    let Ok(Json(body)) = body else {
        return errors::bad_request();
    };

    let recipe = body.recipe.into_vec();
    match ctx.store.create(&body.title, &recipe).await {
        Ok(drink) => (
            StatusCode::OK,
            Json(dto::DrinksResponse::new(vec![drink.long()])),
        )
            .into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "creating drink failed");
            errors::bad_request()
        }
    }
}

/// Partial update: fields absent from the body keep their stored value.
pub async fn update_drink(
    Extension(ctx): Extension<Arc<AppContext>>,
    headers: HeaderMap,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<dto::UpdateDrinkRequest>, JsonRejection>,
) -> Response {
    if let Err(err) = authz::authorize(
        &headers,
        ctx.verifier.as_ref(),
        Permission::new("patch:drinks"),
    ) {
        return errors::auth_error_to_response(err);
    }

    // A non-numeric id can never name a drink; same outcome as routing.
    let Ok(Path(id)) = id else {
        return errors::not_found();
    };
    let Ok(Json(body)) = body else {
        return errors::unprocessable();
    };

    let patch = DrinkPatch {
        title: body.title,
        recipe: body.recipe.map(RecipeInput::into_vec),
    };
    if patch.is_empty() {
        return errors::unprocessable();
    }

    match ctx.store.update(id, patch).await {
        Ok(drink) => (
            StatusCode::OK,
            Json(dto::DrinksResponse::new(vec![drink.long()])),
        )
            .into_response(),
        Err(StoreError::NotFound) => errors::not_found(),
        Err(err) => {
            tracing::warn!(error = %err, "updating drink failed");
            errors::unprocessable()
        }
    }
}

pub async fn delete_drink(
    Extension(ctx): Extension<Arc<AppContext>>,
    headers: HeaderMap,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    if let Err(err) = authz::authorize(
        &headers,
        ctx.verifier.as_ref(),
        Permission::new("patch:drinks"),
    ) {
        return errors::auth_error_to_response(err);
    }

    let Ok(Path(id)) = id else {
        return errors::not_found();
    };

    match ctx.store.delete(id).await {
        Ok(deleted) => (StatusCode::OK, Json(dto::DeleteResponse::new(deleted))).into_response(),
        Err(StoreError::NotFound) => errors::not_found(),
        Err(err) => {
            tracing::warn!(error = %err, "deleting drink failed");
            errors::unprocessable()
        }
    }
}
