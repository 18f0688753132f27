/// Router construction and HTTP middleware stack
use crate::{
    api,
    config::ServerSettings,
    error::{error_body, ServerError, INTERNAL_ERROR},
    state::AppState,
    ui,
};
use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    http::{HeaderValue, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    BoxError, Router,
};
use std::{any::Any, time::Duration};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as AnyHeader, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// Build the full application router from server settings
pub fn create_router(app_state: AppState, settings: &ServerSettings) -> Router {
    build_router(
        app_state,
        settings.request_timeout(),
        &settings.allowed_cors_urls,
    )
}

/// Build the router with an explicit request timeout and CORS allow-list
///
/// Layers, outermost first: request id, tracing, panic recovery, request
/// timeout, CORS.
pub fn build_router(app_state: AppState, timeout: Duration, cors_origins: &[String]) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/users",
            get(api::users::list_users).post(api::users::create_user),
        )
        .route(
            "/users/:id",
            get(api::users::get_user)
                .put(api::users::update_user)
                .delete(api::users::delete_user),
        );

    Router::new()
        .route("/", get(ui::home))
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(timeout)
                .layer(cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// CORS policy from the configured allow-list
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AnyHeader)
}

fn make_request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id,
    )
}

async fn handle_middleware_error(err: BoxError) -> ServerError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ServerError::Timeout
    } else {
        ServerError::Internal(format!("unhandled middleware error: {err}"))
    }
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = detail, "Handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, error_body(INTERNAL_ERROR)).into_response()
}

async fn not_found() -> ServerError {
    ServerError::NotFound("no route".to_string())
}
