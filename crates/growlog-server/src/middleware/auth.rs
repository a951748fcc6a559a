// API key middleware for Actix-web
// Every route except the root status page requires the configured shared key

use actix_service::forward_ready;
use actix_utils::future::{Ready, ok};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{Method, StatusCode},
    web::Data,
};

use futures::future::LocalBoxFuture;

use crate::model::{app_state::AppState, response::ErrorResult};

const API_KEY_HEADER: &str = "x-api-key";

// API key middleware transformer
pub struct ApiKeyAuth;

impl<S, B> Transform<S, ServiceRequest> for ApiKeyAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ApiKeyAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(ApiKeyAuthMiddleware { service })
    }
}

pub struct ApiKeyAuthMiddleware<S> {
    service: S,
}

/// The root status page stays reachable without a key, as do CORS
/// preflight requests.
fn is_exempt(req: &ServiceRequest) -> bool {
    req.path() == "/" || Method::OPTIONS == *req.method()
}

fn presented_key(req: &ServiceRequest) -> Option<String> {
    let header_val = req.headers().get(API_KEY_HEADER)?;
    let s = header_val.to_str().ok()?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl<S, B> Service<ServiceRequest> for ApiKeyAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !is_exempt(&req) {
            // An unset key fails closed rather than waving everything through.
            let configured = req
                .app_data::<Data<AppState>>()
                .map(|state| state.configuration.api_key())
                .filter(|key| !key.is_empty());

            let authorized = match (&configured, presented_key(&req)) {
                (Some(expected), Some(presented)) => *expected == presented,
                _ => false,
            };

            if !authorized {
                if configured.is_none() {
                    tracing::error!("No API key configured; refusing request");
                }
                let (request, _) = req.into_parts();
                let response = ErrorResult::http_response(
                    StatusCode::UNAUTHORIZED,
                    "invalid or missing API key".to_string(),
                    request.path(),
                )
                .map_into_right_body();
                return Box::pin(async move { Ok(ServiceResponse::new(request, response)) });
            }
        }

        let res = self.service.call(req);

        Box::pin(async move { res.await.map(ServiceResponse::map_into_left_body) })
    }
}
