use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use stride_core::models::audit::ActorContext;

/// Resolve the acting user from gateway-injected headers.
///
/// Authentication itself happens upstream (API gateway / Cognito); by the
/// time a request reaches this service, `x-user-sub` and `x-clinic-id`
/// identify the session. When present, an `ActorContext` is inserted into
/// request extensions; handlers that write audit trails require it and
/// reject requests without one.
pub async fn resolve_actor(mut req: Request, next: Next) -> Response {
    // Scoped so the `&req` capture ends before the await below; holding it
    // across the await would make the middleware future non-Send.
    {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string())
        };

        if let Some(user_id) = header("x-user-sub") {
            let actor = ActorContext {
                user_id,
                clinic_id: header("x-clinic-id").unwrap_or_else(|| "default".to_string()),
                user_agent: header("user-agent"),
            };
            req.extensions_mut().insert(actor);
        }
    }

    next.run(req).await
}
