use super::*;

pub(crate) fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/pet", get(get_pet))
        .route("/pet/action", post(apply_pet_action))
        .route("/pet/log", get(get_pet_log))
        .with_state(state)
        .layer(middleware::from_fn(log_request))
        .layer(cors)
}
