use super::*;

pub(super) async fn get_pet(State(state): State<AppState>) -> Json<PetState> {
    Json(state.lock().state())
}

pub(super) async fn get_pet_log(State(state): State<AppState>) -> Json<Vec<LogEntry>> {
    Json(state.lock().log())
}

/// A missing or unparsable body counts as an absent action and gets the
/// same 400 as an unrecognized one.
pub(super) async fn apply_pet_action(
    State(state): State<AppState>,
    body: Result<Json<ActionRequest>, JsonRejection>,
) -> Result<Json<ActionOutcome>, ApiError> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!("[petbox] Unreadable action body: {}", rejection.body_text());
            ActionRequest::default()
        }
    };
    let raw = req.action.unwrap_or_default();

    let mut pet = state.lock();
    match pet.apply_action(&raw) {
        Ok(outcome) => {
            tracing::debug!(
                action = %raw,
                mood = ?outcome.state.mood,
                energy = outcome.state.energy,
                hunger = outcome.state.hunger,
                "[petbox] Action applied"
            );
            Ok(Json(outcome))
        }
        Err(err) => {
            tracing::warn!("[petbox] Rejected action: {}", err);
            Err(ApiError::from_pet(&err, pet.locale()))
        }
    }
}

pub(super) async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let res = next.run(req).await;
    tracing::debug!("[petbox] {} {} -> {}", method, path, res.status());
    res
}
