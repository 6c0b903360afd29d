use std::sync::Arc;

use axum::{Json, extract::State};
use calrelay_models::relay::RelayResult;

use crate::executor::{CapturedOutput, ExecutionError, run_external};
use crate::routes::{RelayPayload, RelayRoute, RelayRoutes};

pub(crate) async fn relay<P: RelayPayload>(
    State(routes): State<Arc<RelayRoutes>>,
    Json(payload): Json<P>,
) -> Json<RelayResult> {
    let endpoint = P::ENDPOINT;
    let route = routes.route(endpoint);
    let arguments = payload.into_arguments();

    log::info!(
        "Relaying {} to {}",
        endpoint.path(),
        route.executable.display()
    );

    let execution = run_external(&route.executable, &arguments, route.timeout).await;
    let result = to_relay_result(route, execution);

    log::debug!("{} finished with {:?}", endpoint.path(), result.status);
    Json(result)
}

pub(crate) fn to_relay_result(
    route: &RelayRoute,
    execution: Result<CapturedOutput, ExecutionError>,
) -> RelayResult {
    match execution {
        Ok(output) if output.status.success() => RelayResult::success(output.stdout),
        Ok(output) => {
            log::warn!(
                "{} exited with {}",
                route.executable.display(),
                output.status
            );
            RelayResult::error(output.stderr)
        }
        Err(ExecutionError::TimedOut(_)) => RelayResult::error(route.timeout_message.clone()),
        Err(err) => {
            log::error!("Relaying to {} failed: {}", route.executable.display(), err);
            RelayResult::error(format!("An unexpected error occurred: {err}"))
        }
    }
}
