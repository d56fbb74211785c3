use std::time::Duration;

use otdb_application::{state::AppState, Result as AppResult};
use otdb_entities::geo::MapPoint;

const DEGRADED_NOTICE: &str = "The tree map could not be loaded completely";

/// Builds the startup state, giving the loader a fixed deadline.
///
/// If the load fails or overruns the deadline the application comes up
/// degraded on an empty map instead of blocking indefinitely. An
/// overrunning load is left behind, nobody observes its result.
pub async fn load_initial_state<F>(
    default_center: MapPoint,
    deadline: Duration,
    load: F,
) -> AppState
where
    F: FnOnce(&mut AppState) -> AppResult<()> + Send + 'static,
{
    let task = tokio::task::spawn_blocking(move || {
        let mut state = AppState::new(default_center);
        let outcome = load(&mut state);
        (state, outcome)
    });
    match tokio::time::timeout(deadline, task).await {
        Ok(Ok((state, Ok(())))) => state,
        Ok(Ok((mut state, Err(err)))) => {
            log::warn!("Loading the entry store failed: {err}");
            state.mark_degraded(DEGRADED_NOTICE);
            state
        }
        Ok(Err(err)) => {
            log::warn!("The startup load was aborted: {err}");
            let mut state = AppState::new(default_center);
            state.mark_degraded(DEGRADED_NOTICE);
            state
        }
        Err(_) => {
            log::warn!("Loading the entry store did not finish within {deadline:?}");
            let mut state = AppState::new(default_center);
            state.mark_degraded(DEGRADED_NOTICE);
            state
        }
    }
}
