//! JSON API over the PMCC simulation core.
//!
//! The population is built once at startup and shared read-only across all
//! requests; every simulation call is a pure function over it, so the
//! server needs no locks. Dashboard clients drive the engine through query
//! parameters and render the returned histogram and threshold stats.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};

use pmcc_core::{COLUMN_LABELS, Population, SimulationRequest, ThresholdStats, run_request};

/// Histogram bin count served to dashboard clients.
const HISTOGRAM_BINS: usize = 50;

/// Shared server state: the process-wide immutable population.
struct AppState {
    population: Population,
}

#[derive(Deserialize)]
struct SimulateParams {
    sample_size: Option<usize>,
    threshold: Option<f64>,
    iterations: Option<usize>,
    /// Explicit seed for reproducible responses.
    seed: Option<u64>,
    /// If true, include the raw PMCC sequence in the response.
    include_values: Option<bool>,
}

/// Equal-width histogram of the PMCC sequence over [-1, 1].
#[derive(Serialize)]
struct Histogram {
    /// `bins + 1` bin edges from -1.0 to 1.0.
    edges: Vec<f64>,
    /// Count per bin; NaN values are skipped.
    counts: Vec<u64>,
}

#[derive(Serialize)]
struct SimulateResponse {
    success: bool,
    sample_size: usize,
    threshold: f64,
    iterations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<ThresholdStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    histogram: Option<Histogram>,
    /// Raw PMCC sequence, present only when `include_values=true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Vec<f64>>,
    /// Error message if the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Deserialize)]
struct PopulationParams {
    rows: Option<usize>,
}

#[derive(Serialize)]
struct PopulationResponse {
    columns: [&'static str; 2],
    rows: Vec<[f64; 2]>,
    total_rows: usize,
    config: pmcc_core::PopulationConfig,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    population_rows: usize,
    version: &'static str,
}

/// Bin a PMCC sequence into `bins` equal-width buckets over [-1, 1].
/// NaN entries are skipped; r = 1.0 lands in the last bin.
fn histogram(values: &[f64], bins: usize) -> Histogram {
    let width = 2.0 / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| -1.0 + i as f64 * width).collect();
    let mut counts = vec![0u64; bins];
    for &v in values {
        if v.is_nan() {
            continue;
        }
        let idx = (((v + 1.0) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    Histogram { edges, counts }
}

async fn handle_simulate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SimulateParams>,
) -> (StatusCode, Json<SimulateResponse>) {
    let defaults = SimulationRequest::default();
    let request = SimulationRequest {
        sample_size: params.sample_size.unwrap_or(defaults.sample_size),
        threshold: params.threshold.unwrap_or(defaults.threshold),
        iterations: params.iterations.unwrap_or(defaults.iterations),
        seed: params.seed,
    };

    // The engine is CPU-bound for tens of thousands of iterations; hand it
    // to the blocking pool so the async workers stay responsive.
    let task_state = Arc::clone(&state);
    let report =
        tokio::task::spawn_blocking(move || run_request(&task_state.population, &request)).await;

    let report = match report {
        Ok(r) => r,
        Err(join_err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(error_response(&request, join_err.to_string())),
            );
        }
    };

    match report {
        Ok(report) => {
            let response = SimulateResponse {
                success: true,
                sample_size: request.sample_size,
                threshold: request.threshold,
                iterations: request.iterations,
                seed: request.seed,
                stats: Some(report.stats),
                histogram: Some(histogram(&report.values, HISTOGRAM_BINS)),
                values: params.include_values.unwrap_or(false).then_some(report.values),
                error: None,
            };
            (StatusCode::OK, Json(response))
        }
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(error_response(&request, err.to_string())),
        ),
    }
}

fn error_response(request: &SimulationRequest, error: String) -> SimulateResponse {
    SimulateResponse {
        success: false,
        sample_size: request.sample_size,
        threshold: request.threshold,
        iterations: request.iterations,
        seed: request.seed,
        stats: None,
        histogram: None,
        values: None,
        error: Some(error),
    }
}

async fn handle_population(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PopulationParams>,
) -> Json<PopulationResponse> {
    let rows = params.rows.unwrap_or(10);
    Json(PopulationResponse {
        columns: COLUMN_LABELS,
        rows: state.population.preview(rows),
        total_rows: state.population.len(),
        config: *state.population.config(),
    })
}

async fn handle_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        population_rows: state.population.len(),
        version: pmcc_core::VERSION,
    })
}

async fn handle_index(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "pmcc-sim server",
        "version": pmcc_core::VERSION,
        "population_rows": state.population.len(),
        "endpoints": {
            "/": "This API index",
            "/api/v1/simulate": {
                "method": "GET",
                "description": "Run a bootstrap PMCC simulation against the fixed population",
                "params": {
                    "sample_size": "Bootstrap sample size (default: 10; the dashboard offers 5-20)",
                    "threshold": "Symmetric band half-width (default: 0.6319; the dashboard offers 0.40-0.80)",
                    "iterations": "Bootstrap iterations (default: 50000)",
                    "seed": "Explicit seed for a reproducible response",
                    "include_values": "true to include the raw PMCC sequence",
                }
            },
            "/api/v1/population": "Preview the generated population (params: rows, default 10)",
            "/health": "Health check",
        },
        "examples": {
            "default_run": "/api/v1/simulate",
            "tight_band": "/api/v1/simulate?sample_size=5&threshold=0.4",
            "reproducible": "/api/v1/simulate?seed=42&include_values=true",
            "preview": "/api/v1/population?rows=10",
        }
    }))
}

/// Build the axum router.
fn build_router(population: Population) -> Router {
    let state = Arc::new(AppState { population });

    Router::new()
        .route("/", get(handle_index))
        .route("/api/v1/simulate", get(handle_simulate))
        .route("/api/v1/population", get(handle_population))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Run the HTTP simulation server.
pub async fn run_server(population: Population, host: &str, port: u16) -> std::io::Result<()> {
    let app = build_router(population);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_covers_unit_interval() {
        let h = histogram(&[-1.0, -0.99, 0.0, 0.5, 1.0], 50);
        assert_eq!(h.edges.len(), 51);
        assert_eq!(h.counts.len(), 50);
        assert_eq!(h.edges[0], -1.0);
        assert_eq!(*h.edges.last().unwrap(), 1.0);
        assert_eq!(h.counts.iter().sum::<u64>(), 5);
        // Exact 1.0 lands in the last bin, not past it.
        assert_eq!(*h.counts.last().unwrap(), 1);
        // Both values near -1 share the first bin.
        assert_eq!(h.counts[0], 2);
    }

    #[test]
    fn histogram_skips_nan() {
        let h = histogram(&[f64::NAN, 0.0, f64::NAN], 10);
        assert_eq!(h.counts.iter().sum::<u64>(), 1);
    }

    #[test]
    fn router_builds_with_default_population() {
        let population =
            Population::generate(pmcc_core::PopulationConfig::default()).unwrap();
        let _router = build_router(population);
    }
}
