//! AWS Lambda handler for running investment projections
//!
//! Accepts a share-snapshot JSON payload (`{ level?, inputs? }`), decodes it
//! onto the zero-state defaults, clamps the ranges, and returns the computed
//! results gated on the same readiness condition the product applies.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::Serialize;

use primerendit_engine::{
    params::{self, Snapshot},
    ProjectionEngine, ResultsSummary,
};

/// Output envelope around the projection results
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    /// Whether the decoded parameters passed the readiness gate
    pub ready: bool,

    /// UI level passed through from the snapshot untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Full results, `null` when the parameters are not ready
    pub results: Option<ResultsSummary>,

    pub execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &CalculationResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body; an empty body calculates the zero state
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let snapshot = match Snapshot::from_json_str(&body_str) {
        Ok(s) => s,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let parameters = params::clamp(snapshot.inputs);
    let ready = params::is_ready(&parameters);

    // Not-ready parameters return no results, matching the product's UI
    let results = ready.then(|| ProjectionEngine::new(parameters).run());

    let execution_time_ms = start.elapsed().as_millis() as u64;

    let response = CalculationResponse {
        ready,
        level: snapshot.level,
        results,
        execution_time_ms,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
