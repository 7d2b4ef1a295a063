//! AWS Lambda HTTP handler
//!
//! POST a ProjectionRequest JSON body; responds with the summary, outcome
//! and full result, or 400 with an error message for invalid input.

use lambda_http::{run, service_fn, Body, Request, Response};
use lambda_runtime::Error;
use savings_projection::{
    report, Outcome, ProjectionEngine, ProjectionRequest, ProjectionResult,
};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct ProjectionResponse<'a> {
    summary: String,
    outcome: Outcome,
    result: &'a ProjectionResult,
}

fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?;
    Ok(response)
}

fn bad_request(message: String) -> Result<Response<Body>, Error> {
    log::warn!("Rejected request: {}", message);
    json_response(400, json!({ "error": message }).to_string())
}

/// Project a JSON request body into a JSON response
fn respond(body: &[u8]) -> Result<Response<Body>, Error> {
    let request: ProjectionRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => return bad_request(format!("invalid request body: {}", e)),
    };

    let engine = ProjectionEngine::new(request.config.clone());
    let result = match engine.project(&request.input) {
        Ok(result) => result,
        Err(e) => return bad_request(e.to_string()),
    };

    let body = serde_json::to_string(&ProjectionResponse {
        summary: report::describe(&result),
        outcome: result.outcome(),
        result: &result,
    })?;
    json_response(200, body)
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    respond(event.body().as_ref())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
