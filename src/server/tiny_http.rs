//! tiny_http server adapter
//!
//! Handles routing, query parsing, CORS and response conversion for tiny_http.

use std::io::Cursor;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::thread;

use serde::Serialize;
use tiny_http::{Header, Method, Response, Server, StatusCode};

use crate::api::{self, ApiError, ApiErrorData, WorkingDaysQuery};

use super::ServerState;

/// Plain-text banner served at `/`
pub const BANNER: &str = "Working Days API is running";

const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "GET, OPTIONS"),
];

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Serve requests on `addr` with `workers` threads until the process exits
pub fn serve(addr: &str, workers: usize, state: &ServerState) -> anyhow::Result<()> {
    let server = Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    log::info!("Server is running on http://{addr}");
    log::info!("Health check: http://{addr}/health");
    log::info!("API endpoint: http://{addr}/api/working-days");

    thread::scope(|scope| {
        for _ in 0..workers.max(1) {
            scope.spawn(|| {
                for request in server.incoming_requests() {
                    let method = request.method().clone();
                    let url = request.url().to_string();
                    let response = handle_request(&method, &url, state);
                    log::info!("{method} {url} -> {}", response.status_code().0);
                    if let Err(e) = request.respond(response) {
                        log::warn!("Failed to send response for {method} {url}: {e}");
                    }
                }
            });
        }
    });

    Ok(())
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle a request and return a response
///
/// This is the main routing function that maps URL paths to handlers.
pub fn handle_request(method: &Method, url: &str, state: &ServerState) -> Response<Cursor<Vec<u8>>> {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));

    // CORS preflight is answered for any path
    if *method == Method::Options {
        return with_cors(Response::from_data(Vec::new()).with_status_code(StatusCode(200)));
    }

    // Supports both /api/v1/... (versioned) and /api/... paths
    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"));

    match (method, path, api_path) {
        (&Method::Get, "/", _) => text_response(BANNER, 200),
        (&Method::Get, "/health", _) => json_response(&api::health(), 200),
        (&Method::Get, _, Some("/working-days")) => {
            let query = parse_query(query);
            handle_result(calculate(&query, state))
        },
        (&Method::Get, _, Some("/holidays")) => {
            json_response(&api::list_holidays(&state.calculator), 200)
        },
        (_, "/" | "/health", _) | (_, _, Some("/working-days" | "/holidays")) => error_response(
            &ApiError::method_not_allowed(format!("Method not allowed: {method} {path}")),
        ),
        _ => error_response(&ApiError::not_found(format!("Endpoint not found: {method} {path}"))),
    }
}

/// Run the calculation, turning a panic into `ServiceUnavailable`
fn calculate(query: &WorkingDaysQuery, state: &ServerState) -> Result<api::WorkingDaysData, ApiError> {
    let now = (state.clock)();
    catch_unwind(AssertUnwindSafe(|| {
        api::calculate_working_days(&state.calculator, query, state.profile, now)
    }))
    .unwrap_or_else(|_| {
        log::error!("Calculation panicked for query {query:?}");
        Err(ApiError::service_unavailable(api::CALCULATION_FAILED))
    })
}

// =============================================================================
// QUERY PARSING
// =============================================================================

/// Parse `days`, `hours` and `date` from a URL query string
///
/// The first occurrence of a repeated key wins; unknown keys are ignored.
#[must_use]
pub fn parse_query(query: &str) -> WorkingDaysQuery {
    let mut parsed = WorkingDaysQuery::default();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        let slot = match key.as_ref() {
            "days" => &mut parsed.days,
            "hours" => &mut parsed.hours,
            "date" => &mut parsed.date,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }
    parsed
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => json_response(&data, 200),
        Err(e) => error_response(&e),
    }
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    json_response(&ApiErrorData::from(error), error.status_code())
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| {
        r#"{"error":"ServiceUnavailable","message":"Serialization failed"}"#.to_string()
    });
    let response = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    with_cors(with_header(response, "Content-Type", "application/json"))
}

fn text_response(body: &str, status: u16) -> Response<Cursor<Vec<u8>>> {
    let response = Response::from_data(body.as_bytes().to_vec()).with_status_code(StatusCode(status));
    with_cors(with_header(response, "Content-Type", "text/plain; charset=utf-8"))
}

fn with_cors(response: Response<Cursor<Vec<u8>>>) -> Response<Cursor<Vec<u8>>> {
    CORS_HEADERS
        .iter()
        .fold(response, |response, (name, value)| with_header(response, name, value))
}

fn with_header(response: Response<Cursor<Vec<u8>>>, name: &str, value: &str) -> Response<Cursor<Vec<u8>>> {
    match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
        Ok(header) => response.with_header(header),
        Err(()) => {
            log::warn!("Dropping invalid header {name}: {value}");
            response
        },
    }
}
