use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use clap::Parser;
use serde_json::{Map, Value, json};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const MODEL: &str = "@cf/bytedance/stable-diffusion-xl-lightning";
const MAX_COMMENT: usize = u16::MAX as usize - 2;

/// Local stand-in for the image generation worker.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 8787)]
    port: u16,

    #[arg(short = 'k', long, env = "WORKER_API_KEY", hide_env_values = true)]
    api_key: String,
}

#[derive(Clone)]
struct WorkerState {
    api_key: String,
}

fn failure(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

fn generation_failed(details: String) -> Response {
    failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "Failed to generate image", "details": details }),
    )
}

/// Falsy prompts (missing, null, false, 0, "") are absent. Any other
/// non-string value is passed on as its JSON text.
fn prompt_of(payload: &Map<String, Value>) -> Option<String> {
    match payload.get("prompt")? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// SOI, one COM segment holding the prompt, EOI.
fn render(prompt: &str) -> Vec<u8> {
    let comment = &prompt.as_bytes()[..prompt.len().min(MAX_COMMENT)];
    let segment_len = (comment.len() + 2) as u16;

    let mut image = Vec::with_capacity(comment.len() + 8);
    image.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xFE]);
    image.extend_from_slice(&segment_len.to_be_bytes());
    image.extend_from_slice(comment);
    image.extend_from_slice(&[0xFF, 0xD9]);
    image
}

async fn generate(
    State(state): State<WorkerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let expected = format!("Bearer {}", state.api_key);
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if authorization != Some(expected.as_str()) {
        warn!(%method, %uri, "Rejected unauthenticated request");
        return failure(StatusCode::UNAUTHORIZED, json!({ "error": "Unauthorized" }));
    }

    if method != Method::POST || uri.path() != "/" {
        return failure(
            StatusCode::METHOD_NOT_ALLOWED,
            json!({ "error": "Not allowed" }),
        );
    }

    let payload = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(payload)) => payload,
        Ok(other) => {
            return generation_failed(format!("payload must be a JSON object, got {other}"));
        }
        Err(err) => return generation_failed(err.to_string()),
    };

    let Some(prompt) = prompt_of(&payload) else {
        return failure(
            StatusCode::BAD_REQUEST,
            json!({ "error": "Prompt is required" }),
        );
    };

    info!(model = MODEL, prompt = %prompt, "Generating image");

    ([(header::CONTENT_TYPE, "image/jpeg")], render(&prompt)).into_response()
}

fn router(api_key: String) -> Router {
    Router::new()
        .fallback(generate)
        .with_state(WorkerState { api_key })
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Args = Args::parse();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port)).await?;

    info!("Worker started on port {}", args.port);

    axum::serve(listener, router(args.api_key)).await
}
