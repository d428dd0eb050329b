use crate::content::home_sections;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_STATIC_MAX_AGE_SECONDS: u64 = 3_600;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const STATIC_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug)]
pub struct SiteConfig {
    port: u16,
    dist_dir: PathBuf,
    static_max_age_seconds: u64,
    log_level: LogLevel,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = parse_env_non_empty_string("SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let static_max_age_seconds = parse_u64_with_bounds(
            std::env::var("STATIC_MAX_AGE_SECONDS").ok().as_deref(),
            DEFAULT_STATIC_MAX_AGE_SECONDS,
            STATIC_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = parse_log_level(
            parse_env_non_empty_string("LOG_LEVEL").as_deref(),
            DEFAULT_LOG_LEVEL,
        );

        Self {
            port,
            dist_dir,
            static_max_age_seconds,
            log_level,
        }
    }
}

#[derive(Clone)]
struct AppState {
    config: Arc<SiteConfig>,
    site_routes: Arc<Vec<String>>,
}

#[derive(Serialize)]
struct HealthPayload {
    ok: bool,
    routes: usize,
}

pub fn site_routes() -> Vec<String> {
    std::iter::once("/".to_string())
        .chain(home_sections().iter().map(|section| section.path()))
        .collect()
}

pub fn app(config: SiteConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let state = AppState {
        config: Arc::new(config),
        site_routes: Arc::new(site_routes()),
    };

    let static_service =
        ServeDir::new(&state.config.dist_dir).not_found_service(ServeFile::new(&index));

    let mut router = Router::new().route("/healthz", get(health));
    for route in state.site_routes.iter().filter(|route| route.as_str() != "/") {
        router = router.route_service(route, ServeFile::new(&index));
    }

    router
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state.clone(), access_log))
        .with_state(state)
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::from_env();
    let port = config.port;
    let bind_address = format!("0.0.0.0:{port}");

    log_event(
        &config,
        LogLevel::Info,
        "server_start",
        serde_json::json!({
            "port": port,
            "distDir": config.dist_dir.display().to_string(),
            "staticMaxAgeSeconds": config.static_max_age_seconds,
        }),
    );

    let log_config = config.clone();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app(config)).await?;

    log_event(&log_config, LogLevel::Info, "server_stop", serde_json::json!({}));
    Ok(())
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    (
        headers,
        Json(HealthPayload {
            ok: true,
            routes: state.site_routes.len(),
        }),
    )
}

async fn access_log(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    if !response.headers().contains_key(header::CACHE_CONTROL) {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            cache_policy(content_type.as_deref(), state.config.static_max_age_seconds),
        );
    }
    if let Ok(request_id_header) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, request_id_header);
    }

    let status = response.status();
    let level = if status == StatusCode::NOT_FOUND || status.is_success() {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    log_event(
        &state.config,
        level,
        "http_request",
        serde_json::json!({
            "requestId": request_id,
            "method": method,
            "path": path,
            "status": status.as_u16(),
            "knownRoute": state.site_routes.iter().any(|route| *route == path),
            "durationMs": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

fn cache_policy(content_type: Option<&str>, max_age_seconds: u64) -> HeaderValue {
    let is_document = content_type
        .map(|value| value.starts_with("text/html"))
        .unwrap_or(true);

    if is_document || max_age_seconds == 0 {
        return HeaderValue::from_static("no-cache");
    }

    HeaderValue::from_str(&format!("public, max-age={max_age_seconds}"))
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
}

fn parse_u64_with_bounds(value: Option<&str>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(value: Option<&str>, default: LogLevel) -> LogLevel {
    match value
        .map(str::to_ascii_lowercase)
        .as_deref()
        .unwrap_or(default.as_str())
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn log_event(config: &SiteConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}
