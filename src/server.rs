use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    routing::{get, post},
    Json, Router,
};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tokio::sync::{broadcast, Mutex};
use tokio_stream::{wrappers::BroadcastStream, StreamExt};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::api::{ApiGenerateRequest, ApiGenerateResponse};
use roastscope::compose::{compose_result, ComposeOptions};
use roastscope::config::{AppConfig, DefaultsConfig};
use roastscope::official::OfficialProvider;
use roastscope::roast::{generate_roast, RoastOptions};
use roastscope::seed::{generate_deterministic_seed, generate_random_seed};
use roastscope::OfficialHoroscope;

#[derive(Clone)]
struct AppState {
    provider: OfficialProvider,
    defaults: DefaultsConfig,
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<StreamEvent>>>>,
}

#[derive(Clone, serde::Serialize)]
struct StreamEvent {
    event: String,
    message: String,
    timestamp_ms: u128,
}

#[derive(serde::Deserialize)]
struct StreamQuery {
    request_id: String,
}

static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let (config, _) = AppConfig::load(None)?;
    let state = AppState {
        provider: OfficialProvider::from_config(&config.provider)?,
        defaults: config.defaults,
        channels: Arc::new(Mutex::new(HashMap::new())),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/generate", post(generate_handler))
        .route("/api/generate/stream", get(stream_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    info!(%addr, "starting roastscope server");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiGenerateRequest>,
) -> Result<Json<ApiGenerateResponse>, (StatusCode, String)> {
    let request_id = request
        .request_id
        .clone()
        .unwrap_or_else(generate_request_id);
    let input = request
        .into_input(&state.defaults)
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    let channel = get_or_create_channel(&state, &request_id).await;
    send_event(&channel, "start", "Resolving seed");

    let date = input.day.resolve_date();
    let seed = match input.seed {
        Some(seed) => seed,
        None if input.deterministic => generate_deterministic_seed(input.sign, &date, input.cringe)
            .map_err(|err| (StatusCode::BAD_REQUEST, err))?,
        None => generate_random_seed(),
    };

    send_event(&channel, "roasting", "Generating roast text");
    let roast = generate_roast(&RoastOptions {
        sign: input.sign,
        day: input.day,
        cringe: input.cringe,
        seed,
    });

    let mut warnings = Vec::new();
    let official = if input.mode.needs_official() {
        send_event(&channel, "fetching", "Fetching official horoscope");
        let (official, warning) = state.provider.fetch_or_fallback(input.sign, input.day).await;
        if let Some(warning) = warning {
            send_event(&channel, "fallback", "Provider down, using fallback text");
            warnings.push(warning);
        }
        official
    } else {
        OfficialHoroscope::default()
    };

    send_event(&channel, "composing", "Composing final horoscope");
    let result = compose_result(ComposeOptions {
        mode: input.mode,
        official,
        roast,
        cringe: input.cringe,
        seed,
    });

    send_event(&channel, "done", "Generation complete");
    schedule_cleanup(state.channels.clone(), request_id.clone());

    let response = ApiGenerateResponse::from_result(result, &input, seed, date, warnings, request_id);
    Ok(Json(response))
}

async fn stream_handler(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>, StatusCode>
{
    let sender = get_or_create_channel(&state, &query.request_id).await;
    let receiver = sender.subscribe();
    let stream = BroadcastStream::new(receiver).filter_map(|event| match event {
        Ok(event) => {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok(Event::default().data(data)))
        }
        Err(_) => None,
    });

    send_event(&sender, "connected", "Streaming generation status");
    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(8))))
}

async fn get_or_create_channel(
    state: &AppState,
    request_id: &str,
) -> broadcast::Sender<StreamEvent> {
    let mut guard = state.channels.lock().await;
    if let Some(sender) = guard.get(request_id) {
        return sender.clone();
    }
    let (sender, _) = broadcast::channel(32);
    guard.insert(request_id.to_string(), sender.clone());
    sender
}

fn send_event(sender: &broadcast::Sender<StreamEvent>, event: &str, message: &str) {
    let _ = sender.send(StreamEvent {
        event: event.to_string(),
        message: message.to_string(),
        timestamp_ms: now_ms(),
    });
}

fn schedule_cleanup(
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<StreamEvent>>>>,
    request_id: String,
) {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(10)).await;
        let mut guard = channels.lock().await;
        guard.remove(&request_id);
    });
}

fn generate_request_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{}", now_ms(), counter)
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
