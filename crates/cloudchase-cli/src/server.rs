use std::convert::Infallible;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    extract::{
        DefaultBodyLimit, Multipart, Path, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::{StatusCode, Uri, header},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use cloudchase::{
    DashboardOptions, Fragment, PageContext, PageKey, Upload, View, assets::BUNDLED_ASSETS,
    render_error, render_not_found, upload::UPLOAD_FIELD,
};
use futures::{Stream, stream};
use tokio::net::TcpSocket;
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::{Level, debug, error, warn};

use crate::server_utils::{
    CustomOnResponse, find_open_port, log_server_start, record_uri, shutdown_signal,
};

#[derive(Clone)]
struct AppState {
    options: Arc<DashboardOptions>,
}

pub async fn start_web_server(options: DashboardOptions, host: bool, port: u16) -> io::Result<()> {
    let start_time = quanta::Instant::now();

    // run it with hyper, if --host 0.0.0.0 otherwise localhost
    let addr = if host {
        IpAddr::from([0, 0, 0, 0])
    } else {
        IpAddr::from([127, 0, 0, 1])
    };

    let port = find_open_port(&addr, port).await?;
    let socket = TcpSocket::new_v4()?;
    let _ = socket.set_reuseaddr(true);
    socket.bind(SocketAddr::new(addr, port))?;

    let listener = socket.listen(1024)?;
    let local_addr = listener.local_addr()?;

    debug!("listening on {}", local_addr);

    for asset in BUNDLED_ASSETS {
        let path = asset.path(&options.assets);
        if !path.is_file() {
            warn!(name: "assets", "{} is missing, the prediction page will fail until it exists", path.display());
        }
    }

    log_server_start(start_time, host, local_addr);

    axum::serve(listener, router(Arc::new(options)))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

fn router(options: Arc<DashboardOptions>) -> Router {
    let assets = ServeDir::new(&options.assets.assets_dir);

    Router::new()
        .route("/", get(show_home))
        .route(
            &PageKey::ModelPrediction.path(),
            get(show_prediction)
                .post(run_prediction)
                .layer(DefaultBodyLimit::disable()),
        )
        .route("/{page}", get(show_page))
        .nest_service(&options.assets.url_prefix, assets)
        .fallback(not_found)
        .layer(middleware::from_fn(record_uri))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(CustomOnResponse),
        )
        .with_state(AppState { options })
}

async fn show_home(State(state): State<AppState>) -> Response {
    render_page(&state.options, PageKey::Home, Upload::Missing)
}

async fn show_prediction(State(state): State<AppState>) -> Response {
    render_page(&state.options, PageKey::ModelPrediction, Upload::Missing)
}

async fn show_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match PageKey::from_slug(&slug) {
        Some(key) => render_page(&state.options, key, Upload::Missing),
        None => html_response(
            StatusCode::NOT_FOUND,
            render_not_found(&state.options, &slug),
            Duration::ZERO,
        ),
    }
}

async fn run_prediction(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let upload = match multipart {
        Ok(multipart) => read_upload(multipart).await.map_err(|err| err.to_string()),
        Err(rejection) => Err(rejection.to_string()),
    };

    match upload {
        Ok(upload) => {
            debug!(name: "upload", "{:?}", upload);
            render_page(&state.options, PageKey::ModelPrediction, upload)
        }
        Err(message) => {
            warn!(name: "upload", "malformed upload: {}", message);
            html_response(
                StatusCode::BAD_REQUEST,
                render_error(PageKey::ModelPrediction, &state.options, &message),
                Duration::ZERO,
            )
        }
    }
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    html_response(
        StatusCode::NOT_FOUND,
        render_not_found(&state.options, uri.path()),
        Duration::ZERO,
    )
}

/// Finds the upload field and classifies it by file name. The file's bytes are never read.
async fn read_upload(mut multipart: Multipart) -> Result<Upload, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            return Ok(Upload::from_file_name(field.file_name()));
        }
    }

    Ok(Upload::Missing)
}

/// One render pass over a fresh context; nothing is kept between requests.
fn render_page(options: &DashboardOptions, key: PageKey, upload: Upload) -> Response {
    let mut ctx = PageContext::new(options, upload);

    match cloudchase::render(key, &mut ctx) {
        Ok(view) => html_response(StatusCode::OK, view, options.progress_step),
        Err(err) => {
            error!(name: "render", "{} could not be rendered: {}", key, err);
            html_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                render_error(key, options, &err),
                Duration::ZERO,
            )
        }
    }
}

fn html_response(status: StatusCode, view: View, step: Duration) -> Response {
    let headers = [(header::CONTENT_TYPE, "text/html; charset=utf-8")];

    if !view.has_progress() {
        return (status, headers, view.into_string()).into_response();
    }

    let body = Body::from_stream(paced_fragments(view.into_fragments(), step));
    (status, headers, body).into_response()
}

/// Streams fragments in order, waiting one tick of `step` before each progress frame.
fn paced_fragments(
    fragments: Vec<Fragment>,
    step: Duration,
) -> impl Stream<Item = Result<String, Infallible>> + Send + 'static {
    let ticker = (!step.is_zero()).then(|| tokio::time::interval(step));

    stream::unfold(
        (fragments.into_iter(), ticker),
        |(mut fragments, mut ticker)| async move {
            let fragment = fragments.next()?;
            if fragment.is_progress() {
                if let Some(ticker) = ticker.as_mut() {
                    ticker.tick().await;
                }
            }

            Some((Ok(fragment.into_string()), (fragments, ticker)))
        },
    )
}
