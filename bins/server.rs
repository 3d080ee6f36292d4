use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn init_logging() {
    // load .env before reading RUST_LOG / LOG_FORMAT
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "auth-server", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "auth-server",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "auth-server", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    if cfg.auth.jwt_secret.is_none() {
        warn!(service = "auth-server", event = "config_warning", "JWT_SECRET is not set; /login will answer 500");
    }
    let worker_threads = cfg.server.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "auth-server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "auth-server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "auth server starting"
    );

    // run_with_config returns once the graceful shutdown has completed
    match rt.block_on(server::run_with_config(cfg)) {
        Ok(()) => {
            info!(service = "auth-server", event = "stop", %service_id, pid, "auth server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "auth-server", event = "run_failed", error = %e, "auth server exited with error");
            std::process::ExitCode::FAILURE
        }
    }
}
