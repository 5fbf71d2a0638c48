//! itinerary-pdf – itinerary PDF server and offline renderer.
//!
//! Usage:
//!   itinerary-pdf                                 serve HTTP (HOST/PORT from env)
//!   itinerary-pdf render <input.json> [output.pdf]
//!
//! If `output.pdf` is omitted the PDF is written next to the input file with
//! the same stem (e.g. `goa.json` → `goa.pdf`).

use std::{env, fs, path::PathBuf, process};

use anyhow::Context;
use tokio::signal;

use itinerary_pdf::config::Config;
use itinerary_pdf::itinerary::ItineraryData;
use itinerary_pdf::pipeline::generate_pdf;
use itinerary_pdf::server::{app, AppState};

fn main() {
    dotenvy::dotenv().ok();
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();

    let args: Vec<String> = env::args().collect();
    let config = Config::from_env();

    let result = match args.get(1).map(String::as_str) {
        None => serve(config),
        Some("render") => render(&args, &config),
        Some("--help") | Some("-h") => {
            print_usage(&args[0]);
            process::exit(0);
        }
        Some(other) => {
            eprintln!("Unknown command: {other}");
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn serve(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("tokio runtime")?;
    runtime.block_on(async move {
        let state = AppState::new(&config).with_context(|| {
            format!(
                "ALLOWED_ORIGIN {:?} is not a valid header value",
                config.cors.allowed_origin
            )
        })?;

        let addr = format!("{}:{}", config.server.host, config.server.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        log::info!(
            "Itinerary PDF server v{} listening on {}",
            env!("CARGO_PKG_VERSION"),
            addr
        );
        log::info!("Allowed origin: {}", config.cors.allowed_origin);

        axum::serve(listener, app(state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        log::info!("Server shutdown complete");
        Ok(())
    })
}

fn render(args: &[String], config: &Config) -> anyhow::Result<()> {
    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;

    for (positional, arg) in args.iter().skip(2).enumerate() {
        match positional {
            0 => input_path = Some(PathBuf::from(arg)),
            1 => output_path = Some(PathBuf::from(arg)),
            _ => {
                eprintln!("Unexpected argument: {arg}");
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    let input = match input_path {
        Some(p) => p,
        None => {
            eprintln!("Error: no input file specified.");
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    // Default output: same directory + same stem as input, but with .pdf
    let output = output_path.unwrap_or_else(|| {
        let mut o = input.clone();
        o.set_extension("pdf");
        o
    });

    let body = fs::read(&input)
        .with_context(|| format!("reading '{}'", input.display()))?;
    let data = ItineraryData::from_json_slice(&body)
        .with_context(|| format!("parsing '{}'", input.display()))?;
    data.validate()?;

    let (bytes, layout) = generate_pdf(&data, &config.render)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("creating output dir")?;
        }
    }
    fs::write(&output, &bytes)
        .with_context(|| format!("writing '{}'", output.display()))?;

    let pages = layout.pages.len();
    eprintln!(
        "Wrote '{}' ({} bytes, {} page{})",
        output.display(),
        bytes.len(),
        pages,
        if pages == 1 { "" } else { "s" }
    );
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => log::info!("Received Ctrl+C, shutting down"),
        _ = terminate => log::info!("Received SIGTERM, shutting down"),
    }
}

fn print_usage(prog: &str) {
    eprintln!("itinerary-pdf – itinerary JSON to PDF service");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog}                                  Serve HTTP");
    eprintln!("  {prog} render <input.json> [output.pdf]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <input.json>   Itinerary payload, as posted to /api/generate-pdf");
    eprintln!("  [output.pdf]   Output path  (default: same stem as input with .pdf)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  HOST            Bind address (default: 0.0.0.0)");
    eprintln!("  PORT            Listen port (default: 5000)");
    eprintln!("  ALLOWED_ORIGIN  CORS origin (default: http://localhost:5173)");
    eprintln!("  RUST_LOG        Log filter (default: info)");
}
