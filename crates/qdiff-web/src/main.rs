use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use qdiff_classifiers::{DifficultyAnalyzer, ModelArtifacts};
use qdiff_web::cli::{Cli, Commands};
use qdiff_web::presenter::{ResultView, EMPTY_QUESTION_WARNING};
use qdiff_web::{run_server, AppConfig, AppState, ConfigOverrides};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            address,
            port,
            artifacts,
            verbose,
        } => {
            init_logging(verbose);

            let overrides = ConfigOverrides {
                address,
                port,
                artifacts_dir: artifacts,
            };
            let config = AppConfig::load(&config, &overrides)?;
            let addr = config.server.socket_addr()?;

            let metrics_handle = init_metrics()?;
            let state = AppState::load(&config, Some(metrics_handle));

            println!();
            println!("  🎓 Question Difficulty Analyzer");
            println!();
            println!("  Artifacts: {}", config.artifacts.dir.display());
            println!(
                "  Model:     {}",
                if state.is_model_loaded() {
                    "loaded"
                } else {
                    "unavailable (see log)"
                }
            );
            println!();
            println!("  Open http://{} in your browser", addr);
            println!();

            run_server(state, addr).await?;
        }

        Commands::Predict {
            question,
            config,
            artifacts,
            json,
            verbose,
        } => {
            init_logging(verbose);

            let overrides = ConfigOverrides {
                artifacts_dir: artifacts,
                ..Default::default()
            };
            let config = AppConfig::load(&config, &overrides)?;

            let artifacts = ModelArtifacts::load(&config.artifacts)?;
            let analyzer = DifficultyAnalyzer::new(Arc::new(artifacts))?;

            match analyzer.analyze(&question) {
                Ok(prediction) => {
                    let view = ResultView::from_prediction(&prediction);
                    if json {
                        println!("{}", serde_json::to_string_pretty(&view)?);
                    } else {
                        print!("{}", view.render_text());
                    }
                }
                Err(qdiff_core::Error::EmptyQuestion) => {
                    eprintln!("{}", EMPTY_QUESTION_WARNING);
                    std::process::exit(2);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "qdiff=debug,qdiff_web=debug,qdiff_classifiers=debug,tower_http=debug"
    } else {
        "qdiff=info,qdiff_web=info,qdiff_classifiers=info,tower_http=warn"
    };

    // Logs go to stderr so `predict --json` output stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "qdiff_requests_total",
        "Total number of analysis requests by endpoint"
    );
    metrics::describe_counter!(
        "qdiff_predictions_total",
        "Total number of predictions by label"
    );
    metrics::describe_counter!(
        "qdiff_rejections_total",
        "Total number of empty questions rejected"
    );
    metrics::describe_counter!("qdiff_errors_total", "Total number of errors by type");
    metrics::describe_histogram!(
        "qdiff_pipeline_latency_us",
        metrics::Unit::Microseconds,
        "Pipeline execution latency in microseconds"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
