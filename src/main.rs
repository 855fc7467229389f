use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use secret_board::common::common::{http_check_host_and_port_used, setup_logging};
use secret_board::config::structs::configuration::Configuration;
use secret_board::database::structs::database_connector::DatabaseConnector;
use secret_board::database::traits::database_backend::DatabaseBackend;
use secret_board::http::http::http_service;
use secret_board::http::structs::board_service_data::BoardServiceData;
use secret_board::structs::Cli;
use secret_board::tracking::structs::tracking_manager::TrackingManager;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard: Option<ClientInitGuard> = if config.sentry_config.enabled {
        Some(sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        })))
    } else {
        None
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let database: Arc<dyn DatabaseBackend> = match DatabaseConnector::new(&config, args.create_database).await {
                Ok(connector) => Arc::new(connector),
                Err(error) => {
                    sentry::capture_error(&error);
                    error!("[BOOT] Unable to open the database: {error}");
                    exit(1);
                }
            };
            let tracking = Arc::new(TrackingManager::new(config.tracking.pepper.clone()));

            let mut http_futures = Vec::new();
            let mut http_handles = Vec::new();

            for http_server_object in &config.http_server {
                if !http_server_object.enabled {
                    continue;
                }
                if let Err(error) = http_check_host_and_port_used(&http_server_object.bind_address) {
                    error!("[BOOT] {error}");
                    exit(1);
                }
                let address: SocketAddr = match http_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[BOOT] Invalid bind address {}: {error}", http_server_object.bind_address);
                        exit(1);
                    }
                };

                let data = Arc::new(BoardServiceData::new(
                    tracking.clone(),
                    database.clone(),
                    config.clone(),
                    Arc::new(http_server_object.clone())
                ));
                let (handle, future) = match http_service(address, data).await {
                    Ok(server) => server,
                    Err(error) => {
                        error!("[BOOT] {error}");
                        exit(1);
                    }
                };
                http_handles.push(handle);
                http_futures.push(future);
            }

            if http_futures.is_empty() {
                error!("[BOOT] No enabled http_server entries, nothing to serve");
                exit(1);
            }

            let servers = tokio::spawn(try_join_all(http_futures));

            tokio::select! {
                result = servers => {
                    match result {
                        Ok(Ok(_)) => info!("[HTTP] All servers stopped"),
                        Ok(Err(error)) => {
                            sentry::capture_error(&error);
                            error!("[HTTP] Server stopped with an error: {error}");
                        }
                        Err(error) => error!("[HTTP] Server task failed: {error}"),
                    }
                    Ok(())
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    for handle in http_handles {
                        handle.stop(true).await;
                    }
                    info!("Server shutting down completed");
                    Ok(())
                }
            }
        })
}
