// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

mod cli;

use std::sync::Arc;
use std::process;
use clap::Parser;
use rustls::crypto::aws_lc_rs;
use serde_json::json;

use tfk8s_common::config::{AppConfig, AppConfigBuilder};
use tfk8s_common::state::State;
use tfk8s_common::telemetry::{error, info, setup_logging};
use tfk8s_provider::crd::utils as crd_utils;
use tfk8s_provider::provider::K8sProvider;
use tfk8s_server::server::{bind, create_router, create_tls_config, handshake_line, serve, shutdown_signal};

use crate::cli::{CliArgs, Commands};

fn load_config(path: Option<&str>) -> AppConfig {
    let mut builder = AppConfigBuilder::default();
    if let Some(path) = path {
        builder.with_file(path);
    }

    builder
        .with_env()
        .build()
        .unwrap_or_else(|e| {
            error!(
                event = "Error",
                error = %e,
            );
            process::exit(1);
        })
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            error!(event = "Error", error = %e);
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    // Install the default aws_lc_rs crypto provider
    let _ = aws_lc_rs::default_provider().install_default();

    let args = CliArgs::parse();

    setup_logging();

    match &args.cmd {
        Some(Commands::Crds) => match crd_utils::generate_crds() {
            Ok(crds) => print!("{}", crds),
            Err(e) => {
                error!(event = "Error", error = %e);
                process::exit(1);
            }
        },
        Some(Commands::Schema) => {
            let provider = K8sProvider::new(Arc::new(State::default()));
            print_json(&provider.schema());
        },
        Some(Commands::Read { type_name, namespace, name }) => {
            let config = load_config(args.config.as_deref());
            let provider = K8sProvider::new(Arc::new(State { config }));

            let configured = provider.configure(&json!({})).await;
            if configured.diagnostics.has_error() {
                print_json(&configured);
                process::exit(1);
            }

            let response = provider
                .read_data_source(type_name, &json!({"metadata": {"name": name, "namespace": namespace}}))
                .await;
            print_json(&response);
            if response.diagnostics.has_error() {
                process::exit(1);
            }
        },
        Some(Commands::Serve) | None => {
            info!(
                event = "Starting",
                version = env!("CARGO_PKG_VERSION"),
            );

            // Load configuration
            let config = load_config(args.config.as_deref());

            // Create necessary resources
            let provider = Arc::new(K8sProvider::new(Arc::new(State { config: config.clone() })));

            let tls_config = if config.server.tls.enabled {
                let tls_config = create_tls_config(&config.server.tls.cert_file, &config.server.tls.key_file)
                    .await
                    .unwrap_or_else(|e| {
                        error!(
                            event = "Error",
                            error = %e,
                        );
                        process::exit(1);
                    });
                Some(tls_config)
            } else {
                None
            };

            let listener = bind(&config.server.address()).unwrap_or_else(|e| {
                error!(
                    event = "Error",
                    error = %e,
                );
                process::exit(1);
            });
            let addr = listener.local_addr().unwrap_or_else(|e| {
                error!(
                    event = "Error",
                    error = %e,
                );
                process::exit(1);
            });

            let handle = axum_server::Handle::new();
            tokio::spawn(shutdown_signal(handle.clone()));

            // Announce the address to the host, then run the plugin server
            println!("{}", handshake_line(&addr, tls_config.is_some()));
            info!(event = "Listening", address = %addr);
            serve(listener, create_router(provider), tls_config, handle).await.unwrap_or_else(|e| {
                error!(
                    event = "Error",
                    error = %e,
                );
                process::exit(1);
            });
            info!(event = "Stopped");
        },
    }
}
