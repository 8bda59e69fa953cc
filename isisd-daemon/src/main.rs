//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

mod config;

use clap::{App, Arg};
use config::{Config, LoggingFileRotation, LoggingFmtStyle};
use isisd::instance::Instance;
use isisd::southbound::rx::process_iface_update;
use isisd::tasks::messages::ProtocolOutputMsg;
use isisd_northbound::configuration::Datastore;
use isisd_utils::southbound::{InterfaceFlags, InterfaceUpdateMsg};
use isisd_yang::data::DataTree;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};
use tracing_appender::rolling;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

fn init_tracing(config: &config::Logging) {
    // Enable logging to journald.
    let journald = config.journald.enabled.then(|| {
        tracing_journald::layer().expect("couldn't connect to journald")
    });

    // Enable logging to a file.
    let file = config.file.enabled.then(|| {
        let file_appender = match config.file.rotation {
            LoggingFileRotation::Never => {
                rolling::never(&config.file.dir, &config.file.name)
            }
            LoggingFileRotation::Hourly => {
                rolling::hourly(&config.file.dir, &config.file.name)
            }
            LoggingFileRotation::Daily => {
                rolling::daily(&config.file.dir, &config.file.name)
            }
        };

        let log_level_filter = LevelFilter::from_level(tracing::Level::TRACE);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(file_appender)
            .with_target(false)
            .with_thread_ids(config.file.fmt.show_thread_id)
            .with_file(config.file.fmt.show_source)
            .with_line_number(config.file.fmt.show_source)
            .with_ansi(config.file.fmt.colors);
        let layer = match config.file.fmt.style {
            LoggingFmtStyle::Compact => layer.compact().boxed(),
            LoggingFmtStyle::Full => layer.boxed(),
            LoggingFmtStyle::Json => layer.json().boxed(),
            LoggingFmtStyle::Pretty => layer.pretty().boxed(),
        };
        layer.with_filter(log_level_filter)
    });

    // Enable logging to stdout.
    let stdout = config.stdout.enabled.then(|| {
        let log_level_filter = LevelFilter::from_level(tracing::Level::TRACE);
        let layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(config.stdout.fmt.show_thread_id)
            .with_file(config.stdout.fmt.show_source)
            .with_line_number(config.stdout.fmt.show_source)
            .with_ansi(config.stdout.fmt.colors);
        let layer = match config.stdout.fmt.style {
            LoggingFmtStyle::Compact => layer.compact().boxed(),
            LoggingFmtStyle::Full => layer.boxed(),
            LoggingFmtStyle::Json => layer.json().boxed(),
            LoggingFmtStyle::Pretty => layer.pretty().boxed(),
        };
        layer.with_filter(log_level_filter)
    });

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive("isisd=debug".parse().unwrap())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(env_filter)
        .with(journald)
        .with(file)
        .with(stdout)
        .init();
}

// Seeds the interface table with the interfaces listed in the daemon
// configuration.
fn init_interfaces(instance: &mut Instance, config: &config::System) {
    for iface in &config.interfaces {
        let mut flags = InterfaceFlags::empty();
        if iface.operative {
            flags.insert(InterfaceFlags::OPERATIVE);
        }
        if iface.loopback {
            flags.insert(InterfaceFlags::LOOPBACK);
        } else {
            flags.insert(InterfaceFlags::BROADCAST);
        }

        let msg = InterfaceUpdateMsg {
            ifname: iface.name.clone(),
            vrf: iface.vrf.clone(),
            flags,
        };
        if let Err(error) = process_iface_update(instance, msg) {
            error.log();
        }
    }
}

// Commits a configuration snapshot read from a JSON file.
fn commit_file(datastore: &mut Datastore<Instance>, path: &str) {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(error) => {
            error!(%path, %error, "failed to read configuration file");
            return;
        }
    };
    let candidate = match DataTree::from_json_str(&data) {
        Ok(candidate) => candidate,
        Err(error) => {
            error!(%path, %error, "failed to parse configuration file");
            return;
        }
    };

    match datastore.commit(candidate) {
        Ok(report) => {
            info!(
                %path,
                changes = report.changes,
                errors = report.errors.len(),
                "configuration committed"
            );
        }
        Err(error) => {
            error.log();
        }
    }
}

// Stand-in for the LSDB, SPF and PDU I/O tasks: logs every request handed
// off by the instance.
async fn protocol_output(
    mut protocol_output_rx: UnboundedReceiver<ProtocolOutputMsg>,
) {
    while let Some(msg) = protocol_output_rx.recv().await {
        debug!(?msg, "protocol request");
    }
}

fn build_version() -> String {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    match rustc_tools_util::get_version_info!().commit_hash {
        Some(hash) => format!("{VERSION} ({hash})"),
        None => VERSION.to_owned(),
    }
}

// ===== main =====

fn main() {
    // Parse command-line parameters.
    let matches = App::new("IS-IS configuration daemon")
        .version(build_version().as_str())
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("file")
                .help("Specify an alternative configuration file."),
        )
        .arg(
            Arg::with_name("snapshots")
                .value_name("snapshot")
                .multiple(true)
                .help("JSON configuration snapshots, committed in order."),
        )
        .get_matches();

    // Read configuration file.
    let config_file = matches.value_of("config");
    let config = Config::load(config_file);
    let snapshots = matches
        .values_of("snapshots")
        .map(|values| values.map(str::to_owned).collect::<Vec<_>>())
        .unwrap_or_default();

    // Initialize tracing.
    init_tracing(&config.logging);

    // We're ready to go!
    info!("starting up");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to create async runtime")
        .block_on(async {
            let (mut instance, protocol_output_rx) = Instance::with_channels();
            let output_task =
                tokio::task::spawn(protocol_output(protocol_output_rx));

            init_interfaces(&mut instance, &config.system);

            let mut datastore = Datastore::new(instance);
            for path in &snapshots {
                commit_file(&mut datastore, path);
            }

            // Closing the instance channels terminates the output task.
            drop(datastore);
            let _ = output_task.await;
        });

    info!("exiting");
}
