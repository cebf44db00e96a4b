use std::{path::PathBuf, sync::Arc};

use tokio::sync::mpsc;

use super::{files, service, templates, LogKind, Message, Request};
use crate::config::{Config, NginxPaths};

/// Handle for talking to the worker task.
pub struct WorkerEndpoint {
    /// Sender for requests from the dashboard.
    pub tx: mpsc::Sender<Request>,
    /// Receiver for results.
    pub rx: mpsc::Receiver<Message>,
}

/// Spawn the background task that executes requests.
pub fn spawn_worker(config: Arc<Config>) -> WorkerEndpoint {
    let (req_tx, req_rx) = mpsc::channel::<Request>(16);
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);

    tokio::spawn(dispatch_loop(config, req_rx, msg_tx));

    WorkerEndpoint {
        tx: req_tx,
        rx: msg_rx,
    }
}

async fn dispatch_loop(
    config: Arc<Config>,
    mut req_rx: mpsc::Receiver<Request>,
    msg_tx: mpsc::Sender<Message>,
) {
    while let Some(request) = req_rx.recv().await {
        tracing::debug!(?request, "dispatching");
        let config = Arc::clone(&config);
        let msg_tx = msg_tx.clone();
        tokio::spawn(async move {
            let message = execute(&config, request).await;
            if msg_tx.send(message).await.is_err() {
                tracing::debug!("dashboard closed before result arrived");
            }
        });
    }
}

/// Run one request to completion.
pub async fn execute(config: &Config, request: Request) -> Message {
    let paths = &config.paths;
    match request {
        Request::Status => Message::Status(service::check_status(&config.service.status).await),
        Request::TestConfig => Message::Output(service::test_config(&config.service.test).await),
        Request::Service(action) => {
            Message::Output(service::control(action, &config.service).await)
        }
        Request::ViewConfig => Message::Output(files::view_main_config(&paths.main_config).await),
        Request::ViewLog(kind) => Message::Output(
            files::tail_log(kind, log_files(paths, kind), config.log_tail_lines).await,
        ),
        Request::ListSites => Message::Sites(files::list_sites(&paths.sites_available).await),
        Request::ViewSite(name) => {
            Message::Output(files::view_site(&name, &paths.sites_available).await)
        }
        Request::AddSite { kind, name } => {
            Message::SitesChanged(templates::add_site(kind, &name, &paths.sites_available).await)
        }
        Request::DeleteSite(name) => {
            Message::SitesChanged(files::delete_site(&name, &paths.sites_available).await)
        }
        Request::ListProxies => Message::Proxies(files::list_proxies(paths).await),
        Request::AddProxy { kind, target } => {
            Message::ProxiesChanged(templates::add_proxy(kind, &target, paths).await)
        }
    }
}

fn log_files(paths: &NginxPaths, kind: LogKind) -> &[PathBuf] {
    match kind {
        LogKind::Error => &paths.error_log,
        LogKind::Access => &paths.access_log,
    }
}
