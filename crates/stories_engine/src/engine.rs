use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use stories_logging::{stories_debug, stories_warn};

use crate::decode::decode_hits;
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError};

enum EngineCommand {
    Fetch { url: String },
}

/// Runs fetches on a background tokio runtime and hands results back over a channel.
///
/// Requests are not cancelled when a newer one is issued; every request
/// produces exactly one [`EngineEvent::FetchCompleted`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> io::Result<Self> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("stories-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx).await;
                    });
                }
                stories_debug!("Engine command channel closed, shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, url: impl Into<String>) {
        if self.cmd_tx.send(EngineCommand::Fetch { url: url.into() }).is_err() {
            stories_warn!("Engine thread is gone; fetch dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { url } => {
            let result = match fetcher.fetch(&url).await {
                Ok(output) => {
                    let meta = &output.metadata;
                    stories_debug!(
                        "Fetched {} bytes from {} (final {}, {} redirects, content type {:?})",
                        meta.byte_len,
                        meta.original_url,
                        meta.final_url,
                        meta.redirect_count,
                        meta.content_type
                    );
                    decode_hits(&output.bytes)
                        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
                }
                Err(err) => Err(err),
            };
            let _ = event_tx.send(EngineEvent::FetchCompleted { url, result });
        }
    }
}
