use reqwest::Client;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use hostelry_primitives::models::dtos::notification_dto::NotificationDto;
use hostelry_primitives::models::AppConfig;

/// One unit of push work: a persisted notification addressed to a named
/// recipient channel.
#[derive(Debug, Clone, Serialize)]
pub struct PushPayload {
    pub recipient: String,
    pub notification: NotificationDto,
}

const QUEUE_DEPTH: usize = 1024;

/// Producer half of the dispatch queue. Enqueueing never blocks and never
/// fails the caller: a full or closed queue is logged and the payload is
/// dropped, matching the fire-and-forget contract.
#[derive(Clone)]
pub struct PushSender {
    tx: mpsc::Sender<PushPayload>,
}

impl PushSender {
    pub fn enqueue(&self, payload: PushPayload) {
        if let Err(e) = self.tx.try_send(payload) {
            warn!("push notification dropped: {}", e);
        }
    }
}

/// Creates the dispatch queue and spawns the background worker that drains
/// it. Worker failures are logged and swallowed; producers are never told.
pub fn spawn_push_dispatcher(http_client: Client, config: &AppConfig) -> PushSender {
    let (tx, rx) = mpsc::channel::<PushPayload>(QUEUE_DEPTH);
    let endpoint = config.push.endpoint_url.clone();

    tokio::spawn(dispatch_loop(http_client, endpoint, rx));

    PushSender { tx }
}

async fn dispatch_loop(
    client: Client,
    endpoint: Option<String>,
    mut rx: mpsc::Receiver<PushPayload>,
) {
    while let Some(payload) = rx.recv().await {
        match &endpoint {
            Some(url) => {
                let result = client
                    .post(format!("{}/{}", url, payload.recipient))
                    .json(&payload)
                    .send()
                    .await;

                match result {
                    Ok(resp) if resp.status().is_success() => {
                        debug!(recipient = %payload.recipient, "push delivered");
                    }
                    Ok(resp) => {
                        warn!(
                            recipient = %payload.recipient,
                            status = %resp.status(),
                            "push transport rejected notification"
                        );
                    }
                    Err(e) => {
                        warn!(recipient = %payload.recipient, "push delivery failed: {}", e);
                    }
                }
            }
            None => {
                // No transport configured; deliveries are observable in logs.
                debug!(
                    recipient = %payload.recipient,
                    title = %payload.notification.title,
                    "push transport disabled, notification persisted only"
                );
            }
        }
    }
}
