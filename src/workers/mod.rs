//! Worker tasks serving UI commands against the gateway

pub mod core;
pub mod fetcher;
pub mod submitter;

use crate::events::{Event, EventType};
use crate::gateway::GatewayClient;
use crate::logging::LogLevel;
use crate::workers::core::{ActionCommand, EventSender, RefreshCommand, WorkerConfig};
use crate::workers::fetcher::PaymentFetcher;
use crate::workers::submitter::StatusSubmitter;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Spawns the fetch and action workers. Each consumes its own command
/// channel and stops on the shutdown broadcast or when the UI drops the
/// sending half.
pub fn start_workers(
    gateway: GatewayClient,
    config: WorkerConfig,
    event_sender: mpsc::Sender<Event>,
    mut refresh_receiver: mpsc::Receiver<RefreshCommand>,
    mut action_receiver: mpsc::Receiver<ActionCommand>,
    shutdown: &broadcast::Sender<()>,
) -> Vec<JoinHandle<()>> {
    let event_sender = EventSender::new(event_sender);
    let fetcher = PaymentFetcher::new(Box::new(gateway.clone()), event_sender.clone(), &config);
    let submitter = StatusSubmitter::new(Box::new(gateway), event_sender.clone());

    let mut join_handles = Vec::new();

    let mut fetch_shutdown = shutdown.subscribe();
    let fetch_handle = tokio::spawn(async move {
        event_sender
            .send_fetch_event(
                format!("Watching gateway at {}", fetcher.gateway_url()),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        loop {
            tokio::select! {
                _ = fetch_shutdown.recv() => break,
                command = refresh_receiver.recv() => match command {
                    Some(command) => fetcher.refresh(command).await,
                    None => break,
                },
            }
        }
    });
    join_handles.push(fetch_handle);

    let mut action_shutdown = shutdown.subscribe();
    let action_handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = action_shutdown.recv() => break,
                command = action_receiver.recv() => match command {
                    Some(command) => submitter.submit(command).await,
                    None => break,
                },
            }
        }
    });
    join_handles.push(action_handle);

    join_handles
}
