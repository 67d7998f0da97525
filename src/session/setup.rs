//! Session setup and initialization

use crate::consts::cli_consts::{COMMAND_QUEUE_SIZE, EVENT_QUEUE_SIZE};
use crate::environment::Environment;
use crate::events::Event;
use crate::gateway::GatewayClient;
use crate::workers::core::{ActionCommand, RefreshCommand, WorkerConfig};
use crate::workers::start_workers;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Sends refresh commands to the fetch worker
    pub refresh_sender: mpsc::Sender<RefreshCommand>,
    /// Sends status-update commands to the action worker
    pub action_sender: mpsc::Sender<ActionCommand>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Gateway the session is pointed at
    pub environment: Environment,
    /// Records requested per page, fixed for the session
    pub page_size: u32,
}

/// Sets up a console session.
///
/// Handles the common setup required for both TUI and headless modes:
/// builds the worker/UI channels, the gateway client, and the spawned
/// worker tasks. No state is read from disk; the session starts empty and
/// is hydrated from the gateway by the first refresh.
pub fn setup_session(environment: Environment, page_size: u32) -> SessionData {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (refresh_sender, refresh_receiver) = mpsc::channel::<RefreshCommand>(COMMAND_QUEUE_SIZE);
    let (action_sender, action_receiver) = mpsc::channel::<ActionCommand>(COMMAND_QUEUE_SIZE);

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let gateway = GatewayClient::new(environment.clone());
    let config = WorkerConfig::new(page_size);

    let join_handles = start_workers(
        gateway,
        config,
        event_sender,
        refresh_receiver,
        action_receiver,
        &shutdown_sender,
    );

    SessionData {
        event_receiver,
        refresh_sender,
        action_sender,
        join_handles,
        shutdown_sender,
        environment,
        page_size,
    }
}
