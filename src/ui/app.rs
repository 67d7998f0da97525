//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui_timing;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::payments::PaymentStatus;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::core::{ActionCommand, RefreshCommand};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub page_size: u32,
}

impl UIConfig {
    pub fn new(with_background_color: bool, page_size: u32) -> Self {
        Self {
            with_background_color,
            page_size,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying payments and gateway status.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The gateway environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from worker tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Sends refresh commands to the fetch worker.
    refresh_sender: mpsc::Sender<RefreshCommand>,

    /// Sends status-update commands to the action worker.
    action_sender: mpsc::Sender<ActionCommand>,

    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,

    /// UI configuration for the dashboard.
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        refresh_sender: mpsc::Sender<RefreshCommand>,
        action_sender: mpsc::Sender<ActionCommand>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            refresh_sender,
            action_sender,
            shutdown_sender,
            ui_config,
        }
    }

    /// Transitions to the dashboard and issues the mount refresh.
    fn mount_dashboard(&mut self) {
        let mut state = DashboardState::new(
            self.environment.clone(),
            self.start_time,
            self.ui_config.clone(),
        );
        issue_refresh(&mut state, &self.refresh_sender);
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Bumps the refresh generation and hands the command to the fetch worker.
fn issue_refresh(state: &mut DashboardState, refresh_sender: &mpsc::Sender<RefreshCommand>) {
    let command = state.begin_refresh();
    // A lost command surfaces through the stall marker; the operator can
    // retry with the refresh key.
    let _ = refresh_sender.try_send(command);
}

/// Handles a key press while the dashboard is shown.
fn handle_dashboard_key(
    code: KeyCode,
    state: &mut DashboardState,
    refresh_sender: &mpsc::Sender<RefreshCommand>,
    action_sender: &mpsc::Sender<ActionCommand>,
) {
    match code {
        KeyCode::Left => {
            if state.page_back() {
                issue_refresh(state, refresh_sender);
            }
        }
        KeyCode::Right => {
            if state.page_forward() {
                issue_refresh(state, refresh_sender);
            }
        }
        KeyCode::Up => state.select_previous(),
        KeyCode::Down => state.select_next(),
        KeyCode::Char('f') => state.toggle_filter(),
        KeyCode::Char('r') => issue_refresh(state, refresh_sender),
        KeyCode::Char('a') => submit_action(state, action_sender, PaymentStatus::Approved),
        KeyCode::Char('x') => submit_action(state, action_sender, PaymentStatus::Rejected),
        _ => {}
    }
}

/// Sends a status update for the selected row, if it is still pending.
/// No local mutation happens here: the row changes only after the refresh
/// that follows a successful update.
fn submit_action(
    state: &mut DashboardState,
    action_sender: &mpsc::Sender<ActionCommand>,
    status: PaymentStatus,
) {
    if let Some(record) = state.selected_pending() {
        let _ = action_sender.try_send(ActionCommand {
            payment_id: record.id.clone(),
            status,
        });
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            // Add event to dashboard queue if it exists
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Update the state based on the current screen
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
            // A successful status update asks for a full refresh.
            if state.take_needs_refresh() {
                issue_refresh(state, &app.refresh_sender);
            }
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= ui_timing::splash_duration() {
                app.mount_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(ui_timing::key_poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // A raised failure notice captures every key.
                if let Screen::Dashboard(state) = &mut app.current_screen {
                    if state.dismiss_modal() {
                        continue;
                    }
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    // Send shutdown signal to workers
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any other key press skips the splash screen
                        app.mount_dashboard();
                    }
                    Screen::Dashboard(state) => {
                        handle_dashboard_key(
                            key.code,
                            state,
                            &app.refresh_sender,
                            &app.action_sender,
                        );
                    }
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
