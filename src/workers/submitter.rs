//! Status update submission against the gateway

use super::core::{ActionCommand, EventSender};
use crate::events::{Event, EventType, SyncPayload, Worker};
use crate::gateway::Gateway;
use crate::logging::LogLevel;

/// Applies operator decisions to payments through the gateway.
pub struct StatusSubmitter {
    gateway: Box<dyn Gateway>,
    event_sender: EventSender,
}

impl StatusSubmitter {
    pub fn new(gateway: Box<dyn Gateway>, event_sender: EventSender) -> Self {
        Self {
            gateway,
            event_sender,
        }
    }

    /// Apply a single status update and report the outcome. One attempt per
    /// command: a failure is surfaced to the operator, never retried here.
    pub async fn submit(&self, command: ActionCommand) {
        self.event_sender
            .send_action_event(
                format!(
                    "Setting payment {} to {}...",
                    command.payment_id, command.status
                ),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        match self
            .gateway
            .set_status(&command.payment_id, command.status)
            .await
        {
            Ok(()) => {
                let msg = format!("Payment {} set to {}", command.payment_id, command.status);
                self.event_sender
                    .send_event(Event::with_payload(
                        Worker::StatusSubmitter,
                        msg,
                        EventType::Success,
                        LogLevel::Info,
                        SyncPayload::ActionApplied {
                            payment_id: command.payment_id,
                            status: command.status,
                        },
                    ))
                    .await;
            }
            Err(e) => {
                let msg = format!("Failed to update payment {}: {}", command.payment_id, e);
                self.event_sender
                    .send_event(Event::with_payload(
                        Worker::StatusSubmitter,
                        msg,
                        EventType::Error,
                        LogLevel::Error,
                        SyncPayload::ActionFailed {
                            payment_id: command.payment_id,
                            message: e.to_string(),
                        },
                    ))
                    .await;
            }
        }
    }
}
