use chrono::Utc;

use crate::api::email::{admin_notification, auto_reply, EmailSender, OutgoingEmail};
use crate::models::lead_models::{Channel, DeliveryOutcome, LeadFormPayload};
use crate::AppState;

async fn send_email(sender: &dyn EmailSender, channel: Channel, email: OutgoingEmail) -> DeliveryOutcome {
    match sender.send(email).await {
        Ok(()) => DeliveryOutcome::delivered(channel),
        Err(e) => {
            tracing::error!("Failed to send {}: {}", channel, e);
            DeliveryOutcome::failed(channel, e.to_string())
        }
    }
}

/// Runs every configured channel in order: admin email, auto-reply, then
/// the spreadsheet. A failure is recorded and the remaining channels still
/// run.
pub async fn deliver_lead(state: &AppState, lead: &LeadFormPayload) -> Vec<DeliveryOutcome> {
    let mut outcomes = Vec::new();

    if let Some(email) = &state.email {
        let notification = admin_notification(lead, &email.notify_to);
        outcomes.push(send_email(email.sender.as_ref(), Channel::AdminEmail, notification).await);

        if lead.wants_auto_reply() {
            outcomes.push(send_email(email.sender.as_ref(), Channel::AutoReply, auto_reply(lead)).await);
        }
    }

    if let Some(sheets) = &state.sheets {
        let row = lead.spreadsheet_row(Utc::now());
        let outcome = match sheets.append_row(row).await {
            Ok(()) => DeliveryOutcome::delivered(Channel::Spreadsheet),
            Err(e) => {
                tracing::error!("Failed to append lead to spreadsheet: {}", e);
                DeliveryOutcome::failed(Channel::Spreadsheet, e.to_string())
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}
