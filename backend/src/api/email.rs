use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use resend_rs::{types::CreateEmailBaseOptions, Resend};

use crate::config::EmailConfig;
use crate::error::DeliveryError;
use crate::models::lead_models::LeadFormPayload;
use crate::utils::email_utils::{to_crlf, wrap_text};

const WRAP_WIDTH: usize = 72;

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[automock]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), DeliveryError>;
}

/// Sends through the Resend API from the configured studio address.
pub struct ResendSender {
    client: Resend,
    from: String,
    timeout: Duration,
}

impl ResendSender {
    pub fn new(config: &EmailConfig, timeout: Duration) -> Self {
        Self {
            client: Resend::new(&config.api_key),
            from: config.from.clone(),
            timeout,
        }
    }
}

#[async_trait]
impl EmailSender for ResendSender {
    async fn send(&self, email: OutgoingEmail) -> Result<(), DeliveryError> {
        let options = CreateEmailBaseOptions::new(
            self.from.clone(),
            [email.to.clone()],
            email.subject.clone(),
        )
        .with_text(&email.text);

        tracing::debug!("Sending email via Resend to {}", email.to);
        match tokio::time::timeout(self.timeout, self.client.emails.send(options)).await {
            Ok(Ok(_)) => {
                tracing::info!("Email '{}' accepted by Resend", email.subject);
                Ok(())
            }
            Ok(Err(e)) => Err(DeliveryError::Email(e.to_string())),
            Err(_) => Err(DeliveryError::Email(format!(
                "timed out after {}s",
                self.timeout.as_secs()
            ))),
        }
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

fn finalize_body(text: &str) -> String {
    to_crlf(&wrap_text(text, WRAP_WIDTH))
}

/// Internal notification listing every answer from the form.
pub fn admin_notification(lead: &LeadFormPayload, notify_to: &str) -> OutgoingEmail {
    let finishes = lead.finishes_label();
    let text = format!(
        "A new vision request just came in.\n\n\
         Name: {}\n\
         Contact: {}\n\
         City: {}\n\n\
         Kitchen vibe: {}\n\
         Finish priorities: {}\n\
         Wardrobe: {}\n\
         Shutters: {}\n\
         Partitions: {}\n",
        lead.name.trim(),
        lead.contact.trim(),
        or_dash(&lead.city),
        or_dash(&lead.kitchen_vibe),
        or_dash(&finishes),
        or_dash(&lead.wardrobe),
        or_dash(&lead.shutters),
        or_dash(&lead.partitions),
    );
    OutgoingEmail {
        to: notify_to.to_string(),
        subject: format!("New vision request from {}", lead.name.trim()),
        text: finalize_body(&text),
    }
}

/// Acknowledgement sent back to a submitter who left an email address.
pub fn auto_reply(lead: &LeadFormPayload) -> OutgoingEmail {
    let name = lead.name.trim();
    let text = format!(
        "Hi {},\n\n\
         Thank you for sharing your vision with LUSSO. Our design team has \
         your answers and will reach out shortly to book a callback and \
         start crafting your mix of kitchens, wardrobes, shutters and \
         partitions.\n\n\
         Warm regards,\n\
         The LUSSO studio\n",
        name,
    );
    OutgoingEmail {
        to: lead.contact.trim().to_string(),
        subject: format!("We received your vision, {}", name),
        text: finalize_body(&text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead() -> LeadFormPayload {
        LeadFormPayload {
            name: " Asha ".into(),
            contact: "asha@example.com".into(),
            city: "Pune".into(),
            kitchen_vibe: "Island social".into(),
            finishes: vec!["Warm & natural".into()],
            wardrobe: "Sliding minimalist".into(),
            ..Default::default()
        }
    }

    #[test]
    fn admin_notification_lists_answers() {
        let email = admin_notification(&lead(), "leads@lusso.com");
        assert_eq!(email.to, "leads@lusso.com");
        assert_eq!(email.subject, "New vision request from Asha");
        assert!(email.text.contains("Contact: asha@example.com\r\n"));
        assert!(email.text.contains("Finish priorities: Warm & natural\r\n"));
        assert!(email.text.contains("Partitions: -"));
    }

    #[test]
    fn auto_reply_goes_to_submitter_with_wrapped_body() {
        let email = auto_reply(&lead());
        assert_eq!(email.to, "asha@example.com");
        assert_eq!(email.subject, "We received your vision, Asha");
        assert!(email.text.starts_with("Hi Asha,\r\n"));
        assert!(email.text.split("\r\n").all(|line| line.chars().count() <= WRAP_WIDTH));
    }
}
