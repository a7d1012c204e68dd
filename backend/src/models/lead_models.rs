use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/start-vision`. Every field is optional on the wire so
/// that a partially filled form still reaches validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadFormPayload {
    pub name: String,
    pub contact: String,
    pub city: String,
    pub kitchen_vibe: String,
    pub finishes: Vec<String>,
    pub wardrobe: String,
    pub shutters: String,
    pub partitions: String,
    // honeypot, hidden from real visitors
    pub website: String,
}

impl LeadFormPayload {
    /// Any value at all in the hidden field, whitespace included, marks a bot.
    pub fn is_bot(&self) -> bool {
        !self.website.is_empty()
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.contact.trim().is_empty() {
            missing.push("contact");
        }
        missing
    }

    /// The contact field takes either a phone number or an email address.
    pub fn wants_auto_reply(&self) -> bool {
        self.contact.contains('@')
    }

    pub fn finishes_label(&self) -> String {
        self.finishes.join(", ")
    }

    pub fn spreadsheet_row(&self, submitted_at: DateTime<Utc>) -> Vec<String> {
        vec![
            submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.name.clone(),
            self.contact.clone(),
            self.city.clone(),
            self.kitchen_vibe.clone(),
            self.finishes_label(),
            self.wardrobe.clone(),
            self.shutters.clone(),
            self.partitions.clone(),
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    AdminEmail,
    AutoReply,
    Spreadsheet,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::AdminEmail => write!(f, "admin email"),
            Channel::AutoReply => write!(f, "auto-reply"),
            Channel::Spreadsheet => write!(f, "spreadsheet"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Delivered,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryOutcome {
    pub channel: Channel,
    pub status: DeliveryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryOutcome {
    pub fn delivered(channel: Channel) -> Self {
        Self { channel, status: DeliveryStatus::Delivered, error: None }
    }

    pub fn failed(channel: Channel, error: impl Into<String>) -> Self {
        Self { channel, status: DeliveryStatus::Failed, error: Some(error.into()) }
    }

    pub fn is_failure(&self) -> bool {
        self.status == DeliveryStatus::Failed
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionResult {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deliveries: Vec<DeliveryOutcome>,
}

impl SubmissionResult {
    pub fn ok() -> Self {
        Self { ok: true, error: None, deliveries: Vec::new() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { ok: false, error: Some(message.into()), deliveries: Vec::new() }
    }

    pub fn with_deliveries(mut self, deliveries: Vec<DeliveryOutcome>) -> Self {
        self.deliveries = deliveries;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn omitted_fields_deserialize_as_empty() {
        let lead: LeadFormPayload = serde_json::from_value(json!({ "name": "Asha" })).unwrap();
        assert_eq!(lead.name, "Asha");
        assert!(lead.finishes.is_empty());
        assert_eq!(lead.missing_required(), vec!["contact"]);
        assert!(!lead.is_bot());
    }

    #[test]
    fn whitespace_only_values_count_as_missing() {
        let lead = LeadFormPayload { name: "  ".into(), contact: "\t".into(), ..Default::default() };
        assert_eq!(lead.missing_required(), vec!["name", "contact"]);
    }

    #[test]
    fn honeypot_and_auto_reply_detection() {
        let lead = LeadFormPayload {
            contact: "+91 98200 00000".into(),
            website: "http://spam.example".into(),
            ..Default::default()
        };
        assert!(lead.is_bot());
        assert!(!lead.wants_auto_reply());
    }

    #[test]
    fn whitespace_in_honeypot_still_marks_a_bot() {
        for filler in [" ", "\t", "\n"] {
            let lead = LeadFormPayload { website: filler.into(), ..Default::default() };
            assert!(lead.is_bot(), "{:?} slipped past the honeypot", filler);
        }
    }

    #[test]
    fn spreadsheet_row_matches_column_order() {
        let lead: LeadFormPayload = serde_json::from_value(json!({
            "name": "Asha",
            "contact": "asha@example.com",
            "city": "Pune",
            "kitchenVibe": "Island social",
            "finishes": ["Warm & natural", "Ultra-durable"],
            "wardrobe": "Sliding minimalist",
            "shutters": "Balance light & privacy",
            "partitions": "Slim metal & glass",
            "website": ""
        }))
        .unwrap();
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        assert_eq!(
            lead.spreadsheet_row(at),
            vec![
                "2025-03-14T09:30:00.000Z",
                "Asha",
                "asha@example.com",
                "Pune",
                "Island social",
                "Warm & natural, Ultra-durable",
                "Sliding minimalist",
                "Balance light & privacy",
                "Slim metal & glass",
            ]
        );
    }

    #[test]
    fn plain_success_serializes_without_extras() {
        assert_eq!(serde_json::to_value(SubmissionResult::ok()).unwrap(), json!({ "ok": true }));
        let failed = SubmissionResult::error("boom")
            .with_deliveries(vec![DeliveryOutcome::failed(Channel::Spreadsheet, "403")]);
        assert_eq!(
            serde_json::to_value(failed).unwrap(),
            json!({
                "ok": false,
                "error": "boom",
                "deliveries": [{ "channel": "spreadsheet", "status": "failed", "error": "403" }]
            })
        );
    }
}
