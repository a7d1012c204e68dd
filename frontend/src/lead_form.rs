use serde::Serialize;

pub const MAX_FINISHES: usize = 2;

pub const KITCHEN_VIBES: [&str; 4] = [
    "Island social",
    "Galley efficient",
    "L-shape compact",
    "G-shape storage-max",
];

pub const FINISHES: [&str; 4] = [
    "Ultra-durable (quartz/granite)",
    "Warm & natural (veneers/wood)",
    "Stain-proof & easy (laminates)",
    "Seamless & handle-less (J-pull/tip-on)",
];

pub const WARDROBES: [&str; 4] = [
    "Walk-in boutique",
    "Sliding minimalist",
    "Openable classic",
    "Hybrid mix",
];

pub const SHUTTERS: [&str; 3] = [
    "Let the light pour in",
    "Balance light & privacy",
    "Prioritize privacy",
];

pub const PARTITIONS: [&str; 4] = [
    "Slim metal & glass",
    "Open shelving divider",
    "Smart glass (privacy on tap)",
    "Solid / acoustic",
];

pub const GENERIC_ERROR: &str = "Failed to submit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Contact,
    City,
    KitchenVibe,
    Wardrobe,
    Shutters,
    Partitions,
    Website,
}

/// Draft of the start-vision questionnaire, serialized as the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    pub name: String,
    pub contact: String,
    pub city: String,
    pub kitchen_vibe: String,
    pub finishes: Vec<String>,
    pub wardrobe: String,
    pub shutters: String,
    pub partitions: String,
    pub website: String,
}

impl LeadForm {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Contact => &mut self.contact,
            Field::City => &mut self.city,
            Field::KitchenVibe => &mut self.kitchen_vibe,
            Field::Wardrobe => &mut self.wardrobe,
            Field::Shutters => &mut self.shutters,
            Field::Partitions => &mut self.partitions,
            Field::Website => &mut self.website,
        };
        *slot = value;
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Contact => &self.contact,
            Field::City => &self.city,
            Field::KitchenVibe => &self.kitchen_vibe,
            Field::Wardrobe => &self.wardrobe,
            Field::Shutters => &self.shutters,
            Field::Partitions => &self.partitions,
            Field::Website => &self.website,
        }
    }

    /// Selecting a third finish is refused; deselecting always works.
    pub fn toggle_finish(&mut self, option: &str) {
        if let Some(pos) = self.finishes.iter().position(|f| f == option) {
            self.finishes.remove(pos);
        } else if self.finishes.len() < MAX_FINISHES {
            self.finishes.push(option.to_string());
        }
    }

    pub fn has_finish(&self, option: &str) -> bool {
        self.finishes.iter().any(|f| f == option)
    }

    pub fn finish_disabled(&self, option: &str) -> bool {
        !self.has_finish(option) && self.finishes.len() >= MAX_FINISHES
    }

    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && !self.contact.trim().is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmitStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitStatus::Sending)
    }
}

/// Every non-2xx answer shows the same banner, whatever the server said.
pub fn outcome_for_status(status: u16) -> Result<(), String> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(GENERIC_ERROR.to_string())
    }
}

/// Success clears the draft; failure leaves every answer in place so the
/// visitor can resend.
pub fn apply_outcome(form: &mut LeadForm, outcome: Result<(), String>) -> SubmitStatus {
    match outcome {
        Ok(()) => {
            form.reset();
            SubmitStatus::Sent
        }
        Err(message) => SubmitStatus::Failed(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadForm {
        let mut form = LeadForm::default();
        form.set(Field::Name, "Asha".into());
        form.set(Field::Contact, "asha@example.com".into());
        form.set(Field::City, "Pune".into());
        form.set(Field::KitchenVibe, KITCHEN_VIBES[0].into());
        form.set(Field::Wardrobe, WARDROBES[1].into());
        form.set(Field::Shutters, SHUTTERS[1].into());
        form.set(Field::Partitions, PARTITIONS[0].into());
        form.toggle_finish(FINISHES[1]);
        form
    }

    #[test]
    fn finishes_are_capped_at_two() {
        let mut form = LeadForm::default();
        form.toggle_finish(FINISHES[0]);
        form.toggle_finish(FINISHES[1]);
        form.toggle_finish(FINISHES[2]);
        assert_eq!(form.finishes, vec![FINISHES[0], FINISHES[1]]);
        assert!(form.finish_disabled(FINISHES[2]));
        assert!(!form.finish_disabled(FINISHES[0]));

        form.toggle_finish(FINISHES[0]);
        form.toggle_finish(FINISHES[2]);
        assert_eq!(form.finishes, vec![FINISHES[1], FINISHES[2]]);
    }

    #[test]
    fn serializes_with_api_field_names() {
        let value = serde_json::to_value(filled()).unwrap();
        assert_eq!(value["kitchenVibe"], "Island social");
        assert_eq!(value["finishes"], serde_json::json!(["Warm & natural (veneers/wood)"]));
        assert_eq!(value["website"], "");
    }

    #[test]
    fn success_clears_every_field() {
        let mut form = filled();
        let status = apply_outcome(&mut form, Ok(()));
        assert_eq!(status, SubmitStatus::Sent);
        assert_eq!(form, LeadForm::default());
    }

    #[test]
    fn failure_keeps_every_field() {
        let mut form = filled();
        let before = form.clone();
        let status = apply_outcome(&mut form, Err(GENERIC_ERROR.to_string()));
        assert_eq!(status, SubmitStatus::Failed(GENERIC_ERROR.to_string()));
        assert_eq!(form, before);
    }

    #[test]
    fn server_errors_collapse_to_the_generic_banner() {
        assert_eq!(outcome_for_status(200), Ok(()));
        for status in [400, 404, 500, 502] {
            assert_eq!(outcome_for_status(status), Err(GENERIC_ERROR.to_string()));
        }
    }

    #[test]
    fn name_and_contact_gate_submission() {
        let mut form = filled();
        assert!(form.can_submit());
        form.set(Field::Contact, "  ".into());
        assert!(!form.can_submit());
        assert_eq!(form.get(Field::City), "Pune");
    }
}
