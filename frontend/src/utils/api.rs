use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use serde::Serialize;

use crate::config;
use crate::lead_form::{outcome_for_status, LeadForm, GENERIC_ERROR};

/// Thin client that prefixes every path with the backend URL.
pub struct Api;

pub struct RequestWrapper {
    request: Request,
    path: String,
}

impl RequestWrapper {
    fn post(path: &str) -> Self {
        let request = Request::post(&format!("{}{}", config::get_backend_url(), path));
        Self {
            request,
            path: path.to_string(),
        }
    }

    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, GlooError> {
        self.request = self.request.json(data)?;
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        let response = self.request.send().await;
        if let Err(e) = &response {
            gloo_console::error!(format!("Request to {} failed: {}", self.path, e));
        }
        response
    }
}

impl Api {
    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::post(path)
    }
}

/// Posts the questionnaire once. Any failure becomes the banner text.
pub async fn submit_lead(form: &LeadForm) -> Result<(), String> {
    let request = Api::post("/api/start-vision")
        .json(form)
        .map_err(|_| GENERIC_ERROR.to_string())?;
    let response = request.send().await.map_err(|_| GENERIC_ERROR.to_string())?;
    if !response.ok() {
        log::warn!("Vision request rejected with status {}", response.status());
    }
    outcome_for_status(response.status())
}
