// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transactional email delivery for the contact form.
//!
//! Two sends per submission, strictly in order: notify the site owner, then
//! confirm to the submitter. Either failure fails the submission as a whole.

use reqwasm::http::Request;
use serde::Serialize;

use crate::config::site_config;
use crate::errors::SubmissionError;

#[derive(Serialize)]
struct EmailPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
    to_email: &'a str,
}

pub async fn send_contact_message(
    name: &str,
    email: &str,
    message: &str,
) -> Result<(), SubmissionError> {
    let config = site_config();
    send_template(config.owner_template_id, name, email, message, config.owner_email).await?;
    send_template(config.confirmation_template_id, name, email, message, email).await
}

async fn send_template(
    template_id: &str,
    name: &str,
    email: &str,
    message: &str,
    to_email: &str,
) -> Result<(), SubmissionError> {
    let config = site_config();
    let payload = EmailPayload {
        service_id: config.email_service_id,
        template_id,
        user_id: config.email_public_key,
        template_params: TemplateParams {
            from_name: name,
            from_email: email,
            message,
            to_email,
        },
    };
    let body = serde_json::to_string(&payload)
        .map_err(|error| SubmissionError::Delivery(error.to_string()))?;

    let response = Request::post(config.email_endpoint)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|error| {
            log::error!("email send failed: {error}");
            SubmissionError::Delivery(error.to_string())
        })?;

    let status = response.status();
    if !(200..300).contains(&status) {
        let text = response.text().await.unwrap_or_default();
        log::error!("email send failed ({status}): {text}");
        return Err(SubmissionError::Delivery(text));
    }
    Ok(())
}
