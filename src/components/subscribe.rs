use gloo_console::log;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::{Notification, NoticeKind};
use crate::config;

const MIN_NAME_CHARS: usize = 2;
const SUCCESS_MESSAGE: &str = "Thank you! You're on the list - see you in Costa Rica.";
const FAILURE_MESSAGE: &str = "Something went wrong sending your details. Please try again.";

#[derive(Serialize)]
pub(crate) struct SubscribeRequest {
    name: String,
    email: String,
    source: String,
}

#[derive(Deserialize)]
struct SubscribeResponse {
    success: bool,
}

#[derive(Clone, Default, PartialEq)]
pub(crate) struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl FieldErrors {
    pub(crate) fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

pub(crate) fn validate_name(name: &str) -> Option<String> {
    if name.trim().chars().count() < MIN_NAME_CHARS {
        Some("Please enter your name (at least 2 characters).".to_string())
    } else {
        None
    }
}

// A single @ with a non-empty local part, a dotted domain and no whitespace
// anywhere.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub(crate) fn validate_email(email: &str) -> Option<String> {
    if is_valid_email(email.trim()) {
        None
    } else {
        Some("Please enter a valid email address.".to_string())
    }
}

pub(crate) fn validate(name: &str, email: &str) -> FieldErrors {
    FieldErrors {
        name: validate_name(name),
        email: validate_email(email),
    }
}

pub(crate) fn build_request(name: &str, email: &str) -> SubscribeRequest {
    SubscribeRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        source: config::SUBSCRIBE_SOURCE.to_string(),
    }
}

// The endpoint reports success explicitly; a 2xx status alone is not enough.
pub(crate) fn subscription_accepted(status_ok: bool, success_flag: Option<bool>) -> bool {
    status_ok && success_flag.unwrap_or(false)
}

#[function_component(SubscribeForm)]
pub fn subscribe_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let errors = use_state(FieldErrors::default);
    let status = use_state(|| None::<NoticeKind>);
    let is_submitting = use_state(|| false);

    let oninput_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let errors = errors.clone();
        let status = status.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let entered_name = (*name).clone();
            let entered_email = (*email).clone();
            let field_errors = validate(&entered_name, &entered_email);
            if !field_errors.is_empty() {
                errors.set(field_errors);
                return;
            }
            errors.set(FieldErrors::default());
            status.set(None);
            is_submitting.set(true);

            let name = name.clone();
            let email = email.clone();
            let errors = errors.clone();
            let status = status.clone();
            let is_submitting = is_submitting.clone();
            spawn_local(async move {
                match Request::post(config::get_subscribe_url())
                    .json(&build_request(&entered_name, &entered_email))
                {
                    Ok(request) => match request.send().await {
                        Ok(response) => {
                            let status_ok = response.ok();
                            if !status_ok {
                                log!("subscribe failed with status:", response.status());
                            }
                            let success_flag = if status_ok {
                                match response.json::<SubscribeResponse>().await {
                                    Ok(body) => Some(body.success),
                                    Err(e) => {
                                        log!("error parsing subscribe response:", e.to_string());
                                        None
                                    }
                                }
                            } else {
                                None
                            };
                            if subscription_accepted(status_ok, success_flag) {
                                name.set(String::new());
                                email.set(String::new());
                                errors.set(FieldErrors::default());
                                status.set(Some(NoticeKind::Success));
                            } else {
                                // Entered values stay put so the user can retry.
                                status.set(Some(NoticeKind::Failure));
                            }
                        }
                        Err(e) => {
                            log!("network request failed:", e.to_string());
                            status.set(Some(NoticeKind::Failure));
                        }
                    },
                    Err(e) => {
                        log!("failed to encode subscribe request:", e.to_string());
                        status.set(Some(NoticeKind::Failure));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let field_errors = (*errors).clone();

    html! {
        <form class="subscribe-form" onsubmit={onsubmit} novalidate=true>
            {
                match (*status).clone() {
                    Some(kind) => {
                        let message = match kind {
                            NoticeKind::Success => SUCCESS_MESSAGE,
                            NoticeKind::Failure => FAILURE_MESSAGE,
                        };
                        let on_dismiss = {
                            let status = status.clone();
                            Callback::from(move |_| status.set(None))
                        };
                        html! { <Notification kind={kind} message={message} on_dismiss={on_dismiss} /> }
                    }
                    None => html! {},
                }
            }
            <div class="form-field">
                <input
                    type="text"
                    placeholder="Your name"
                    value={(*name).clone()}
                    oninput={oninput_name}
                />
                {
                    if let Some(message) = field_errors.name.as_ref() {
                        html! { <span class="field-error">{message}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="form-field">
                <input
                    type="email"
                    placeholder="Your email"
                    value={(*email).clone()}
                    oninput={oninput_email}
                />
                {
                    if let Some(message) = field_errors.email.as_ref() {
                        html! { <span class="field-error">{message}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <button type="submit" class="subscribe-button" disabled={*is_submitting}>
                { if *is_submitting { "Joining..." } else { "Join the mailing list" } }
            </button>
            <style>
                {r#"
                .subscribe-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.1rem;
                    max-width: 420px;
                    margin: 2rem auto 0;
                    text-align: left;
                }

                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                }

                .form-field input {
                    padding: 0.85rem 1.1rem;
                    border: 1px solid rgba(51, 66, 59, 0.25);
                    border-radius: 10px;
                    background: #fffdf9;
                    font-size: 1rem;
                    font-family: inherit;
                    color: inherit;
                    transition: border-color 0.2s ease;
                }

                .form-field input:focus {
                    outline: none;
                    border-color: #5e8b6b;
                }

                .field-error {
                    color: #8f3a32;
                    font-size: 0.85rem;
                }

                .subscribe-button {
                    padding: 0.9rem 1.5rem;
                    border: none;
                    border-radius: 999px;
                    background: #5e8b6b;
                    color: #fffdf9;
                    font-size: 1rem;
                    font-family: inherit;
                    cursor: pointer;
                    transition: background 0.2s ease, transform 0.2s ease;
                }

                .subscribe-button:hover:enabled {
                    background: #4d7459;
                    transform: translateY(-1px);
                }

                .subscribe-button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                "#}
            </style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_one_character_name() {
        let errors = validate("A", "jane@example.com");
        assert!(errors.name.is_some());
        assert!(errors.email.is_none());
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_name_length_counts_after_trim() {
        assert!(validate_name("  J  ").is_some());
        assert!(validate_name(" Jo ").is_none());
    }

    #[test]
    fn test_rejects_malformed_emails() {
        let rejected = [
            "not-an-email",
            "jane@example",
            "@example.com",
            "jane@.com",
            "jane@example.",
            "jane doe@example.com",
            "jane@exam ple.com",
            "jane@@example.com",
            "",
        ];
        for email in rejected {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn test_accepts_plain_addresses() {
        let accepted = ["jane@example.com", "jane.doe@mail.example.com", "j@b.co"];
        for email in accepted {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn test_email_is_validated_after_trim() {
        assert!(validate_email("  jane@example.com ").is_none());
        assert!(validate_email("jane @example.com").is_some());
    }

    #[test]
    fn test_valid_input_produces_no_errors() {
        assert!(validate("Jane Doe", "jane@example.com").is_empty());
    }

    #[test]
    fn test_request_carries_trimmed_fields_and_source_tag() {
        let request = build_request("  Jane Doe ", " jane@example.com  ");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["name"], "Jane Doe");
        assert_eq!(value["email"], "jane@example.com");
        assert_eq!(value["source"], config::SUBSCRIBE_SOURCE);
    }

    #[test]
    fn test_acceptance_requires_ok_status_and_success_flag() {
        assert!(subscription_accepted(true, Some(true)));
        assert!(!subscription_accepted(true, Some(false)));
        assert!(!subscription_accepted(true, None));
        assert!(!subscription_accepted(false, Some(true)));
        assert!(!subscription_accepted(false, None));
    }
}
