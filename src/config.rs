// The subscription endpoint is a third-party sheet-logging service; there is
// no backend in this project.
pub fn get_subscribe_url() -> &'static str {
    "https://script.google.com/macros/s/AKfycbzQm4vXhH0d3lPeWb9aDqzGkR1jT6uFhNsyL8wCV5oEiMr7Ba2c/exec"
}

// Sent with every submission so the endpoint can attribute the entry.
pub const SUBSCRIBE_SOURCE: &str = "lumi-soulscape";

pub const CONTACT_EMAIL: &str = "lumi.soulscape@gmail.com";
