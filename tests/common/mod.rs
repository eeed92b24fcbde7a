use std::collections::HashMap;

use fortis::{func::try_parse, Lookup, Option, Result};

/// Parses a port number, rejecting 0.
pub fn parse_port(text: &str) -> Option<u16> {
    try_parse::<u16>(text).filter(|port| *port != 0)
}

/// A settings map as read from a simple `key=value` listing; malformed lines are skipped.
#[allow(dead_code)]
pub fn settings(listing: &str) -> HashMap<String, String> {
    listing
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

/// Looks a port up by key, explaining what went wrong when it cannot.
#[allow(dead_code)]
pub fn port_setting(settings: &HashMap<String, String>, key: &str) -> Result<String, u16> {
    settings
        .try_get_value(key)
        .to_result()
        .format_error(|_| format!("missing key {key}"))
        .and_then(|text| {
            parse_port(text)
                .to_result()
                .format_error(|_| format!("invalid port {text}"))
        })
}
