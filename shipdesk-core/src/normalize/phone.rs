use serde_json::Value;

use crate::{CoreError, CoreResult};

/// International dialling prefix of the source country.
const COUNTRY_PREFIX: &str = "+81";
/// Width of the subscriber and exchange blocks, counted from the end.
const BLOCK: usize = 4;
/// The exchange block is split off only when at least a two-digit area code
/// would remain in front of it.
const MIN_EXCHANGE_HEAD: usize = BLOCK + 2;

/// Normalize a raw phone value into the `XXX...-XXXX` form carriers expect.
///
/// Spaces and hyphens are stripped, a leading `+81` becomes `0`, then the
/// digits are regrouped from the end in blocks of four: `09012345678` ->
/// `090-1234-5678`. The exchange block is only split off when at least two
/// characters are left in front of it, so `061234567` stays `06123-4567`.
/// Digit count is not validated: input shorter than four characters yields a
/// leading hyphen (`"123"` -> `"-123"`) rather than an error.
pub fn normalize_phone(raw: &Value) -> CoreResult<String> {
    let Value::String(text) = raw else {
        return Err(CoreError::InvalidInput(format!(
            "phone number must be text, got {}",
            json_kind(raw)
        )));
    };

    let mut compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if let Some(national) = compact.strip_prefix(COUNTRY_PREFIX) {
        compact = format!("0{national}");
    }

    let chars: Vec<char> = compact.chars().collect();
    let (head, subscriber) = chars.split_at(chars.len().saturating_sub(BLOCK));
    let subscriber: String = subscriber.iter().collect();
    if head.len() >= MIN_EXCHANGE_HEAD {
        let (area, exchange) = head.split_at(head.len() - BLOCK);
        return Ok(format!(
            "{}-{}-{}",
            area.iter().collect::<String>(),
            exchange.iter().collect::<String>(),
            subscriber
        ));
    }
    Ok(format!("{}-{}", head.iter().collect::<String>(), subscriber))
}

/// Like [`normalize_phone`] but an absent (`null`) phone becomes an empty cell.
pub fn normalize_phone_or_empty(raw: &Value) -> CoreResult<String> {
    match raw {
        Value::Null => Ok(String::new()),
        other => normalize_phone(other),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
