use credcheck_common::error::CheckError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::num::IntErrorKind;

pub const DEFAULT_TOP_N: u64 = 3;
pub const DEFAULT_REASON: &str = "Unable to determine credibility";
pub const DEFAULT_REJECTION: &str = "An error occurred while checking credibility";

/// Body of `POST /api/check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub text: String,
    pub top_n: u64,
}

impl CheckRequest {
    /// Build a request from the raw form fields.
    ///
    /// Fails with [`CheckError::EmptyInput`] when the text is blank after
    /// trimming.
    pub fn from_input(raw_text: &str, raw_top_n: Option<&str>) -> Result<Self, CheckError> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(CheckError::EmptyInput);
        }

        Ok(Self {
            text: text.to_owned(),
            top_n: parse_top_n(raw_top_n),
        })
    }
}

/// Integer parse of the top-N field with the leniency of a browser number
/// field: surrounding whitespace and trailing junk are ignored. Anything that
/// does not yield a value >= 1 falls back to [`DEFAULT_TOP_N`]. There is no
/// upper bound; digit runs beyond `u64` saturate and the server decides.
pub fn parse_top_n(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return DEFAULT_TOP_N;
    };

    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..digits_end].parse::<u64>() {
        Ok(n) if n >= 1 => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        _ => DEFAULT_TOP_N,
    }
}

/// A fully populated verdict. Built only through [`CheckResult::from_payload`]
/// so rendering never has to deal with missing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub score: f64,
    pub reason: String,
    pub article: String,
    pub documents: Vec<String>,
}

impl CheckResult {
    /// Normalise a success payload. Missing, null or mistyped fields take
    /// their defaults; non-string document entries are skipped. A numeric
    /// string score counts as the number it spells.
    pub fn from_payload(payload: &Value) -> Self {
        let score = payload
            .get("score")
            .and_then(|v| v.as_f64().or_else(|| v.as_str()?.trim().parse().ok()))
            .unwrap_or(0.0);

        let reason = non_empty_str(payload, "reason")
            .unwrap_or(DEFAULT_REASON)
            .to_owned();

        let article = non_empty_str(payload, "article")
            .unwrap_or_default()
            .to_owned();

        let documents: Vec<String> = payload
            .get("documents")
            .and_then(Value::as_array)
            .map(|docs| {
                docs.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            score,
            reason,
            article,
            documents,
        }
    }
}

/// User-facing message for a non-2xx reply.
pub fn rejection_message(payload: &Value) -> String {
    non_empty_str(payload, "message")
        .unwrap_or(DEFAULT_REJECTION)
        .to_owned()
}

fn non_empty_str<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
