//! Record parser for student directory files.
//!
//! Two input layouts are accepted:
//! - a JSON array of record objects (`[{"name": ..., "email": ...}, ...]`)
//! - JSON Lines, one record object per line
//!
//! The layout is picked from the first non-whitespace character. Per-record
//! failures are collected as [`MalformedRecord`]s and do not abort parsing.

use crate::model::{MalformedRecord, ParseError, Record, RecordId};
use chrono::NaiveDate;
use serde::Deserialize;

// Field name constants
const FIELD_NAME: &str = "name";
const FIELD_EMAIL: &str = "email";

/// Raw JSON structure for deserializing a record.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    joined: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// Outcome of parsing a record source.
#[derive(Debug, Clone, Default)]
pub struct ParsedRoster {
    /// Successfully parsed records, in source order.
    pub records: Vec<Record>,
    /// Entries that were skipped.
    pub malformed: Vec<MalformedRecord>,
}

/// Parse a whole record source.
///
/// # Errors
///
/// Returns `ParseError::InvalidJson` only when the input is a JSON array that is not
/// valid JSON. Individual bad entries never fail the call.
pub fn parse_records(input: &str) -> Result<ParsedRoster, ParseError> {
    if input.trim_start().starts_with('[') {
        parse_json_array(input)
    } else {
        Ok(parse_json_lines(input))
    }
}

/// Parse a JSON array of record objects.
///
/// # Errors
///
/// Returns `ParseError::InvalidJson` if the array itself cannot be parsed.
pub fn parse_json_array(input: &str) -> Result<ParsedRoster, ParseError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(input).map_err(|e| ParseError::InvalidJson {
            line: e.line(),
            message: e.to_string(),
        })?;

    let mut roster = ParsedRoster::default();
    for (index, value) in values.into_iter().enumerate() {
        let position = index + 1;
        let raw_text = value.to_string();
        let parsed = serde_json::from_value::<RawRecord>(value)
            .map_err(|e| ParseError::InvalidJson {
                line: position,
                message: e.to_string(),
            })
            .and_then(|raw| build_record(raw, position));
        push_result(&mut roster, parsed, position, raw_text);
    }
    Ok(roster)
}

/// Parse JSON Lines input. Blank lines are skipped.
pub fn parse_json_lines(input: &str) -> ParsedRoster {
    let mut roster = ParsedRoster::default();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;
        let parsed = parse_record_line(line, line_number);
        push_result(&mut roster, parsed, line_number, line);
    }
    roster
}

/// Parse a single JSON Lines entry.
///
/// # Errors
///
/// Returns the first problem found with the line.
pub fn parse_record_line(line: &str, line_number: usize) -> Result<Record, ParseError> {
    let raw: RawRecord = serde_json::from_str(line).map_err(|e| ParseError::InvalidJson {
        line: line_number,
        message: e.to_string(),
    })?;
    build_record(raw, line_number)
}

/// Parse a join date.
///
/// Accepts `MM/DD/YY` (as printed in the directory markup), `MM/DD/YYYY`
/// and ISO `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns `ParseError::InvalidDate` when no format matches.
pub fn parse_joined(raw: &str, line: usize) -> Result<NaiveDate, ParseError> {
    let trimmed = raw.trim();
    // Markup prefixes the date with "Joined"
    let trimmed = trimmed
        .strip_prefix("Joined")
        .map(str::trim_start)
        .unwrap_or(trimmed);

    let format = if trimmed.contains('-') {
        "%Y-%m-%d"
    } else if trimmed.rsplit('/').next().is_some_and(|y| y.len() == 2) {
        "%m/%d/%y"
    } else {
        "%m/%d/%Y"
    };

    NaiveDate::parse_from_str(trimmed, format).map_err(|_| ParseError::InvalidDate {
        line,
        raw: raw.to_string(),
    })
}

fn build_record(raw: RawRecord, position: usize) -> Result<Record, ParseError> {
    let name = required_text(raw.name, FIELD_NAME, position)?;
    let email = required_text(raw.email, FIELD_EMAIL, position)?;

    let id = raw
        .id
        .and_then(|id| RecordId::new(id.into_string()).ok())
        .unwrap_or_else(|| RecordId::from_position(position));

    let mut record = Record::new(id, name, email);
    if let Some(joined) = raw.joined.filter(|j| !j.trim().is_empty()) {
        record = record.with_joined(parse_joined(&joined, position)?);
    }
    if let Some(avatar) = raw.avatar.filter(|a| !a.trim().is_empty()) {
        record = record.with_avatar(avatar);
    }
    Ok(record)
}

fn required_text(
    value: Option<String>,
    field: &'static str,
    line: usize,
) -> Result<String, ParseError> {
    let value = value.ok_or(ParseError::MissingField { line, field })?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyField { line, field });
    }
    Ok(trimmed.to_string())
}

fn push_result(
    roster: &mut ParsedRoster,
    parsed: Result<Record, ParseError>,
    position: usize,
    raw: impl Into<String>,
) {
    match parsed {
        Ok(record) => roster.records.push(record),
        Err(err) => roster
            .malformed
            .push(MalformedRecord::new(position, raw, err.to_string())),
    }
}
