// Draw-file parsing: "<date> / <open_pana>-<jodi>-<close_pana>" lines
use crate::model::DrawRecord;
use chrono::NaiveDate;

/// Supported date formats in priority order. Day-month is tried before
/// month-day, so an ambiguous "01-02-2024" resolves to 1 February.
const DATE_FORMATS: [&str; 4] = ["%d-%m-%Y", "%d-%m-%y", "%m-%d-%Y", "%m-%d-%y"];

pub trait Parser {
    fn parse(&self, text: &str) -> Vec<DrawRecord>;
}

pub struct DrawParser;

impl DrawParser {
    pub fn new() -> Self {
        Self
    }

    /// Validates a single line, returning `None` for anything that is
    /// structurally broken or a voided draw. Best-effort ingestion:
    /// dropped lines produce no diagnostic.
    fn parse_line(line: &str) -> Option<DrawRecord> {
        let segments: Vec<&str> = line.split('/').collect();
        if segments.len() != 2 {
            return None;
        }
        let (date_segment, payload) = (segments[0], segments[1]);

        // A '*' or 'x' (any case) anywhere in the payload marks a
        // voided draw; the whole line is excluded.
        if payload.contains('*') || payload.to_lowercase().contains('x') {
            return None;
        }

        let fields: Vec<&str> = payload.split('-').collect();
        if fields.len() != 3 {
            return None;
        }
        let open_pana: u32 = fields[0].trim().parse().ok()?;
        let jodi: u8 = fields[1].trim().parse().ok()?;
        let close_pana: u32 = fields[2].trim().parse().ok()?;
        // Jodis are two-digit values; anything larger cannot satisfy
        // the open/close digit derivation and is treated as malformed.
        if jodi > 99 {
            return None;
        }

        let date = parse_draw_date(date_segment)?;

        Some(DrawRecord {
            date,
            open_pana,
            jodi,
            close_pana,
            open_digit: jodi / 10,
            close_digit: jodi % 10,
        })
    }
}

impl Parser for DrawParser {
    fn parse(&self, text: &str) -> Vec<DrawRecord> {
        let mut records: Vec<DrawRecord> = text.lines().filter_map(DrawParser::parse_line).collect();
        // Stable sort: equal dates keep their file order.
        records.sort_by_key(|r| r.date);
        records
    }
}

/// Tries each supported format in priority order and returns the first
/// date that parses, or `None` if no format matches.
pub fn parse_draw_date(segment: &str) -> Option<NaiveDate> {
    let trimmed = segment.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}
