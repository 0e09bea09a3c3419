use crate::caption::{Caption, Position};
use crate::error::{LineError, ScriptError};

pub struct Parser;
impl Parser {
    pub fn new() -> Self {
        Self {}
    }

    pub fn parse(&mut self, input: &str) -> Result<Vec<Caption>, ScriptError> {
        let mut captions = Vec::new();
        for (index, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_line(line) {
                Ok(caption) => captions.push(caption),
                Err(kind) => {
                    return Err(ScriptError {
                        line: index + 1,
                        text: line.to_string(),
                        kind,
                    })
                }
            }
        }
        Ok(captions)
    }
}

fn parse_line(line: &str) -> Result<Caption, LineError> {
    // Single quotes take precedence: the message is delimited by the first
    // and the last occurrence of whichever quote character appears first in
    // priority order, so escaped quotes inside the message stay intact.
    let quote = if line.contains('\'') { '\'' } else { '"' };
    let (first, last) = match (line.find(quote), line.rfind(quote)) {
        (Some(first), Some(last)) if first != last => (first, last),
        _ => return Err(LineError::MissingOrUnmatchedQuote),
    };

    if !line[..first].trim().is_empty() {
        return Err(LineError::UnexpectedPrefix);
    }
    let message = unescape_quotes(&line[first + 1..last]);

    let rest = line[last + 1..].trim();
    let rest = rest
        .strip_prefix(':')
        .ok_or(LineError::MissingFieldSeparator)?
        .trim();

    let fields: Vec<&str> = rest.split(':').collect();
    if fields.len() != 4 {
        return Err(LineError::WrongFieldCount);
    }

    let color = fields[0].trim().to_string();
    let size = fields[1]
        .trim()
        .parse::<u32>()
        .map_err(|_| LineError::InvalidSize)?;
    let position = match fields[2].trim().to_uppercase().as_str() {
        "TOP" => Position::Top,
        "BOTTOM" => Position::Bottom,
        _ => return Err(LineError::InvalidPosition),
    };
    let (start_sec, end_sec) = parse_time_range(fields[3])?;

    Ok(Caption {
        message,
        color,
        size,
        position,
        start_sec,
        end_sec,
    })
}

fn unescape_quotes(message: &str) -> String {
    message.replace("\\'", "'").replace("\\\"", "\"")
}

fn parse_time_range(field: &str) -> Result<(u32, u32), LineError> {
    let bounds: Vec<&str> = field.trim().split('-').collect();
    if bounds.len() != 2 {
        return Err(LineError::InvalidTimeRange);
    }
    let start = bounds[0].trim().parse::<u32>();
    let end = bounds[1].trim().parse::<u32>();
    match (start, end) {
        (Ok(start), Ok(end)) => Ok((start, end)),
        _ => Err(LineError::InvalidTimeRange),
    }
}
