use crate::request::RequestRecord;

/// Reasons a pasted block is rejected. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: expected 4 comma separated fields, found {found}")]
    WrongFieldCount { line: usize, found: usize },

    #[error("line {line}: field `{field}` is empty")]
    EmptyField { line: usize, field: &'static str },

    #[error("line {line}: package must be `true` or `false`, got `{value}`")]
    InvalidPackageFlag { line: usize, value: String },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::WrongFieldCount { line, .. }
            | ParseError::EmptyField { line, .. }
            | ParseError::InvalidPackageFlag { line, .. } => *line,
        }
    }
}

const FIELD_NAMES: [&str; 3] = ["origin", "destiny", "airline"];

/// Parse a block of `origin,destiny,airline,package` lines.
///
/// All or nothing: the first malformed line rejects the whole block, so a
/// partially valid paste never reaches the network. An empty block is a
/// single empty line and is therefore rejected too.
pub fn parse_requests(raw: &str) -> Result<Vec<RequestRecord>, ParseError> {
    let records = raw
        .split('\n')
        .enumerate()
        .map(|(idx, row)| parse_line(idx + 1, row))
        .collect::<Result<Vec<_>, _>>();

    match &records {
        Ok(reqs) => tracing::debug!("Parsed {} requests", reqs.len()),
        Err(e) => tracing::debug!("Rejected input block: {}", e),
    }

    records
}

fn parse_line(line: usize, row: &str) -> Result<RequestRecord, ParseError> {
    let fields: Vec<&str> = row.split(',').collect();
    if fields.len() != 4 {
        return Err(ParseError::WrongFieldCount { line, found: fields.len() });
    }

    for (name, value) in FIELD_NAMES.iter().zip(&fields) {
        if value.is_empty() {
            return Err(ParseError::EmptyField { line, field: *name });
        }
    }

    // strict literal, no trimming or case folding
    let package = match fields[3] {
        "true" => true,
        "false" => false,
        "" => return Err(ParseError::EmptyField { line, field: "package" }),
        other => {
            return Err(ParseError::InvalidPackageFlag {
                line,
                value: other.to_string(),
            })
        }
    };

    Ok(RequestRecord::new(fields[0], fields[1], fields[2], package))
}
