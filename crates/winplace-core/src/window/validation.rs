use tracing::{debug, warn};

use super::errors::ValidationError;
use super::types::WindowQuery;

const EXPECTED_ARGUMENT_COUNT: usize = 5;

/// Parse `<x> <y> <width> <height> <windowTitle>` into a [`WindowQuery`].
///
/// Checks run in order: argument count, integer parsing, positive size.
/// The title is used verbatim.
pub fn validate_arguments(args: &[String]) -> Result<WindowQuery, ValidationError> {
    if args.len() != EXPECTED_ARGUMENT_COUNT {
        warn!(
            event = "core.validation.argument_count_invalid",
            expected = EXPECTED_ARGUMENT_COUNT,
            actual = args.len()
        );
        return Err(ValidationError::WrongArgumentCount { count: args.len() });
    }

    let x = parse_coordinate("x", &args[0])?;
    let y = parse_coordinate("y", &args[1])?;
    let width = parse_coordinate("width", &args[2])?;
    let height = parse_coordinate("height", &args[3])?;

    let query = WindowQuery::new(x, y, width, height, args[4].as_str()).inspect_err(|_| {
        warn!(
            event = "core.validation.size_invalid",
            width = width,
            height = height
        );
    })?;

    debug!(
        event = "core.validation.completed",
        x = x,
        y = y,
        width = width,
        height = height,
        title = query.title()
    );
    Ok(query)
}

/// Parse a signed 32-bit integer, tolerating surrounding whitespace and a sign.
fn parse_coordinate(name: &'static str, raw: &str) -> Result<i32, ValidationError> {
    raw.trim().parse::<i32>().map_err(|e| {
        warn!(
            event = "core.validation.number_invalid",
            argument = name,
            value = raw,
            error = %e
        );
        ValidationError::InvalidNumber {
            name,
            value: raw.to_string(),
        }
    })
}
