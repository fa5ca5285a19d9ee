use std::io::{self, BufRead, Write};

use crate::error::{PredictionError, Result};
use crate::models::TargetLocation;
use crate::utils::coordinates::{parse_coordinate, validate_latitude, validate_longitude};

/// Interactive acceptance of the target coordinates.
///
/// Each coordinate reprompts until it parses as a float within its valid
/// range; a parse failure and an out-of-range value get distinct
/// messages. Runs exactly once per process, before the service starts.
pub fn prompt_target_location() -> Result<TargetLocation> {
    let latitude = prompt_latitude()?;
    let longitude = prompt_longitude()?;

    Ok(TargetLocation::new(latitude, longitude))
}

pub fn prompt_latitude() -> Result<f64> {
    let stdin = io::stdin();
    read_coordinate(
        &mut stdin.lock(),
        "Enter the latitude of the target location: ",
        validate_latitude,
    )
}

pub fn prompt_longitude() -> Result<f64> {
    let stdin = io::stdin();
    read_coordinate(
        &mut stdin.lock(),
        "Enter the longitude of the target location: ",
        validate_longitude,
    )
}

fn read_coordinate<R: BufRead>(
    input: &mut R,
    prompt: &str,
    validate: fn(f64) -> Result<()>,
) -> Result<f64> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PredictionError::InvalidCoordinate(
                "input closed before a coordinate was entered".to_string(),
            ));
        }

        match parse_coordinate(&line) {
            Ok(value) => match validate(value) {
                Ok(()) => return Ok(value),
                // out-of-range: echo the range from the validation error
                Err(e) => println!("{}. Please enter a valid coordinate.", e),
            },
            Err(_) => println!("Invalid input. Please enter a numeric value."),
        }
    }
}
