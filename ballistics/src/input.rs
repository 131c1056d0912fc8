//! Launch parameters read from the terminal.

use crate::error::InputError;
use crate::trajectory::LaunchParams;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

pub const VELOCITY_PROMPT: &str = "Enter velocity (m/s): ";
pub const ANGLE_PROMPT: &str = "Enter launch angle (degrees): ";

/// Whitespace separated tokens pulled from a reader one line at a time.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as a finite number
    pub fn next_f32(&mut self, field: &'static str) -> Result<f32, InputError> {
        let token = self.next_token()?.ok_or(InputError::Missing(field))?;
        let value: f32 = token
            .parse()
            .map_err(|_| InputError::NotANumber { field, token })?;
        if !value.is_finite() {
            return Err(InputError::OutOfRange {
                field,
                value,
                reason: "is not finite",
            });
        }
        Ok(value)
    }
}

/// Prompt for velocity then angle (degrees) and validate them.
pub fn read_launch_params<R: BufRead, W: Write>(
    input: R,
    prompts: &mut W,
) -> Result<LaunchParams, InputError> {
    let mut tokens = TokenReader::new(input);

    write!(prompts, "{VELOCITY_PROMPT}")?;
    prompts.flush()?;
    let velocity = tokens.next_f32("velocity")?;
    if velocity <= 0.0 {
        return Err(InputError::OutOfRange {
            field: "velocity",
            value: velocity,
            reason: "must be greater than zero",
        });
    }

    write!(prompts, "{ANGLE_PROMPT}")?;
    prompts.flush()?;
    let angle = tokens.next_f32("angle")?;

    Ok(LaunchParams::from_degrees(velocity, angle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<LaunchParams, InputError> {
        let mut out = Vec::new();
        read_launch_params(Cursor::new(text), &mut out)
    }

    #[test]
    fn test_values_on_separate_lines() {
        let mut out = Vec::new();
        let params = read_launch_params(Cursor::new("50\n45\n"), &mut out).unwrap();
        assert_eq!(params.velocity, 50.0);
        assert!((params.angle_degrees() - 45.0).abs() < 1e-4);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{VELOCITY_PROMPT}{ANGLE_PROMPT}")
        );
    }

    #[test]
    fn test_values_on_one_line() {
        let params = parse("  12.5   -30 ").unwrap();
        assert_eq!(params.velocity, 12.5);
        assert!((params.angle_degrees() + 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let params = parse("\n\n80\n\n10\n").unwrap();
        assert_eq!(params.velocity, 80.0);
    }

    #[test]
    fn test_missing_angle() {
        assert!(matches!(parse("50\n"), Err(InputError::Missing("angle"))));
        assert!(matches!(parse(""), Err(InputError::Missing("velocity"))));
    }

    #[test]
    fn test_not_a_number() {
        match parse("fast 45") {
            Err(InputError::NotANumber { field, token }) => {
                assert_eq!(field, "velocity");
                assert_eq!(token, "fast");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            parse("50 steep"),
            Err(InputError::NotANumber { field: "angle", .. })
        ));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            parse("0 45"),
            Err(InputError::OutOfRange { field: "velocity", .. })
        ));
        assert!(matches!(
            parse("-5 45"),
            Err(InputError::OutOfRange { field: "velocity", .. })
        ));
        assert!(matches!(
            parse("inf 45"),
            Err(InputError::OutOfRange { field: "velocity", .. })
        ));
        assert!(matches!(
            parse("50 NaN"),
            Err(InputError::OutOfRange { field: "angle", .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = parse("abc").unwrap_err();
        assert_eq!(err.to_string(), "velocity: 'abc' is not a number");
        let err = parse("-1 0").unwrap_err();
        assert_eq!(err.to_string(), "velocity: -1 must be greater than zero");
    }
}
