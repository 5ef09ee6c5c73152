//! Smooth closed outline built from sampled wave points
//!
//! The outline is a chain of cubic segments whose control points are
//! reflected anchors: each new anchor mirrors the previous one about the
//! current sample, which keeps the tangent continuous through every sample
//! without storing explicit tangents. Two straight edges down to the
//! container's bottom corners close the shape so it can be filled.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::Point;

/// A single drawing instruction in absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    LineTo(Point),
    Close,
}

impl PathCommand {
    /// Cubic segment with the same control point used twice
    #[inline]
    pub fn cubic_anchor(anchor: Point, to: Point) -> Self {
        PathCommand::CubicTo {
            ctrl1: anchor,
            ctrl2: anchor,
            to,
        }
    }

    /// Pen position after this command (None for `Close`)
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::Close => None,
        }
    }
}

/// Ordered drawing instructions for one frame of the wave
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathDescription {
    commands: Vec<PathCommand>,
}

impl PathDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of cubic segments in the outline
    pub fn cubic_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::CubicTo { .. }))
            .count()
    }

    /// Whether the final instruction closes the shape
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Last pen position, ignoring a trailing close
    pub fn current_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(PathCommand::end_point)
    }
}

/// Build the closed wave outline for `points` inside a `width` x `height` box.
///
/// Panics if fewer than two points are given; the sampler never produces
/// fewer.
pub fn build_path(points: &[Point], width: f64, height: f64) -> PathDescription {
    let (first, second) = (points[0], points[1]);
    let mut path = PathDescription::with_capacity(points.len() + 3);
    path.push(PathCommand::MoveTo(first));

    // Mirrors the first segment's slope so the opening curve does not kink
    let mut anchor = Point::new(
        (second.x - first.x) / 2.0,
        second.y - first.y + first.y + (second.y - first.y),
    );
    path.push(PathCommand::cubic_anchor(anchor, second));

    for window in points[1..].windows(2) {
        let (current, next) = (window[0], window[1]);
        anchor = Point::new(
            current.x - anchor.x + current.x,
            current.y - anchor.y + current.y,
        );
        path.push(PathCommand::cubic_anchor(anchor, next));
    }

    path.push(PathCommand::LineTo(Point::new(width, height)));
    path.push(PathCommand::LineTo(Point::new(0.0, height)));
    path.push(PathCommand::Close);
    path
}

/// Write a number the way a browser stringifies it in path data.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value == 0.0 {
        // covers -0
        f.write_str("0")
    } else if value.abs() < 1e-6 || value.abs() >= 1e21 {
        // Browsers switch to exponent form outside [1e-6, 1e21) and sign the exponent
        let sci = format!("{:e}", value);
        match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{}e+{}", mantissa, exp),
            _ => f.write_str(&sci),
        }
    } else {
        write!(f, "{}", value)
    }
}

fn write_point(f: &mut fmt::Formatter<'_>, p: Point) -> fmt::Result {
    write_number(f, p.x)?;
    f.write_str(" ")?;
    write_number(f, p.y)
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo(p) => {
                f.write_str("M ")?;
                write_point(f, p)
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                f.write_str("C ")?;
                write_point(f, ctrl1)?;
                f.write_str(" ")?;
                write_point(f, ctrl2)?;
                f.write_str(" ")?;
                write_point(f, to)
            }
            PathCommand::LineTo(p) => {
                f.write_str("L ")?;
                write_point(f, p)
            }
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

impl fmt::Display for PathDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

/// Errors from reading SVG path data back into commands
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathParseError {
    #[error("unsupported path command '{0}'")]
    UnknownCommand(char),

    #[error("command '{command}' is missing a coordinate")]
    MissingNumber { command: char },

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("path data must start with a move-to")]
    MissingMoveTo,
}

impl FromStr for PathDescription {
    type Err = PathParseError;

    /// Parse the absolute `M`/`C`/`L`/`Z` subset emitted by [`build_path`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty());
        let mut path = PathDescription::new();

        while let Some(token) = tokens.next() {
            let mut chars = token.chars();
            let command = match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => c,
                (Some(c), _) if !c.is_ascii_alphabetic() => {
                    return Err(PathParseError::InvalidNumber(token.to_string()));
                }
                (Some(c), _) => return Err(PathParseError::UnknownCommand(c)),
                (None, _) => continue,
            };

            if path.is_empty() && command != 'M' {
                return Err(PathParseError::MissingMoveTo);
            }

            let mut point = || -> Result<Point, PathParseError> {
                let x = next_number(&mut tokens, command)?;
                let y = next_number(&mut tokens, command)?;
                Ok(Point::new(x, y))
            };

            let parsed = match command {
                'M' => PathCommand::MoveTo(point()?),
                'L' => PathCommand::LineTo(point()?),
                'C' => {
                    let ctrl1 = point()?;
                    let ctrl2 = point()?;
                    let to = point()?;
                    PathCommand::CubicTo { ctrl1, ctrl2, to }
                }
                'Z' => PathCommand::Close,
                other => return Err(PathParseError::UnknownCommand(other)),
            };
            path.push(parsed);
        }

        Ok(path)
    }
}

fn next_number<'a, I>(tokens: &mut I, command: char) -> Result<f64, PathParseError>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or(PathParseError::MissingNumber { command })?;
    if token.len() == 1 && token.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(PathParseError::MissingNumber { command });
    }
    token
        .parse::<f64>()
        .map_err(|_| PathParseError::InvalidNumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_pair() -> Vec<Point> {
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]
    }

    #[test]
    fn test_two_point_path_string() {
        let path = build_path(&flat_pair(), 10.0, 20.0);
        assert_eq!(path.cubic_count(), 1);
        assert_eq!(path.to_string(), "M 0 0 C 5 0 5 0 10 0 L 10 20 L 0 20 Z");
    }

    #[test]
    fn test_initial_anchor_reflects_first_slope() {
        let points = vec![Point::new(0.0, 10.0), Point::new(20.0, 14.0)];
        let path = build_path(&points, 20.0, 50.0);
        // y = 14 - 10 + 10 + (14 - 10) = 18
        assert_eq!(
            path.commands()[1],
            PathCommand::cubic_anchor(Point::new(10.0, 18.0), Point::new(20.0, 14.0))
        );
    }

    #[test]
    fn test_anchor_recurrence_reflects_about_sample() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 4.0),
            Point::new(20.0, 2.0),
            Point::new(30.0, 6.0),
        ];
        let path = build_path(&points, 30.0, 40.0);
        assert_eq!(path.cubic_count(), 3);

        // c0 = (5, 8); c1 = 2*(10,4) - c0 = (15, 0); c2 = 2*(20,2) - c1 = (25, 4)
        let expected = [
            PathCommand::cubic_anchor(Point::new(5.0, 8.0), points[1]),
            PathCommand::cubic_anchor(Point::new(15.0, 0.0), points[2]),
            PathCommand::cubic_anchor(Point::new(25.0, 4.0), points[3]),
        ];
        assert_eq!(&path.commands()[1..4], &expected);
    }

    #[test]
    fn test_path_closes_through_bottom_corners() {
        let points = vec![
            Point::new(0.0, 3.0),
            Point::new(50.0, 7.5),
            Point::new(100.0, 1.25),
        ];
        let path = build_path(&points, 100.0, 80.0);
        let n = path.len();
        assert_eq!(path.commands()[n - 3], PathCommand::LineTo(Point::new(100.0, 80.0)));
        assert_eq!(path.commands()[n - 2], PathCommand::LineTo(Point::new(0.0, 80.0)));
        assert!(path.is_closed());
        assert_eq!(path.current_point(), Some(Point::new(0.0, 80.0)));
    }

    #[test]
    fn test_number_formatting() {
        let path = build_path(
            &[Point::new(-0.0, 2.5), Point::new(f64::NAN, f64::INFINITY)],
            1.0,
            0.1,
        );
        let svg = path.to_string();
        assert!(svg.starts_with("M 0 2.5 C NaN Infinity"));
        assert!(svg.ends_with("L 1 0.1 L 0 0.1 Z"));
    }

    #[test]
    fn test_number_formatting_switches_to_exponents() {
        let path = build_path(
            &[Point::new(0.0, 1e-7), Point::new(2e21, 0.000001)],
            1.2345678901234568e20,
            -3.5e-9,
        );
        let svg = path.to_string();
        assert!(svg.starts_with("M 0 1e-7 C 1e+21 "), "{}", svg);
        assert!(svg.contains(" 2e+21 0.000001 L "), "{}", svg);
        assert!(
            svg.ends_with("L 123456789012345680000 -3.5e-9 L 0 -3.5e-9 Z"),
            "{}",
            svg
        );

        let parsed: PathDescription = svg.parse().unwrap();
        assert_eq!(parsed, path);
    }

    #[test]
    fn test_tiny_sample_heights_use_exponent_form() {
        use crate::wave::{WaveParameters, sample};

        let params = WaveParameters::new(1.0, 0.0, 1.0, 1);
        let points = sample(100.0, 0.0001, &params);
        let svg = build_path(&points, 100.0, 50.0).to_string();
        assert!(svg.starts_with("M 0 9.999999966666668e-9 "), "{}", svg);
    }

    #[test]
    fn test_parse_round_trips_built_path() {
        let points = vec![
            Point::new(0.0, 21.337),
            Point::new(33.3, 25.0),
            Point::new(66.6, 39.99),
            Point::new(99.9, 20.0),
        ];
        let path = build_path(&points, 99.9, 120.0);
        let parsed: PathDescription = path.to_string().parse().unwrap();
        assert_eq!(parsed, path);
    }

    #[test]
    fn test_parse_accepts_commas() {
        let parsed: PathDescription = "M 0,0 L 4,5 Z".parse().unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed.current_point(), Some(Point::new(4.0, 5.0)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "L 1 2".parse::<PathDescription>(),
            Err(PathParseError::MissingMoveTo)
        );
        assert_eq!(
            "M 1 2 Q 1 2 3 4".parse::<PathDescription>(),
            Err(PathParseError::UnknownCommand('Q'))
        );
        assert_eq!(
            "M 1 Z".parse::<PathDescription>(),
            Err(PathParseError::MissingNumber { command: 'M' })
        );
        assert_eq!(
            "M 1 abc".parse::<PathDescription>(),
            Err(PathParseError::InvalidNumber("abc".to_string()))
        );
    }

    #[test]
    #[should_panic]
    fn test_single_point_is_precondition_violation() {
        build_path(&[Point::new(0.0, 0.0)], 10.0, 10.0);
    }
}
