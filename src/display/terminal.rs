// src/display/terminal.rs
//! Terminal-based display implementation

use super::{format_coordinate, Report, ReportDisplay};
use crate::{error::Result, geo::GeoPoint};
use crossterm::style::{style, Color, Stylize};
use std::io::Write;

pub struct TerminalDisplay {
    color: bool,
}

impl TerminalDisplay {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn header(&self, out: &mut dyn Write, title: &str) -> Result<()> {
        self.colored(out, Color::Green, title)?;
        writeln!(out)?;
        self.colored(out, Color::Green, &"=".repeat(title.chars().count()))?;
        writeln!(out)?;
        Ok(())
    }

    fn field(&self, out: &mut dyn Write, label: &str, value: &str) -> Result<()> {
        self.colored(out, Color::Cyan, &format!("{:<12}", label))?;
        writeln!(out, " {}", value)?;
        Ok(())
    }

    fn point(&self, out: &mut dyn Write, label: &str, point: &GeoPoint) -> Result<()> {
        self.field(
            out,
            label,
            &format!(
                "{} {}",
                format_coordinate(point.latitude()),
                format_coordinate(point.longitude())
            ),
        )
    }

    fn colored(&self, out: &mut dyn Write, color: Color, text: &str) -> Result<()> {
        if self.color {
            write!(out, "{}", style(text).with(color))?;
        } else {
            write!(out, "{}", text)?;
        }
        Ok(())
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ReportDisplay for TerminalDisplay {
    fn render(&self, out: &mut dyn Write, report: &Report) -> Result<()> {
        match report {
            Report::Coordinate { input, degrees } => {
                self.header(out, "Coordinate")?;
                self.field(out, "Input", input)?;
                self.field(out, "Degrees", &format_coordinate(*degrees))?;
            }
            Report::Point {
                point,
                has_location,
            } => {
                self.header(out, "Point")?;
                self.point(out, "Position", point)?;
                if !has_location {
                    self.colored(out, Color::Yellow, "No location")?;
                    writeln!(out)?;
                }
            }
            Report::Distance {
                from,
                to,
                distance,
                unit,
            } => {
                self.header(out, "Distance")?;
                self.point(out, "From", from)?;
                self.point(out, "To", to)?;
                self.field(out, "Distance", &format!("{} {}", distance, unit.suffix()))?;
            }
            Report::Bearing {
                from,
                to,
                bearing,
                exact,
                direction,
            } => {
                self.header(out, "Bearing")?;
                self.point(out, "From", from)?;
                self.point(out, "To", to)?;
                self.field(out, "Bearing", &format!("{}° ({:.2}°)", bearing, exact))?;
                self.field(out, "Direction", direction.as_str())?;
            }
            Report::Center {
                count,
                located,
                center,
            } => {
                self.header(out, "Center")?;
                self.field(out, "Points", &format!("{} ({} located)", count, located))?;
                self.point(out, "Center", center)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}
