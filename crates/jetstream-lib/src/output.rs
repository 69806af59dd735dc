use std::fmt::Write;

use serde::Serialize;

use crate::routing::{FlightAlgorithm, FlightPlan};
use crate::segment::{Cost, Position, Segment};

/// Presentation style for turning a [`FlightSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightRenderMode {
    /// Total cost on one line, then the ridden streams as `[(s,e), (s,e)]`.
    Plain,
    /// One line per leg with its cost, followed by the total.
    Detailed,
}

/// Escape sequences wrapped around parts of the detailed rendering.
///
/// The default style is all empty strings, which renders plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStyle {
    pub jet: &'static str,
    pub open_air: &'static str,
    pub backward: &'static str,
    pub total: &'static str,
    pub reset: &'static str,
}

impl RenderStyle {
    fn for_leg(&self, leg: &FlightLeg) -> &'static str {
        match *leg {
            FlightLeg::Jet { .. } => self.jet,
            FlightLeg::OpenAir { from, to, .. } if to < from => self.backward,
            FlightLeg::OpenAir { .. } => self.open_air,
        }
    }
}

/// Single stretch of a planned flight.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlightLeg {
    /// Unaccelerated flight; `from > to` means flying back toward the origin.
    OpenAir {
        from: Position,
        to: Position,
        distance: Position,
        cost: Cost,
    },
    /// Riding a jet stream from its start to its end.
    Jet {
        start: Position,
        end: Position,
        cost: Cost,
    },
}

impl FlightLeg {
    pub fn cost(&self) -> Cost {
        match *self {
            FlightLeg::OpenAir { cost, .. } | FlightLeg::Jet { cost, .. } => cost,
        }
    }

    fn describe(&self) -> String {
        match *self {
            FlightLeg::OpenAir { from, to, .. } if to < from => {
                format!("open air {from} -> {to} (backward)")
            }
            FlightLeg::OpenAir { from, to, .. } => format!("open air {from} -> {to}"),
            FlightLeg::Jet { start, end, .. } => format!("jet stream {start} -> {end}"),
        }
    }
}

/// Structured representation of a planned flight that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlightSummary {
    pub algorithm: FlightAlgorithm,
    pub weight: Cost,
    pub cost: Cost,
    pub destination: Position,
    pub ridden: Vec<Segment>,
    pub legs: Vec<FlightLeg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_frontier: Option<usize>,
}

impl FlightSummary {
    /// Expand a [`FlightPlan`] into its individual legs.
    pub fn from_plan(plan: &FlightPlan) -> Self {
        let mut legs = Vec::with_capacity(plan.ridden.len() * 2 + 1);
        let mut position: Position = 0;

        for jet in &plan.ridden {
            push_open_air(&mut legs, plan.weight, position, jet.start);
            legs.push(FlightLeg::Jet {
                start: jet.start,
                end: jet.end,
                cost: jet.cost,
            });
            position = jet.end;
        }
        push_open_air(&mut legs, plan.weight, position, plan.destination);

        Self {
            algorithm: plan.algorithm,
            weight: plan.weight,
            cost: plan.cost,
            destination: plan.destination,
            ridden: plan.ridden.clone(),
            legs,
            peak_frontier: plan.peak_frontier,
        }
    }

    /// `[(s,e), (s,e)]` rendering of the ridden streams.
    pub fn ridden_list(&self) -> String {
        let joined = self
            .ridden
            .iter()
            .map(Segment::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{joined}]")
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: FlightRenderMode) -> String {
        self.render_styled(mode, &RenderStyle::default())
    }

    /// Render with `style` applied to the detailed leg listing.
    ///
    /// The plain mode is the output contract and never carries styling.
    pub fn render_styled(&self, mode: FlightRenderMode, style: &RenderStyle) -> String {
        match mode {
            FlightRenderMode::Plain => self.render_plain(),
            FlightRenderMode::Detailed => self.render_detailed(style),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.cost);
        let _ = writeln!(buffer, "{}", self.ridden_list());
        buffer
    }

    fn render_detailed(&self, style: &RenderStyle) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Flight 0 -> {} ({} jet streams, weight {}, algorithm: {}):",
            self.destination,
            self.ridden.len(),
            self.weight,
            self.algorithm
        );
        for (index, leg) in self.legs.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "{:>3}: {}{}{} [cost {}]",
                index + 1,
                style.for_leg(leg),
                leg.describe(),
                style.reset,
                format_with_separators(leg.cost())
            );
        }
        if let Some(peak) = self.peak_frontier {
            let _ = writeln!(buffer, "Peak frontier: {peak} paths");
        }
        let _ = writeln!(
            buffer,
            "{}Total cost: {}{}",
            style.total,
            format_with_separators(self.cost),
            style.reset
        );
        buffer
    }
}

/// Format a signed amount with thousand separators (commas).
///
/// # Examples
///
/// ```
/// # use jetstream_lib::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1000), "1,000");
/// assert_eq!(format_with_separators(-1234567), "-1,234,567");
/// ```
pub fn format_with_separators(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if n < 0 {
        result.insert(0, '-');
    }
    result
}

fn push_open_air(legs: &mut Vec<FlightLeg>, weight: Cost, from: Position, to: Position) {
    if from == to {
        return;
    }
    let distance = (to - from).abs();
    legs.push(FlightLeg::OpenAir {
        from,
        to,
        distance,
        cost: weight * distance,
    });
}
