use crate::foundation::{
    core::{Progress, ScrollSample},
    error::{FolioError, FolioResult},
};

/// A position along an element or the viewport, as a fraction of its height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Start,
    Center,
    End,
    Fraction(f64),
}

impl Edge {
    pub fn fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
            Self::Fraction(f) => f,
        }
    }

    /// `start`, `center`, `end`, a fraction like `0.25`, or a percentage like `25%`.
    pub fn parse(s: &str) -> FolioResult<Self> {
        let s = s.trim().to_ascii_lowercase();
        let edge = match s.as_str() {
            "start" | "top" => Self::Start,
            "center" | "middle" => Self::Center,
            "end" | "bottom" => Self::End,
            other => {
                let f = match other.strip_suffix('%') {
                    Some(pct) => pct.trim().parse::<f64>().map(|v| v / 100.0),
                    None => other.parse::<f64>(),
                }
                .map_err(|_| FolioError::validation(format!("unknown scroll edge '{other}'")))?;
                if !f.is_finite() || !(0.0..=1.0).contains(&f) {
                    return Err(FolioError::validation(format!(
                        "scroll edge '{other}' must lie within [0, 1]"
                    )));
                }
                Self::Fraction(f)
            }
        };
        Ok(edge)
    }
}

/// "Element edge meets viewport edge", e.g. `start end`: the element's top reaches the
/// viewport's bottom.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OffsetPoint {
    pub element: Edge,
    pub viewport: Edge,
}

impl OffsetPoint {
    pub fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    pub fn parse(s: &str) -> FolioResult<Self> {
        let mut parts = s.split_whitespace();
        let (Some(element), Some(viewport), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(FolioError::validation(format!(
                "scroll offset '{s}' must be '<element edge> <viewport edge>'"
            )));
        };
        Ok(Self {
            element: Edge::parse(element)?,
            viewport: Edge::parse(viewport)?,
        })
    }

    /// Scroll position at which the two edges coincide.
    fn scroll_position(&self, sample: &ScrollSample) -> f64 {
        sample.target_top + self.element.fraction() * sample.target_height
            - self.viewport.fraction() * sample.viewport_height
    }
}

/// Pair of offset points defining where progress is 0 and where it is 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollOffset {
    pub start: OffsetPoint,
    pub end: OffsetPoint,
}

impl ScrollOffset {
    /// From the element's top entering at the bottom until its bottom leaves at the top.
    pub const ENTER_EXIT: Self = Self {
        start: OffsetPoint {
            element: Edge::Start,
            viewport: Edge::End,
        },
        end: OffsetPoint {
            element: Edge::End,
            viewport: Edge::Start,
        },
    };

    /// From the element's top entering until it reaches the viewport's top.
    pub const ENTER: Self = Self {
        start: OffsetPoint {
            element: Edge::Start,
            viewport: Edge::End,
        },
        end: OffsetPoint {
            element: Edge::Start,
            viewport: Edge::Start,
        },
    };

    /// While the element is pinned: top at viewport top until bottom at viewport bottom.
    pub const CONTAIN: Self = Self {
        start: OffsetPoint {
            element: Edge::Start,
            viewport: Edge::Start,
        },
        end: OffsetPoint {
            element: Edge::End,
            viewport: Edge::End,
        },
    };

    pub fn parse(start: &str, end: &str) -> FolioResult<Self> {
        Ok(Self {
            start: OffsetPoint::parse(start)?,
            end: OffsetPoint::parse(end)?,
        })
    }

    pub fn progress(&self, sample: &ScrollSample) -> Progress {
        let s0 = self.start.scroll_position(sample);
        let s1 = self.end.scroll_position(sample);
        let span = s1 - s0;
        if span.abs() < f64::EPSILON {
            return if sample.raw_offset >= s1 {
                Progress::ONE
            } else {
                Progress::ZERO
            };
        }
        Progress::new((sample.raw_offset - s0) / span)
    }
}

impl Default for ScrollOffset {
    fn default() -> Self {
        Self::ENTER_EXIT
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/offset.rs"]
mod tests;
