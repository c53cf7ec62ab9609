use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SignificanceMarker {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "p<0.05")]
    P05,
    #[serde(rename = "p<0.01")]
    P01,
    #[serde(rename = "p<0.001")]
    P001,
}

impl SignificanceMarker {
    pub fn from_p_value(p: f64) -> Self {
        if p < 0.001 {
            SignificanceMarker::P001
        } else if p < 0.01 {
            SignificanceMarker::P01
        } else if p < 0.05 {
            SignificanceMarker::P05
        } else {
            SignificanceMarker::None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SignificanceMarker::None => "none",
            SignificanceMarker::P05 => "p<0.05",
            SignificanceMarker::P01 => "p<0.01",
            SignificanceMarker::P001 => "p<0.001",
        }
    }

    /// Table annotation: one asterisk per significance level.
    pub fn stars(self) -> &'static str {
        match self {
            SignificanceMarker::None => "",
            SignificanceMarker::P05 => "*",
            SignificanceMarker::P01 => "**",
            SignificanceMarker::P001 => "***",
        }
    }
}

pub fn marker_order() -> &'static [SignificanceMarker] {
    &[
        SignificanceMarker::None,
        SignificanceMarker::P05,
        SignificanceMarker::P01,
        SignificanceMarker::P001,
    ]
}
