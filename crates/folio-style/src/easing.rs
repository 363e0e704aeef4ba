//! Easing curves for reveal transitions.
//!
//! Each curve is a CSS timing function selected by its utility class; the
//! browser runs the transition itself.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Available easing curves, named after their utility classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// The CSS `ease` keyword.
    Ease,
    /// Starts slow, accelerates.
    EaseIn,
    /// Starts fast, decelerates.
    #[default]
    EaseOut,
    /// Slow start and end.
    EaseInOut,
}

impl Easing {
    /// The utility class selecting this curve (`ease-out`, ...).
    pub const fn utility_class(self) -> &'static str {
        match self {
            Self::Linear => "ease-linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        })
    }
}

impl FromStr for Easing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "ease" => Ok(Self::Ease),
            "ease-in" => Ok(Self::EaseIn),
            "ease-out" => Ok(Self::EaseOut),
            "ease-in-out" => Ok(Self::EaseInOut),
            other => Err(Error::invalid_value(
                "easing",
                format!("unknown easing '{other}'"),
            )),
        }
    }
}
