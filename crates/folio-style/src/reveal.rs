//! Hidden and revealed class lists of a reveal block.

use crate::transition::RevealTransition;

/// The hidden-state look of a reveal block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RevealPreset {
    /// Fade in, rise 20px and grow from 95%. Used for images and cards.
    #[default]
    FadeSlideScale,
    /// Fade in and rise 20px. Used for headings.
    FadeSlide,
}

impl RevealPreset {
    /// Utility classes for the hidden state.
    pub const fn hidden_classes(self) -> &'static str {
        match self {
            Self::FadeSlideScale => "opacity-0 translate-y-5 scale-95",
            Self::FadeSlide => "opacity-0 translate-y-5",
        }
    }

    /// Utility classes for the revealed state.
    pub const fn revealed_classes(self) -> &'static str {
        match self {
            Self::FadeSlideScale => "opacity-100 translate-y-0 scale-100",
            Self::FadeSlide => "opacity-100 translate-y-0",
        }
    }
}

/// Class list and inline style for one reveal block in one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealClasses {
    base: String,
    revealed: bool,
    state: &'static str,
    delay: Option<String>,
}

impl RevealClasses {
    /// Classes for `preset` animated by `transition`, in the given state.
    pub fn new(preset: RevealPreset, transition: &RevealTransition, revealed: bool) -> Self {
        let base = format!(
            "transition-all {} {}",
            transition.duration_class(),
            transition.easing().utility_class()
        );
        let state = if revealed {
            preset.revealed_classes()
        } else {
            preset.hidden_classes()
        };
        Self {
            base,
            revealed,
            state,
            delay: transition.delay_css(),
        }
    }

    /// The transition classes shared by both states.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Whether these are the revealed-state classes.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The classes for the current state.
    pub fn state(&self) -> &'static str {
        self.state
    }

    /// The full class attribute value.
    pub fn class(&self) -> String {
        format!("{} {}", self.base, self.state)
    }

    /// The inline style attribute value, present for delayed items.
    pub fn inline_style(&self) -> Option<&str> {
        self.delay.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::DEFAULT_STAGGER;

    #[test]
    fn test_preset_classes() {
        assert_eq!(
            RevealPreset::default().hidden_classes(),
            "opacity-0 translate-y-5 scale-95"
        );
        assert_eq!(
            RevealPreset::FadeSlideScale.revealed_classes(),
            "opacity-100 translate-y-0 scale-100"
        );
        assert_eq!(RevealPreset::FadeSlide.hidden_classes(), "opacity-0 translate-y-5");
        assert_eq!(RevealPreset::FadeSlide.revealed_classes(), "opacity-100 translate-y-0");
    }

    #[test]
    fn test_classes() {
        let transition = RevealTransition::new();
        let hidden = RevealClasses::new(RevealPreset::FadeSlideScale, &transition, false);
        assert_eq!(
            hidden.class(),
            "transition-all duration-700 ease-out opacity-0 translate-y-5 scale-95"
        );
        assert_eq!(hidden.inline_style(), None);
        assert!(!hidden.is_revealed());

        let revealed = RevealClasses::new(RevealPreset::FadeSlide, &transition, true);
        assert_eq!(
            revealed.class(),
            "transition-all duration-700 ease-out opacity-100 translate-y-0"
        );
    }

    #[test]
    fn test_staggered_classes_carry_delay() {
        let transition = RevealTransition::new().staggered(1, DEFAULT_STAGGER);
        let classes = RevealClasses::new(RevealPreset::FadeSlideScale, &transition, true);
        assert_eq!(classes.state(), "opacity-100 translate-y-0 scale-100");
        assert_eq!(classes.inline_style(), Some("transition-delay: 150ms"));
    }
}
