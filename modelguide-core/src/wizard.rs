//! The four-step elicitation state machine.
//!
//! `WizardState` is a plain value owned by the caller; `choose` and
//! `restart` are pure transitions that return the next state. There is no
//! hidden session singleton and no internal timing — the presentation
//! layer decides when to show the Results screen it lands on.

use crate::taxonomy::{
    self, Dimension, HardwareOption, LanguageOption, PreferenceSelection, PriorityOption,
    UseCaseOption,
};

/// Where the wizard currently is. Steps run strictly in order; `Results`
/// is terminal until `restart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    UseCase,
    Priority,
    Hardware,
    Language,
    Results,
}

impl WizardStep {
    /// The dimension being asked about at this step, if any.
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            WizardStep::UseCase => Some(Dimension::UseCase),
            WizardStep::Priority => Some(Dimension::Priority),
            WizardStep::Hardware => Some(Dimension::Hardware),
            WizardStep::Language => Some(Dimension::Language),
            WizardStep::Results => None,
        }
    }

    /// Zero-based step index for progress display; `None` at Results.
    pub fn index(&self) -> Option<usize> {
        match self {
            WizardStep::UseCase => Some(0),
            WizardStep::Priority => Some(1),
            WizardStep::Hardware => Some(2),
            WizardStep::Language => Some(3),
            WizardStep::Results => None,
        }
    }

    fn next(self) -> WizardStep {
        match self {
            WizardStep::UseCase => WizardStep::Priority,
            WizardStep::Priority => WizardStep::Hardware,
            WizardStep::Hardware => WizardStep::Language,
            WizardStep::Language | WizardStep::Results => WizardStep::Results,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WizardState {
    step: WizardStep,
    use_case: Option<&'static UseCaseOption>,
    priority: Option<&'static PriorityOption>,
    hardware: Option<&'static HardwareOption>,
    language: Option<&'static LanguageOption>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Record one choice for the dimension the wizard is currently asking
    /// about, then advance. Anything invalid — a dimension that is not the
    /// current step's, an unknown option id, a call in Results — returns
    /// the state unchanged. Later steps stay unanswered until reached; only
    /// presets may fill all four at once.
    #[must_use]
    pub fn choose(mut self, dimension: Dimension, option_id: &str) -> Self {
        let Some(current) = self.step.dimension() else {
            return self;
        };
        if current != dimension {
            return self;
        }

        match dimension {
            Dimension::UseCase => match taxonomy::use_case(option_id) {
                Some(option) => self.use_case = Some(option),
                None => return self,
            },
            Dimension::Priority => match taxonomy::priority(option_id) {
                Some(option) => self.priority = Some(option),
                None => return self,
            },
            Dimension::Hardware => match taxonomy::hardware(option_id) {
                Some(option) => self.hardware = Some(option),
                None => return self,
            },
            Dimension::Language => match taxonomy::language(option_id) {
                Some(option) => self.language = Some(option),
                None => return self,
            },
        }

        self.step = self.step.next();
        self
    }

    /// Clear all four slots and return to the first step.
    #[must_use]
    pub fn restart(self) -> Self {
        Self::new()
    }

    /// The completed selection, available once all four dimensions are
    /// answered.
    pub fn selection(&self) -> Option<PreferenceSelection> {
        Some(PreferenceSelection {
            use_case: self.use_case?,
            priority: self.priority?,
            hardware: self.hardware?,
            language: self.language?,
        })
    }
}
