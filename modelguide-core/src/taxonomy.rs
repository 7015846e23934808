//! The four elicitation dimensions and their options.
//!
//! Everything here is static, process-wide data. Options carry only the
//! matching metadata the scorer needs — display labels are the caller's
//! concern (they go through the external localization layer).

use serde::Serialize;

/// One of the four preference dimensions a user is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dimension {
    UseCase,
    Priority,
    Hardware,
    Language,
}

impl Dimension {
    /// All dimensions in elicitation order.
    pub const ALL: [Dimension; 4] = [
        Dimension::UseCase,
        Dimension::Priority,
        Dimension::Hardware,
        Dimension::Language,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Dimension::UseCase => "use_case",
            Dimension::Priority => "priority",
            Dimension::Hardware => "hardware",
            Dimension::Language => "language",
        }
    }
}

// ---------------------------------------------------------------------------
// Use case
// ---------------------------------------------------------------------------

/// A primary task the user wants the model for. Matching is by model type
/// (strong signal) plus modality overlap (weaker signal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseCaseOption {
    pub id: &'static str,
    /// Model `type` strings that satisfy this use case.
    pub accepted_types: &'static [&'static str],
    /// Modalities that earn the overlap bonus.
    pub accepted_modalities: &'static [&'static str],
}

pub const USE_CASES: &[UseCaseOption] = &[
    UseCaseOption {
        id: "writing",
        accepted_types: &["LLM"],
        accepted_modalities: &["Text", "Multi"],
    },
    UseCaseOption {
        id: "coding",
        accepted_types: &["LLM", "Code LLM"],
        accepted_modalities: &["Text", "Multi"],
    },
    UseCaseOption {
        id: "chat",
        accepted_types: &["LLM"],
        accepted_modalities: &["Text", "Multi"],
    },
    UseCaseOption {
        id: "reasoning",
        accepted_types: &["LLM"],
        accepted_modalities: &["Text", "Multi"],
    },
    UseCaseOption {
        id: "image",
        accepted_types: &["Image Gen"],
        accepted_modalities: &["Image"],
    },
    UseCaseOption {
        id: "video",
        accepted_types: &["Video Gen"],
        accepted_modalities: &["Video"],
    },
    UseCaseOption {
        id: "vision",
        accepted_types: &["Vision LLM", "Vision"],
        accepted_modalities: &["Multi", "Image"],
    },
    UseCaseOption {
        id: "audio",
        accepted_types: &["TTS", "ASR", "Audio LLM", "Music Gen"],
        accepted_modalities: &["Audio"],
    },
    UseCaseOption {
        id: "embedding",
        accepted_types: &["Embedding"],
        accepted_modalities: &["Text"],
    },
    UseCaseOption {
        id: "multi",
        accepted_types: &["LLM"],
        accepted_modalities: &["Multi"],
    },
];

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Which scoring branch the priority dimension selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriorityPolicy {
    Quality,
    Speed,
    Cost,
    Privacy,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityOption {
    pub id: &'static str,
    pub policy: PriorityPolicy,
}

pub const PRIORITIES: &[PriorityOption] = &[
    PriorityOption {
        id: "quality",
        policy: PriorityPolicy::Quality,
    },
    PriorityOption {
        id: "speed",
        policy: PriorityPolicy::Speed,
    },
    PriorityOption {
        id: "cost",
        policy: PriorityPolicy::Cost,
    },
    PriorityOption {
        id: "privacy",
        policy: PriorityPolicy::Privacy,
    },
    PriorityOption {
        id: "balanced",
        policy: PriorityPolicy::Balanced,
    },
];

// ---------------------------------------------------------------------------
// Hardware
// ---------------------------------------------------------------------------

/// VRAM ceiling for the top GPU tier. Effectively "unbounded" — no catalog
/// model needs anywhere near this much, so every local model passes the
/// ceiling check.
pub const UNBOUNDED_VRAM_GB: f64 = 999.0;

/// What the user's machine can host. The ceilings are the values the
/// hardware scoring branch compares against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HardwareTier {
    /// Hosted API access, no local inference at all.
    Cloud,
    /// CPU-only box.
    CpuOnly { max_ram_gb: f64 },
    /// Dedicated GPU with a VRAM ceiling.
    Gpu { max_vram_gb: f64, max_ram_gb: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardwareOption {
    pub id: &'static str,
    pub tier: HardwareTier,
}

pub const HARDWARE_TIERS: &[HardwareOption] = &[
    HardwareOption {
        id: "no_gpu",
        tier: HardwareTier::CpuOnly { max_ram_gb: 16.0 },
    },
    HardwareOption {
        id: "low_gpu",
        tier: HardwareTier::Gpu {
            max_vram_gb: 8.0,
            max_ram_gb: 16.0,
        },
    },
    HardwareOption {
        id: "mid_gpu",
        tier: HardwareTier::Gpu {
            max_vram_gb: 24.0,
            max_ram_gb: 32.0,
        },
    },
    HardwareOption {
        id: "high_gpu",
        tier: HardwareTier::Gpu {
            max_vram_gb: UNBOUNDED_VRAM_GB,
            max_ram_gb: 128.0,
        },
    },
    HardwareOption {
        id: "cloud",
        tier: HardwareTier::Cloud,
    },
];

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub id: &'static str,
    /// Hard gate: models without Arabic support get zero language points.
    pub requires_arabic: bool,
}

pub const LANGUAGES: &[LanguageOption] = &[
    LanguageOption {
        id: "ar_required",
        requires_arabic: true,
    },
    LanguageOption {
        id: "en_only",
        requires_arabic: false,
    },
    LanguageOption {
        id: "multi",
        requires_arabic: false,
    },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn use_case(id: &str) -> Option<&'static UseCaseOption> {
    USE_CASES.iter().find(|o| o.id == id)
}

pub fn priority(id: &str) -> Option<&'static PriorityOption> {
    PRIORITIES.iter().find(|o| o.id == id)
}

pub fn hardware(id: &str) -> Option<&'static HardwareOption> {
    HARDWARE_TIERS.iter().find(|o| o.id == id)
}

pub fn language(id: &str) -> Option<&'static LanguageOption> {
    LANGUAGES.iter().find(|o| o.id == id)
}

/// Ordered option ids for one dimension. Callers that only need ids (menus,
/// validation) use this instead of the typed tables.
pub fn option_ids(dimension: Dimension) -> Vec<&'static str> {
    match dimension {
        Dimension::UseCase => USE_CASES.iter().map(|o| o.id).collect(),
        Dimension::Priority => PRIORITIES.iter().map(|o| o.id).collect(),
        Dimension::Hardware => HARDWARE_TIERS.iter().map(|o| o.id).collect(),
        Dimension::Language => LANGUAGES.iter().map(|o| o.id).collect(),
    }
}

pub fn is_valid_option(dimension: Dimension, id: &str) -> bool {
    match dimension {
        Dimension::UseCase => use_case(id).is_some(),
        Dimension::Priority => priority(id).is_some(),
        Dimension::Hardware => hardware(id).is_some(),
        Dimension::Language => language(id).is_some(),
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// A complete answer to all four dimensions. Only constructible complete:
/// scoring never has to re-check for missing slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreferenceSelection {
    pub use_case: &'static UseCaseOption,
    pub priority: &'static PriorityOption,
    pub hardware: &'static HardwareOption,
    pub language: &'static LanguageOption,
}

impl PreferenceSelection {
    /// Resolve four option ids into a selection. Any unknown id yields
    /// `None` — the reference is ignored rather than raised.
    pub fn from_ids(
        use_case_id: &str,
        priority_id: &str,
        hardware_id: &str,
        language_id: &str,
    ) -> Option<Self> {
        Some(PreferenceSelection {
            use_case: use_case(use_case_id)?,
            priority: priority(priority_id)?,
            hardware: hardware(hardware_id)?,
            language: language(language_id)?,
        })
    }
}
