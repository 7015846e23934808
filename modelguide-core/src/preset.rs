//! Canned scenarios that skip the wizard.
//!
//! A preset is nothing more than a pre-filled answer to all four
//! dimensions. It resolves through the same lookup path the wizard uses,
//! so ranking from a preset is observationally identical to choosing the
//! same four options by hand.

use crate::taxonomy::PreferenceSelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub id: &'static str,
    pub use_case: &'static str,
    pub priority: &'static str,
    pub hardware: &'static str,
    pub language: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        id: "write_articles",
        use_case: "writing",
        priority: "quality",
        hardware: "cloud",
        language: "ar_required",
    },
    Preset {
        id: "coding_help",
        use_case: "coding",
        priority: "quality",
        hardware: "cloud",
        language: "en_only",
    },
    Preset {
        id: "generate_images",
        use_case: "image",
        priority: "quality",
        hardware: "cloud",
        language: "en_only",
    },
    Preset {
        id: "private_local",
        use_case: "chat",
        priority: "privacy",
        hardware: "mid_gpu",
        language: "en_only",
    },
    Preset {
        id: "cheapest",
        use_case: "chat",
        priority: "cost",
        hardware: "cloud",
        language: "en_only",
    },
    Preset {
        id: "smart_reasoning",
        use_case: "reasoning",
        priority: "quality",
        hardware: "cloud",
        language: "en_only",
    },
    Preset {
        id: "generate_videos",
        use_case: "video",
        priority: "quality",
        hardware: "high_gpu",
        language: "en_only",
    },
    Preset {
        id: "speech_audio",
        use_case: "audio",
        priority: "balanced",
        hardware: "cloud",
        language: "ar_required",
    },
];

/// Resolve a preset id to a complete selection. Unknown ids yield `None`,
/// never an error.
pub fn resolve(preset_id: &str) -> Option<PreferenceSelection> {
    let preset = PRESETS.iter().find(|p| p.id == preset_id)?;
    PreferenceSelection::from_ids(
        preset.use_case,
        preset.priority,
        preset.hardware,
        preset.language,
    )
}
