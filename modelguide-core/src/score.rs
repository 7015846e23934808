//! The weighted match scorer.
//!
//! Four independent partial scores — use case (40), priority (30),
//! hardware (20), language (10) — summed and normalized to a percentage.
//! Each branch table below is a fixed contract: the exact point values
//! determine ranked order, so they must not drift.
//!
//! Missing descriptor attributes always steer into the lowest-credit
//! sub-branch for that attribute. Nothing in here errors or mutates.

use crate::catalog::ModelDescriptor;
use crate::taxonomy::{HardwareTier, PreferenceSelection, PriorityPolicy};
use serde::Serialize;

pub const USE_CASE_MAX: u32 = 40;
pub const PRIORITY_MAX: u32 = 30;
pub const HARDWARE_MAX: u32 = 20;
pub const LANGUAGE_MAX: u32 = 10;
/// Sum of the four dimension maxima. The percentage normalization divides
/// by this, so a full house is exactly 100.
pub const MAX_POINTS: u32 = USE_CASE_MAX + PRIORITY_MAX + HARDWARE_MAX + LANGUAGE_MAX;

/// Closed-model providers treated as the top quality tier.
pub const TIER1_PROVIDERS: &[&str] = &["OpenAI", "Anthropic", "Google"];

/// Name substrings that mark a latency-optimized variant.
pub const FAST_VARIANT_MARKERS: &[&str] = &["mini", "flash"];

/// Language code gated on by the `ar_required` option.
pub const ARABIC_CODE: &str = "AR";

/// Full-precision VRAM estimate: GB per billion parameters at FP16.
pub const FP16_GB_PER_B_PARAMS: f64 = 2.0;

/// VRAM overcommit factor at which a model is still judged runnable via
/// quantization, at a scoring discount. Empirical constant carried over
/// from the original heuristic — changing it changes ranked outcomes.
pub const QUANT_OVERCOMMIT_FACTOR: f64 = 1.5;

/// Per-dimension points for one (selection, descriptor) pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreBreakdown {
    pub use_case: u32,
    pub priority: u32,
    pub hardware: u32,
    pub language: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.use_case + self.priority + self.hardware + self.language
    }

    /// Integer match percentage in [0, 100].
    pub fn percent(&self) -> u8 {
        ((self.total() as f64 / MAX_POINTS as f64) * 100.0).round() as u8
    }
}

/// Score one descriptor against a complete selection. Pure and
/// deterministic; the result is in [0, 100].
pub fn score(selection: &PreferenceSelection, model: &ModelDescriptor) -> u8 {
    breakdown(selection, model).percent()
}

pub fn breakdown(selection: &PreferenceSelection, model: &ModelDescriptor) -> ScoreBreakdown {
    ScoreBreakdown {
        use_case: use_case_points(selection, model),
        priority: priority_points(selection.priority.policy, model),
        hardware: hardware_points(selection.hardware.tier, model),
        language: language_points(selection.language.requires_arabic, model),
    }
}

// ---------------------------------------------------------------------------
// Partial scores
// ---------------------------------------------------------------------------

/// Type match (+30) and modality overlap (+10) are independent bonuses.
fn use_case_points(selection: &PreferenceSelection, model: &ModelDescriptor) -> u32 {
    let option = selection.use_case;
    let mut points = 0;
    if option.accepted_types.contains(&model.kind.as_str()) {
        points += 30;
    }
    if option
        .accepted_modalities
        .iter()
        .any(|m| model.modalities.iter().any(|have| have == m))
    {
        points += 10;
    }
    points
}

/// One decision table per policy; first matching row wins.
fn priority_points(policy: PriorityPolicy, model: &ModelDescriptor) -> u32 {
    let params = model.params_b;
    match policy {
        PriorityPolicy::Quality => {
            if !model.open && is_tier1_provider(&model.provider) {
                30
            } else if matches!(params, Some(p) if p >= 70.0) {
                25
            } else if matches!(params, Some(p) if p >= 30.0) {
                15
            } else if !model.open {
                20
            } else {
                10
            }
        }
        PriorityPolicy::Speed => {
            if matches!(params, Some(p) if p <= 8.0) {
                30
            } else if matches!(params, Some(p) if p <= 14.0) {
                25
            } else if has_fast_variant_marker(&model.name) {
                28
            } else if params.is_none() && !model.open {
                // API model of unknown size -- speed is the server's problem
                15
            } else {
                5
            }
        }
        PriorityPolicy::Cost => {
            if model.open && model.license.as_deref() != Some("Commercial") {
                30
            } else if model.open {
                25
            } else if has_fast_variant_marker(&model.name) {
                15
            } else {
                5
            }
        }
        PriorityPolicy::Privacy => {
            if model.open && params.is_some() {
                30
            } else if model.open {
                20
            } else {
                // Closed models cannot run locally
                0
            }
        }
        PriorityPolicy::Balanced => {
            if model.open && matches!(params, Some(p) if (7.0..=30.0).contains(&p)) {
                28
            } else if !model.open && has_fast_variant_marker(&model.name) {
                25
            } else if model.open {
                18
            } else {
                12
            }
        }
    }
}

fn hardware_points(tier: HardwareTier, model: &ModelDescriptor) -> u32 {
    let params = model.params_b;
    match tier {
        HardwareTier::Cloud => {
            // Cloud preference implies managed access; open models remain
            // reachable via hosted inference
            if !model.open {
                20
            } else {
                10
            }
        }
        HardwareTier::CpuOnly { max_ram_gb } => {
            if model.open && matches!(params, Some(p) if p <= 3.0) {
                20
            } else if model.open && matches!(model.min_ram_gb, Some(r) if r <= max_ram_gb) {
                15
            } else if model.open && matches!(params, Some(p) if p <= 7.0) {
                10
            } else {
                0
            }
        }
        HardwareTier::Gpu { max_vram_gb, .. } => {
            if model.open && matches!(model.min_vram_gb, Some(v) if v <= max_vram_gb) {
                20
            } else if model.open && matches!(model.recommended_vram_gb, Some(v) if v <= max_vram_gb)
            {
                18
            } else if let Some(p) = params.filter(|_| model.open) {
                let est_vram = p * FP16_GB_PER_B_PARAMS;
                if est_vram <= max_vram_gb {
                    16
                } else if est_vram <= max_vram_gb * QUANT_OVERCOMMIT_FACTOR {
                    // Runnable quantized, at a discount
                    8
                } else {
                    0
                }
            } else if !model.open {
                // Small credit for falling back to the API
                5
            } else {
                0
            }
        }
    }
}

fn language_points(requires_arabic: bool, model: &ModelDescriptor) -> u32 {
    if requires_arabic {
        if model
            .languages
            .iter()
            .any(|l| l.eq_ignore_ascii_case(ARABIC_CODE))
        {
            10
        } else {
            0
        }
    } else {
        // English-or-anything never penalizes
        10
    }
}

fn is_tier1_provider(provider: &str) -> bool {
    TIER1_PROVIDERS
        .iter()
        .any(|p| p.eq_ignore_ascii_case(provider))
}

fn has_fast_variant_marker(name: &str) -> bool {
    let lower = name.to_lowercase();
    FAST_VARIANT_MARKERS.iter().any(|m| lower.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::PreferenceSelection;

    fn selection(uc: &str, pr: &str, hw: &str, lang: &str) -> PreferenceSelection {
        PreferenceSelection::from_ids(uc, pr, hw, lang).expect("test selection must resolve")
    }

    fn open_model(params_b: f64) -> ModelDescriptor {
        ModelDescriptor {
            id: "test-open".to_string(),
            name: "Test Open".to_string(),
            provider: "Test Lab".to_string(),
            kind: "LLM".to_string(),
            modalities: vec!["Text".to_string()],
            params_b: Some(params_b),
            open: true,
            languages: vec!["EN".to_string()],
            ..ModelDescriptor::default()
        }
    }

    fn closed_model(provider: &str) -> ModelDescriptor {
        ModelDescriptor {
            id: "test-closed".to_string(),
            name: "Test Closed".to_string(),
            provider: provider.to_string(),
            kind: "LLM".to_string(),
            modalities: vec!["Multi".to_string()],
            open: false,
            languages: vec!["EN".to_string(), "AR".to_string()],
            ..ModelDescriptor::default()
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Bounds and determinism
    // ────────────────────────────────────────────────────────────────────

    #[test]
    fn test_score_bounds_across_selections() {
        let models = [
            open_model(8.0),
            open_model(400.0),
            closed_model("OpenAI"),
            ModelDescriptor::default(),
        ];
        for uc in crate::taxonomy::USE_CASES {
            for pr in crate::taxonomy::PRIORITIES {
                for hw in crate::taxonomy::HARDWARE_TIERS {
                    for lang in crate::taxonomy::LANGUAGES {
                        let sel = selection(uc.id, pr.id, hw.id, lang.id);
                        for m in &models {
                            let s = score(&sel, m);
                            assert!(s <= 100, "{} scored {}", m.name, s);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_score_is_deterministic() {
        let sel = selection("coding", "balanced", "mid_gpu", "multi");
        let m = open_model(13.0);
        assert_eq!(score(&sel, &m), score(&sel, &m));
    }

    // ────────────────────────────────────────────────────────────────────
    // Use case
    // ────────────────────────────────────────────────────────────────────

    #[test]
    fn test_use_case_type_and_modality_independent() {
        let sel = selection("coding", "balanced", "cloud", "en_only");

        let mut both = open_model(7.0);
        both.kind = "Code LLM".to_string();
        assert_eq!(breakdown(&sel, &both).use_case, 40);

        let mut type_only = both.clone();
        type_only.modalities = vec!["Audio".to_string()];
        assert_eq!(breakdown(&sel, &type_only).use_case, 30);

        let mut modality_only = both.clone();
        modality_only.kind = "Image Gen".to_string();
        assert_eq!(breakdown(&sel, &modality_only).use_case, 10);

        let mut neither = both.clone();
        neither.kind = "Image Gen".to_string();
        neither.modalities = vec!["Image".to_string()];
        assert_eq!(breakdown(&sel, &neither).use_case, 0);
    }

    // ────────────────────────────────────────────────────────────────────
    // Priority branches
    // ────────────────────────────────────────────────────────────────────

    #[test]
    fn test_priority_quality_tier1_beats_size() {
        let m = closed_model("Anthropic");
        assert_eq!(priority_points(PriorityPolicy::Quality, &m), 30);

        let other_closed = closed_model("SomeStartup");
        assert_eq!(priority_points(PriorityPolicy::Quality, &other_closed), 20);

        assert_eq!(priority_points(PriorityPolicy::Quality, &open_model(70.0)), 25);
        assert_eq!(priority_points(PriorityPolicy::Quality, &open_model(30.0)), 15);
        assert_eq!(priority_points(PriorityPolicy::Quality, &open_model(7.0)), 10);
    }

    #[test]
    fn test_priority_speed_small_params_win() {
        assert_eq!(priority_points(PriorityPolicy::Speed, &open_model(8.0)), 30);
        assert_eq!(priority_points(PriorityPolicy::Speed, &open_model(14.0)), 25);

        // Known-large model with a fast-variant name: param rows win first
        let mut big_flash = open_model(70.0);
        big_flash.name = "Mega Flash".to_string();
        assert_eq!(priority_points(PriorityPolicy::Speed, &big_flash), 28);

        // Closed, unknown size
        let api = closed_model("OpenAI");
        assert_eq!(priority_points(PriorityPolicy::Speed, &api), 15);

        assert_eq!(priority_points(PriorityPolicy::Speed, &open_model(70.0)), 5);
    }

    #[test]
    fn test_priority_speed_marker_case_insensitive() {
        let mut m = closed_model("OpenAI");
        m.name = "GPT-4o MINI".to_string();
        assert_eq!(priority_points(PriorityPolicy::Speed, &m), 28);
    }

    #[test]
    fn test_priority_cost_license_matters() {
        let mut permissive = open_model(7.0);
        permissive.license = Some("Apache-2.0".to_string());
        assert_eq!(priority_points(PriorityPolicy::Cost, &permissive), 30);

        // Unknown license on an open model still counts as non-commercial
        let unlicensed = open_model(7.0);
        assert_eq!(priority_points(PriorityPolicy::Cost, &unlicensed), 30);

        let mut commercial = open_model(7.0);
        commercial.license = Some("Commercial".to_string());
        assert_eq!(priority_points(PriorityPolicy::Cost, &commercial), 25);

        let mut closed_mini = closed_model("OpenAI");
        closed_mini.name = "GPT-4o mini".to_string();
        assert_eq!(priority_points(PriorityPolicy::Cost, &closed_mini), 15);

        assert_eq!(priority_points(PriorityPolicy::Cost, &closed_model("OpenAI")), 5);
    }

    #[test]
    fn test_priority_privacy_closed_gets_zero() {
        assert_eq!(priority_points(PriorityPolicy::Privacy, &open_model(7.0)), 30);

        let mut open_unknown = open_model(7.0);
        open_unknown.params_b = None;
        assert_eq!(priority_points(PriorityPolicy::Privacy, &open_unknown), 20);

        assert_eq!(priority_points(PriorityPolicy::Privacy, &closed_model("OpenAI")), 0);
    }

    #[test]
    fn test_priority_balanced_midsize_open_wins() {
        assert_eq!(priority_points(PriorityPolicy::Balanced, &open_model(7.0)), 28);
        assert_eq!(priority_points(PriorityPolicy::Balanced, &open_model(30.0)), 28);
        assert_eq!(priority_points(PriorityPolicy::Balanced, &open_model(70.0)), 18);

        let mut closed_flash = closed_model("Google");
        closed_flash.name = "Gemini 1.5 Flash".to_string();
        assert_eq!(priority_points(PriorityPolicy::Balanced, &closed_flash), 25);

        assert_eq!(priority_points(PriorityPolicy::Balanced, &closed_model("Other")), 12);
    }

    // ────────────────────────────────────────────────────────────────────
    // Hardware branches
    // ────────────────────────────────────────────────────────────────────

    #[test]
    fn test_hardware_cloud_closed_always_max() {
        for m in [closed_model("OpenAI"), closed_model("Nobody")] {
            assert_eq!(hardware_points(HardwareTier::Cloud, &m), HARDWARE_MAX);
        }
        assert_eq!(hardware_points(HardwareTier::Cloud, &open_model(7.0)), 10);
    }

    #[test]
    fn test_hardware_cpu_only_tiers() {
        let tier = HardwareTier::CpuOnly { max_ram_gb: 16.0 };

        assert_eq!(hardware_points(tier, &open_model(3.0)), 20);

        let mut ram_fit = open_model(13.0);
        ram_fit.min_ram_gb = Some(12.0);
        assert_eq!(hardware_points(tier, &ram_fit), 15);

        // 7B, no RAM info
        assert_eq!(hardware_points(tier, &open_model(7.0)), 10);

        assert_eq!(hardware_points(tier, &open_model(70.0)), 0);
        assert_eq!(hardware_points(tier, &closed_model("OpenAI")), 0);
    }

    #[test]
    fn test_hardware_gpu_vram_ladder() {
        let tier = HardwareTier::Gpu {
            max_vram_gb: 24.0,
            max_ram_gb: 32.0,
        };

        let mut min_fits = open_model(13.0);
        min_fits.min_vram_gb = Some(10.0);
        assert_eq!(hardware_points(tier, &min_fits), 20);

        let mut rec_fits = open_model(13.0);
        rec_fits.recommended_vram_gb = Some(20.0);
        assert_eq!(hardware_points(tier, &rec_fits), 18);

        // 10B * 2 = 20 GB estimated, fits 24
        assert_eq!(hardware_points(tier, &open_model(10.0)), 16);

        // 14B * 2 = 28 GB > 24 but <= 36 = 24 * 1.5: quantization credit
        assert_eq!(hardware_points(tier, &open_model(14.0)), 8);

        // 70B * 2 = 140 GB, hopeless
        assert_eq!(hardware_points(tier, &open_model(70.0)), 0);

        // Closed model: small API-fallback credit
        assert_eq!(hardware_points(tier, &closed_model("OpenAI")), 5);

        // Open model with nothing known at all
        let mut unknown = open_model(7.0);
        unknown.params_b = None;
        assert_eq!(hardware_points(tier, &unknown), 0);
    }

    // ────────────────────────────────────────────────────────────────────
    // Language gate
    // ────────────────────────────────────────────────────────────────────

    #[test]
    fn test_language_arabic_hard_gate() {
        let en_only = open_model(7.0);
        assert_eq!(language_points(true, &en_only), 0);
        assert_eq!(language_points(false, &en_only), 10);

        let mut arabic = open_model(7.0);
        arabic.languages = vec!["EN".to_string(), "AR".to_string()];
        assert_eq!(language_points(true, &arabic), 10);

        // Case-insensitive code match
        let mut lowercase = open_model(7.0);
        lowercase.languages = vec!["ar".to_string()];
        assert_eq!(language_points(true, &lowercase), 10);
    }

    // ────────────────────────────────────────────────────────────────────
    // End-to-end contracts
    // ────────────────────────────────────────────────────────────────────

    #[test]
    fn test_perfect_score_scenario() {
        // coding + speed + 24GB GPU + English: an open 8B Code LLM that
        // fits in VRAM hits every maximum
        let sel = selection("coding", "speed", "mid_gpu", "en_only");

        let mut coder = open_model(8.0);
        coder.kind = "Code LLM".to_string();
        coder.min_vram_gb = Some(10.0);

        let b = breakdown(&sel, &coder);
        assert_eq!(b.use_case, 40);
        assert_eq!(b.priority, 30);
        assert_eq!(b.hardware, 20);
        assert_eq!(b.language, 10);
        assert_eq!(score(&sel, &coder), 100);

        // The closed unknown-size LLM lands well below
        let api = closed_model("OpenAI");
        let api_b = breakdown(&sel, &api);
        assert_eq!(api_b.priority, 15);
        assert_eq!(api_b.hardware, 5);
        assert!(score(&sel, &api) < score(&sel, &coder));
    }

    #[test]
    fn test_unknown_attributes_never_panic() {
        let sel = selection("multi", "quality", "high_gpu", "ar_required");
        let blank = ModelDescriptor::default();
        let s = score(&sel, &blank);
        assert!(s <= 100);
    }
}
