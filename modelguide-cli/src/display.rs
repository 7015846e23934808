use colored::*;
use modelguide_core::catalog::ModelDescriptor;
use modelguide_core::preset::PRESETS;
use modelguide_core::rank::Shortlist;
use modelguide_core::score;
use modelguide_core::taxonomy::{self, Dimension, PreferenceSelection};
use tabled::{settings::Style, Table, Tabled};

// ────────────────────────────────────────────────────────────────────
// English labels for engine ids. The engine itself never carries text;
// a localized front-end would swap this table out.
// ────────────────────────────────────────────────────────────────────

pub fn option_label(dimension: Dimension, id: &str) -> &'static str {
    let table: &[(&str, &str)] = match dimension {
        Dimension::UseCase => &[
            ("writing", "Writing & Articles"),
            ("coding", "Coding & Development"),
            ("chat", "Chat & Assistant"),
            ("reasoning", "Reasoning & Analysis"),
            ("image", "Image Generation"),
            ("video", "Video Generation"),
            ("vision", "Vision & Image Analysis"),
            ("audio", "Audio (TTS/ASR)"),
            ("embedding", "Text Embeddings"),
            ("multi", "Multi-purpose (All)"),
        ],
        Dimension::Priority => &[
            ("quality", "Best Quality & Intelligence"),
            ("speed", "Fast Response Time"),
            ("cost", "Lowest Cost (Free/Cheap)"),
            ("privacy", "Privacy (Run Locally)"),
            ("balanced", "Balanced (All-around)"),
        ],
        Dimension::Hardware => &[
            ("no_gpu", "No GPU (CPU only)"),
            ("low_gpu", "Light GPU (<= 8GB VRAM)"),
            ("mid_gpu", "Mid GPU (12-24GB VRAM)"),
            ("high_gpu", "High GPU (48GB+ VRAM)"),
            ("cloud", "Cloud API (no local setup)"),
        ],
        Dimension::Language => &[
            ("ar_required", "Arabic is required"),
            ("en_only", "English is enough"),
            ("multi", "Multilingual"),
        ],
    };
    table
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, label)| *label)
        .unwrap_or("(unknown)")
}

pub fn dimension_label(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::UseCase => "Use Case",
        Dimension::Priority => "Priority",
        Dimension::Hardware => "Hardware",
        Dimension::Language => "Language",
    }
}

pub fn preset_label(id: &str) -> &'static str {
    match id {
        "write_articles" => "I want to write articles",
        "coding_help" => "I want coding assistance",
        "generate_images" => "I want to generate AI images",
        "private_local" => "I want a private local model",
        "cheapest" => "I want the cheapest option",
        "smart_reasoning" => "I want the smartest reasoning model",
        "generate_videos" => "I want to generate videos",
        "speech_audio" => "I want speech-to-text or TTS",
        _ => "(unknown)",
    }
}

// ────────────────────────────────────────────────────────────────────
// Tables
// ────────────────────────────────────────────────────────────────────

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "Model")]
    name: String,
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Params")]
    params: String,
    #[tabled(rename = "Access")]
    access: String,
    #[tabled(rename = "License")]
    license: String,
    #[tabled(rename = "Ctx")]
    context: String,
    #[tabled(rename = "Langs")]
    languages: String,
}

fn catalog_row(m: &ModelDescriptor) -> CatalogRow {
    CatalogRow {
        name: m.name.clone(),
        provider: m.provider.clone(),
        kind: m.kind.clone(),
        params: m
            .params_b
            .map(|p| format!("{p}B"))
            .unwrap_or_else(|| "-".to_string()),
        access: if m.open { "Open" } else { "Closed" }.to_string(),
        license: m.license.clone().unwrap_or_else(|| "-".to_string()),
        context: m
            .context_k
            .map(|c| format!("{c}K"))
            .unwrap_or_else(|| "-".to_string()),
        languages: if m.languages.is_empty() {
            "-".to_string()
        } else {
            m.languages.join(",")
        },
    }
}

pub fn display_catalog(models: &[ModelDescriptor]) {
    println!("\n{}", "=== Model Catalog ===".bold().cyan());
    println!("Total models: {}\n", models.len());

    let rows: Vec<CatalogRow> = models.iter().map(catalog_row).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
}

pub fn display_search_results(models: &[&ModelDescriptor], query: &str) {
    if models.is_empty() {
        println!(
            "\n{}",
            format!("No models found matching '{}'", query).yellow()
        );
        return;
    }

    println!(
        "\n{}",
        format!("=== Search Results for '{}' ===", query)
            .bold()
            .cyan()
    );
    let rows: Vec<CatalogRow> = models.iter().map(|m| catalog_row(m)).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
}

// ────────────────────────────────────────────────────────────────────
// Recommendations
// ────────────────────────────────────────────────────────────────────

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "#")]
    rank: String,
    #[tabled(rename = "Match")]
    score: String,
    #[tabled(rename = "Model")]
    name: String,
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Access")]
    access: String,
    #[tabled(rename = "Params")]
    params: String,
}

pub fn display_shortlist(selection: &PreferenceSelection, shortlist: &Shortlist) {
    if shortlist.is_empty() {
        println!(
            "\n{}",
            "No matching models found -- try different choices.".yellow()
        );
        return;
    }

    println!("\n{}", "=== Recommended Models ===".bold().cyan());
    display_selection_summary(selection);
    println!();

    let medals = ["1st", "2nd", "3rd"];
    let rows: Vec<ResultRow> = shortlist
        .entries()
        .iter()
        .enumerate()
        .map(|(i, c)| ResultRow {
            rank: medals.get(i).map(|m| m.to_string()).unwrap_or_else(|| format!("{}", i + 1)),
            score: format!("{}%", c.score),
            name: c.model.name.clone(),
            provider: c.model.provider.clone(),
            kind: c.model.kind.clone(),
            access: if c.model.open { "Open" } else { "Closed" }.to_string(),
            params: c
                .model
                .params_b
                .map(|p| format!("{p}B"))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);

    if !shortlist.more().is_empty() {
        println!(
            "{}",
            format!(
                "Top {} shown first; {} more option(s) below the podium.",
                shortlist.top3().len(),
                shortlist.more().len()
            )
            .dimmed()
        );
    }
}

fn display_selection_summary(selection: &PreferenceSelection) {
    println!(
        "{} {} | {} | {} | {}",
        "Your choices:".bold(),
        option_label(Dimension::UseCase, selection.use_case.id),
        option_label(Dimension::Priority, selection.priority.id),
        option_label(Dimension::Hardware, selection.hardware.id),
        option_label(Dimension::Language, selection.language.id),
    );
}

pub fn display_options() {
    println!("\n{}", "=== Wizard Options ===".bold().cyan());
    for dimension in Dimension::ALL {
        println!("\n{}:", dimension_label(dimension).bold());
        for id in taxonomy::option_ids(dimension) {
            println!("  {:<14} {}", id, option_label(dimension, id));
        }
    }
}

pub fn display_presets() {
    println!("\n{}", "=== Quick Scenarios ===".bold().cyan());
    for preset in PRESETS {
        println!("  {:<18} {}", preset.id, preset_label(preset.id));
    }
}

// ────────────────────────────────────────────────────────────────────
// JSON output for machine consumption
// ────────────────────────────────────────────────────────────────────

pub fn display_json_shortlist(selection: &PreferenceSelection, shortlist: &Shortlist) {
    let results: Vec<serde_json::Value> = shortlist
        .entries()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let b = score::breakdown(selection, &c.model);
            serde_json::json!({
                "rank": i + 1,
                "score": c.score,
                "breakdown": {
                    "use_case": b.use_case,
                    "priority": b.priority,
                    "hardware": b.hardware,
                    "language": b.language,
                },
                "model": c.model,
            })
        })
        .collect();

    let output = serde_json::json!({
        "selection": {
            "use_case": selection.use_case.id,
            "priority": selection.priority.id,
            "hardware": selection.hardware.id,
            "language": selection.language.id,
        },
        "results": results,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).expect("JSON serialization failed")
    );
}
