use std::collections::HashMap;

/// Fallback when a language has no entry, or a repo has no language at all.
pub const DEFAULT_LANGUAGE_COLOR: &str = "#06b6d4";

/// Display color for a primary language, per the conventional per-language
/// palette.
pub fn language_color(language: &str) -> &'static str {
    let color_map: HashMap<&str, &str> = [
        ("TypeScript", "#3178C6"),
        ("JavaScript", "#F7DF1E"),
        ("Python", "#3572A5"),
        ("Java", "#B07219"),
        ("C++", "#F34B7D"),
        ("C", "#555555"),
        ("C#", "#239120"),
        ("Go", "#00ADD8"),
        ("Rust", "#DEA584"),
        ("Ruby", "#701516"),
        ("PHP", "#4F5D95"),
        ("Swift", "#F05138"),
        ("Kotlin", "#A97BFF"),
        ("HTML", "#E34C26"),
        ("CSS", "#563D7C"),
        ("SCSS", "#C6538C"),
        ("Vue", "#41B883"),
        ("Dart", "#00B4AB"),
        ("Shell", "#89E051"),
        ("Dockerfile", "#384D54"),
        ("Jupyter", "#F37626"),
        ("Jupyter Notebook", "#F37626"),
    ]
    .iter()
    .cloned()
    .collect();

    color_map
        .get(language)
        .copied()
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}
