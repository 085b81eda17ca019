//! Badge lookup table.
//!
//! Known badges map to a label, a CSS class and a card colour. Anything
//! else resolves to [`BadgeKind::Unknown`] and is dropped from rendering.

use serde::Serialize;

pub const UNKNOWN_BADGE_COLOR: &str = "bg-gray-500";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeKind {
    Vegano,
    Vegetariano,
    SinGluten,
    Picante,
    Recomendado,
    Desayunos,
    Almuerzos,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub label: &'static str,
    pub style_key: &'static str,
    pub color: &'static str,
}

impl BadgeKind {
    /// Case-insensitive: the backend sends both `Desayunos` and `desayunos`.
    pub fn parse(id: &str) -> Self {
        match id.trim().to_lowercase().as_str() {
            "vegano" => BadgeKind::Vegano,
            "vegetariano" => BadgeKind::Vegetariano,
            "sin-gluten" => BadgeKind::SinGluten,
            "picante" => BadgeKind::Picante,
            "recomendado" => BadgeKind::Recomendado,
            "desayunos" => BadgeKind::Desayunos,
            "almuerzos" => BadgeKind::Almuerzos,
            _ => BadgeKind::Unknown,
        }
    }

    pub fn style(self) -> Option<BadgeStyle> {
        let (label, style_key, color) = match self {
            BadgeKind::Vegano => (
                "Vegano",
                "badge-vegano",
                "bg-gradient-to-r from-green-500 to-emerald-500",
            ),
            BadgeKind::Vegetariano => (
                "Vegetariano",
                "badge-vegetariano",
                "bg-gradient-to-r from-emerald-400 to-green-400",
            ),
            BadgeKind::SinGluten => (
                "Sin Gluten",
                "badge-sin-gluten",
                "bg-gradient-to-r from-blue-400 to-cyan-400",
            ),
            BadgeKind::Picante => (
                "Picante",
                "badge-picante",
                "bg-gradient-to-r from-red-500 to-pink-500",
            ),
            BadgeKind::Recomendado => (
                "Recomendado",
                "badge-recomendado",
                "bg-gradient-to-r from-orange-500 to-red-500",
            ),
            BadgeKind::Desayunos => ("Desayunos", "badge-desayunos", UNKNOWN_BADGE_COLOR),
            BadgeKind::Almuerzos => ("Almuerzos", "badge-almuerzos", UNKNOWN_BADGE_COLOR),
            BadgeKind::Unknown => return None,
        };

        Some(BadgeStyle {
            label,
            style_key,
            color,
        })
    }
}

pub fn badge_label(id: &str) -> Option<BadgeStyle> {
    BadgeKind::parse(id).style()
}

/// Card colour of the main badge, grey for badges outside the table.
pub fn badge_color(id: &str) -> &'static str {
    badge_label(id)
        .map(|style| style.color)
        .unwrap_or(UNKNOWN_BADGE_COLOR)
}

/// Styles for the first `limit` badges plus how many were cut off.
/// Unknown badges inside the limit are dropped silently.
pub fn visible_badges(badges: &[String], limit: usize) -> (Vec<BadgeStyle>, usize) {
    let shown = badges
        .iter()
        .take(limit)
        .filter_map(|badge| badge_label(badge))
        .collect();
    (shown, badges.len().saturating_sub(limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_badges() {
        let style = badge_label("sin-gluten").unwrap();
        assert_eq!(style.label, "Sin Gluten");
        assert_eq!(style.style_key, "badge-sin-gluten");

        assert_eq!(badge_label("Desayunos"), badge_label("desayunos"));
        assert_eq!(BadgeKind::parse(" Picante "), BadgeKind::Picante);
    }

    #[test]
    fn test_unknown_badge_is_none() {
        assert_eq!(badge_label("sin-azucar"), None);
        assert_eq!(badge_label(""), None);
        assert_eq!(badge_color("sin-azucar"), UNKNOWN_BADGE_COLOR);
        assert_eq!(
            badge_color("recomendado"),
            "bg-gradient-to-r from-orange-500 to-red-500"
        );
    }

    #[test]
    fn test_visible_badges_limit_and_overflow() {
        let badges: Vec<String> = ["picante", "misterio", "vegano", "recomendado"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let (shown, overflow) = visible_badges(&badges, 2);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].label, "Picante");
        assert_eq!(overflow, 2);

        let (shown, overflow) = visible_badges(&badges[..1], 2);
        assert_eq!(shown.len(), 1);
        assert_eq!(overflow, 0);
    }
}
