use crate::models::FormulaModel;

pub const DEFAULT_PRESET: &str = "basic-bread";

struct Preset {
    key: &'static str,
    name: &'static str,
    base_weight: f64,
    ingredients: &'static [(&'static str, f64)],
}

const PRESETS: &[Preset] = &[
    Preset {
        key: DEFAULT_PRESET,
        name: "Basic Bread",
        base_weight: 500.0,
        ingredients: &[("Water", 63.0), ("Salt", 2.0), ("Yeast", 1.0)],
    },
    Preset {
        key: "sourdough",
        name: "Sourdough",
        base_weight: 1000.0,
        ingredients: &[("Water", 75.0), ("Levain", 20.0), ("Salt", 2.0)],
    },
    Preset {
        key: "pizza",
        name: "Neapolitan Pizza",
        base_weight: 600.0,
        ingredients: &[("Water", 62.0), ("Salt", 2.8), ("Yeast", 0.2)],
    },
    Preset {
        key: "bagel",
        name: "Bagels",
        base_weight: 750.0,
        ingredients: &[("Water", 55.0), ("Malt Syrup", 4.0), ("Salt", 2.0), ("Yeast", 1.0)],
    },
];

pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.key).collect()
}

pub fn preset(key: &str) -> Option<FormulaModel> {
    PRESETS
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(key.trim()))
        .map(|p| FormulaModel::with_ingredients(p.name, p.base_weight, p.ingredients.iter().copied()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_preset_resolves() {
        for key in preset_names() {
            let model = preset(key).expect("listed preset");
            assert!(!model.ingredients().is_empty());
            assert!(model.base_weight() > 0.0);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(preset(" Pizza ").map(|m| m.name().to_string()), Some("Neapolitan Pizza".into()));
        assert!(preset("croissant").is_none());
    }
}
