use crate::utils::numeric::{parse_float, round2, to_float};

/// 面粉（基准）重量无效时使用的默认值
pub const DEFAULT_BASE_WEIGHT: f64 = 500.0;

/// 面粉固定占 100%
const BASE_PERCENT: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    name: String,
    percent: f64,
    weight: f64,
}

impl Ingredient {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// 烘焙百分比配方
///
/// 采用固定基准模式：面粉重量即 100%，每种配料重量 = 百分比 × 面粉重量 / 100。
/// 涉及数值的修改方法在返回前都会完整重算派生字段（配料重量、总百分比、总重量）。
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaModel {
    name: String,
    base_weight: f64,
    ingredients: Vec<Ingredient>,
    total_percent: f64,
    total_weight: f64,
}

impl Default for FormulaModel {
    fn default() -> Self {
        Self::new("", DEFAULT_BASE_WEIGHT)
    }
}

impl FormulaModel {
    pub fn new(name: impl Into<String>, base_weight: f64) -> Self {
        let mut model = Self {
            name: name.into(),
            base_weight: sanitize_base(Some(base_weight)),
            ingredients: Vec::new(),
            total_percent: BASE_PERCENT,
            total_weight: 0.0,
        };
        model.recompute_weights();
        model
    }

    /// 由数值直接构建，供解码和预设配方使用
    pub fn with_ingredients<I, S>(name: impl Into<String>, base_weight: f64, ingredients: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut model = Self::new(name, base_weight);
        model.ingredients = ingredients
            .into_iter()
            .map(|(name, percent)| Ingredient {
                name: name.into(),
                percent: sanitize_percent(percent),
                weight: 0.0,
            })
            .collect();
        model.recompute_weights();
        model
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_weight(&self) -> f64 {
        self.base_weight
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn total_percent(&self) -> f64 {
        self.total_percent
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn add_ingredient(&mut self, name: impl Into<String>, raw_percent: &str) {
        self.ingredients.push(Ingredient {
            name: name.into(),
            percent: sanitize_percent(to_float(raw_percent)),
            weight: 0.0,
        });
        self.recompute_weights();
    }

    /// 越界下标（含负数）直接忽略，返回 false
    pub fn remove_ingredient(&mut self, index: i64) -> bool {
        let Some(slot) = self.slot(index) else {
            return false;
        };
        self.ingredients.remove(slot);
        self.recompute_weights();
        true
    }

    pub fn set_ingredient_percent(&mut self, index: i64, raw_value: &str) -> bool {
        let Some(slot) = self.slot(index) else {
            return false;
        };
        self.ingredients[slot].percent = sanitize_percent(to_float(raw_value));
        self.recompute_weights();
        true
    }

    pub fn set_ingredient_name(&mut self, index: i64, name: impl Into<String>) -> bool {
        let Some(slot) = self.slot(index) else {
            return false;
        };
        self.ingredients[slot].name = name.into();
        true
    }

    /// 根据某个配料的新重量反推面粉重量：new_weight * 100 / percent
    ///
    /// 该配料百分比 <= 0 时不做任何修改。被编辑配料自身的重量随后由重算覆盖。
    pub fn back_solve_base_from_ingredient_weight(&mut self, index: i64, raw_weight: &str) -> bool {
        let Some(slot) = self.slot(index) else {
            return false;
        };
        let percent = self.ingredients[slot].percent;
        if percent <= 0.0 {
            return false;
        }
        let base = round2(to_float(raw_weight) * BASE_PERCENT / percent);
        if !base.is_finite() || base < 0.0 {
            return false;
        }
        self.base_weight = base;
        self.recompute_weights();
        true
    }

    pub fn set_base_weight(&mut self, raw_value: &str) {
        self.base_weight = sanitize_base(parse_float(raw_value));
        self.recompute_weights();
    }

    pub fn set_formula_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// 只写派生字段，不改动百分比和面粉重量
    ///
    /// 任一结果溢出为非有限值时整体跳过，保留上一次的派生值。
    pub fn recompute_weights(&mut self) {
        let base = self.base_weight;
        if !base.is_finite() {
            return;
        }
        let weights: Vec<f64> = self
            .ingredients
            .iter()
            .map(|i| round2(i.percent * base / BASE_PERCENT))
            .collect();
        let total_percent = round2(
            self.ingredients
                .iter()
                .fold(BASE_PERCENT, |acc, i| acc + i.percent),
        );
        let total_weight = round2(weights.iter().fold(base, |acc, w| acc + w));
        if !total_percent.is_finite() || !total_weight.is_finite() || weights.iter().any(|w| !w.is_finite()) {
            return;
        }
        for (ingredient, weight) in self.ingredients.iter_mut().zip(weights) {
            ingredient.weight = weight;
        }
        self.total_percent = total_percent;
        self.total_weight = total_weight;
    }

    fn slot(&self, index: i64) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.ingredients.len())
    }
}

fn sanitize_base(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v >= 0.0 && round2(v).is_finite() => round2(v),
        _ => DEFAULT_BASE_WEIGHT,
    }
}

fn sanitize_percent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
