use foodservice_shared::{Error, Nutrition, NutritionPeriod, Result};
use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComplianceSample {
    pub target: u32,
    pub actual: u32,
}

#[derive(
    Serialize, EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NutritionMetric {
    Calories,
    Protein,
    Carbs,
    Fat,
}

/// `round(100 * Σ actual / Σ target)`.
///
/// Fails with [`Error::DivisionByZero`] when the targets sum to zero, which
/// includes an empty series.
pub fn compliance_ratio(series: &[ComplianceSample]) -> Result<u32> {
    let target: u64 = series.iter().map(|s| u64::from(s.target)).sum();
    let actual: u64 = series.iter().map(|s| u64::from(s.actual)).sum();

    if target == 0 {
        return Err(Error::DivisionByZero);
    }

    Ok((100.0 * actual as f64 / target as f64).round() as u32)
}

/// Projects the nutrition series onto one metric.
pub fn metric_series(periods: &[NutritionPeriod], metric: NutritionMetric) -> Vec<ComplianceSample> {
    periods
        .iter()
        .map(|period| {
            let (target, actual) = (period.target(), period.actual());
            let pick = |n: Nutrition| match metric {
                NutritionMetric::Calories => n.calories,
                NutritionMetric::Protein => n.protein,
                NutritionMetric::Carbs => n.carbs,
                NutritionMetric::Fat => n.fat,
            };

            ComplianceSample {
                target: pick(target),
                actual: pick(actual),
            }
        })
        .collect()
}

pub fn metric_compliance(periods: &[NutritionPeriod], metric: NutritionMetric) -> Result<u32> {
    compliance_ratio(&metric_series(periods, metric))
}
