//! Forecast accuracy: recorded predicted-vs-actual demand and the views the
//! historical-data route serves.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One product's predicted and actual demand on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub date: NaiveDate,
    pub product: String,
    pub predicted: u32,
    pub actual: u32,
}

impl Observation {
    pub fn new(date: NaiveDate, product: impl Into<String>, predicted: u32, actual: u32) -> Self {
        Self {
            date,
            product: product.into(),
            predicted,
            actual,
        }
    }

    pub fn accuracy(&self) -> Option<f64> {
        prediction_accuracy(self.predicted, self.actual)
    }
}

/// `100 - |predicted - actual| / actual * 100`, rounded to two decimals and
/// floored at zero. `None` when nothing was actually sold, since the error
/// is then relative to zero.
pub fn prediction_accuracy(predicted: u32, actual: u32) -> Option<f64> {
    if actual == 0 {
        return None;
    }
    let error = f64::from(predicted.abs_diff(actual)) / f64::from(actual) * 100.0;
    Some(round2((100.0 - error).max(0.0)))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| round2(sum / count as f64))
}

/// All products summed for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAccuracy {
    pub date: NaiveDate,
    pub predicted: u32,
    pub actual: u32,
    pub accuracy: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAccuracy {
    /// Abbreviated month name (`Jan`).
    pub month: String,
    pub year: i32,
    pub accuracy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAccuracy {
    pub product: String,
    pub accuracy: f64,
    pub observations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalData {
    /// Oldest day first.
    pub predictions: Vec<DailyAccuracy>,
    /// Mean per-observation accuracy by calendar month, oldest first.
    pub accuracy_trends: Vec<MonthlyAccuracy>,
    /// Mean per-observation accuracy by product, in first-seen order.
    pub product_accuracy: Vec<ProductAccuracy>,
    /// Mean over every observation with a non-zero actual.
    pub overall_accuracy: Option<f64>,
}

impl HistoricalData {
    pub fn compute(observations: &[Observation]) -> Self {
        let mut daily: Vec<(NaiveDate, u32, u32)> = Vec::new();
        for obs in observations {
            match daily.iter_mut().find(|(date, _, _)| *date == obs.date) {
                Some((_, predicted, actual)) => {
                    *predicted = predicted.saturating_add(obs.predicted);
                    *actual = actual.saturating_add(obs.actual);
                }
                None => daily.push((obs.date, obs.predicted, obs.actual)),
            }
        }
        daily.sort_by_key(|(date, _, _)| *date);
        let predictions = daily
            .into_iter()
            .map(|(date, predicted, actual)| DailyAccuracy {
                date,
                predicted,
                actual,
                accuracy: prediction_accuracy(predicted, actual),
            })
            .collect();

        let mut months: Vec<(i32, u32, NaiveDate)> = observations
            .iter()
            .map(|o| (o.date.year(), o.date.month(), o.date))
            .collect();
        months.sort_by_key(|(year, month, _)| (*year, *month));
        months.dedup_by_key(|(year, month, _)| (*year, *month));
        let accuracy_trends = months
            .into_iter()
            .filter_map(|(year, month, sample)| {
                let accuracy = mean(
                    observations
                        .iter()
                        .filter(|o| o.date.year() == year && o.date.month() == month)
                        .filter_map(Observation::accuracy),
                )?;
                Some(MonthlyAccuracy {
                    month: sample.format("%b").to_string(),
                    year,
                    accuracy,
                })
            })
            .collect();

        let mut products: Vec<&str> = Vec::new();
        for obs in observations {
            if !products.contains(&obs.product.as_str()) {
                products.push(&obs.product);
            }
        }
        let product_accuracy = products
            .into_iter()
            .filter_map(|product| {
                let scored: Vec<f64> = observations
                    .iter()
                    .filter(|o| o.product == product)
                    .filter_map(Observation::accuracy)
                    .collect();
                let count = scored.len();
                Some(ProductAccuracy {
                    product: product.to_string(),
                    accuracy: mean(scored)?,
                    observations: count,
                })
            })
            .collect();

        Self {
            predictions,
            accuracy_trends,
            product_accuracy,
            overall_accuracy: mean(observations.iter().filter_map(Observation::accuracy)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accuracy_is_relative_to_actual() {
        assert_eq!(prediction_accuracy(100, 98), Some(97.96));
        assert_eq!(prediction_accuracy(95, 97), Some(97.94));
        assert_eq!(prediction_accuracy(50, 50), Some(100.0));
        // Off by more than the actual itself
        assert_eq!(prediction_accuracy(30, 10), Some(0.0));
    }

    #[test]
    fn zero_actual_has_no_accuracy() {
        assert_eq!(prediction_accuracy(10, 0), None);
        assert_eq!(prediction_accuracy(0, 0), None);
    }

    #[test]
    fn days_sum_products_and_months_average_observations() {
        let observations = vec![
            Observation::new(day(2024, 2, 1), "Milk", 40, 50),
            Observation::new(day(2024, 1, 2), "Bread", 10, 10),
            Observation::new(day(2024, 1, 2), "Milk", 50, 40),
            Observation::new(day(2024, 1, 3), "Bread", 5, 0),
        ];
        let history = HistoricalData::compute(&observations);

        let dates: Vec<_> = history.predictions.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![day(2024, 1, 2), day(2024, 1, 3), day(2024, 2, 1)]);
        assert_eq!(history.predictions[0].predicted, 60);
        assert_eq!(history.predictions[0].actual, 50);
        assert_eq!(history.predictions[0].accuracy, Some(80.0));
        assert_eq!(history.predictions[1].accuracy, None);

        // Jan: Bread 100, Milk 75 (the zero-actual day is skipped)
        let months: Vec<_> = history
            .accuracy_trends
            .iter()
            .map(|m| (m.month.as_str(), m.accuracy))
            .collect();
        assert_eq!(months, vec![("Jan", 87.5), ("Feb", 80.0)]);

        assert_eq!(history.product_accuracy[0].product, "Milk");
        assert_eq!(history.product_accuracy[0].accuracy, 77.5);
        assert_eq!(history.product_accuracy[1].product, "Bread");
        assert_eq!(history.product_accuracy[1].observations, 1);
        assert_eq!(history.overall_accuracy, Some(85.0));
    }

    #[test]
    fn empty_history_has_no_overall_accuracy() {
        let history = HistoricalData::compute(&[]);
        assert!(history.predictions.is_empty());
        assert!(history.accuracy_trends.is_empty());
        assert_eq!(history.overall_accuracy, None);
    }
}
