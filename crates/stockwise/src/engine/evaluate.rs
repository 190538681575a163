use super::{EngineConfig, EngineError};
use crate::model::{DemandSignal, Impact, Product, StockLevel, Suggestion, SuggestionStatus, Urgency};
use tracing::debug;

/// Checks `safety_stock <= reorder_point <= max_stock` and `max_stock > 0`.
pub fn validate_stock(stock: &StockLevel) -> Result<(), EngineError> {
    if stock.max_stock == 0 {
        return Err(EngineError::InvalidStockLevel(
            "max stock must be greater than zero".to_string(),
        ));
    }
    if stock.safety_stock > stock.reorder_point || stock.reorder_point > stock.max_stock {
        return Err(EngineError::InvalidStockLevel(format!(
            "expected safety ({}) <= reorder point ({}) <= max ({})",
            stock.safety_stock, stock.reorder_point, stock.max_stock
        )));
    }
    Ok(())
}

/// Demand must be finite and non-negative; temperature and history weight
/// must be finite when present.
pub fn validate_signal(signal: &DemandSignal) -> Result<(), EngineError> {
    if !signal.predicted_demand.is_finite() || signal.predicted_demand < 0.0 {
        return Err(EngineError::InvalidSignal(format!(
            "predicted demand must be a non-negative number, got {}",
            signal.predicted_demand
        )));
    }
    if !signal.temperature.is_finite() {
        return Err(EngineError::InvalidSignal(
            "temperature forecast must be finite".to_string(),
        ));
    }
    if let Some(weight) = signal.history_weight {
        if !weight.is_finite() {
            return Err(EngineError::InvalidSignal(
                "history weight must be finite".to_string(),
            ));
        }
    }
    Ok(())
}

/// Turns one catalog record into a reorder suggestion.
///
/// Returns `Ok(None)` only when stock is at or above the reorder point and
/// covers the predicted demand. Otherwise the suggestion carries:
///
/// * **quantity**: `gap + safety - current`, clamped to `[0, max - current]`,
///   where `gap = max(0, ceil(demand) - current)`.
/// * **confidence**: base, plus the history bonus, plus capped bonuses for
///   high-impact events that apply to the category, plus the temperature
///   bonus for sensitive categories above the threshold. Clamped to 0..=100.
/// * **urgency**: from `current / reorder_point` (< 0.5 high, < 1.0 medium,
///   otherwise low), raised to at least medium when `gap > 0`, and forced to
///   low when the quantity is zero.
/// * **factors**: every non-zero contribution above, heaviest first.
///
/// Pure: identical inputs always yield identical output.
pub fn evaluate(
    product: &Product,
    stock: &StockLevel,
    signal: &DemandSignal,
    config: &EngineConfig,
) -> Result<Option<Suggestion>, EngineError> {
    validate_stock(stock)?;
    validate_signal(signal)?;

    let current = u64::from(stock.current_stock);
    // finite and non-negative, so the cast only saturates on absurd forecasts
    let demand_units = signal.predicted_demand.ceil() as u64;
    let gap = demand_units.saturating_sub(current);

    if stock.current_stock >= stock.reorder_point && gap == 0 {
        debug!(sku = %product.sku, "Stock covers demand, no suggestion");
        return Ok(None);
    }

    let capacity = stock.capacity();
    let wanted = (gap + u64::from(stock.safety_stock)).saturating_sub(current);
    let suggested_quantity = u32::try_from(wanted).map_or(capacity, |w| w.min(capacity));

    let mut factors: Vec<(f64, String)> = Vec::new();

    if gap > 0 {
        factors.push((
            gap as f64 / signal.predicted_demand * 100.0,
            format!("predicted demand exceeds stock by {gap} units"),
        ));
    }

    let ratio = match stock.reorder_point {
        0 => None,
        reorder => Some(current as f64 / f64::from(reorder)),
    };
    if let Some(ratio) = ratio.filter(|r| *r < 1.0) {
        factors.push((
            (1.0 - ratio) * 100.0,
            format!(
                "current stock {} is below reorder point {}",
                stock.current_stock, stock.reorder_point
            ),
        ));
    }

    let history_weight = signal
        .history_weight
        .unwrap_or(config.history_weight)
        .clamp(0.0, 1.0);
    let history = history_weight * config.history_bonus;
    if history > 0.0 {
        factors.push((
            history,
            format!("historical demand signal adds {history:.0} points"),
        ));
    }

    let temperature = if config.temperature_sensitive.contains(&product.category)
        && signal.temperature > config.temperature_threshold
    {
        config.temperature_bonus
    } else {
        0.0
    };
    if temperature > 0.0 {
        factors.push((
            temperature,
            format!(
                "temperature forecast {:.1}°C exceeds threshold {:.1}°C",
                signal.temperature, config.temperature_threshold
            ),
        ));
    }

    let mut events = 0.0;
    for event in signal
        .active_events
        .iter()
        .filter(|e| e.impact == Impact::High && e.applies_to(product.category))
    {
        let contribution = config.event_bonus.min(config.event_cap - events);
        if contribution <= 0.0 {
            break;
        }
        events += contribution;
        factors.push((
            contribution,
            format!("active event: {} ({})", event.name, event.impact),
        ));
    }

    let confidence = (config.base_confidence + history + events + temperature)
        .clamp(0.0, 100.0)
        .round() as u8;

    let mut urgency = match ratio {
        None if stock.current_stock == 0 => Urgency::High,
        None => Urgency::Low,
        Some(r) if r < 0.5 => Urgency::High,
        Some(r) if r < 1.0 => Urgency::Medium,
        Some(_) => Urgency::Low,
    };
    if gap > 0 {
        urgency = urgency.max(Urgency::Medium);
    }
    if suggested_quantity == 0 {
        urgency = Urgency::Low;
    }

    // sort_by is stable: equal weights keep the order they were pushed in
    factors.sort_by(|a, b| b.0.total_cmp(&a.0));

    debug!(
        sku = %product.sku,
        gap,
        suggested_quantity,
        confidence,
        %urgency,
        "Evaluated"
    );

    Ok(Some(Suggestion {
        sku: product.sku.clone(),
        product_name: product.name.clone(),
        category: product.category,
        supplier: product.supplier.name.clone(),
        current_stock: stock.current_stock,
        predicted_demand: signal.predicted_demand,
        suggested_quantity,
        confidence,
        urgency,
        contributing_factors: factors.into_iter().map(|(_, label)| label).collect(),
        capacity,
        status: SuggestionStatus::Open,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Event};

    fn bananas() -> Product {
        Product::new("BAN-001", "Organic Bananas", Category::Produce, 0.89, "Fresh Farms Inc.")
    }

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn hot_produce_short_of_demand_gets_medium_suggestion() {
        let stock = StockLevel::new(45, 30, 50, 200);
        let signal = DemandSignal::new(120.0, 33.0);

        let suggestion = evaluate(&bananas(), &stock, &signal, &config())
            .unwrap()
            .expect("a suggestion is warranted");

        assert_eq!(suggestion.suggested_quantity, 60);
        assert_eq!(suggestion.urgency, Urgency::Medium);
        assert!(suggestion.confidence >= 75);
        assert_eq!(suggestion.confidence, 85);
        assert_eq!(suggestion.capacity, 155);
        assert_eq!(suggestion.status, SuggestionStatus::Open);
    }

    #[test]
    fn stock_covering_demand_yields_nothing() {
        let stock = StockLevel::new(80, 40, 50, 150);
        let signal = DemandSignal::new(30.0, 20.0);
        assert_eq!(evaluate(&bananas(), &stock, &signal, &config()).unwrap(), None);
    }

    #[test]
    fn factors_list_every_contribution_heaviest_first() {
        let stock = StockLevel::new(45, 30, 50, 200);
        let signal = DemandSignal::new(120.0, 33.0);
        let suggestion = evaluate(&bananas(), &stock, &signal, &config())
            .unwrap()
            .unwrap();

        let factors = &suggestion.contributing_factors;
        assert_eq!(factors.len(), 4);
        assert_eq!(factors[0], "predicted demand exceeds stock by 75 units");
        assert_eq!(
            factors[3],
            "temperature forecast 33.0°C exceeds threshold 30.0°C"
        );
        assert!(factors.iter().any(|f| f.starts_with("current stock 45 is below")));
        assert!(factors.iter().any(|f| f.starts_with("historical demand signal")));
    }

    #[test]
    fn equal_weights_keep_their_natural_order() {
        let config = EngineConfig {
            history_bonus: 50.0,
            ..EngineConfig::default()
        };
        // below reorder: (1 - 25/50) * 100 = 50, history: 1.0 * 50 = 50
        let stock = StockLevel::new(25, 25, 50, 200);
        let signal = DemandSignal::new(100.0, 20.0).with_history_weight(1.0);
        let suggestion = evaluate(&bananas(), &stock, &signal, &config)
            .unwrap()
            .unwrap();

        let factors = &suggestion.contributing_factors;
        assert_eq!(factors.len(), 3);
        assert!(factors[0].starts_with("predicted demand exceeds stock"));
        assert!(factors[1].starts_with("current stock 25 is below reorder point 50"));
        assert!(factors[2].starts_with("historical demand signal adds 50 points"));
        assert_eq!(suggestion.confidence, 100);
    }

    #[test]
    fn event_bonus_is_capped_and_scoped() {
        let stock = StockLevel::new(10, 10, 50, 100);
        let signal = DemandSignal::new(40.0, 10.0)
            .with_history_weight(0.0)
            .with_event(Event::new("Holiday Sale", Impact::High))
            .with_event(Event::new("Local Festival", Impact::Medium))
            .with_event(Event::new("Cheese Week", Impact::High).for_categories([Category::Dairy]))
            .with_event(Event::new("Market Day", Impact::High))
            .with_event(Event::new("Harvest Fair", Impact::High));

        let suggestion = evaluate(&bananas(), &stock, &signal, &config())
            .unwrap()
            .unwrap();

        assert_eq!(suggestion.confidence, 80);
        let events: Vec<_> = suggestion
            .contributing_factors
            .iter()
            .filter(|f| f.starts_with("active event"))
            .collect();
        assert_eq!(
            events,
            vec!["active event: Holiday Sale (high)", "active event: Market Day (high)"]
        );
    }

    #[test]
    fn temperature_bonus_needs_sensitive_category_and_heat() {
        let stock = StockLevel::new(10, 10, 50, 100);
        let hot = DemandSignal::new(40.0, 31.0).with_history_weight(0.0);
        let mild = DemandSignal::new(40.0, 30.0).with_history_weight(0.0);
        let rice = Product::new("RIC-008", "Basmati Rice", Category::Pantry, 3.2, "Grain House");

        let conf = |p: &Product, s: &DemandSignal| {
            evaluate(p, &stock, s, &config()).unwrap().unwrap().confidence
        };
        assert_eq!(conf(&bananas(), &hot), 75);
        assert_eq!(conf(&bananas(), &mild), 70);
        assert_eq!(conf(&rice, &hot), 70);
    }

    #[test]
    fn zero_quantity_forces_low_urgency() {
        // full to capacity, yet demand is far above stock
        let stock = StockLevel::new(60, 10, 60, 60);
        let signal = DemandSignal::new(100.0, 20.0);
        let suggestion = evaluate(&bananas(), &stock, &signal, &config())
            .unwrap()
            .unwrap();
        assert_eq!(suggestion.suggested_quantity, 0);
        assert_eq!(suggestion.urgency, Urgency::Low);
    }

    #[test]
    fn urgency_tiers_follow_stock_ratio() {
        let signal = DemandSignal::new(0.0, 20.0);
        let urgency = |current| {
            evaluate(&bananas(), &StockLevel::new(current, 100, 100, 200), &signal, &config())
                .unwrap()
                .unwrap()
                .urgency
        };
        assert_eq!(urgency(10), Urgency::High);
        assert_eq!(urgency(49), Urgency::High);
        assert_eq!(urgency(50), Urgency::Medium);
        assert_eq!(urgency(99), Urgency::Medium);
    }

    #[test]
    fn zero_reorder_point_uses_stock_presence() {
        let stock = StockLevel::new(0, 0, 0, 20);
        let signal = DemandSignal::new(5.0, 20.0);
        let suggestion = evaluate(&bananas(), &stock, &signal, &config())
            .unwrap()
            .unwrap();
        assert_eq!(suggestion.urgency, Urgency::High);
        assert_eq!(suggestion.suggested_quantity, 5);

        let stocked = StockLevel::new(3, 0, 0, 20);
        let busier = DemandSignal::new(10.0, 20.0);
        let suggestion = evaluate(&bananas(), &stocked, &busier, &config())
            .unwrap()
            .unwrap();
        // low from the ratio guard, raised by the remaining gap
        assert_eq!(suggestion.urgency, Urgency::Medium);
    }

    #[test]
    fn fractional_demand_rounds_up() {
        let stock = StockLevel::new(10, 10, 10, 100);
        let whole = DemandSignal::new(10.0, 20.0);
        assert_eq!(evaluate(&bananas(), &stock, &whole, &config()).unwrap(), None);

        let fractional = DemandSignal::new(10.2, 20.0);
        let suggestion = evaluate(&bananas(), &stock, &fractional, &config())
            .unwrap()
            .unwrap();
        assert_eq!(suggestion.suggested_quantity, 1);
        assert_eq!(suggestion.urgency, Urgency::Medium);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let signal = DemandSignal::new(10.0, 20.0);
        let inverted = StockLevel::new(10, 60, 50, 100);
        assert!(matches!(
            evaluate(&bananas(), &inverted, &signal, &config()),
            Err(EngineError::InvalidStockLevel(_))
        ));
        let no_room = StockLevel::new(0, 0, 0, 0);
        assert!(matches!(
            evaluate(&bananas(), &no_room, &signal, &config()),
            Err(EngineError::InvalidStockLevel(_))
        ));

        let stock = StockLevel::new(10, 10, 50, 100);
        for demand in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                evaluate(&bananas(), &stock, &DemandSignal::new(demand, 20.0), &config()),
                Err(EngineError::InvalidSignal(_))
            ));
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let stock = StockLevel::new(12, 20, 40, 150);
        let signal = DemandSignal::new(85.0, 31.0).with_event(Event::new("Holiday Sale", Impact::High));
        let first = evaluate(&bananas(), &stock, &signal, &config()).unwrap();
        let second = evaluate(&bananas(), &stock, &signal, &config()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn outputs_stay_within_bounds_across_inputs() {
        let demands = [0.0, 1.5, 25.0, 80.0, 400.0];
        let temperatures = [-5.0, 30.0, 40.0];
        for max in [1u32, 10, 100] {
            for reorder in (0..=max).step_by(((max / 4) as usize).max(1)) {
                for safety in [0, reorder / 2, reorder] {
                    for current in [0, reorder / 2, reorder, max, max + 5] {
                        let stock = StockLevel::new(current, safety, reorder, max);
                        for &demand in &demands {
                            for &temperature in &temperatures {
                                let signal = DemandSignal::new(demand, temperature)
                                    .with_event(Event::new("Holiday Sale", Impact::High));
                                let result = evaluate(&bananas(), &stock, &signal, &config()).unwrap();
                                let Some(s) = result else {
                                    assert!(current >= reorder && demand <= f64::from(current));
                                    continue;
                                };
                                assert!(s.suggested_quantity <= max.saturating_sub(current));
                                assert!(s.confidence <= 100);
                                if s.suggested_quantity == 0 {
                                    assert_eq!(s.urgency, Urgency::Low);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
