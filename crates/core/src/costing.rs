//! Cost accumulation for daily log line items.
//!
//! A daily log's cost is the sum of every *resolved* material line
//! (`cost_per_unit * quantity`) and every *resolved* labour line
//! (`rate_per_day * count`). Lines whose material or labour record cannot be
//! found contribute nothing; they are counted so callers can report them,
//! but they never fail the submission.

/// Cost of `units` at `unit_price`.
pub fn line_cost(unit_price: f64, units: i64) -> f64 {
    unit_price * units as f64
}

/// Running total over a daily log's line items.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostTally {
    total: f64,
    skipped: usize,
}

impl CostTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material line.
    ///
    /// `cost_per_unit` is `None` when the referenced material does not
    /// exist, in which case the line is skipped. Returns the amount added.
    pub fn add_material(&mut self, cost_per_unit: Option<f64>, quantity: i64) -> f64 {
        self.add(cost_per_unit, quantity)
    }

    /// Add a labour line. `rate_per_day` is `None` for an unknown labour id.
    pub fn add_labour(&mut self, rate_per_day: Option<f64>, count: i64) -> f64 {
        self.add(rate_per_day, count)
    }

    fn add(&mut self, unit_price: Option<f64>, units: i64) -> f64 {
        match unit_price {
            Some(price) => {
                let cost = line_cost(price, units);
                self.total += cost;
                cost
            }
            None => {
                self.skipped += 1;
                0.0
            }
        }
    }

    /// Accumulated cost of all resolved lines.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of lines skipped because their reference did not resolve.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally_is_zero() {
        let tally = CostTally::new();
        assert_eq!(tally.total(), 0.0);
        assert_eq!(tally.skipped(), 0);
    }

    #[test]
    fn paint_and_painter_total_120() {
        let mut tally = CostTally::new();
        assert_eq!(tally.add_material(Some(5.0), 4), 20.0);
        assert_eq!(tally.add_labour(Some(100.0), 1), 100.0);
        assert_eq!(tally.total(), 120.0);
    }

    #[test]
    fn unresolved_lines_contribute_nothing() {
        let mut tally = CostTally::new();
        tally.add_material(None, 50);
        tally.add_labour(Some(80.0), 2);
        tally.add_labour(None, 3);

        assert_eq!(tally.total(), 160.0);
        assert_eq!(tally.skipped(), 2);
    }

    #[test]
    fn zero_quantity_resolves_but_costs_nothing() {
        let mut tally = CostTally::new();
        assert_eq!(tally.add_material(Some(12.5), 0), 0.0);
        assert_eq!(tally.skipped(), 0);
    }

    #[test]
    fn negative_quantity_is_not_rejected() {
        let mut tally = CostTally::new();
        tally.add_material(Some(10.0), -2);
        assert_eq!(tally.total(), -20.0);
    }

    #[test]
    fn lines_accumulate_in_order() {
        let mut tally = CostTally::new();
        tally.add_material(Some(2.5), 4);
        tally.add_material(Some(1.25), 8);
        tally.add_labour(Some(150.0), 2);
        assert_eq!(tally.total(), 320.0);
    }
}
