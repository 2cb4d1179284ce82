use crate::error::ProjectionError;
use core_types::Horizon;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// User-entered inputs for a growth projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParameters {
    pub capital: Decimal,
    /// Percentage of capital risked per period, between 0 and 100.
    #[serde(default)]
    pub risk_pct: Decimal,
    /// Fixed amount risked per period. When positive it replaces the
    /// percentage-derived amount.
    #[serde(default)]
    pub fixed_risk: Decimal,
    #[serde(default)]
    pub horizon: Horizon,
}

impl ProjectionParameters {
    pub fn new(capital: Decimal) -> Self {
        Self {
            capital,
            risk_pct: Decimal::ZERO,
            fixed_risk: Decimal::ZERO,
            horizon: Horizon::default(),
        }
    }

    pub fn with_risk_pct(mut self, risk_pct: Decimal) -> Self {
        self.risk_pct = risk_pct;
        self
    }

    pub fn with_fixed_risk(mut self, fixed_risk: Decimal) -> Self {
        self.fixed_risk = fixed_risk;
        self
    }

    pub fn with_horizon(mut self, horizon: Horizon) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.capital < Decimal::ZERO {
            return Err(ProjectionError::InvalidParameters(
                "capital must not be negative".to_string(),
            ));
        }
        if self.risk_pct < Decimal::ZERO || self.risk_pct > dec!(100) {
            return Err(ProjectionError::InvalidParameters(
                "risk_pct must be between 0 and 100".to_string(),
            ));
        }
        if self.fixed_risk < Decimal::ZERO {
            return Err(ProjectionError::InvalidParameters(
                "fixed_risk must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// The amount risked in a single period.
    pub fn effective_risk(&self) -> Decimal {
        if self.fixed_risk > Decimal::ZERO {
            self.fixed_risk
        } else {
            self.capital * self.rate()
        }
    }

    fn rate(&self) -> Decimal {
        self.risk_pct / dec!(100)
    }
}

/// Projected outcome of one horizon.
///
/// The compounded figures are floating point: `(1 + r)^240` leaves the `Decimal`
/// range for rates above roughly 28%, while an `f64` stays finite for every valid
/// rate and capital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonProjection {
    pub horizon: Horizon,
    pub periods: u64,
    pub effective_risk: Decimal,
    /// Projected change in capital over the horizon.
    pub delta: f64,
    pub final_balance: f64,
    pub roi_pct: f64,
}

impl HorizonProjection {
    fn zero(horizon: Horizon) -> Self {
        Self {
            horizon,
            periods: horizon.periods(),
            effective_risk: Decimal::ZERO,
            delta: 0.0,
            final_balance: 0.0,
            roi_pct: 0.0,
        }
    }
}

/// Closed-form growth projection over a fixed horizon.
///
/// A daily horizon is a single, non-compounded period worth the effective risk.
/// Longer horizons compound the risk percentage over their period count; the
/// fixed risk amount does not take part in compounding.
#[derive(Debug, Clone)]
pub struct Projector {
    params: ProjectionParameters,
}

impl Projector {
    /// Creates a projector after checking the parameters are within range.
    pub fn new(params: ProjectionParameters) -> Result<Self, ProjectionError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ProjectionParameters {
        &self.params
    }

    /// Projects over the horizon selected in the parameters.
    pub fn project(&self) -> HorizonProjection {
        self.project_at(self.params.horizon)
    }

    /// Projects over an explicit horizon.
    pub fn project_at(&self, horizon: Horizon) -> HorizonProjection {
        if self.params.capital.is_zero() {
            return HorizonProjection::zero(horizon);
        }

        let capital = self.params.capital.to_f64().unwrap_or(0.0);
        let effective_risk = self.params.effective_risk();
        let periods = horizon.periods();
        let delta = match horizon {
            Horizon::Daily => effective_risk.to_f64().unwrap_or(0.0),
            _ => {
                let rate = self.params.rate().to_f64().unwrap_or(0.0);
                let exponent = i32::try_from(periods).unwrap_or(i32::MAX);
                capital * (1.0 + rate).powi(exponent) - capital
            }
        };
        let roi_pct = delta / capital * 100.0;

        tracing::debug!(
            %horizon,
            %capital,
            risk_pct = %self.params.risk_pct,
            delta,
            "Projected growth."
        );

        HorizonProjection {
            horizon,
            periods,
            effective_risk,
            delta,
            final_balance: capital + delta,
            roi_pct,
        }
    }

    /// Projects over every horizon, shortest first.
    pub fn project_all(&self) -> Vec<HorizonProjection> {
        Horizon::ALL
            .into_iter()
            .map(|horizon| self.project_at(horizon))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projector(params: ProjectionParameters) -> Projector {
        Projector::new(params).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn weekly_compounds_five_periods() {
        let p = projector(
            ProjectionParameters::new(dec!(1000))
                .with_risk_pct(dec!(1))
                .with_horizon(Horizon::Weekly),
        );
        let projection = p.project();

        assert_close(projection.delta, 51.0100501);
        assert_eq!(projection.periods, 5);
        assert_close(projection.final_balance, 1051.0100501);
    }

    #[test]
    fn daily_is_the_effective_risk() {
        let p = projector(ProjectionParameters::new(dec!(2500)).with_risk_pct(dec!(2)));
        let projection = p.project_at(Horizon::Daily);
        assert_close(projection.delta, 50.0);
        assert_close(projection.roi_pct, 2.0);
    }

    #[test]
    fn fixed_risk_overrides_daily_amount_only() {
        let p = projector(
            ProjectionParameters::new(dec!(2500))
                .with_risk_pct(dec!(2))
                .with_fixed_risk(dec!(75)),
        );
        assert_close(p.project_at(Horizon::Daily).delta, 75.0);

        let weekly = p.project_at(Horizon::Weekly);
        assert_close(weekly.delta, 2500.0 * 1.02f64.powi(5) - 2500.0);
        assert_eq!(weekly.effective_risk, dec!(75));
    }

    #[test]
    fn zero_capital_is_a_zero_projection() {
        let p = projector(
            ProjectionParameters::new(Decimal::ZERO)
                .with_risk_pct(dec!(5))
                .with_fixed_risk(dec!(100)),
        );
        for projection in p.project_all() {
            assert_eq!(projection.delta, 0.0);
            assert_eq!(projection.roi_pct, 0.0);
        }
    }

    #[test]
    fn zero_rate_does_not_grow() {
        let p = projector(ProjectionParameters::new(dec!(1000)));
        let yearly = p.project_at(Horizon::Yearly);
        assert_eq!(yearly.delta, 0.0);
        assert_eq!(yearly.final_balance, 1000.0);
    }

    #[test]
    fn project_all_covers_every_horizon() {
        let p = projector(ProjectionParameters::new(dec!(10000)).with_risk_pct(dec!(0.5)));
        let projections = p.project_all();
        let horizons: Vec<Horizon> = projections.iter().map(|p| p.horizon).collect();
        assert_eq!(horizons, Horizon::ALL.to_vec());
        assert!(projections.windows(2).all(|w| w[0].delta < w[1].delta));
    }

    #[test]
    fn yearly_projection_at_high_rates_stays_finite() {
        for pct in [dec!(30), dec!(50), dec!(100)] {
            let p = projector(ProjectionParameters::new(dec!(10000)).with_risk_pct(pct));
            for projection in p.project_all() {
                assert!(projection.delta.is_finite());
                assert!(projection.final_balance.is_finite());
                assert!(projection.roi_pct.is_finite());
            }
        }

        let p = projector(ProjectionParameters::new(dec!(10000)).with_risk_pct(dec!(100)));
        let yearly = p.project_at(Horizon::Yearly);
        let expected = 10000.0 * 2f64.powi(240);
        assert!((yearly.final_balance - expected).abs() / expected < 1e-12);
        assert!(yearly.final_balance > 1.7e76);
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert!(Projector::new(ProjectionParameters::new(dec!(-1))).is_err());
        assert!(Projector::new(ProjectionParameters::new(dec!(10)).with_risk_pct(dec!(101))).is_err());
        assert!(Projector::new(ProjectionParameters::new(dec!(10)).with_fixed_risk(dec!(-5))).is_err());
    }
}
