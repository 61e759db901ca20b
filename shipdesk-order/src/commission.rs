use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use shipdesk_core::{CoreError, CoreResult};
use shipdesk_shared::models::events::CommissionSettledEvent;
use shipdesk_shared::NormalizedOrder;
use std::str::FromStr;
use tracing::info;

/// How a line item contributes to its order's subtotal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionBasis {
    /// Unit price only; quantity is ignored.
    #[default]
    UnitPrice,
    /// Unit price times quantity.
    Extended,
}

/// How amounts are displayed in the settlement report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Subtotals and grand total with one decimal, commission as computed.
    #[default]
    Legacy,
    /// Every amount with one decimal.
    Uniform,
}

/// Sums order subtotals and computes the affiliate commission.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommissionAggregator {
    basis: CommissionBasis,
    rounding: RoundingPolicy,
}

impl CommissionAggregator {
    pub fn new(basis: CommissionBasis, rounding: RoundingPolicy) -> Self {
        Self { basis, rounding }
    }

    pub fn order_subtotal(&self, order: &NormalizedOrder) -> CoreResult<Decimal> {
        order.line_items.iter().try_fold(Decimal::ZERO, |total, item| {
            let amount = match self.basis {
                CommissionBasis::UnitPrice => Some(item.unit_price.amount),
                CommissionBasis::Extended => item.unit_price.amount.checked_mul(Decimal::from(item.quantity)),
            };
            amount
                .and_then(|amount| total.checked_add(amount))
                .ok_or_else(|| out_of_range(&order.id))
        })
    }

    /// `percentage` is user-entered text such as `"10"` or `"7.5"`.
    pub fn summarize(&self, orders: &[NormalizedOrder], percentage: &str) -> CoreResult<CommissionSummary> {
        let percentage_text = percentage.trim().to_string();
        let rate = Decimal::from_str(&percentage_text).map_err(|_| {
            CoreError::InvalidInput(format!("Commission percentage is not a number: {percentage:?}"))
        })?;

        let subtotals = orders
            .iter()
            .map(|order| self.order_subtotal(order))
            .collect::<CoreResult<Vec<Decimal>>>()?;
        let grand_total = subtotals
            .iter()
            .try_fold(Decimal::ZERO, |total, subtotal| total.checked_add(*subtotal))
            .ok_or_else(|| out_of_range("grand total"))?;
        let commission = grand_total
            .checked_mul(rate)
            .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(|| {
                CoreError::InvalidInput(format!(
                    "Commission of {percentage_text}% on {grand_total} is out of range"
                ))
            })?;

        info!(
            orders = orders.len(),
            grand_total = %grand_total,
            commission = %commission,
            "Commission aggregated"
        );

        Ok(CommissionSummary {
            subtotals,
            grand_total,
            percentage: rate,
            percentage_text,
            commission,
            rounding: self.rounding,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CommissionSummary {
    /// One per order, in input order.
    pub subtotals: Vec<Decimal>,
    pub grand_total: Decimal,
    pub percentage: Decimal,
    /// Percentage as entered, used in the report label.
    pub percentage_text: String,
    pub commission: Decimal,
    pub rounding: RoundingPolicy,
}

impl CommissionSummary {
    pub fn subtotal_display(&self, index: usize) -> String {
        self.subtotals
            .get(index)
            .map(|value| one_decimal(*value))
            .unwrap_or_default()
    }

    pub fn grand_total_display(&self) -> String {
        one_decimal(self.grand_total)
    }

    pub fn commission_display(&self) -> String {
        match self.rounding {
            RoundingPolicy::Legacy => self.commission.normalize().to_string(),
            RoundingPolicy::Uniform => one_decimal(self.commission),
        }
    }

    pub fn settled_event(&self) -> CommissionSettledEvent {
        CommissionSettledEvent {
            order_count: self.subtotals.len(),
            grand_total: self.grand_total_display(),
            commission: self.commission_display(),
            timestamp: Utc::now().timestamp(),
        }
    }
}

fn out_of_range(what: &str) -> CoreError {
    CoreError::InvalidInput(format!("Amount out of range in {what}"))
}

fn one_decimal(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}", rounded)
}
