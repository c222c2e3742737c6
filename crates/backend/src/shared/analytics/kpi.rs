use contracts::shared::analytics::TransactionRecord;
use contracts::shared::indicators::{
    ChangeKind, IndicatorId, IndicatorStatus, IndicatorValue, ValueFormat,
};

use super::dimensions::margin_pct;

// Synthetic "previous period" factors of the demo dashboard
const PREVIOUS_SALES_FACTOR: f64 = 0.88;
const PREVIOUS_PROFIT_FACTOR: f64 = 0.92;
const PREVIOUS_MARGIN_FACTOR: f64 = 0.95;
const PREVIOUS_ORDERS_FACTOR: f64 = 0.85;

pub mod ids {
    pub const TOTAL_SALES: &str = "total_sales";
    pub const TOTAL_PROFIT: &str = "total_profit";
    pub const AVG_MARGIN: &str = "avg_margin";
    pub const ORDER_COUNT: &str = "order_count";
}

/// KPI strip of the overview dashboard: sales, profit, margin, orders.
pub fn summarize_kpis(records: &[TransactionRecord]) -> Vec<IndicatorValue> {
    let total_sales: i64 = records.iter().map(|r| r.sales).sum();
    let total_profit: f64 = records.iter().map(|r| r.profit).sum();
    let margin = margin_pct(total_profit, total_sales);
    let orders = records.len() as f64;

    let won = || ValueFormat::Money {
        currency: "KRW".to_string(),
    };

    vec![
        relative(ids::TOTAL_SALES, "총 매출", won(), total_sales as f64, PREVIOUS_SALES_FACTOR),
        relative(ids::TOTAL_PROFIT, "총 이익", won(), total_profit, PREVIOUS_PROFIT_FACTOR),
        absolute(
            ids::AVG_MARGIN,
            "평균 이익률",
            ValueFormat::Percent { decimals: 1 },
            margin,
            PREVIOUS_MARGIN_FACTOR,
        ),
        relative(ids::ORDER_COUNT, "총 주문 건수", ValueFormat::Integer, orders, PREVIOUS_ORDERS_FACTOR),
    ]
}

fn relative(id: &str, label: &str, format: ValueFormat, value: f64, factor: f64) -> IndicatorValue {
    let previous = value * factor;
    let change = pct_change(value, previous);
    IndicatorValue {
        id: IndicatorId::new(id),
        label: label.to_string(),
        format,
        value,
        previous_value: previous,
        change,
        change_kind: ChangeKind::Percent,
        status: status_by_change(change),
    }
}

fn absolute(id: &str, label: &str, format: ValueFormat, value: f64, factor: f64) -> IndicatorValue {
    let previous = value * factor;
    let change = (previous.abs() >= 0.01).then(|| value - previous);
    IndicatorValue {
        id: IndicatorId::new(id),
        label: label.to_string(),
        format,
        value,
        previous_value: previous,
        change,
        change_kind: ChangeKind::Absolute,
        status: status_by_change(change),
    }
}

fn pct_change(cur: f64, prev: f64) -> Option<f64> {
    if prev.abs() < 0.01 {
        None
    } else {
        Some(((cur - prev) / prev.abs()) * 100.0)
    }
}

fn status_by_change(change: Option<f64>) -> IndicatorStatus {
    match change {
        Some(c) if c > 0.0 => IndicatorStatus::Good,
        Some(c) if c < 0.0 => IndicatorStatus::Bad,
        _ => IndicatorStatus::Neutral,
    }
}
