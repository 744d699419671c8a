//! Bill aggregation stages
//!
//! Pure functions over already-loaded records:
//! join (items → food, items → order → table) → project → group → total.
//! Joins are left joins, a missing counterpart leaves its fields `None`.

use std::collections::HashMap;

use rust_decimal::prelude::*;

use super::{BillLine, OrderBill};
use crate::db::models::{DiningTable, Food, Order, OrderItem};

/// Rounding for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for serialization, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// One order item with its joined counterparts
#[derive(Debug, Clone, Copy)]
pub struct JoinedRow<'a> {
    pub item: &'a OrderItem,
    pub food: Option<&'a Food>,
    pub order: Option<&'a Order>,
    pub table: Option<&'a DiningTable>,
}

/// Left-join every item to its food, its order and the order's table
pub fn join<'a>(
    items: &'a [OrderItem],
    foods: &'a [Food],
    orders: &'a [Order],
    tables: &'a [DiningTable],
) -> Vec<JoinedRow<'a>> {
    let foods: HashMap<&str, &Food> = foods.iter().map(|f| (f.food_id.as_str(), f)).collect();
    let orders: HashMap<&str, &Order> = orders.iter().map(|o| (o.order_id.as_str(), o)).collect();
    let tables: HashMap<&str, &DiningTable> =
        tables.iter().map(|t| (t.table_id.as_str(), t)).collect();

    items
        .iter()
        .map(|item| {
            let order = orders.get(item.order_id.as_str()).copied();
            let table = order
                .and_then(|o| o.table_id.as_deref())
                .and_then(|id| tables.get(id).copied());
            JoinedRow {
                item,
                food: foods.get(item.food_id.as_str()).copied(),
                order,
                table,
            }
        })
        .collect()
}

/// Flatten a joined row into a bill line
pub fn project(row: &JoinedRow<'_>) -> BillLine {
    BillLine {
        order_item_id: row.item.order_item_id.clone(),
        food_id: row.item.food_id.clone(),
        food_name: row.food.map(|f| f.name.clone()),
        food_image: row.food.map(|f| f.food_image.clone()),
        price: row.food.map(|f| f.price),
        unit_price: row.item.unit_price,
        quantity: row.item.quantity,
    }
}

/// Sum of the lines' unit prices
///
/// Quantity is not multiplied in, `S`/`M`/`L` are portion sizes.
pub fn total(lines: &[BillLine]) -> f64 {
    to_f64(lines.iter().map(|line| to_decimal(line.unit_price)).sum())
}

/// Group rows by `(order_id, table_id, table_number)`, first seen first
pub fn group(rows: &[JoinedRow<'_>]) -> Vec<OrderBill> {
    let mut bills: Vec<OrderBill> = Vec::new();
    let mut index: HashMap<(String, Option<String>, Option<i32>), usize> = HashMap::new();

    for row in rows {
        let table_id = row.table.map(|t| t.table_id.clone());
        let table_number = row.table.map(|t| t.table_number);
        let key = (row.item.order_id.clone(), table_id.clone(), table_number);

        let slot = *index.entry(key).or_insert_with(|| {
            bills.push(OrderBill {
                order_id: row.item.order_id.clone(),
                table_id,
                table_number,
                number_of_guests: row.table.map(|t| t.number_of_guests),
                order_items: Vec::new(),
                payment_due: 0.0,
                item_count: 0,
            });
            bills.len() - 1
        });
        bills[slot].order_items.push(project(row));
    }

    for bill in &mut bills {
        bill.payment_due = total(&bill.order_items);
        bill.item_count = bill.order_items.len();
    }
    bills
}

/// Bill of an order without items
pub fn empty_bill(order_id: &str, table: Option<&DiningTable>) -> OrderBill {
    OrderBill {
        order_id: order_id.to_string(),
        table_id: table.map(|t| t.table_id.clone()),
        table_number: table.map(|t| t.table_number),
        number_of_guests: table.map(|t| t.number_of_guests),
        order_items: Vec::new(),
        payment_due: 0.0,
        item_count: 0,
    }
}
