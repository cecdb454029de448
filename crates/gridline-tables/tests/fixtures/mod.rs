//! Common test fixtures for gridline-tables tests

#![allow(dead_code)]

use gridline_tables::{Column, DataTable, FieldMap, FilterDescriptor, Record, RowAction};
use rstest::*;
use std::borrow::Cow;

/// Sale record used across table tests
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
	pub id: String,
	pub company: String,
	pub client: String,
	pub status: String,
	pub amount: f64,
	pub date: String,
}

impl Record for Sale {
	fn id(&self) -> Cow<'_, str> {
		Cow::Borrowed(&self.id)
	}
}

fn sale(n: usize, company: &str, client: &str, status: &str, amount: f64) -> Sale {
	Sale {
		id: format!("sale-{}", n),
		company: company.to_string(),
		client: client.to_string(),
		status: status.to_string(),
		amount,
		date: format!("2024-01-{:02}", n),
	}
}

/// Twelve sales, one of them for Acme Corp
#[fixture]
pub fn sales() -> Vec<Sale> {
	vec![
		sale(1, "Acme Corp", "Alice", "completed", 1500.0),
		sale(2, "Globex", "Bob", "pending", 320.0),
		sale(3, "Initech", "Alice", "completed", 980.5),
		sale(4, "Umbrella", "Carla", "cancelled", 120.0),
		sale(5, "Hooli", "Bob", "completed", 2400.0),
		sale(6, "Stark Industries", "Dan", "pending", 760.0),
		sale(7, "Wayne Enterprises", "Carla", "completed", 3100.0),
		sale(8, "Cyberdyne", "Dan", "pending", 45.0),
		sale(9, "Soylent", "Alice", "cancelled", 610.0),
		sale(10, "Tyrell", "Bob", "completed", 1500.0),
		sale(11, "Wonka", "Carla", "pending", 88.0),
		sale(12, "Vandelay", "Dan", "completed", 999.0),
	]
}

/// Accessors for every [`Sale`] field
pub fn sale_fields() -> FieldMap<Sale> {
	FieldMap::new()
		.field("company", |s: &Sale| s.company.as_str().into())
		.field("client", |s: &Sale| s.client.as_str().into())
		.field("status", |s: &Sale| s.status.as_str().into())
		.field("amount", |s: &Sale| s.amount.into())
		.field("date", |s: &Sale| s.date.as_str().into())
}

/// Sales table with ten rows per page, status and client filters and
/// edit/delete actions
#[fixture]
pub fn sales_table() -> DataTable<Sale> {
	DataTable::builder()
		.fields(sale_fields())
		.column(Column::new("company", "Company").sortable(true))
		.column(Column::new("client", "Client"))
		.column(Column::new("status", "Status"))
		.column(
			Column::new("amount", "Amount")
				.sortable(true)
				.cell(|s: &Sale| format!("${:.2}", s.amount)),
		)
		.column(Column::new("date", "Date").sortable(true).hidden(true))
		.filter(
			FilterDescriptor::new("status", "Status")
				.option("completed", "Completed")
				.option("pending", "Pending")
				.option("cancelled", "Cancelled"),
		)
		.filter(
			FilterDescriptor::new("client", "Client")
				.option("Alice", "Alice")
				.option("Bob", "Bob"),
		)
		.row_actions(|s: &Sale| {
			let mut actions = vec![RowAction::new("edit", "Edit")];
			if s.status != "cancelled" {
				actions.push(RowAction::new("delete", "Delete").destructive());
			}
			actions
		})
		.page_size(10)
		.build()
		.unwrap()
}

/// Record ids of a page, in display order
pub fn ids(items: &[&Sale]) -> Vec<String> {
	items.iter().map(|s| s.id.clone()).collect()
}
