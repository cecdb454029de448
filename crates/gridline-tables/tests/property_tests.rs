//! Property-based tests for the table stages

use gridline_tables::filtering::apply_filters;
use gridline_tables::pagination::{PAGE_WINDOW_SIZE, PageState, page_window, paginate};
use gridline_tables::search::apply_search;
use gridline_tables::sorting::apply_sort;
use gridline_tables::{Collation, FieldMap, FilterSelection, FilterState, Record, SortCriterion};
use proptest::prelude::*;
use std::borrow::Cow;

#[derive(Debug, Clone)]
struct Item {
	id: usize,
	name: String,
	group: String,
	score: i64,
}

impl Record for Item {
	fn id(&self) -> Cow<'_, str> {
		Cow::Owned(self.id.to_string())
	}
}

fn fields() -> FieldMap<Item> {
	FieldMap::new()
		.field("name", |i: &Item| i.name.as_str().into())
		.field("group", |i: &Item| i.group.as_str().into())
		.field("score", |i: &Item| i.score.into())
		.field("id", |i: &Item| (i.id as i64).into())
}

fn items() -> impl Strategy<Value = Vec<Item>> {
	prop::collection::vec(("[a-dA-D]{0,6}", "[xyz]", -5i64..5), 0..40).prop_map(|rows| {
		rows.into_iter()
			.enumerate()
			.map(|(id, (name, group, score))| Item {
				id,
				name,
				group,
				score,
			})
			.collect()
	})
}

fn ids(records: &[&Item]) -> Vec<usize> {
	records.iter().map(|i| i.id).collect()
}

proptest! {
	#[test]
	fn search_is_idempotent(data in items(), query in "[a-dA-D]{0,3}") {
		let fields = fields();
		let once = apply_search(data.iter().collect(), &query, &fields);
		let twice = apply_search(once.clone(), &query, &fields);
		prop_assert_eq!(ids(&once), ids(&twice));
	}

	#[test]
	fn empty_search_is_identity(data in items()) {
		let result = apply_search(data.iter().collect(), "", &fields());
		prop_assert_eq!(ids(&result), (0..data.len()).collect::<Vec<_>>());
	}

	#[test]
	fn search_keeps_order_and_only_matches(data in items(), query in "[a-d]{1,2}") {
		let result = apply_search(data.iter().collect(), &query, &fields());
		let result_ids = ids(&result);
		prop_assert!(result_ids.windows(2).all(|w| w[0] < w[1]));
		for item in &result {
			let needle = query.to_lowercase();
			prop_assert!(
				item.name.to_lowercase().contains(&needle) || item.group.contains(&needle)
			);
		}
	}

	#[test]
	fn filter_result_is_ordered_subset(data in items(), group in "[xyz]") {
		let mut state = FilterState::new();
		state.set("group", FilterSelection::value(group.clone()));

		let result = apply_filters(data.iter().collect(), &state, &fields());
		prop_assert!(result.iter().all(|item| item.group == group));
		prop_assert_eq!(
			result.len(),
			data.iter().filter(|item| item.group == group).count()
		);
		prop_assert!(ids(&result).windows(2).all(|w| w[0] < w[1]));
	}

	#[test]
	fn all_selection_is_identity(data in items()) {
		let mut state = FilterState::new();
		state.set("group", FilterSelection::All);
		let result = apply_filters(data.iter().collect(), &state, &fields());
		prop_assert_eq!(result.len(), data.len());
	}

	#[test]
	fn sort_ascending_is_ordered_and_stable(data in items()) {
		let criterion = SortCriterion::ascending("score");
		let sorted = apply_sort(
			data.iter().collect(),
			Some(&criterion),
			&fields(),
			Collation::Binary,
		);
		prop_assert_eq!(sorted.len(), data.len());
		for pair in sorted.windows(2) {
			prop_assert!(pair[0].score <= pair[1].score);
			if pair[0].score == pair[1].score {
				prop_assert!(pair[0].id < pair[1].id);
			}
		}
	}

	#[test]
	fn sort_direction_round_trip(data in items()) {
		let fields = fields();
		let ascending = SortCriterion::ascending("score");
		let descending = SortCriterion::descending("score");

		let sort = |rows, criterion| apply_sort(rows, Some(criterion), &fields, Collation::Binary);

		let first = sort(data.iter().collect(), &ascending);
		let flipped = sort(first.clone(), &descending);
		let back = sort(flipped, &ascending);
		prop_assert_eq!(ids(&first), ids(&back));
	}

	#[test]
	fn descending_reverses_distinct_keys(data in items()) {
		let fields = fields();
		let sort = |criterion| {
			apply_sort(data.iter().collect(), Some(&criterion), &fields, Collation::Binary)
		};

		let ascending = sort(SortCriterion::ascending("id"));
		let mut descending = ids(&sort(SortCriterion::descending("id")));
		descending.reverse();
		prop_assert_eq!(ids(&ascending), descending);
	}

	#[test]
	fn paginate_never_panics(data in items(), page in 0usize..100, size in 1usize..20) {
		let state = PageState { current_page: page, page_size: size };
		let page = paginate(data.iter().collect(), state);
		prop_assert!(page.total_pages >= 1);
		prop_assert!(page.items.len() <= size);
		prop_assert_eq!(page.total_count, data.len());
	}

	#[test]
	fn pages_cover_every_record_once(data in items(), size in 1usize..20) {
		let total = paginate(data.iter().collect(), PageState::new(size)).total_pages;
		let mut seen = Vec::new();
		for current_page in 1..=total {
			let state = PageState { current_page, page_size: size };
			let page = paginate(data.iter().collect(), state);
			seen.extend(ids(&page.items));
		}
		prop_assert_eq!(seen, (0..data.len()).collect::<Vec<_>>());
	}

	#[test]
	fn page_window_is_bounded(total in 1usize..200, current in 1usize..200) {
		let current = current.min(total);
		let window = page_window(current, total);
		prop_assert!(window.len() <= PAGE_WINDOW_SIZE);
		prop_assert!(window.contains(&current));
		prop_assert_eq!(window.first().copied(), Some(1));
		prop_assert_eq!(window.last().copied(), Some(total));
		prop_assert!(window.windows(2).all(|w| w[0] < w[1]));
	}
}
