//! Generic table state: column configuration, sorting, filtering, selection tracking.

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::view::common::{TableViewModel, ViewCell, ViewRow};

/// A single field value as seen by the table.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
    /// Absent field (e.g. salary not yet known).
    Missing,
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a.partial_cmp(b),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Integer(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
            (Value::Float(a), Value::Integer(b)) => a.partial_cmp(&(*b as f64)),
            (Value::Text(a), Value::Text(b)) => a.partial_cmp(b),
            // Absent values rank after every present one.
            (Value::Missing, Value::Missing) => Some(Ordering::Equal),
            (Value::Missing, _) => Some(Ordering::Greater),
            (_, Value::Missing) => Some(Ordering::Less),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => f.write_str(v),
            Value::Missing => Ok(()),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(Value::Missing, Value::Integer)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Missing)
    }
}

/// Compares two values, treating incomparable pairs as equal.
///
/// `Missing` sorts after present values; mixed kinds and NaN are incomparable.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Trait for table row items.
pub trait TableRow {
    /// Unique identifier, used for selection tracking.
    fn id(&self) -> u64;

    /// Value of the field named `key`. Unknown keys yield [`Value::Missing`].
    fn value(&self, key: &str) -> Value;
}

/// Custom cell renderer: maps (value, row) to a display cell.
pub type Renderer<R> = Box<dyn Fn(&Value, &R) -> ViewCell>;

/// Display configuration for one field of a row.
pub struct Column<R> {
    /// Field key passed to [`TableRow::value`].
    pub key: &'static str,
    /// Header label.
    pub label: String,
    /// Whether a header click toggles sorting on this column.
    pub sortable: bool,
    renderer: Option<Renderer<R>>,
}

impl<R: TableRow> Column<R> {
    pub fn new(key: &'static str, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            sortable: false,
            renderer: None,
        }
    }

    /// Marks the column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets a custom renderer producing a (possibly styled) cell.
    pub fn render_with(mut self, renderer: impl Fn(&Value, &R) -> ViewCell + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Sets a custom renderer producing plain text.
    pub fn format_with(self, format: impl Fn(&Value, &R) -> String + 'static) -> Self {
        self.render_with(move |value, row| ViewCell::plain(format(value, row)))
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Renders this column's cell for `row`, falling back to the value's
    /// default string form when no renderer is set.
    pub fn render(&self, row: &R) -> ViewCell {
        let value = row.value(self.key);
        match &self.renderer {
            Some(renderer) => renderer(&value, row),
            None => ViewCell::plain(value.to_string()),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Applies the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort key (if any) and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<&'static str>,
    pub direction: SortDirection,
}

impl SortState {
    /// Same key flips direction, a new key starts ascending.
    fn toggle(&mut self, key: &'static str) {
        if self.key == Some(key) {
            self.direction = self.direction.flip();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Sortable, filterable table over rows of type `R`.
///
/// Rows are kept in input order; the displayed order is an index permutation
/// recomputed whenever rows, sort state or filter change.
pub struct SortableTable<R: TableRow> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    sort: SortState,
    filter: Option<String>,
    /// Indices into `rows`, in display order.
    order: Vec<usize>,
    /// Selected row index (in displayed rows).
    pub selected: usize,
    /// Tracked row ID; follows the selected row across sort/filter changes.
    tracked_id: Option<u64>,
}

impl<R: TableRow> SortableTable<R> {
    pub fn new(columns: Vec<Column<R>>, rows: Vec<R>) -> Self {
        let mut table = Self {
            columns,
            rows,
            sort: SortState::default(),
            filter: None,
            order: Vec::new(),
            selected: 0,
            tracked_id: None,
        };
        table.refresh();
        table
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Number of displayed rows.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of rows before filtering.
    pub fn total_len(&self) -> usize {
        self.rows.len()
    }

    /// Displayed rows, in display order.
    pub fn rows(&self) -> impl Iterator<Item = &R> + '_ {
        self.order.iter().map(|&i| &self.rows[i])
    }

    pub fn row_at(&self, index: usize) -> Option<&R> {
        self.order.get(index).map(|&i| &self.rows[i])
    }

    pub fn selected_row(&self) -> Option<&R> {
        self.row_at(self.selected)
    }

    /// Toggles sorting on the column with the given key.
    ///
    /// Returns `false` (and changes nothing) when no column has that key or
    /// the column is not sortable.
    pub fn set_sort(&mut self, key: &str) -> bool {
        let Some(column) = self.columns.iter().find(|c| c.key == key) else {
            trace!(key, "sort requested for unknown column");
            return false;
        };
        if !column.sortable {
            trace!(key, "sort requested for unsortable column");
            return false;
        }
        let key = column.key;
        self.sort.toggle(key);
        debug!(key, direction = ?self.sort.direction, "sort changed");
        self.refresh();
        true
    }

    /// Header click by column position. The clicked column itself must be
    /// sortable, even when another column shares its key.
    pub fn sort_by_column(&mut self, index: usize) -> bool {
        match self.columns.get(index) {
            Some(column) if column.sortable => {
                let key = column.key;
                self.set_sort(key)
            }
            Some(column) => {
                trace!(key = column.key, index, "sort requested for unsortable column");
                false
            }
            None => false,
        }
    }

    /// Renders the cell for `row` under `column`.
    pub fn render(&self, row: &R, column: &Column<R>) -> ViewCell {
        column.render(row)
    }

    /// Replaces the rows, keeping sort state and filter.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.refresh();
    }

    /// Sets the filter string. Empty strings clear the filter.
    pub fn set_filter(&mut self, filter: Option<String>) {
        self.filter = filter.filter(|f| !f.is_empty());
        self.refresh();
    }

    /// Header label with sort indicator on the active sort column.
    pub fn header_label(&self, index: usize) -> String {
        let Some(column) = self.columns.get(index) else {
            return String::new();
        };
        if self.sort_column() == Some(index) {
            format!("{}{}", column.label, self.sort.direction.indicator())
        } else {
            column.label.clone()
        }
    }

    /// Position of the active sort column.
    pub fn sort_column(&self) -> Option<usize> {
        let key = self.sort.key?;
        self.columns.iter().position(|c| c.key == key)
    }

    /// Builds a frontend-independent snapshot of the displayed table.
    pub fn view_model(&self, title: impl Into<String>) -> TableViewModel {
        let headers: Vec<String> = (0..self.columns.len())
            .map(|i| self.header_label(i))
            .collect();
        let rows: Vec<ViewRow> = self
            .rows()
            .map(|row| ViewRow {
                id: row.id(),
                cells: self.columns.iter().map(|c| c.render(row)).collect(),
            })
            .collect();

        let widths = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let cell_max = rows
                    .iter()
                    .filter_map(|r| r.cells.get(i))
                    .map(|c| c.text.chars().count())
                    .max()
                    .unwrap_or(0);
                u16::try_from(cell_max.max(h.chars().count())).unwrap_or(u16::MAX)
            })
            .collect();

        TableViewModel {
            title: title.into(),
            headers,
            sortable: self.columns.iter().map(|c| c.sortable).collect(),
            widths,
            rows,
            sort_column: self.sort_column(),
            sort_ascending: self.sort.direction == SortDirection::Ascending,
        }
    }

    /// Recomputes display order from rows, sort state and filter.
    fn refresh(&mut self) {
        let mut order: Vec<usize> = (0..self.rows.len()).collect();

        if let Some(key) = self.sort.key {
            let keys: Vec<Value> = self.rows.iter().map(|r| r.value(key)).collect();
            let direction = self.sort.direction;
            stable_sort_by(&mut order, &|a, b| {
                direction.apply(compare_values(&keys[a], &keys[b]))
            });
        }

        if let Some(filter) = &self.filter {
            let needle = filter.to_lowercase();
            order.retain(|&i| self.matches_filter(&self.rows[i], &needle));
        }

        self.order = order;
        self.resolve_selection();
    }

    /// Case-insensitive substring match against every rendered cell.
    fn matches_filter(&self, row: &R, needle: &str) -> bool {
        self.columns
            .iter()
            .any(|c| c.render(row).text.to_lowercase().contains(needle))
    }

    /// Moves selection up.
    pub fn select_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.track_selected();
    }

    /// Moves selection down.
    pub fn select_down(&mut self) {
        let max = self.len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
        self.track_selected();
    }

    /// Moves selection up by a page.
    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
        self.track_selected();
    }

    /// Moves selection down by a page.
    pub fn page_down(&mut self, page_size: usize) {
        let max = self.len().saturating_sub(1);
        self.selected = self.selected.saturating_add(page_size).min(max);
        self.track_selected();
    }

    pub fn home(&mut self) {
        self.selected = 0;
        self.track_selected();
    }

    pub fn end(&mut self) {
        self.selected = self.len().saturating_sub(1);
        self.track_selected();
    }

    fn track_selected(&mut self) {
        self.tracked_id = self.selected_row().map(|r| r.id());
    }

    /// Resolves selection by tracked row ID.
    /// If the tracked row is still displayed, moves `selected` to its new
    /// index. Otherwise clears `tracked_id` and clamps `selected`. Always
    /// updates `tracked_id` from the current row.
    fn resolve_selection(&mut self) {
        let len = self.order.len();
        if len == 0 {
            self.selected = 0;
            self.tracked_id = None;
            return;
        }

        if let Some(tid) = self.tracked_id {
            let position = self.rows().position(|r| r.id() == tid);
            match position {
                Some(pos) => self.selected = pos,
                None => {
                    self.tracked_id = None;
                    self.selected = self.selected.min(len - 1);
                }
            }
        } else if self.selected >= len {
            self.selected = len - 1;
        }

        self.track_selected();
    }
}

impl<R: TableRow> fmt::Debug for SortableTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortableTable")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("sort", &self.sort)
            .field("filter", &self.filter)
            .field("order", &self.order)
            .field("selected", &self.selected)
            .finish()
    }
}

/// Stable merge sort over row indices. Tolerates non-total comparators.
fn stable_sort_by<F>(items: &mut Vec<usize>, cmp: &F)
where
    F: Fn(usize, usize) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }
    let mut right = items.split_off(items.len() / 2);
    stable_sort_by(items, cmp);
    stable_sort_by(&mut right, cmp);

    let left = std::mem::take(items);
    items.reserve(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        match (left.peek(), right.peek()) {
            (Some(&a), Some(&b)) => {
                // Left wins ties: equal keys keep input order.
                if cmp(a, b) == Ordering::Greater {
                    items.push(b);
                    right.next();
                } else {
                    items.push(a);
                    left.next();
                }
            }
            (Some(_), None) => {
                items.extend(left);
                break;
            }
            (None, _) => {
                items.extend(right);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::common::StyleClass;

    #[derive(Debug, Clone)]
    struct Item {
        id: u64,
        n: Value,
        score: i64,
    }

    impl TableRow for Item {
        fn id(&self) -> u64 {
            self.id
        }

        fn value(&self, key: &str) -> Value {
            match key {
                "id" => self.id.into(),
                "n" => self.n.clone(),
                "score" => Value::Integer(self.score),
                _ => Value::Missing,
            }
        }
    }

    fn item(id: u64, n: &str) -> Item {
        Item {
            id,
            n: Value::from(n),
            score: 0,
        }
    }

    fn columns() -> Vec<Column<Item>> {
        vec![
            Column::new("id", "ID"),
            Column::new("n", "Name").sortable(),
            Column::new("score", "Score").sortable(),
        ]
    }

    fn ids(table: &SortableTable<Item>) -> Vec<u64> {
        table.rows().map(|r| r.id).collect()
    }

    #[test]
    fn test_default_order_is_input_order() {
        let table = SortableTable::new(columns(), vec![item(3, "c"), item(1, "a"), item(2, "b")]);
        assert_eq!(table.sort_state().key, None);
        assert_eq!(ids(&table), vec![3, 1, 2]);
    }

    #[test]
    fn test_ascending_sort_is_stable() {
        let mut table =
            SortableTable::new(columns(), vec![item(1, "b"), item(2, "a"), item(3, "a")]);
        assert!(table.set_sort("n"));
        assert_eq!(ids(&table), vec![2, 3, 1]);
    }

    #[test]
    fn test_descending_keeps_ties_in_input_order() {
        let mut table =
            SortableTable::new(columns(), vec![item(1, "b"), item(2, "a"), item(3, "a")]);
        table.set_sort("n");
        table.set_sort("n");
        assert_eq!(table.sort_state().direction, SortDirection::Descending);
        assert_eq!(ids(&table), vec![1, 2, 3]);
    }

    #[test]
    fn test_ascending_then_descending_reverses_without_ties() {
        let rows = vec![item(1, "d"), item(2, "a"), item(3, "c"), item(4, "b")];
        let mut table = SortableTable::new(columns(), rows);

        table.set_sort("n");
        let asc = ids(&table);
        table.set_sort("n");
        let mut desc = ids(&table);
        desc.reverse();

        assert_eq!(asc, vec![2, 4, 3, 1]);
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sorting_sorted_rows_again_is_idempotent() {
        let rows = vec![item(1, "b"), item(2, "a"), item(3, "c"), item(4, "a")];
        let mut table = SortableTable::new(columns(), rows);
        table.set_sort("n");
        let once = ids(&table);

        let sorted: Vec<Item> = table.rows().cloned().collect();
        table.set_rows(sorted);
        assert_eq!(ids(&table), once);
    }

    #[test]
    fn test_new_key_resets_to_ascending() {
        let mut table = SortableTable::new(columns(), vec![item(1, "a")]);
        table.set_sort("n");
        table.set_sort("n");
        assert_eq!(table.sort_state().direction, SortDirection::Descending);

        table.set_sort("score");
        assert_eq!(
            table.sort_state(),
            SortState {
                key: Some("score"),
                direction: SortDirection::Ascending,
            }
        );
    }

    #[test]
    fn test_unsortable_or_unknown_column_is_noop() {
        let mut table =
            SortableTable::new(columns(), vec![item(2, "b"), item(1, "a"), item(3, "c")]);
        table.set_sort("n");
        let before_state = table.sort_state();
        let before_order = ids(&table);

        assert!(!table.set_sort("id"));
        assert!(!table.set_sort("nope"));
        assert!(!table.sort_by_column(17));

        assert_eq!(table.sort_state(), before_state);
        assert_eq!(ids(&table), before_order);
    }

    #[test]
    fn test_sort_by_column_index() {
        let mut table = SortableTable::new(columns(), vec![item(2, "b"), item(1, "a")]);
        assert!(!table.sort_by_column(0));
        assert!(table.sort_by_column(1));
        assert_eq!(table.sort_state().key, Some("n"));
        assert_eq!(ids(&table), vec![1, 2]);
    }

    #[test]
    fn test_incomparable_values_do_not_panic() {
        let rows = vec![
            Item {
                id: 1,
                n: Value::Integer(3),
                score: 0,
            },
            Item {
                id: 2,
                n: Value::Missing,
                score: 0,
            },
            Item {
                id: 3,
                n: Value::Integer(1),
                score: 0,
            },
            Item {
                id: 4,
                n: Value::from("x"),
                score: 0,
            },
            Item {
                id: 5,
                n: Value::Float(f64::NAN),
                score: 0,
            },
        ];
        let mut table = SortableTable::new(columns(), rows);
        table.set_sort("n");
        table.set_sort("n");

        let mut seen = ids(&table);
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_value_comparison() {
        assert_eq!(
            compare_values(&Value::Integer(2), &Value::Float(1.5)),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(&Value::from("a"), &Value::from("b")),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&Value::Missing, &Value::Integer(1)),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(&Value::from("x"), &Value::Missing),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&Value::Missing, &Value::Missing),
            Ordering::Equal
        );
        assert_eq!(
            compare_values(&Value::from("1"), &Value::Integer(1)),
            Ordering::Equal
        );
        assert_eq!(
            compare_values(&Value::Float(f64::NAN), &Value::Float(1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_missing_values_sort_last_wherever_they_start() {
        let score = |id, n: Option<f64>| Item {
            id,
            n: n.into(),
            score: 0,
        };
        let rows = vec![
            score(1, Some(6.5)),
            score(2, Some(5.8)),
            score(3, None),
            score(4, Some(7.2)),
            score(5, Some(5.5)),
        ];
        let mut table = SortableTable::new(columns(), rows);

        table.set_sort("n");
        assert_eq!(ids(&table), vec![5, 2, 1, 4, 3]);

        table.set_sort("n");
        assert_eq!(ids(&table), vec![3, 4, 1, 2, 5]);
    }

    #[test]
    fn test_unsortable_column_sharing_a_sortable_key_is_inert() {
        let columns = vec![
            Column::new("score", "Score").sortable(),
            Column::new("score", "Score %").format_with(|v, _: &Item| format!("{}%", v)),
        ];
        let mut table = SortableTable::new(columns, vec![item(1, "a")]);
        assert!(!table.sort_by_column(1));
        assert_eq!(table.sort_state().key, None);
        assert!(table.sort_by_column(0));
        assert_eq!(table.sort_column(), Some(0));
        assert_eq!(table.header_label(0), "Score▲");
        assert_eq!(table.header_label(1), "Score %");
    }

    #[test]
    fn test_large_ids_do_not_wrap() {
        assert_eq!(Value::from(u64::MAX), Value::Missing);
        assert_eq!(Value::from(42_u64), Value::Integer(42));
    }

    #[test]
    fn test_numeric_sort() {
        let rows = vec![
            Item {
                id: 1,
                n: Value::Missing,
                score: 10,
            },
            Item {
                id: 2,
                n: Value::Missing,
                score: -5,
            },
            Item {
                id: 3,
                n: Value::Missing,
                score: 7,
            },
        ];
        let mut table = SortableTable::new(columns(), rows);
        table.set_sort("score");
        assert_eq!(ids(&table), vec![2, 3, 1]);
    }

    #[test]
    fn test_custom_renderer() {
        let column: Column<Item> =
            Column::new("score", "Score").format_with(|v, _: &Item| format!("{}%", v));
        let row = Item {
            id: 1,
            n: Value::Missing,
            score: 42,
        };
        assert_eq!(column.render(&row).text, "42%");
        assert!(column.has_renderer());
    }

    #[test]
    fn test_renderer_receives_row() {
        let column: Column<Item> = Column::new("n", "Name").render_with(|v, row: &Item| {
            ViewCell::styled(format!("{}#{}", v, row.id), StyleClass::Accent)
        });
        let cell = column.render(&item(7, "x"));
        assert_eq!(cell, ViewCell::styled("x#7", StyleClass::Accent));
    }

    #[test]
    fn test_default_render() {
        let table = SortableTable::new(columns(), vec![]);
        let row = Item {
            id: 1,
            n: Value::Float(6.5),
            score: 3,
        };
        assert_eq!(table.render(&row, &table.columns()[1]).text, "6.5");
        assert_eq!(table.render(&row, &table.columns()[2]).text, "3");
        assert_eq!(Value::Missing.to_string(), "");
    }

    #[test]
    fn test_empty_table() {
        let mut table = SortableTable::new(columns(), vec![]);
        assert!(table.set_sort("n"));
        table.select_down();
        table.end();
        assert!(table.is_empty());
        assert!(table.selected_row().is_none());

        let vm = table.view_model("Empty");
        assert!(vm.rows.is_empty());
        assert_eq!(vm.headers, vec!["ID", "Name▲", "Score"]);
        assert_eq!(vm.widths, vec![2, 5, 5]);
    }

    #[test]
    fn test_filter_matches_rendered_text_case_insensitive() {
        let mut table = SortableTable::new(
            columns(),
            vec![item(1, "Alpha"), item(2, "beta"), item(3, "ALPINE")],
        );
        table.set_filter(Some("alp".to_string()));
        assert_eq!(ids(&table), vec![1, 3]);
        assert_eq!(table.total_len(), 3);

        table.set_sort("n");
        table.set_sort("n");
        assert_eq!(ids(&table), vec![1, 3]);

        table.set_filter(Some(String::new()));
        assert_eq!(table.filter(), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_selection_follows_row_across_sort() {
        let mut table =
            SortableTable::new(columns(), vec![item(1, "c"), item(2, "a"), item(3, "b")]);
        table.select_down();
        assert_eq!(table.selected_row().map(|r| r.id), Some(2));

        table.set_sort("n");
        assert_eq!(ids(&table), vec![2, 3, 1]);
        assert_eq!(table.selected, 0);
        assert_eq!(table.selected_row().map(|r| r.id), Some(2));
    }

    #[test]
    fn test_selection_clamps_when_row_filtered_out() {
        let mut table =
            SortableTable::new(columns(), vec![item(1, "aa"), item(2, "ab"), item(3, "bb")]);
        table.end();
        assert_eq!(table.selected, 2);

        table.set_filter(Some("a".to_string()));
        assert_eq!(table.len(), 2);
        assert_eq!(table.selected, 1);
        assert_eq!(table.selected_row().map(|r| r.id), Some(2));
    }

    #[test]
    fn test_paging_clamps() {
        let rows = (1..=30).map(|i| item(i, "x")).collect();
        let mut table = SortableTable::new(columns(), rows);
        table.page_down(20);
        assert_eq!(table.selected, 20);
        table.page_down(20);
        assert_eq!(table.selected, 29);
        table.page_up(100);
        assert_eq!(table.selected, 0);
        table.select_up();
        assert_eq!(table.selected, 0);
    }

    #[test]
    fn test_view_model_marks_sort_column() {
        let mut table = SortableTable::new(columns(), vec![item(10, "long name")]);
        table.set_sort("score");
        table.set_sort("score");
        let vm = table.view_model("Items");

        assert_eq!(vm.title, "Items");
        assert_eq!(vm.headers[2], "Score▼");
        assert_eq!(vm.sort_column, Some(2));
        assert!(!vm.sort_ascending);
        assert_eq!(vm.sortable, vec![false, true, true]);
        assert_eq!(vm.widths, vec![2, 9, 6]);
        assert_eq!(vm.rows[0].id, 10);
        assert_eq!(vm.rows[0].cells[1].text, "long name");
    }
}
