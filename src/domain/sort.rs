use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Header suffix announcing the direction the next click will use.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => " ⬆",
            SortDirection::Desc => " ⬇",
        }
    }
}

/// Per-column direction memory. A column with no entry has never been sorted
/// and sorts ascending on its first click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    directions: BTreeMap<usize, SortDirection>,
}

impl SortState {
    /// Returns the direction to sort with now and records the toggled
    /// direction for the next click on the same column.
    pub fn advance(&mut self, column: usize) -> (SortDirection, SortDirection) {
        let current = self
            .directions
            .get(&column)
            .copied()
            .unwrap_or(SortDirection::Asc);
        let next = current.toggled();
        self.directions.insert(column, next);
        (current, next)
    }

    #[cfg(test)]
    pub fn next_direction(&self, column: usize) -> Option<SortDirection> {
        self.directions.get(&column).copied()
    }
}

/// Numeric value of a cell, if the whole cell reads as a number. Blank cells
/// count as zero.
pub fn parse_numeric_value(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Sort key of one cell. Numbers order by value and come before text; text
/// orders by its accent-folded lowercase form, then by its plain lowercase
/// form.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text { folded: String, lower: String },
}

impl SortKey {
    pub fn of(text: &str) -> Self {
        if let Some(value) = parse_numeric_value(text) {
            return SortKey::Number(value);
        }
        let lower = text.to_lowercase();
        SortKey::Text {
            folded: lower.chars().map(fold_accent).collect(),
            lower,
        }
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(left), SortKey::Number(right)) => left.total_cmp(right),
            (SortKey::Number(_), SortKey::Text { .. }) => Ordering::Less,
            (SortKey::Text { .. }, SortKey::Number(_)) => Ordering::Greater,
            (
                SortKey::Text { folded, lower },
                SortKey::Text {
                    folded: other_folded,
                    lower: other_lower,
                },
            ) => folded.cmp(other_folded).then_with(|| lower.cmp(other_lower)),
        }
    }
}

// Primary-strength folding for the Latin-1 range so "é" sorts next to "e".
fn fold_accent(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare_cells(a: &str, b: &str, direction: SortDirection) -> Ordering {
        let ordering = SortKey::of(a).cmp(&SortKey::of(b));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    fn sorted(values: &[&str], direction: SortDirection) -> Vec<String> {
        let mut out: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        out.sort_by(|a, b| compare_cells(a, b, direction));
        out
    }

    #[test]
    fn first_click_sorts_ascending_then_alternates() {
        let mut state = SortState::default();

        assert_eq!(state.advance(2), (SortDirection::Asc, SortDirection::Desc));
        assert_eq!(state.advance(2), (SortDirection::Desc, SortDirection::Asc));
        assert_eq!(state.advance(2), (SortDirection::Asc, SortDirection::Desc));
    }

    #[test]
    fn columns_toggle_independently() {
        let mut state = SortState::default();
        state.advance(1);

        assert_eq!(state.advance(3).0, SortDirection::Asc);
        assert_eq!(state.next_direction(1), Some(SortDirection::Desc));
        assert_eq!(state.next_direction(0), None);
    }

    #[test]
    fn numbers_sort_numerically() {
        assert_eq!(
            sorted(&["10", "9", "2"], SortDirection::Asc),
            vec!["2", "9", "10"]
        );
        assert_eq!(
            sorted(&["10", "9", "2"], SortDirection::Desc),
            vec!["10", "9", "2"]
        );
    }

    #[test]
    fn text_sorts_case_insensitively() {
        assert_eq!(
            sorted(&["bob", "Ann", "carl", "Émile"], SortDirection::Asc),
            vec!["Ann", "bob", "carl", "Émile"]
        );
        assert_eq!(
            sorted(&["eve", "Émile", "dan"], SortDirection::Asc),
            vec!["dan", "Émile", "eve"]
        );
    }

    #[test]
    fn blank_cells_count_as_zero() {
        assert_eq!(parse_numeric_value("  "), Some(0.0));
        assert_eq!(sorted(&["5", "", "-1"], SortDirection::Asc), vec!["-1", "", "5"]);
    }

    #[test]
    fn mixed_cells_put_numbers_before_text() {
        assert_eq!(
            sorted(&["1a", "10", "abc", "9"], SortDirection::Asc),
            vec!["9", "10", "1a", "abc"]
        );
        assert_eq!(
            sorted(&["1a", "10", "abc", "9"], SortDirection::Desc),
            vec!["abc", "1a", "10", "9"]
        );
    }

    #[test]
    fn mixed_columns_sort_without_panicking() {
        let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;
        for _ in 0..300 {
            let mut column = Vec::new();
            for _ in 0..60 {
                seed = seed
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                let value = (seed >> 33) % 200;
                column.push(match seed % 3 {
                    0 => format!("{value}"),
                    1 => format!("{value}a"),
                    _ => format!("{}", value * 7),
                });
            }

            let mut ascending = column.clone();
            ascending.sort_by(|a, b| compare_cells(a, b, SortDirection::Asc));
            let mut descending = column;
            descending.sort_by(|a, b| compare_cells(a, b, SortDirection::Desc));

            assert!(
                ascending
                    .windows(2)
                    .all(|pair| SortKey::of(&pair[0]) <= SortKey::of(&pair[1])),
                "ascending column should be ordered: {ascending:?}"
            );
            assert!(
                descending
                    .windows(2)
                    .all(|pair| SortKey::of(&pair[0]) >= SortKey::of(&pair[1])),
                "descending column should be ordered: {descending:?}"
            );
        }
    }

    #[test]
    fn non_finite_values_are_not_numbers() {
        assert_eq!(parse_numeric_value("NaN"), None);
        assert_eq!(parse_numeric_value("inf"), None);
        assert_eq!(parse_numeric_value(" 4.5 "), Some(4.5));
    }
}
