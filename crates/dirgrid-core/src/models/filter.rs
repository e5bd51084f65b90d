//! Filter state and the filter chip catalogue.

use serde::{Deserialize, Serialize};

use super::entry::EntryKind;
use super::listing::WhereClause;
use crate::units::kb_to_bytes;

// =============================================================================
// Filter Kinds
// =============================================================================

/// One of the four query constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    SizeGreaterThan,
    SizeLessThan,
    TypeEquals,
    NameContains,
}

impl FilterKind {
    /// Kinds offered in the filter menu, in menu order.
    ///
    /// Name matching is driven by the search field instead of a chip.
    pub const CHIPS: [FilterKind; 3] = [
        FilterKind::SizeGreaterThan,
        FilterKind::SizeLessThan,
        FilterKind::TypeEquals,
    ];

    /// Chip descriptor for this kind, if it is offered as a chip.
    pub fn chip(self) -> Option<FilterChip> {
        let chip = match self {
            Self::SizeGreaterThan => FilterChip {
                kind: self,
                title: "File Size (KB) >",
                input: ChipInput::Number,
            },
            Self::SizeLessThan => FilterChip {
                kind: self,
                title: "File Size (KB) <",
                input: ChipInput::Number,
            },
            Self::TypeEquals => FilterChip {
                kind: self,
                title: "Type",
                input: ChipInput::Dropdown(&EntryKind::ALL),
            },
            Self::NameContains => return None,
        };
        Some(chip)
    }
}

/// Input widget a chip needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChipInput {
    /// Free numeric input (KB)
    Number,
    /// Fixed list of choices
    Dropdown(&'static [EntryKind]),
}

/// Static description of a filter chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterChip {
    pub kind: FilterKind,
    /// Label shown on the chip and in the filter menu
    pub title: &'static str,
    pub input: ChipInput,
}

// =============================================================================
// Filter Values
// =============================================================================

/// A new value for one predicate field. `None` clears the field.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    /// Lower size bound in KB
    SizeGreaterThan(Option<f64>),
    /// Upper size bound in KB
    SizeLessThan(Option<f64>),
    TypeEquals(Option<EntryKind>),
    NameContains(Option<String>),
}

impl FilterValue {
    /// The value that clears `kind`.
    pub fn cleared(kind: FilterKind) -> Self {
        match kind {
            FilterKind::SizeGreaterThan => Self::SizeGreaterThan(None),
            FilterKind::SizeLessThan => Self::SizeLessThan(None),
            FilterKind::TypeEquals => Self::TypeEquals(None),
            FilterKind::NameContains => Self::NameContains(None),
        }
    }
}

// =============================================================================
// Filter Predicate
// =============================================================================

/// The active query constraints. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterPredicate {
    /// KB
    pub size_greater_than: Option<f64>,
    /// KB
    pub size_less_than: Option<f64>,
    pub type_equals: Option<EntryKind>,
    pub name_contains: Option<String>,
}

impl FilterPredicate {
    /// Replace one field.
    pub fn apply(&mut self, value: FilterValue) {
        match value {
            FilterValue::SizeGreaterThan(kb) => self.size_greater_than = kb,
            FilterValue::SizeLessThan(kb) => self.size_less_than = kb,
            FilterValue::TypeEquals(kind) => self.type_equals = kind,
            FilterValue::NameContains(text) => self.name_contains = text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size_greater_than.is_none()
            && self.size_less_than.is_none()
            && self.type_equals.is_none()
            && self.name_contains.is_none()
    }

    /// Build the service-side constraints.
    ///
    /// Sizes go out in bytes. Fields that cannot constrain anything (absent,
    /// NaN or infinite sizes, empty name) are left out entirely.
    pub fn to_where_clause(&self) -> WhereClause {
        let bytes = |kb: Option<f64>| kb.filter(|v| v.is_finite()).map(kb_to_bytes);
        WhereClause {
            size_gt: bytes(self.size_greater_than),
            size_lt: bytes(self.size_less_than),
            type_eq: self.type_equals,
            name_contains: self.name_contains.clone().filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_catalogue() {
        let titles: Vec<_> = FilterKind::CHIPS
            .iter()
            .filter_map(|k| k.chip())
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["File Size (KB) >", "File Size (KB) <", "Type"]);
        assert_eq!(FilterKind::NameContains.chip(), None);
        assert_eq!(
            FilterKind::TypeEquals.chip().map(|c| c.input),
            Some(ChipInput::Dropdown(&[EntryKind::File, EntryKind::Directory]))
        );
    }

    #[test]
    fn test_apply_and_clear() {
        let mut predicate = FilterPredicate::default();
        predicate.apply(FilterValue::TypeEquals(Some(EntryKind::File)));
        predicate.apply(FilterValue::SizeLessThan(Some(4.0)));
        assert_eq!(predicate.type_equals, Some(EntryKind::File));
        assert!(!predicate.is_empty());

        predicate.apply(FilterValue::cleared(FilterKind::TypeEquals));
        predicate.apply(FilterValue::cleared(FilterKind::SizeLessThan));
        assert!(predicate.is_empty());
    }

    #[test]
    fn test_where_clause_converts_to_bytes() {
        let predicate = FilterPredicate {
            size_greater_than: Some(10.0),
            size_less_than: Some(0.5),
            ..Default::default()
        };
        let clause = predicate.to_where_clause();
        assert_eq!(clause.size_gt, Some(10240.0));
        assert_eq!(clause.size_lt, Some(512.0));
        assert_eq!(clause.type_eq, None);
        assert_eq!(clause.name_contains, None);
    }

    #[test]
    fn test_where_clause_drops_unusable_values() {
        let predicate = FilterPredicate {
            size_greater_than: Some(f64::NAN),
            size_less_than: Some(f64::INFINITY),
            type_equals: None,
            name_contains: Some(String::new()),
        };
        assert_eq!(predicate.to_where_clause(), WhereClause::default());
    }

    #[test]
    fn test_zero_is_a_real_bound() {
        let predicate = FilterPredicate {
            size_greater_than: Some(0.0),
            ..Default::default()
        };
        assert_eq!(predicate.to_where_clause().size_gt, Some(0.0));
    }
}
