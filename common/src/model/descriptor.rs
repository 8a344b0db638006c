//! Static configuration describing one entity type.
//!
//! A descriptor carries everything the generic panel needs to know about a
//! record type: where it lives on the API, which fields the form edits and
//! how each is coerced, which columns the table shows, and how the summary
//! tiles partition the collection.

use super::RecordId;

/// How a form input is coerced before it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Parsed as a signed integer.
    Integer,
    /// Parsed as a float.
    Float,
    /// Passed through as `YYYY-MM-DD`.
    Date,
    /// Passed through as an ISO datetime string.
    DateTime,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Values offered by the input.
    pub choices: &'static [&'static str],
    /// Whether values outside `choices` are accepted.
    pub free_text: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: true, choices: &[], free_text: true }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: false, choices: &[], free_text: true }
    }

    /// Restricts the field to a closed list.
    pub const fn with_choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = choices;
        self.free_text = false;
        self
    }

    /// Offers `choices` as suggestions; any other text is still accepted.
    pub const fn with_suggestions(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = choices;
        self.free_text = true;
        self
    }

    /// Options a closed list shows for `current`. A stored value outside the
    /// list is kept as the first option so editing does not hide it.
    pub fn options_for<'a>(&self, current: &'a str) -> Vec<&'a str> {
        let mut options: Vec<&'a str> = self.choices.to_vec();
        if !current.is_empty() && !self.choices.iter().any(|choice| *choice == current) {
            options.insert(0, current);
        }
        options
    }
}

/// Rendering applied to a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Plain,
    /// `YYYY-MM-DD HH:MM:SS`.
    Timestamp,
    /// Two decimal places.
    Fixed2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub field: &'static str,
    pub label: &'static str,
    pub format: CellFormat,
}

impl ColumnSpec {
    pub const fn plain(field: &'static str, label: &'static str) -> Self {
        Self { field, label, format: CellFormat::Plain }
    }

    pub const fn formatted(field: &'static str, label: &'static str, format: CellFormat) -> Self {
        Self { field, label, format }
    }
}

/// Which records a tile counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileMatch {
    /// Field equals the value exactly.
    Equals(&'static str),
    /// Field is present and none of the listed values.
    NoneOf(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSpec {
    pub label: &'static str,
    pub matches: TileMatch,
    /// CSS accent class for the count.
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakdownSpec {
    pub field: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummarySpec {
    pub heading: &'static str,
    pub total_label: &'static str,
    /// Field the tiles partition on; `None` means only the total is shown.
    pub field: Option<&'static str>,
    pub tiles: &'static [TileSpec],
    /// Full group-by counts, one list per field.
    pub breakdowns: &'static [BreakdownSpec],
}

/// Newest-first card strip keyed by a timestamp field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecentSpec {
    pub heading: &'static str,
    pub timestamp_field: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityDescriptor {
    /// Stable key, also used for CSS hooks and navigation.
    pub key: &'static str,
    pub title: &'static str,
    pub singular: &'static str,
    /// One-line description shown on the overview card.
    pub blurb: &'static str,
    pub id_field: &'static str,
    /// Collection endpoint with trailing slash; items live at `{collection}{id}`.
    pub collection_path: &'static str,
    /// Alternative endpoint used to list the collection (e.g. a joined view).
    pub list_override: Option<&'static str>,
    pub fields: &'static [FieldSpec],
    pub columns: &'static [ColumnSpec],
    pub summary: SummarySpec,
    pub recent: Option<RecentSpec>,
}

impl EntityDescriptor {
    pub fn list_path(&self) -> &'static str {
        self.list_override.unwrap_or(self.collection_path)
    }

    pub fn item_path(&self, id: RecordId) -> String {
        format!("{}{}", self.collection_path, id)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }
}
