//! Small rendering helpers shared by the panel view and its dialogs.

use common::model::descriptor::FieldKind;
use num_format::{Locale, ToFormattedString};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub use crate::components::toast::show_toast;

/// HTML input type for a field kind.
pub fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Integer | FieldKind::Float => "number",
        FieldKind::Date => "date",
        FieldKind::DateTime => "datetime-local",
    }
}

/// `step` attribute so that float inputs accept decimals.
pub fn input_step(kind: FieldKind) -> Option<&'static str> {
    match kind {
        FieldKind::Integer => Some("1"),
        FieldKind::Float => Some("any"),
        _ => None,
    }
}

pub fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn select_value(e: Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Thousands-separated count for summary tiles.
pub fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en)
}
