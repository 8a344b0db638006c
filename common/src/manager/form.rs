//! Open/closed state of the create/edit modal and the draft it edits.

use crate::draft::Draft;
use crate::model::descriptor::EntityDescriptor;

#[derive(Debug, Clone, PartialEq)]
pub struct FormModal {
    pub open: bool,
    pub draft: Draft,
    /// Bumped every time the modal opens or closes.
    session: u64,
}

impl FormModal {
    pub fn closed(descriptor: &'static EntityDescriptor) -> Self {
        Self { open: false, draft: Draft::empty(descriptor), session: 0 }
    }

    pub fn show(&mut self, draft: Draft) {
        self.draft = draft;
        self.open = true;
        self.session += 1;
    }

    /// Closing always discards the draft, back to the empty template.
    pub fn close(&mut self, descriptor: &'static EntityDescriptor) {
        self.open = false;
        self.draft = Draft::empty(descriptor);
        self.session += 1;
    }

    /// Identifies the draft currently on screen.
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Whether `session` is still the open modal.
    pub fn shows(&self, session: u64) -> bool {
        self.open && self.session == session
    }

    pub fn is_editing(&self) -> bool {
        !self.draft.is_new()
    }

    pub fn title(&self, descriptor: &EntityDescriptor) -> String {
        if self.is_editing() {
            format!("Edit {}", descriptor.singular)
        } else {
            format!("Add New {}", descriptor.singular)
        }
    }

    pub fn submit_label(&self, submitting: bool) -> &'static str {
        match (self.is_editing(), submitting) {
            (true, true) => "Updating...",
            (true, false) => "Update",
            (false, true) => "Adding...",
            (false, false) => "Add",
        }
    }
}
