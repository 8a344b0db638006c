//! Two-step gate in front of destructive mutations.

use crate::model::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteConfirm {
    #[default]
    Hidden,
    Armed(RecordId),
}

impl DeleteConfirm {
    pub fn arm(&mut self, id: RecordId) {
        *self = DeleteConfirm::Armed(id);
    }

    /// Discards the target without side effects.
    pub fn cancel(&mut self) {
        *self = DeleteConfirm::Hidden;
    }

    /// Returns the armed target and hides the dialog.
    pub fn take(&mut self) -> Option<RecordId> {
        match std::mem::take(self) {
            DeleteConfirm::Armed(id) => Some(id),
            DeleteConfirm::Hidden => None,
        }
    }

    pub fn target(&self) -> Option<RecordId> {
        match self {
            DeleteConfirm::Armed(id) => Some(*id),
            DeleteConfirm::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_returns_the_target_once() {
        let mut confirm = DeleteConfirm::default();
        assert_eq!(confirm.take(), None);

        confirm.arm(5);
        assert_eq!(confirm.target(), Some(5));
        assert_eq!(confirm.take(), Some(5));
        assert_eq!(confirm, DeleteConfirm::Hidden);
        assert_eq!(confirm.take(), None);
    }

    #[test]
    fn cancel_discards_the_target() {
        let mut confirm = DeleteConfirm::default();
        confirm.arm(9);
        confirm.cancel();
        assert_eq!(confirm.target(), None);
    }
}
