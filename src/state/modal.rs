//! Modal dialog state for the UI.

use crate::state::types::SelectedOperation;

/// Modal dialog drawn over the screen; owns keyboard input while open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    /// No modal is open.
    #[default]
    None,
    /// Informational alert with a non-interactive message.
    Alert {
        /// Message shown in the alert body.
        message: String,
    },
    /// Confirmation of the pending install/uninstall set.
    ConfirmOperations {
        /// Operations in catalog order, as handed to the executor on confirm.
        operations: Vec<SelectedOperation>,
        /// Administrator-privileges message for the operation set.
        message: String,
    },
    /// Key binding overview.
    Help,
}

impl Modal {
    /// Whether a modal is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::Operation;

    #[test]
    /// What: Default modal is closed and every other variant reports open.
    ///
    /// Inputs:
    /// - Each variant constructed directly.
    ///
    /// Output:
    /// - `is_open()` false only for `Modal::None`.
    fn modal_open_state() {
        assert!(!Modal::default().is_open());
        assert!(Modal::Help.is_open());
        assert!(
            Modal::Alert {
                message: "hi".into()
            }
            .is_open()
        );
        let confirm = Modal::ConfirmOperations {
            operations: vec![SelectedOperation {
                key: "jq".into(),
                operation: Operation::Install,
                name: "jq".into(),
            }],
            message: String::new(),
        };
        assert!(confirm.is_open());
    }
}
