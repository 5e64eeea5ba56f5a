use crate::error::PageError;

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

/// Label state of a copy button.
///
/// The button starts with whatever text the markup gave it. A successful copy
/// shows [`COPIED_LABEL`]; the revert always lands on [`COPY_LABEL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyFeedback {
    Initial(String),
    Copied,
    Reverted,
}

impl CopyFeedback {
    pub fn new(initial: impl Into<String>) -> Self {
        Self::Initial(initial.into())
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Initial(text) => text,
            Self::Copied => COPIED_LABEL,
            Self::Reverted => COPY_LABEL,
        }
    }

    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied)
    }

    pub fn copied(&mut self) {
        *self = Self::Copied;
    }

    /// Applies the outcome of a clipboard write and hands a failure back to the caller.
    pub fn settle(&mut self, outcome: Result<(), PageError>) -> Result<(), PageError> {
        if outcome.is_ok() {
            self.copied();
        }
        outcome
    }

    /// Fired by the revert timer. A failed copy never reaches [`Self::copied`],
    /// so the label it left behind stays as is.
    pub fn revert(&mut self) {
        if self.is_copied() {
            *self = Self::Reverted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_then_revert() {
        for initial in ["Copy", "npm install tool-site", "", "Copied!"] {
            let mut feedback = CopyFeedback::new(initial);
            assert_eq!(feedback.label(), initial);

            feedback.copied();
            assert_eq!(feedback.label(), "Copied!");
            assert!(feedback.is_copied());

            feedback.revert();
            assert_eq!(feedback.label(), "Copy");
            assert!(!feedback.is_copied());
        }
    }

    #[test]
    fn test_failed_copy_leaves_label() {
        let mut feedback = CopyFeedback::new("cargo add tool-site");
        feedback.revert();
        assert_eq!(feedback.label(), "cargo add tool-site");
    }

    #[test]
    fn test_rejected_write_is_returned() {
        let mut feedback = CopyFeedback::new("Copy install command");
        let outcome = feedback.settle(Err(PageError::Js("NotAllowedError".to_string())));
        assert_eq!(outcome, Err(PageError::Js("NotAllowedError".to_string())));
        assert_eq!(feedback.label(), "Copy install command");
        assert!(!feedback.is_copied());

        assert_eq!(feedback.settle(Ok(())), Ok(()));
        assert_eq!(feedback.label(), COPIED_LABEL);
    }
}
