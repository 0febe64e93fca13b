//! State machine shared by every create/edit dialog.
//!
//! ```text
//! Closed --open--> Editing --begin_submit--> Submitting --finish(Ok)--> Closed
//!                     ^                          |
//!                     |                      finish(Err)
//!                     +--------edit---------- Error
//! ```

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::system::auth::context::ErrorReporter;

#[derive(Debug, Clone, PartialEq)]
pub enum DialogState<T> {
    Closed,
    Editing(T),
    Submitting(T),
    Error { draft: T, message: String },
}

impl<T> Default for DialogState<T> {
    fn default() -> Self {
        DialogState::Closed
    }
}

impl<T: Clone> DialogState<T> {
    /// Opens the dialog with a draft. Ignored while a submit is in flight.
    pub fn open(&mut self, draft: T) {
        if !self.is_submitting() {
            *self = DialogState::Editing(draft);
        }
    }

    /// Edits the draft; leaving the error state clears the message.
    pub fn edit(&mut self, f: impl FnOnce(&mut T)) {
        let next = match std::mem::take(self) {
            DialogState::Editing(mut draft) | DialogState::Error { mut draft, .. } => {
                f(&mut draft);
                DialogState::Editing(draft)
            }
            other => other,
        };
        *self = next;
    }

    /// Moves to `Submitting` and hands out the draft. `None` when not editable, which also
    /// guards against double submission.
    pub fn begin_submit(&mut self) -> Option<T> {
        let draft = match self {
            DialogState::Editing(draft) | DialogState::Error { draft, .. } => draft.clone(),
            _ => return None,
        };
        *self = DialogState::Submitting(draft.clone());
        Some(draft)
    }

    /// Client-side rejection before anything was sent.
    pub fn reject(&mut self, message: impl Into<String>) {
        let next = match std::mem::take(self) {
            DialogState::Editing(draft)
            | DialogState::Submitting(draft)
            | DialogState::Error { draft, .. } => DialogState::Error {
                draft,
                message: message.into(),
            },
            DialogState::Closed => DialogState::Closed,
        };
        *self = next;
    }

    /// Result of the backend call started by [`begin_submit`](Self::begin_submit).
    pub fn finish(&mut self, result: Result<(), String>) {
        if !self.is_submitting() {
            return;
        }
        match result {
            Ok(()) => *self = DialogState::Closed,
            Err(message) => self.reject(message),
        }
    }

    /// Closes unless a submit is in flight; returns whether the dialog is now closed.
    pub fn close(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = DialogState::Closed;
        true
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, DialogState::Submitting(_))
    }

    pub fn draft(&self) -> Option<&T> {
        match self {
            DialogState::Closed => None,
            DialogState::Editing(draft)
            | DialogState::Submitting(draft)
            | DialogState::Error { draft, .. } => Some(draft),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DialogState::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Validates and sends the dialog draft; success closes the dialog and runs `on_success`.
///
/// A failed call puts the dialog in `Error` and is also reported as a notification.
pub fn submit_dialog<T, V, S, Fut, D>(
    dialog: RwSignal<DialogState<T>>,
    reporter: ErrorReporter,
    context: &'static str,
    validate: V,
    send: S,
    on_success: D,
) where
    T: Clone + Send + Sync + 'static,
    V: FnOnce(&T) -> Result<(), String>,
    S: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
    D: FnOnce() + 'static,
{
    let Some(draft) = dialog.try_update(DialogState::begin_submit).flatten() else {
        return;
    };
    if let Err(message) = validate(&draft) {
        dialog.update(|d| d.reject(message));
        return;
    }
    let pending = send(draft);
    spawn_local(async move {
        match pending.await {
            Ok(()) => {
                dialog.update(|d| d.finish(Ok(())));
                on_success();
            }
            Err(err) => {
                dialog.update(|d| d.finish(Err(err.to_string())));
                reporter.report(context, err);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut dialog = DialogState::default();
        assert!(!dialog.is_open());

        dialog.open(String::from("Kursi"));
        dialog.edit(|d| d.push_str(" Lipat"));
        assert_eq!(dialog.draft().map(String::as_str), Some("Kursi Lipat"));

        assert_eq!(dialog.begin_submit().as_deref(), Some("Kursi Lipat"));
        assert!(dialog.is_submitting());
        assert_eq!(dialog.begin_submit(), None);
        assert!(!dialog.close());

        dialog.finish(Ok(()));
        assert_eq!(dialog, DialogState::Closed);
    }

    #[test]
    fn test_failure_keeps_draft_and_allows_retry() {
        let mut dialog = DialogState::default();
        dialog.open(3_u32);
        dialog.begin_submit();
        dialog.finish(Err("Gagal Menyimpan Data".into()));
        assert_eq!(dialog.error(), Some("Gagal Menyimpan Data"));
        assert_eq!(dialog.draft(), Some(&3));

        dialog.edit(|d| *d += 1);
        assert_eq!(dialog.error(), None);
        assert_eq!(dialog.begin_submit(), Some(4));
    }

    #[test]
    fn test_validation_rejection_and_close() {
        let mut dialog = DialogState::default();
        dialog.open(1_u8);
        dialog.reject("Nama tidak boleh kosong");
        assert!(dialog.is_open());
        assert!(dialog.close());
        assert!(!dialog.is_open());

        // Closed dialogs ignore edits and late results.
        dialog.edit(|d| *d = 9);
        dialog.finish(Ok(()));
        assert_eq!(dialog, DialogState::Closed);
    }
}
