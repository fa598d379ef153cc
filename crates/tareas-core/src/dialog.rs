//! Modal dialog plumbing.
//!
//! Opening a dialog yields a [`DialogRef`], kept by the dialog component, and
//! an [`OnClose`], kept by whoever opened it. Closing sends at most one result
//! over a one-shot channel; closing without a result, or dropping the dialog,
//! delivers `None`.

use tokio::sync::oneshot;

/// Handle the dialog component uses to close itself.
#[derive(Debug)]
pub struct DialogRef<T> {
    header: String,
    sender: Option<oneshot::Sender<Option<T>>>,
}

/// Receiving end: resolves once the dialog closes.
#[derive(Debug)]
pub struct OnClose<T> {
    receiver: oneshot::Receiver<Option<T>>,
}

/// Open a dialog titled `header`.
pub fn open<T>(header: impl Into<String>) -> (DialogRef<T>, OnClose<T>) {
    let (sender, receiver) = oneshot::channel();
    (
        DialogRef {
            header: header.into(),
            sender: Some(sender),
        },
        OnClose { receiver },
    )
}

impl<T> DialogRef<T> {
    /// Title shown above the dialog.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Whether the dialog has not been closed yet.
    pub fn is_open(&self) -> bool {
        self.sender.is_some()
    }

    /// Close with an optional result. Only the first close is delivered.
    pub fn close(&mut self, result: Option<T>) {
        if let Some(sender) = self.sender.take() {
            // The opener may have stopped listening; nothing to do then.
            let _ = sender.send(result);
        }
    }
}

impl<T> OnClose<T> {
    /// Wait for the dialog to close.
    pub async fn result(self) -> Option<T> {
        self.receiver.await.ok().flatten()
    }

    /// The result if the dialog already closed, without waiting.
    ///
    /// `Err(self)` means the dialog is still open.
    pub fn try_result(mut self) -> Result<Option<T>, Self> {
        match self.receiver.try_recv() {
            Ok(result) => Ok(result),
            Err(oneshot::error::TryRecvError::Closed) => Ok(None),
            Err(oneshot::error::TryRecvError::Empty) => Err(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_close_with_result() {
        let (mut dialog, on_close) = open::<u32>("Tarea");
        assert!(dialog.is_open());
        assert_eq!(dialog.header(), "Tarea");

        dialog.close(Some(7));
        assert!(!dialog.is_open());
        assert_eq!(on_close.result().await, Some(7));
    }

    #[tokio::test]
    async fn test_only_first_close_counts() {
        let (mut dialog, on_close) = open::<u32>("Tarea");
        dialog.close(Some(1));
        dialog.close(None);
        assert_eq!(on_close.result().await, Some(1));
    }

    #[tokio::test]
    async fn test_dropped_dialog_yields_none() {
        let (dialog, on_close) = open::<u32>("Persona");
        drop(dialog);
        assert_eq!(on_close.result().await, None);
    }

    #[test]
    fn test_try_result_while_open() {
        let (mut dialog, on_close) = open::<u32>("Persona");
        let on_close = on_close.try_result().expect_err("still open");

        dialog.close(None);
        assert_eq!(on_close.try_result().ok(), Some(None));
    }
}
