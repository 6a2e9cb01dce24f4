use std::sync::Arc;
use tokio::sync::watch;

/// Close signal for the dialog hosting a form.
#[derive(Clone, Debug)]
pub struct DialogHandle {
    open: Arc<watch::Sender<bool>>,
}

impl Default for DialogHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogHandle {
    pub fn new() -> Self {
        let (open, _) = watch::channel(true);
        Self {
            open: Arc::new(open),
        }
    }

    pub fn close(&self) {
        self.open.send_replace(false);
    }

    pub fn is_open(&self) -> bool {
        *self.open.borrow()
    }

    /// Resolves once the dialog has been closed.
    pub async fn closed(&self) {
        let mut rx = self.open.subscribe();
        // The sender lives in `self`, so the channel can't close under us.
        let _ = rx.wait_for(|open| !*open).await;
    }
}
