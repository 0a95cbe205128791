use log::error;
use tokio::task::JoinHandle;

/// Handle to an intent started on a [`crate::UserStore`].
///
/// Dropping it does not cancel anything; the intent keeps running and its
/// result is applied if no newer intent has started by then.
#[derive(Debug)]
pub struct PendingIntent {
    generation: u64,
    handle: JoinHandle<()>,
}

impl PendingIntent {
    pub(crate) fn new(generation: u64, handle: JoinHandle<()>) -> Self {
        Self { generation, handle }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wait until the intent has finished and its result was applied or
    /// discarded.
    pub async fn settled(self) {
        if let Err(e) = self.handle.await {
            error!("Intent {} did not complete: {e}", self.generation);
        }
    }
}
