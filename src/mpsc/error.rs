/// The receiver has been dropped; `value` is handed back so the caller
/// doesn't lose it.
///
/// This is the only error an MPSC [`Sender`](super::Sender) can produce, and
/// it is terminal: once observed, every later `send` on any clone of that
/// sender fails the same way.
#[derive(thiserror::Error)]
#[error("sending on an mpsc channel whose receiver has been dropped")]
pub struct SendError<T>(pub T);

impl<T> std::fmt::Debug for SendError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SendError").field(&"..").finish()
    }
}

impl<T> SendError<T> {
    /// Consumes the error, returning the value that failed to send.
    pub fn into_inner(self) -> T {
        self.0
    }
}
