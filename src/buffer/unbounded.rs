use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

/// FIFO with no capacity limit. `push` never blocks; `pop` blocks while
/// the queue is empty.
pub struct UnboundedBuffer<T> {
    queue: Mutex<VecDeque<T>>,
    not_empty: Condvar,
}

impl<T> UnboundedBuffer<T> {
    pub(crate) fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            not_empty: Condvar::new(),
        }
    }

    pub(crate) fn push(&self, value: T) {
        let mut queue = self.queue.lock().unwrap();
        queue.push_back(value);
        drop(queue);
        tracing::trace!("unbounded buffer: pushed, notifying one waiter");
        self.not_empty.notify_one();
    }

    pub(crate) fn pop(&self) -> T {
        let mut queue = self.queue.lock().unwrap();
        while queue.is_empty() {
            tracing::trace!("unbounded buffer empty, receiver waiting");
            queue = self.not_empty.wait(queue).unwrap();
        }
        queue.pop_front().expect("queue was just shown non-empty")
    }
}
