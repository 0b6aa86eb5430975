use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

/// FIFO with a fixed positive capacity. `push` blocks while the queue is
/// full; `pop` blocks while it is empty. Exactly one waiter is woken per
/// state change to avoid a thundering herd; both sides re-check their
/// predicate on wake.
pub struct BoundedBuffer<T> {
    queue: Mutex<VecDeque<T>>,
    capacity: usize,
    not_empty: Condvar,
    not_full: Condvar,
}

impl<T> BoundedBuffer<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
        }
    }

    pub(crate) fn push(&self, value: T) {
        let mut queue = self.queue.lock().unwrap();
        while queue.len() == self.capacity {
            tracing::trace!(capacity = self.capacity, "bounded buffer full, sender waiting");
            queue = self.not_full.wait(queue).unwrap();
        }
        queue.push_back(value);
        drop(queue);
        self.not_empty.notify_one();
    }

    pub(crate) fn pop(&self) -> T {
        let mut queue = self.queue.lock().unwrap();
        while queue.is_empty() {
            tracing::trace!("bounded buffer empty, receiver waiting");
            queue = self.not_empty.wait(queue).unwrap();
        }
        let value = queue.pop_front().expect("queue was just shown non-empty");
        drop(queue);
        self.not_full.notify_one();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn never_holds_more_than_capacity() {
        const N: usize = 3;
        let buf = Arc::new(BoundedBuffer::new(N));

        for i in 0..N {
            buf.push(i);
        }

        let buf2 = buf.clone();
        let handle = thread::spawn(move || {
            // Would block forever if back-pressure didn't hold; pop one
            // first to unblock it, then this push should succeed quickly.
            buf2.push(N);
        });

        thread::sleep(Duration::from_millis(20));
        assert_eq!(buf.pop(), 0);
        handle.join().unwrap();

        let mut remaining = Vec::new();
        for _ in 0..N {
            remaining.push(buf.pop());
        }
        assert_eq!(remaining, vec![1, 2, N]);
    }

    #[test]
    fn fifo_order() {
        let buf = BoundedBuffer::new(4);
        for i in 0..4 {
            buf.push(i);
        }
        for i in 0..4 {
            assert_eq!(buf.pop(), i);
        }
    }
}
