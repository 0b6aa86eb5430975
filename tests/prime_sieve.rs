//! Prime-sieve cascade integration scenario.
//!
//! A worker bound
//! to a prime `id` forwards every value not divisible by `id` to a child
//! worker, spawning that child lazily on the first such value. A negative
//! sentinel is forwarded down the chain and causes every worker to join its
//! child, then terminate.

use confluence::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

const SENTINEL: i64 = -1;

fn spawn_worker(id: i64, rx: Receiver<i64>, spawned: Arc<Mutex<Vec<i64>>>) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut child: Option<(Sender<i64>, JoinHandle<()>)> = None;

        loop {
            let value = rx.recv();

            if value == SENTINEL {
                if let Some((child_tx, _)) = &child {
                    let _ = child_tx.send(SENTINEL);
                }
                break;
            }

            if value % id != 0 {
                match &child {
                    Some((child_tx, _)) => {
                        let _ = child_tx.send(value);
                    }
                    None => {
                        spawned.lock().unwrap().push(value);
                        let (child_tx, child_rx) = mpsc::unbounded();
                        let _ = child_tx.send(value);
                        let handle = spawn_worker(value, child_rx, spawned.clone());
                        child = Some((child_tx, handle));
                    }
                }
            }
        }

        if let Some((_, handle)) = child {
            handle.join().unwrap();
        }
    })
}

#[test]
fn cascade_spawns_exactly_the_primes_below_30() {
    let spawned = Arc::new(Mutex::new(vec![2]));
    let (tx, rx) = mpsc::unbounded::<i64>();
    let root = spawn_worker(2, rx, spawned.clone());

    for candidate in 3..30 {
        tx.send(candidate).unwrap();
    }
    tx.send(SENTINEL).unwrap();

    root.join().unwrap();

    let mut ids = spawned.lock().unwrap().clone();
    ids.sort_unstable();
    assert_eq!(ids, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
}
