//! Prime-sieve cascade demo, built purely on top of the public `mpsc` API.
//!
//! A worker bound to prime `id` forwards every value it receives that isn't
//! divisible by `id` to a child worker, spawning that child the first time
//! such a value arrives, bound to that value. A negative sentinel shuts the
//! whole cascade down.
//!
//! Run with: cargo run --bin prime_sieve -- 10000

use confluence::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

const SENTINEL: i64 = -1;

fn spawn_worker(id: i64, rx: Receiver<i64>, primes: Arc<Mutex<Vec<i64>>>) -> JoinHandle<()> {
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
                        tracing::debug!(prime = value, bound_to = id, "spawning cascade worker");
                        primes.lock().unwrap().push(value);
                        let (child_tx, child_rx) = mpsc::unbounded();
                        let _ = child_tx.send(value);
                        let handle = spawn_worker(value, child_rx, primes.clone());
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

fn main() {
    tracing_subscriber::fmt::init();

    let limit: i64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1_000);

    let primes = Arc::new(Mutex::new(vec![2]));
    let (tx, rx) = mpsc::unbounded::<i64>();
    let root = spawn_worker(2, rx, primes.clone());

    for candidate in 3..limit {
        tx.send(candidate).unwrap();
    }
    tx.send(SENTINEL).unwrap();

    root.join().unwrap();

    let mut found = primes.lock().unwrap().clone();
    found.sort_unstable();
    println!("primes below {limit}: {} found", found.len());
    println!("{found:?}");
}
