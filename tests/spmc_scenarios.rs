//! End-to-end SPMC scenarios against the public API.

use confluence::spmc;
use std::collections::HashSet;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

/// Unbounded SPMC, one producer sending 0..4, one consumer reads them
/// in order.
#[test]
fn one_consumer_receives_in_fifo_order() {
    let (tx, rx) = spmc::unbounded::<i32>();
    let handle = thread::spawn(move || {
        for i in 0..5 {
            tx.send(i);
        }
    });

    let received: Vec<i32> = (0..5).map(|_| rx.recv().unwrap()).collect();
    handle.join().unwrap();

    assert_eq!(received, vec![0, 1, 2, 3, 4]);
}

/// Unbounded SPMC, five consumers each reading two values out of ten
/// sent; union of received values is {0..9}, each received exactly once.
#[test]
fn five_consumers_partition_ten_values() {
    let (tx, rx) = spmc::unbounded::<i32>();
    let seen = Mutex::new(Vec::new());

    thread::scope(|scope| {
        let handles: Vec<_> = (0..5)
            .map(|_| {
                let rx = rx.clone();
                let seen = &seen;
                scope.spawn(move || {
                    for _ in 0..2 {
                        let value = rx.recv().unwrap();
                        seen.lock().unwrap().push(value);
                    }
                })
            })
            .collect();

        for i in 0..10 {
            tx.send(i);
        }

        for handle in handles {
            handle.join().unwrap();
        }
    });

    let mut got = seen.into_inner().unwrap();
    got.sort();
    assert_eq!(got, (0..10).collect::<Vec<_>>());
    assert_eq!(got.iter().collect::<HashSet<_>>().len(), 10);
}

/// Once the sender is destroyed, recv fails with RecvError.
#[test]
fn recv_fails_after_sender_dropped() {
    let (tx, rx) = spmc::unbounded::<i32>();
    drop(tx);
    assert_eq!(rx.recv().unwrap_err(), spmc::RecvError);
}

/// A bounded channel with capacity n never holds more than n buffered
/// values, observed from outside by timing a blocked send.
#[test]
fn bounded_back_pressure_blocks_until_drained() {
    const CAPACITY: usize = 2;
    let (tx, rx) = spmc::bounded::<i32>(CAPACITY);
    tx.send(1);
    tx.send(2);

    let handle = thread::spawn(move || tx.send(3));

    thread::sleep(Duration::from_millis(30));
    assert!(!handle.is_finished(), "send should still be blocked, buffer is full");

    assert_eq!(rx.recv().unwrap(), 1);
    handle.join().unwrap();
    assert_eq!(rx.recv().unwrap(), 2);
    assert_eq!(rx.recv().unwrap(), 3);
}
