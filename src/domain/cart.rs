//! Shared cart counter.
//!
//! The cart total is the only piece of mutable state shared across requests
//! besides the metrics registry. It is a single non-negative integer behind a
//! reader/writer lock: `increase`/`decrease` take the write side, `total`
//! takes the read side. Every mutation mirrors the new value into the cart
//! gauge while the write guard is still held, so a scrape can never observe
//! a gauge value the counter did not hold.

use super::MetricsPtr;
use std::sync::{Arc, PoisonError, RwLock};

/// Process-wide cart total guarded by a reader/writer lock.
pub struct Cart {
    total: RwLock<u64>,
    metrics: MetricsPtr,
}

impl Cart {
    // ---

    /// Creates an empty cart and publishes the initial total (0) to the gauge.
    pub fn new(metrics: MetricsPtr) -> Self {
        // ---
        metrics.set_cart_total(0);
        Cart {
            total: RwLock::new(0),
            metrics,
        }
    }

    /// Adds one item and returns the new total.
    pub fn increase(&self) -> u64 {
        // ---
        let mut total = self.total.write().unwrap_or_else(PoisonError::into_inner);
        *total += 1;
        self.metrics.set_cart_total(*total);
        *total
    }

    /// Removes one item and returns the new total.
    ///
    /// Saturates at zero: decreasing an empty cart is a silent no-op and the
    /// caller sees the same response shape either way.
    pub fn decrease(&self) -> u64 {
        // ---
        let mut total = self.total.write().unwrap_or_else(PoisonError::into_inner);
        *total = total.saturating_sub(1);
        self.metrics.set_cart_total(*total);
        *total
    }

    /// Returns a copy of the current total.
    pub fn total(&self) -> u64 {
        // ---
        *self.total.read().unwrap_or_else(PoisonError::into_inner)
    }
}

pub type CartPtr = Arc<Cart>;

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::domain::Metrics;
    use axum::http::StatusCode;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::thread;
    use std::time::Duration;

    /// Captures the last gauge value so tests can compare it with the cart.
    #[derive(Default)]
    struct GaugeRecorder {
        gauge: AtomicU64,
        sets: AtomicU64,
    }

    impl Metrics for GaugeRecorder {
        // ---
        fn render(&self) -> String {
            String::new()
        }
        fn record_http_request(&self, _: &str, _: StatusCode, _: Duration) {}
        fn set_cart_total(&self, total: u64) {
            self.gauge.store(total, Ordering::SeqCst);
            self.sets.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn cart_with_recorder() -> (Cart, Arc<GaugeRecorder>) {
        // ---
        let recorder = Arc::new(GaugeRecorder::default());
        let cart = Cart::new(recorder.clone());
        (cart, recorder)
    }

    #[test]
    fn new_cart_starts_empty_and_publishes_zero() {
        // ---
        let (cart, recorder) = cart_with_recorder();
        assert_eq!(cart.total(), 0);
        assert_eq!(recorder.gauge.load(Ordering::SeqCst), 0);
        assert_eq!(recorder.sets.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn three_increases_then_one_decrease_leaves_two() {
        // ---
        let (cart, recorder) = cart_with_recorder();
        assert_eq!(cart.increase(), 1);
        assert_eq!(cart.increase(), 2);
        assert_eq!(cart.increase(), 3);
        assert_eq!(cart.decrease(), 2);

        assert_eq!(cart.total(), 2);
        assert_eq!(recorder.gauge.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn decrease_on_empty_cart_saturates_at_zero() {
        // ---
        let (cart, recorder) = cart_with_recorder();
        assert_eq!(cart.decrease(), 0);
        assert_eq!(cart.decrease(), 0);
        assert_eq!(cart.total(), 0);

        // Still mirrored, even though the value did not change
        assert_eq!(recorder.gauge.load(Ordering::SeqCst), 0);
        assert_eq!(recorder.sets.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn concurrent_increases_are_never_lost() {
        // ---
        let (cart, recorder) = cart_with_recorder();
        let cart = Arc::new(cart);
        let threads = 16;
        let per_thread = 500;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let cart = Arc::clone(&cart);
                thread::spawn(move || {
                    for _ in 0..per_thread {
                        cart.increase();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let expected = (threads * per_thread) as u64;
        assert_eq!(cart.total(), expected);
        assert_eq!(recorder.gauge.load(Ordering::SeqCst), expected);
    }

    #[test]
    fn concurrent_mixed_mutations_balance_out() {
        // ---
        let (cart, recorder) = cart_with_recorder();
        let cart = Arc::new(cart);

        // Pre-fill so no decrease can hit the zero floor
        for _ in 0..4_000 {
            cart.increase();
        }

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cart = Arc::clone(&cart);
                thread::spawn(move || {
                    for _ in 0..500 {
                        if i % 2 == 0 {
                            cart.increase();
                        } else {
                            cart.decrease();
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cart.total(), 4_000);
        assert_eq!(recorder.gauge.load(Ordering::SeqCst), 4_000);
    }

    #[test]
    fn readers_only_observe_values_the_counter_held() {
        // ---
        let (cart, _recorder) = cart_with_recorder();
        let cart = Arc::new(cart);
        let writes = 2_000u64;

        let writer = {
            let cart = Arc::clone(&cart);
            thread::spawn(move || {
                for _ in 0..writes {
                    cart.increase();
                }
            })
        };

        // With only increases in flight the write trace is 0, 1, 2, ...
        // so every read must be in range and never go backwards.
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let cart = Arc::clone(&cart);
                thread::spawn(move || {
                    let mut last = 0;
                    for _ in 0..writes {
                        let seen = cart.total();
                        assert!(seen >= last, "read went backwards: {seen} < {last}");
                        assert!(seen <= writes, "read beyond any written value: {seen}");
                        last = seen;
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }

        assert_eq!(cart.total(), writes);
    }
}
