//! I provide the generation of fresh blank node labels.
//!
//! [`fresh_label`] is process-wide,
//! while a [`BnodeGenerator`] is meant to be owned by a single session
//! (e.g. a reader or a writer) so that independent sessions never share a counter.

use super::Term;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static LAST_TICK: AtomicU64 = AtomicU64::new(0);

/// Generate a blank node label that is unique in this process.
///
/// The label has the form `g<16 digits><3 digits>`:
/// a strictly increasing microsecond timestamp followed by a random suffix.
/// Since two calls never get the same timestamp, labels never collide.
pub fn fresh_label() -> String {
    let suffix: u16 = rand::rng().random_range(0..1000);
    format!("g{:016}{:03}", next_tick() % 10_000_000_000_000_000, suffix)
}

/// Current time in microseconds, bumped if needed to be greater than the last returned value.
fn next_tick() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or_default();
    let mut last = LAST_TICK.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_TICK.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

/// A sequential generator of blank nodes, with its own prefix and counter.
#[derive(Clone, Debug)]
pub struct BnodeGenerator {
    prefix: String,
    counter: usize,
}

impl BnodeGenerator {
    /// Build a generator whose prefix is a [fresh label](fresh_label),
    /// so that its labels do not collide with those of any other generator in this process.
    pub fn new() -> Self {
        Self::with_prefix(format!("{}n", fresh_label()))
    }

    /// Build a generator producing `<prefix>1`, `<prefix>2`, ...
    pub fn with_prefix<T: Into<String>>(prefix: T) -> Self {
        BnodeGenerator {
            prefix: prefix.into(),
            counter: 0,
        }
    }

    /// Produce the next label.
    pub fn next_label(&mut self) -> String {
        self.counter += 1;
        format!("{}{}", self.prefix, self.counter)
    }

    /// Produce the next blank node.
    pub fn fresh(&mut self) -> Term {
        Term::BlankNode {
            label: self.next_label(),
        }
    }

    /// How many labels this generator has produced.
    pub fn count(&self) -> usize {
        self.counter
    }
}

impl Default for BnodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn label_format() {
        let label = fresh_label();
        assert_eq!(label.len(), 20);
        assert!(label.starts_with('g'));
        assert!(label[1..].bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn global_labels_are_unique() {
        let labels: HashSet<String> = (0..10_000).map(|_| fresh_label()).collect();
        assert_eq!(labels.len(), 10_000);
    }

    #[test]
    fn sequential() {
        let mut gen = BnodeGenerator::with_prefix("b");
        assert_eq!(gen.next_label(), "b1");
        assert_eq!(gen.fresh(), Term::blank_node("b2"));
        assert_eq!(gen.count(), 2);
    }

    #[test]
    fn independent_generators_do_not_collide() {
        let mut g1 = BnodeGenerator::new();
        let mut g2 = BnodeGenerator::new();
        let labels: HashSet<String> = (0..100)
            .flat_map(|_| [g1.next_label(), g2.next_label()])
            .collect();
        assert_eq!(labels.len(), 200);
    }
}
