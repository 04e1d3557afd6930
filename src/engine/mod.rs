// 10.0: the engine. applies feed messages to the book, computes signals,
// runs the risk pass then the entry pass, exactly one full cycle per
// delivered event. deterministic and single-writer with no internal locking.

mod core;
mod entry;
mod risk;

pub use core::Engine;
