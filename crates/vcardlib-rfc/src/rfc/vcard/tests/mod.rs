//! vCard round-trip tests.

mod fixtures;
