//! stat-lab: type your own numbers and learn what descriptive statistics
//! say about them.

pub mod facade;
