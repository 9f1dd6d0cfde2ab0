use lazy_static::lazy_static;
use metrics::{counter, Counter};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub registry_creations: Counter,

    // Number of values rewritten by the normalizer (untouched values are not counted)
    pub normalizations: Counter,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            registry_creations: counter!("registry.creations"),
            normalizations: counter!("business_id.normalizations"),
        }
    }
}
