pub mod catalog;
pub mod dto;
pub mod scoring;
pub mod search;
pub mod store;
pub mod wishlist;

/// dimensional analysis types
type Weight = i64;
type Score = i64;
type SubScore = i64;
type RelicId = u32;
type EffectId = u32;
type ItemId = u32;

// wish tier weights
const WEIGHT_REQUIRED: Weight = 100;
const WEIGHT_PREFERRED: Weight = 10;
const WEIGHT_NICE_TO_HAVE: Weight = 1;

// tiebreaker multipliers. a required tiebreaker must dominate any
// preferred tiebreaker regardless of counts, which holds only while
// every tier stays under TIER_CAPACITY entries. wish lists that
// overflow a tier are rejected at resolution.
const SUBRANK_REQUIRED: SubScore = 10_000;
const SUBRANK_PREFERRED: SubScore = 100;
const SUBRANK_NICE_TO_HAVE: SubScore = 1;
const TIER_CAPACITY: usize = 100;

/// reward for packing k wanted effects onto one relic: C * k * (k-1) / 2
const CONCENTRATION_BONUS: Score = 5;

// enumeration parameters
pub const DEFAULT_TOP_N: usize = 10;
pub const SINGLE_CANDIDATES: usize = 30;
pub const COMBINED_CANDIDATES: usize = 15;
pub const COLOR_CANDIDATES: usize = 50;
pub const MAX_PAIRS: usize = 500;

/// trait for random generation, mainly (strictly?) for testing
pub trait Arbitrary {
    fn random() -> Self;
}

/// vessel-counting progress line on the diagnostic stream.
/// consumers must tolerate loss, so never buffered.
pub fn progress(k: usize, n: usize) {
    eprintln!("PROGRESS:{}/{}", k, n);
}

/// initialize logging
pub fn init() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
