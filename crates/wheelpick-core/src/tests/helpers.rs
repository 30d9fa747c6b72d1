//! Test helper functions for building option sets and sessions.

use crate::config::SpinConfig;
use crate::option_set::OptionSet;
use crate::planner::SpinPlan;
use crate::session::{SpinOutcome, SpinSession};

/// The four-option menu used by the worked examples.
pub const FOOD: [&str; 4] = ["Pizza", "Sushi", "Burger", "Pasta"];

/// Builds an option set of `count` distinct generated labels.
pub fn options_of(count: usize) -> OptionSet {
    let mut set = OptionSet::new();
    for i in 0..count {
        set.add(&format!("option-{i}"))
            .expect("generated labels are unique");
    }
    set
}

/// Creates a seeded session with the default config.
pub fn seeded_session(seed: u64) -> SpinSession {
    SpinSession::with_seed(SpinConfig::default(), seed).expect("default config is valid")
}

/// Creates a seeded session holding [`FOOD`].
pub fn food_session(seed: u64) -> SpinSession {
    let mut session = seeded_session(seed);
    for label in FOOD {
        session.add_option(label).expect("food labels are unique");
    }
    session
}

/// Creates a seeded session holding `count` generated options.
pub fn session_with(count: usize, seed: u64) -> SpinSession {
    let mut session = seeded_session(seed);
    for i in 0..count {
        session
            .add_option(&format!("option-{i}"))
            .expect("generated labels are unique");
    }
    session
}

/// Runs one full spin: request, then signal the animation finished.
pub fn spin_and_settle(session: &mut SpinSession) -> (SpinPlan, SpinOutcome) {
    let plan = session.request_spin().expect("spin should start");
    let outcome = session
        .notify_spin_animation_complete()
        .expect("spin should settle");
    (plan, outcome)
}
