//! Strongly typed identifiers for every entity the engine touches.
//!
//! Each id is a plain `i64` newtype; JSON and TypeScript see the bare number.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
        )]
        #[ts(export)]
        pub struct $name(pub i64);

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// A learner.
    UserId
);
define_id!(
    /// A single lesson in the curriculum.
    LessonId
);
define_id!(
    /// A skill groups lessons and belongs to one cuisine.
    SkillId
);
define_id!(
    /// Top of the curriculum hierarchy.
    CuisineId
);
define_id!(
    /// An achievement definition.
    AchievementId
);
