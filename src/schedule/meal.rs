use std::fmt::{self, Display, Formatter};

use chrono::NaiveTime;

/// Closed serving window, both ends inclusive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ServingInterval {
    start: NaiveTime,
    end: NaiveTime,
}

impl ServingInterval {
    /// # Panics
    /// if `start` is after `end`; meal windows never cross midnight.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        assert!(start <= end, "serving interval should not end before it starts");
        Self { start, end }
    }

    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    /// true while the meal is being served
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }

    /// true if the meal has not started yet
    pub fn starts_after(&self, time: NaiveTime) -> bool {
        time < self.start
    }
}

impl Display for ServingInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MealDefinition {
    name: String,
    id: u32, // sent to the menu endpoint as `meal`
    interval: ServingInterval,
}

impl MealDefinition {
    pub fn new(name: impl Into<String>, id: u32, interval: ServingInterval) -> Self {
        Self {
            name: name.into(),
            id,
            interval,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn id(&self) -> u32 {
        self.id
    }

    pub const fn interval(&self) -> &ServingInterval {
        &self.interval
    }
}

impl Display for MealDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.interval)
    }
}
