//! Capability-scoped traits.
//!
//! Each ability is its own narrow trait and a species implements only the
//! ones it actually has.  There is no `fly` on a penguin that could fail at
//! runtime; code that needs flight takes `&dyn Flyable`, and a penguin simply
//! is not one:
//!
//! ```rust,compile_fail
//! use pb_catalog::birds::{Flyable, Penguin};
//!
//! fn launch(bird: &dyn Flyable) {
//!     bird.fly();
//! }
//!
//! launch(&Penguin);
//! ```

/// What every bird can do.
pub trait Bird: Send + Sync {
    fn species(&self) -> &'static str;
}

/// Birds that fly.
pub trait Flyable: Bird {
    /// Cruising altitude in metres.
    fn cruising_altitude_m(&self) -> u32;

    fn fly(&self) -> Movement {
        Movement::Flight { species: self.species(), altitude_m: self.cruising_altitude_m() }
    }
}

/// Birds that swim.
pub trait Swimmable: Bird {
    /// Typical dive depth in metres; 0 for surface swimmers.
    fn dive_depth_m(&self) -> u32;

    fn swim(&self) -> Movement {
        Movement::Swim { species: self.species(), depth_m: self.dive_depth_m() }
    }
}

/// Result of exercising a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Flight { species: &'static str, altitude_m: u32 },
    Swim   { species: &'static str, depth_m: u32 },
}

// ── Species ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct Sparrow;

impl Bird for Sparrow {
    fn species(&self) -> &'static str {
        "sparrow"
    }
}

impl Flyable for Sparrow {
    fn cruising_altitude_m(&self) -> u32 {
        40
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Penguin;

impl Bird for Penguin {
    fn species(&self) -> &'static str {
        "penguin"
    }
}

impl Swimmable for Penguin {
    fn dive_depth_m(&self) -> u32 {
        200
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Duck;

impl Bird for Duck {
    fn species(&self) -> &'static str {
        "duck"
    }
}

impl Flyable for Duck {
    fn cruising_altitude_m(&self) -> u32 {
        300
    }
}

impl Swimmable for Duck {
    fn dive_depth_m(&self) -> u32 {
        0
    }
}

// ── Flock operations ──────────────────────────────────────────────────────────

/// Fly every bird in `flock`, in order.
pub fn take_off(flock: &[&dyn Flyable]) -> Vec<Movement> {
    flock.iter().map(|bird| bird.fly()).collect()
}

/// Swim every bird in `flock`, in order.
pub fn dive(flock: &[&dyn Swimmable]) -> Vec<Movement> {
    flock.iter().map(|bird| bird.swim()).collect()
}
