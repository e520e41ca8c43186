//! Transient effects on a logical clock.
//!
//! Every effect is an entry with a birth and an expiry time (milliseconds, same
//! timebase as `performance.now()`). Lists only ever hold entries that are still
//! on screen: callers run [`EffectList::expire`] with the current time before
//! reading. Nothing is cancelled or coalesced; overlapping triggers simply
//! produce overlapping entries.

use crate::stroke::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Expiring<T> {
    pub id: EffectId,
    pub born_ms: f64,
    pub expires_ms: f64,
    pub item: T,
}

impl<T> Expiring<T> {
    /// Milliseconds since the entry appeared (never negative).
    pub fn age(&self, now_ms: f64) -> f64 {
        (now_ms - self.born_ms).max(0.0)
    }
}

#[derive(Clone, Debug)]
pub struct EffectList<T> {
    entries: Vec<Expiring<T>>,
}

impl<T> Default for EffectList<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> EffectList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: EffectId, born_ms: f64, expires_ms: f64, item: T) {
        self.entries.push(Expiring { id, born_ms, expires_ms, item });
    }

    /// Drop entries whose expiry is at or before `now_ms`. Returns how many went.
    pub fn expire(&mut self, now_ms: f64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.expires_ms > now_ms);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expiring<T>> {
        self.entries.iter()
    }

    /// Most recently added entry, if any.
    pub fn latest(&self) -> Option<&Expiring<T>> {
        self.entries.last()
    }
}

/// An effect that becomes visible later (staggered or delayed spawns).
#[derive(Clone, Debug, PartialEq)]
pub struct Pending<T> {
    pub due_ms: f64,
    pub expires_ms: f64,
    pub effect: T,
}

/// Time-ordered queue of [`Pending`] effects.
#[derive(Clone, Debug)]
pub struct Schedule<T> {
    queue: Vec<Pending<T>>,
}

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self { queue: Vec::new() }
    }
}

impl<T> Schedule<T> {
    pub fn at(&mut self, due_ms: f64, expires_ms: f64, effect: T) {
        self.queue.push(Pending { due_ms, expires_ms, effect });
    }

    /// Remove and return everything due at or before `now_ms`, earliest first.
    pub fn take_due(&mut self, now_ms: f64) -> Vec<Pending<T>> {
        let (mut due, later): (Vec<_>, Vec<_>) =
            self.queue.drain(..).partition(|p| p.due_ms <= now_ms);
        self.queue = later;
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms));
        due
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

// --- Effect items -------------------------------------------------------------

/// One falling celebration star.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub start_y: f64,
    pub rotation_deg: f64,
    pub color: &'static str,
    pub delay_ms: f64,
}

/// Where a star is drawn at a given moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarPose {
    pub at: Point,
    pub rotation_deg: f64,
    pub scale: f64,
}

impl Star {
    /// Pose `age_ms` after the celebration began; `None` while still delayed.
    /// The fall ends at `floor_y` and the star then rests there until expiry.
    pub fn pose(&self, age_ms: f64, fall_ms: f64, floor_y: f64) -> Option<StarPose> {
        let t = age_ms - self.delay_ms;
        if t < 0.0 {
            return None;
        }
        let k = ease_out((t / fall_ms).clamp(0.0, 1.0));
        Some(StarPose {
            at: Point::new(self.x, self.start_y + (floor_y - self.start_y) * k),
            rotation_deg: self.rotation_deg + 360.0 * k,
            scale: k,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HitMarker {
    pub at: Point,
    pub glyph: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WowText {
    pub at: Point,
    pub text: &'static str,
}

/// "OUCH" bubble next to the cute star, pinned at the poke's height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarMessage {
    pub y: f64,
}

/// Effects that may be scheduled for later.
#[derive(Clone, Debug, PartialEq)]
pub enum Delayed {
    HitMarker(HitMarker),
    StarMessage(StarMessage),
}

/// Quadratic ease-out on [0, 1].
pub fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Intro progress of a banner that animates in over `intro_ms`.
pub fn intro(age_ms: f64, intro_ms: f64) -> f64 {
    if intro_ms <= 0.0 {
        return 1.0;
    }
    ease_out((age_ms / intro_ms).clamp(0.0, 1.0))
}

/// Rainbow text color cycling once per `period_ms`.
pub fn rainbow(age_ms: f64, period_ms: f64) -> &'static str {
    const STOPS: [&str; 7] = ["red", "orange", "yellow", "green", "blue", "indigo", "violet"];
    let phase = (age_ms.max(0.0) % period_ms) / period_ms;
    STOPS[((phase * STOPS.len() as f64) as usize).min(STOPS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_expire_exactly_at_their_deadline() {
        let mut list = EffectList::new();
        list.push(EffectId(1), 0.0, 500.0, "a");
        list.push(EffectId(2), 100.0, 1100.0, "b");
        assert_eq!(list.expire(499.9), 0);
        assert_eq!(list.expire(500.0), 1);
        assert_eq!(list.len(), 1);
        assert_eq!(list.latest().map(|e| e.item), Some("b"));
        assert_eq!(list.expire(1100.0), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn overlapping_entries_are_independent() {
        let mut list = EffectList::new();
        list.push(EffectId(1), 0.0, 1500.0, ());
        list.push(EffectId(2), 1000.0, 2500.0, ());
        list.expire(1600.0);
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next().map(|e| e.id), Some(EffectId(2)));
    }

    #[test]
    fn schedule_releases_due_items_in_order() {
        let mut s = Schedule::default();
        s.at(200.0, 700.0, 'c');
        s.at(0.0, 500.0, 'a');
        s.at(100.0, 600.0, 'b');
        let due: Vec<char> = s.take_due(150.0).into_iter().map(|p| p.effect).collect();
        assert_eq!(due, vec!['a', 'b']);
        assert_eq!(s.len(), 1);
        assert!(s.take_due(199.0).is_empty());
        assert_eq!(s.take_due(200.0).len(), 1);
        assert!(s.is_empty());
    }

    #[test]
    fn star_waits_for_its_delay_then_falls() {
        let star = Star {
            x: 40.0,
            start_y: -20.0,
            rotation_deg: 90.0,
            color: "#FFD700",
            delay_ms: 250.0,
        };
        assert!(star.pose(100.0, 2000.0, 820.0).is_none());
        let start = star.pose(250.0, 2000.0, 820.0).unwrap();
        assert_eq!(start.at, Point::new(40.0, -20.0));
        assert_eq!(start.scale, 0.0);
        let end = star.pose(2250.0, 2000.0, 820.0).unwrap();
        assert!((end.at.y - 820.0).abs() < 1e-9);
        assert!((end.rotation_deg - 450.0).abs() < 1e-9);
        assert_eq!(end.scale, 1.0);
    }

    #[test]
    fn rainbow_cycles() {
        assert_eq!(rainbow(0.0, 1000.0), "red");
        assert_eq!(rainbow(999.0, 1000.0), "violet");
        assert_eq!(rainbow(1000.0, 1000.0), "red");
    }

    #[test]
    fn ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
        assert_eq!(intro(1000.0, 400.0), 1.0);
    }
}
