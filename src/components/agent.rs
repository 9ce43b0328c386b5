//! Agent Record
//!
//! The per-agent physical and belief state. Identity and skepticism tier are
//! fixed at creation; position, velocity, belief, and the opinion-leader flag
//! change over the agent's lifetime.

use serde::{Deserialize, Serialize};

/// Belief state with respect to the rumor - exactly one holds at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeliefState {
    /// Has not yet encountered the rumor; the only mutable target state
    Uninformed,
    /// Believes and actively spreads the rumor
    Believer,
    /// Heard the rumor but rejected it; terminal under propagation
    Disbeliever,
}

/// Fixed per-agent modifier scaling how readily the agent accepts the rumor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkepticismTier {
    Wise,
    Normal,
    Gullible,
}

impl SkepticismTier {
    /// Tier assignment is deterministic from identity: tiers cycle by index.
    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => SkepticismTier::Wise,
            1 => SkepticismTier::Normal,
            _ => SkepticismTier::Gullible,
        }
    }
}

/// A single member of the population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Stable index into the population, immutable
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub belief: BeliefState,
    pub skepticism: SkepticismTier,
    /// Opinion-leader (KOL) flag; only the allocator may change this
    pub is_kol: bool,
    /// Tick at which belief was acquired; `Some` exactly while `Believer`
    pub belief_tick: Option<u64>,
}

impl Agent {
    /// Transition to `Believer`, stamping the acquisition tick
    pub fn believe(&mut self, tick: u64) {
        self.belief = BeliefState::Believer;
        self.belief_tick = Some(tick);
    }

    /// Transition to `Disbeliever`, clearing any acquisition tick
    pub fn reject(&mut self) {
        self.belief = BeliefState::Disbeliever;
        self.belief_tick = None;
    }

    /// Euclidean distance to another agent
    pub fn distance_to(&self, other: &Agent) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_assignment_cycles_by_index() {
        assert_eq!(SkepticismTier::from_index(0), SkepticismTier::Wise);
        assert_eq!(SkepticismTier::from_index(1), SkepticismTier::Normal);
        assert_eq!(SkepticismTier::from_index(2), SkepticismTier::Gullible);
        assert_eq!(SkepticismTier::from_index(3), SkepticismTier::Wise);
        assert_eq!(SkepticismTier::from_index(200), SkepticismTier::Gullible);
    }

    #[test]
    fn test_belief_transitions_manage_acquisition_tick() {
        let mut agent = Agent {
            id: 7,
            x: 10.0,
            y: 10.0,
            dx: 0.0,
            dy: 0.0,
            belief: BeliefState::Uninformed,
            skepticism: SkepticismTier::Normal,
            is_kol: false,
            belief_tick: None,
        };

        agent.believe(42);
        assert_eq!(agent.belief, BeliefState::Believer);
        assert_eq!(agent.belief_tick, Some(42));

        agent.reject();
        assert_eq!(agent.belief, BeliefState::Disbeliever);
        assert_eq!(agent.belief_tick, None);
    }

    #[test]
    fn test_distance() {
        let a = Agent {
            id: 0,
            x: 0.0,
            y: 0.0,
            dx: 0.0,
            dy: 0.0,
            belief: BeliefState::Uninformed,
            skepticism: SkepticismTier::Wise,
            is_kol: false,
            belief_tick: None,
        };
        let mut b = a.clone();
        b.x = 3.0;
        b.y = 4.0;
        assert!((a.distance_to(&b) - 5.0).abs() < f32::EPSILON);
    }
}
