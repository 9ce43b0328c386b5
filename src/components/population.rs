//! Population Snapshot
//!
//! The full set of agent records for one point in time. Each tick replaces
//! the agent vector wholesale, so a snapshot handed out for rendering is
//! never mutated behind the consumer's back.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use super::agent::{Agent, BeliefState};

/// Resource holding the current population snapshot
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Population {
    agents: Vec<Agent>,
}

/// Per-state agent counts for one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeliefCounts {
    pub uninformed: usize,
    pub believers: usize,
    pub disbelievers: usize,
}

impl Population {
    pub fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Number of agents currently flagged as opinion leaders
    pub fn leader_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_kol).count()
    }

    /// Indices of agents currently flagged as opinion leaders
    pub fn leader_indices(&self) -> Vec<usize> {
        self.agents
            .iter()
            .filter(|a| a.is_kol)
            .map(|a| a.id)
            .collect()
    }

    /// Tally agents by belief state
    pub fn counts(&self) -> BeliefCounts {
        let mut counts = BeliefCounts {
            uninformed: 0,
            believers: 0,
            disbelievers: 0,
        };
        for agent in &self.agents {
            match agent.belief {
                BeliefState::Uninformed => counts.uninformed += 1,
                BeliefState::Believer => counts.believers += 1,
                BeliefState::Disbeliever => counts.disbelievers += 1,
            }
        }
        counts
    }

    /// Mutable access for the allocator; tick systems go through `replace`
    pub(crate) fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// Publish a new snapshot, discarding the previous one
    pub(crate) fn replace(&mut self, agents: Vec<Agent>) {
        self.agents = agents;
    }
}
