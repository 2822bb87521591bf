//! Net steering force on one agent.
//!
//! Every other agent pulls or pushes with an inverse-square falloff:
//! - prey (the subject's slave type) attract, weighted by how outnumbered
//!   the subject's masters are (`slaves / (masters + ε)`),
//! - masters repel, weighted by `masters / (slaves + ε)`,
//! - peers apply a weak pull or push according to [`PeerInteraction`].
//!
//! A center bias is added on top so the population stays on the canvas.
//! Only the direction of the result is used for movement; its magnitude
//! is informational.

use crate::config::{ForceConfig, PeerInteraction, SimConfig};
use roshambo_data::{Agent, Position, Vector2};

/// Force on an agent split by source.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ForceBreakdown {
    /// Sum of all agent-to-agent contributions.
    pub pairwise: Vector2,
    /// Pull toward the canvas center.
    pub center: Vector2,
}

impl ForceBreakdown {
    #[must_use]
    pub fn total(&self) -> Vector2 {
        let mut sum = self.pairwise;
        sum.accumulate(self.center);
        sum
    }
}

#[derive(Debug, Clone)]
pub struct ForceField {
    config: ForceConfig,
    width: f64,
    height: f64,
    /// Count used on both sides of the peer weight.
    peer_reference: f64,
}

impl ForceField {
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        Self {
            config: config.force.clone(),
            width: config.world.width,
            height: config.world.height,
            peer_reference: config.world.count_per_type as f64,
        }
    }

    /// Net force acting on `subject` from `population`.
    ///
    /// `population` may contain `subject` itself; a coincident agent
    /// contributes nothing.
    #[must_use]
    pub fn compute_force(&self, subject: &Agent, population: &[Agent]) -> Vector2 {
        self.breakdown(subject, population).total()
    }

    #[must_use]
    pub fn breakdown(&self, subject: &Agent, population: &[Agent]) -> ForceBreakdown {
        let master = subject.kind.master();
        let slave = subject.kind.slave();

        let (mut masters, mut slaves) = (0usize, 0usize);
        for other in population {
            if other.kind == master {
                masters += 1;
            } else if other.kind == slave {
                slaves += 1;
            }
        }

        let eps = self.config.epsilon;
        let chase = slaves as f64 / (masters as f64 + eps);
        let flee = -(masters as f64 / (slaves as f64 + eps));
        let peer = self.peer_weight();

        let mut pairwise = Vector2::ZERO;
        for other in population {
            let weight = if other.kind == slave {
                chase
            } else if other.kind == master {
                flee
            } else {
                peer
            };
            if weight != 0.0 {
                pairwise.accumulate(subject.influence_from(other, weight));
            }
        }

        ForceBreakdown {
            pairwise,
            center: self.center_bias(&subject.position, population.len()),
        }
    }

    /// Pull from `position` toward the canvas center.
    ///
    /// Grows with the squared distance to the center, normalized by the
    /// canvas area, and with the population size up to
    /// `center_population_cap`.
    #[must_use]
    pub fn center_bias(&self, position: &Position, population: usize) -> Vector2 {
        if self.config.center_pull == 0.0 {
            return Vector2::ZERO;
        }
        let center = Position::new(self.width / 2.0, self.height / 2.0);
        let d = position.distance_to(&center);
        if d == 0.0 {
            return Vector2::ZERO;
        }
        let scale = self.config.center_pull
            * (population as f64 / 3.0).min(self.config.center_population_cap);
        let normalized = d / (self.width * self.height);
        Vector2::from_polar(scale * normalized * normalized, position.angle_to(&center))
    }

    fn peer_weight(&self) -> f64 {
        let reference = self.peer_reference;
        let magnitude = reference / (reference + self.config.epsilon);
        match self.config.peer {
            PeerInteraction::Attract => magnitude,
            PeerInteraction::Repel => -magnitude,
            PeerInteraction::Ignore => 0.0,
        }
    }
}
