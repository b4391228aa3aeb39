//! One-shot preprocessing of the nurse population into positions.

use tracing::{debug, info};

use super::{ComponentId, Dominance, Position, PositionId};
use crate::error::{Result, RosterError};
use crate::nurse::Nurse;

/// A maximal set of positions transitively linked by shared skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub id: ComponentId,
    /// Member positions, by increasing id.
    pub positions: Vec<PositionId>,
    /// Indices into the scenario's nurse list, ordered by nurse id.
    pub nurses: Vec<usize>,
}

/// The position arena plus the nurse partitions derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Positions {
    positions: Vec<Position>,
    nurses_per_position: Vec<Vec<usize>>,
    position_of_nurse: Vec<PositionId>,
    components: Vec<Component>,
}

impl Positions {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, id: PositionId) -> Option<&Position> {
        self.positions.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.positions
    }

    /// Nurse indices holding the given position, in scenario order.
    pub fn nurses_in(&self, id: PositionId) -> &[usize] {
        self.nurses_per_position
            .get(id)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Position of the nurse at `nurse_index` in the scenario's nurse list.
    pub fn position_of(&self, nurse_index: usize) -> Option<PositionId> {
        self.position_of_nurse.get(nurse_index).copied()
    }

    /// Finds the position whose skill-set is exactly the nurse's.
    ///
    /// Fails when the nurse was not part of the population these positions
    /// were built from and holds an unseen skill-set.
    pub fn locate(&self, nurse: &Nurse) -> Result<PositionId> {
        locate(&self.positions, nurse)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Component of a position.
    pub fn component_of(&self, id: PositionId) -> Option<&Component> {
        self.positions
            .get(id)
            .and_then(|p| p.component)
            .and_then(|c| self.components.get(c))
    }

    /// Positions ordered by decreasing rank, ties by id.
    pub fn by_rank(&self) -> Vec<PositionId> {
        let mut ids: Vec<PositionId> = (0..self.positions.len()).collect();
        ids.sort_by(|a, b| {
            self.positions[*b]
                .rank
                .cmp(&self.positions[*a].rank)
                .then(a.cmp(b))
        });
        ids
    }
}

impl std::ops::Index<PositionId> for Positions {
    type Output = Position;

    fn index(&self, id: PositionId) -> &Position {
        &self.positions[id]
    }
}

/// Builds [`Positions`] from a nurse list.
///
/// # Example
///
/// ```
/// use rosterforge_core::{Nurse, PositionBuilder};
///
/// let nurses = vec![
///     Nurse::new(0, "Ann", [0, 1], 0),
///     Nurse::new(1, "Bob", [0], 0),
///     Nurse::new(2, "Cid", [1, 0], 0),
/// ];
/// let positions = PositionBuilder::new(&nurses).build().unwrap();
///
/// assert_eq!(positions.len(), 2);
/// assert_eq!(positions[0].rank(), 1);
/// assert_eq!(positions[1].rank(), 0);
/// assert_eq!(positions.nurses_in(0), &[0, 2]);
/// assert_eq!(positions.components().len(), 1);
/// ```
#[derive(Debug)]
pub struct PositionBuilder<'a> {
    nurses: &'a [Nurse],
}

impl<'a> PositionBuilder<'a> {
    pub fn new(nurses: &'a [Nurse]) -> Self {
        Self { nurses }
    }

    /// Runs discovery, dominance, ranking and both nurse partitions.
    pub fn build(self) -> Result<Positions> {
        let mut positions = self.discover();
        link_dominance(&mut positions);
        compute_ranks(&mut positions);

        let (nurses_per_position, position_of_nurse) = self.partition(&positions)?;
        let components = self.connect(&mut positions, &nurses_per_position);

        info!(
            event = "positions_built",
            position_count = positions.len() as u64,
            component_count = components.len() as u64,
            nurse_count = self.nurses.len() as u64,
        );

        Ok(Positions {
            positions,
            nurses_per_position,
            position_of_nurse,
            components,
        })
    }

    // One position per distinct skill-set, in order of first appearance.
    fn discover(&self) -> Vec<Position> {
        let mut positions: Vec<Position> = Vec::new();
        for nurse in self.nurses {
            if !positions.iter().any(|p| p.matches(nurse.skills())) {
                let id = positions.len();
                positions.push(Position::new(id, nurse.skills().iter().copied()));
            }
        }
        positions
    }

    fn partition(&self, positions: &[Position]) -> Result<(Vec<Vec<usize>>, Vec<PositionId>)> {
        let mut per_position = vec![Vec::new(); positions.len()];
        let mut of_nurse = Vec::with_capacity(self.nurses.len());

        for (index, nurse) in self.nurses.iter().enumerate() {
            let position = locate(positions, nurse)?;
            per_position[position].push(index);
            of_nurse.push(position);
        }

        Ok((per_position, of_nurse))
    }

    // Flood fill over the shared-skill adjacency.
    fn connect(&self, positions: &mut [Position], per_position: &[Vec<usize>]) -> Vec<Component> {
        let mut remaining: Vec<PositionId> = (0..positions.len()).collect();
        let mut components = Vec::new();

        while let Some(seed) = remaining.pop() {
            let mut members = vec![seed];
            let mut frontier = vec![seed];

            while let Some(current) = frontier.pop() {
                let (linked, rest): (Vec<PositionId>, Vec<PositionId>) = remaining
                    .iter()
                    .partition(|q| positions[current].share_skill(&positions[**q]));
                remaining = rest;
                members.extend(&linked);
                frontier.extend(linked);
            }

            members.sort_unstable();
            let id = components.len();
            for &p in &members {
                positions[p].component = Some(id);
            }

            let mut nurses: Vec<usize> = members
                .iter()
                .flat_map(|p| per_position[*p].iter().copied())
                .collect();
            nurses.sort_by_key(|n| self.nurses[*n].id);

            debug!(
                event = "component_built",
                component = id as u64,
                position_count = members.len() as u64,
                nurse_count = nurses.len() as u64,
            );

            components.push(Component {
                id,
                positions: members,
                nurses,
            });
        }

        components
    }
}

fn locate(positions: &[Position], nurse: &Nurse) -> Result<PositionId> {
    positions
        .iter()
        .find(|p| p.matches(nurse.skills()))
        .map(|p| p.id)
        .ok_or_else(|| RosterError::NurseWithoutPosition {
            nurse: nurse.id,
            name: nurse.name.clone(),
        })
}

// Records every strict inclusion between pairs, not only the covering ones.
fn link_dominance(positions: &mut [Position]) {
    let n = positions.len();
    for i in 0..n {
        for j in (i + 1)..n {
            match positions[i].compare(&positions[j]) {
                Dominance::Dominates => {
                    positions[i].below.insert(j);
                    positions[j].above.insert(i);
                }
                Dominance::DominatedBy => {
                    positions[i].above.insert(j);
                    positions[j].below.insert(i);
                }
                Dominance::Incomparable => {}
            }
        }
    }
}

// Fixed point of rank(p) = max(rank(p), 1 + rank(q)) over q below p.
// Stops after a full pass without any change.
fn compute_ranks(positions: &mut [Position]) {
    for p in positions.iter_mut() {
        p.rank = 0;
    }

    loop {
        let mut changed = false;
        for i in 0..positions.len() {
            let best = positions[i]
                .below
                .iter()
                .map(|q| positions[*q].rank + 1)
                .max()
                .unwrap_or(0);
            if best > positions[i].rank {
                positions[i].rank = best;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
}
