//! Static nurse identity records.

use std::fmt;

use crate::shift::SkillId;

/// Index of a nurse in the scenario-wide numbering.
pub type NurseId = usize;

/// Index of a contract in the scenario.
pub type ContractId = usize;

/// Immutable nurse identity: id, name, skills and contract.
///
/// Skills are kept sorted and deduplicated so that skill-sets compare
/// independently of input order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nurse {
    pub id: NurseId,
    pub name: String,
    skills: Vec<SkillId>,
    pub contract: ContractId,
}

impl Nurse {
    pub fn new(
        id: NurseId,
        name: impl Into<String>,
        skills: impl IntoIterator<Item = SkillId>,
        contract: ContractId,
    ) -> Self {
        let mut skills: Vec<SkillId> = skills.into_iter().collect();
        skills.sort_unstable();
        skills.dedup();
        Self {
            id,
            name: name.into(),
            skills,
            contract,
        }
    }

    /// The sorted skill-set.
    pub fn skills(&self) -> &[SkillId] {
        &self.skills
    }

    pub fn nb_skills(&self) -> usize {
        self.skills.len()
    }

    pub fn has_skill(&self, skill: SkillId) -> bool {
        self.skills.binary_search(&skill).is_ok()
    }
}

impl fmt::Display for Nurse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} contract {} skills {:?}",
            self.id, self.name, self.contract, self.skills
        )
    }
}
