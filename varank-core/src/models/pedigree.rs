use crate::errors::ModelError;

/// Disease status of one family member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffectedStatus {
    Affected,
    Unaffected,
    Unknown,
}

/// Role of a member within the family under analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyRole {
    Proband,
    Mother,
    Father,
    Other,
}

/// One member of the family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    role: FamilyRole,
    status: AffectedStatus,
}

impl Person {
    pub fn new(name: impl Into<String>, role: FamilyRole, status: AffectedStatus) -> Self {
        Person {
            name: name.into(),
            role,
            status,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> FamilyRole {
        self.role
    }

    pub fn status(&self) -> AffectedStatus {
        self.status
    }
}

/// The family structure used to judge genotype compatibility with a mode of
/// inheritance. Immutable for the duration of a scoring run.
///
/// Member order is significant: genotype vectors on
/// [`crate::models::VariantEvaluation`] are aligned with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pedigree {
    members: Vec<Person>,
}

impl Pedigree {
    /// Build a pedigree, requiring exactly one proband.
    pub fn new(members: Vec<Person>) -> Result<Self, ModelError> {
        let probands = members
            .iter()
            .filter(|p| p.role() == FamilyRole::Proband)
            .count();
        if probands != 1 {
            return Err(ModelError::InvalidProbandCount(probands));
        }
        Ok(Pedigree { members })
    }

    /// The degenerate single-sample family: one affected proband.
    pub fn single_sample(name: impl Into<String>) -> Self {
        Pedigree {
            members: vec![Person::new(
                name,
                FamilyRole::Proband,
                AffectedStatus::Affected,
            )],
        }
    }

    pub fn members(&self) -> &[Person] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn member(&self, index: usize) -> Option<&Person> {
        self.members.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_single_sample_pedigree() {
        let pedigree = Pedigree::single_sample("Nemo");
        assert_eq!(pedigree.len(), 1);
        assert_eq!(pedigree.member(0).unwrap().role(), FamilyRole::Proband);
        assert_eq!(
            pedigree.member(0).unwrap().status(),
            AffectedStatus::Affected
        );
    }

    #[rstest]
    fn test_pedigree_requires_exactly_one_proband() {
        let no_proband = Pedigree::new(vec![Person::new(
            "Eve",
            FamilyRole::Mother,
            AffectedStatus::Unaffected,
        )]);
        assert!(no_proband.is_err());

        let trio = Pedigree::new(vec![
            Person::new("Cain", FamilyRole::Proband, AffectedStatus::Affected),
            Person::new("Eve", FamilyRole::Mother, AffectedStatus::Unaffected),
            Person::new("Adam", FamilyRole::Father, AffectedStatus::Unaffected),
        ]);
        assert!(trio.is_ok());
    }
}
