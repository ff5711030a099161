/// Someone taking part in project night, with a self-reported experience score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub experience_score: i64,
}

impl Participant {
    pub fn new(name: impl Into<String>, experience_score: i64) -> Self {
        Self {
            name: name.into(),
            experience_score,
        }
    }
}

/// One team produced by a grouping run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub label: String,
    pub members: Vec<String>,
}

impl Group {
    pub fn numbered(n: usize) -> Self {
        Self {
            label: format!("Group {}", n),
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
