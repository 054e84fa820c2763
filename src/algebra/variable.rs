use std::fmt;
use std::hash::{Hash, Hasher};

use uuid::Uuid;

use crate::objectwithuuid::ObjectWithUUID;

/// A named unknown. Two variables are the same variable only when their
/// identifiers match; the label is display text.
#[derive(Debug, Clone)]
pub struct Variable {
    uuid: Uuid,
    label: String
}

impl Variable {
    pub fn new(label: &str) -> Variable {
        Variable::with_uuid(Uuid::new_v4(), label)
    }

    pub fn with_uuid(uuid: Uuid, label: &str) -> Variable {
        Variable { uuid, label: label.to_owned() }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl ObjectWithUUID for Variable {
    fn uuid(&self) -> &Uuid {
        &self.uuid
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.same_object(other)
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
