use shared_types::{Contact, SheetState};

/// Operation a [`ContactsEvent::Failed`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Remove,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Load => write!(f, "load"),
            Operation::Add => write!(f, "add"),
            Operation::Remove => write!(f, "remove"),
        }
    }
}

/// State changes published by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactsEvent {
    Loaded { count: usize },
    Added(Contact),
    Removed { id: i64 },
    SheetChanged(SheetState),
    Failed { operation: Operation, message: String },
}
