use crate::Hand;

/// A seat at the table.
#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub hand: Hand,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            hand: Hand::new(),
        }
    }
}
