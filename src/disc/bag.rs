use serde::{Deserialize, Serialize};

use super::disc::Disc;

/// An ordered disc inventory.
///
/// Disc names act as a natural key for updates and removals, but uniqueness
/// is not enforced: operations touch the first disc with a matching name and
/// leave any later duplicates alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bag {
    discs: Vec<Disc>,
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_discs(discs: Vec<Disc>) -> Self {
        Self { discs }
    }

    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    pub fn len(&self) -> usize {
        self.discs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    pub fn add(&mut self, disc: Disc) {
        self.discs.push(disc);
    }

    /// Replace the first disc named `name`. Returns false if no disc matched.
    pub fn update(&mut self, name: &str, disc: Disc) -> bool {
        match self.discs.iter_mut().find(|existing| existing.name == name) {
            Some(existing) => {
                *existing = disc;
                true
            }
            None => false,
        }
    }

    /// Remove and return the first disc named `name`.
    pub fn remove(&mut self, name: &str) -> Option<Disc> {
        let index = self.discs.iter().position(|disc| disc.name == name)?;
        Some(self.discs.remove(index))
    }

    /// Append a copy of the first disc named `name`, suffixed " Copy".
    /// Returns false if no disc matched.
    pub fn duplicate(&mut self, name: &str) -> bool {
        match self.discs.iter().find(|disc| disc.name == name) {
            Some(disc) => {
                let copy = disc.duplicate();
                self.discs.push(copy);
                true
            }
            None => false,
        }
    }

    /// Move the disc at `from` so it ends up at `to`. Out-of-range indices
    /// are ignored.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from >= self.discs.len() || to >= self.discs.len() {
            return;
        }
        let disc = self.discs.remove(from);
        self.discs.insert(to, disc);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Disc> {
        self.discs.iter()
    }
}

impl From<Vec<Disc>> for Bag {
    fn from(discs: Vec<Disc>) -> Self {
        Self::from_discs(discs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Stability;
    use pretty_assertions::assert_eq;

    fn putter(name: &str) -> Disc {
        Disc::new(name, "Innova", 2, 3, 0, 1, Stability::Stable)
    }

    #[test]
    fn update_and_remove_match_first_of_duplicate_names() {
        let mut bag = Bag::new();
        bag.add(putter("Aviar"));
        bag.add(Disc::new("Aviar", "Innova", 2, 3, 0, 2, Stability::Overstable));

        let mut replacement = putter("Aviar");
        replacement.glide = 4;
        assert!(bag.update("Aviar", replacement));
        assert_eq!(bag.discs()[0].glide, 4);
        assert_eq!(bag.discs()[1].stability, Stability::Overstable);

        let removed = bag.remove("Aviar").unwrap();
        assert_eq!(removed.glide, 4);
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.discs()[0].stability, Stability::Overstable);
    }

    #[test]
    fn update_missing_name_is_a_no_op() {
        let mut bag = Bag::from_discs(vec![putter("Aviar")]);
        assert!(!bag.update("Zone", putter("Zone")));
        assert!(bag.remove("Zone").is_none());
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn duplicate_appends_at_the_end() {
        let mut bag = Bag::from_discs(vec![putter("Aviar"), putter("Luna")]);
        assert!(bag.duplicate("Aviar"));
        assert_eq!(bag.len(), 3);
        assert_eq!(bag.discs()[2].name, "Aviar Copy");
        assert!(!bag.duplicate("Zone"));
    }

    #[test]
    fn reorder_moves_within_bounds() {
        let mut bag = Bag::from_discs(vec![putter("A"), putter("B"), putter("C")]);
        bag.reorder(0, 2);
        let names: Vec<&str> = bag.iter().map(|disc| disc.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);

        bag.reorder(5, 0);
        let names: Vec<&str> = bag.iter().map(|disc| disc.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }
}
