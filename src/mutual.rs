//! Standalone mutual-like matcher: two users match when each has swiped
//! right on the other. Kept as an in-memory demo component; the HTTP app's
//! leaderboard uses the rating-agreement scorer instead and never touches
//! this.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MutualError {
    #[error("profile must have an id and a name")]
    IncompleteProfile,

    #[error("profile {0} already exists")]
    DuplicateProfile(String),

    #[error("profile {0} not found")]
    UnknownProfile(String),

    #[error("a user cannot swipe on themselves")]
    SelfSwipe,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: Option<u32>,
}

/// Outcome of a right swipe.
#[derive(Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    NoMatch,
    Matched { users: (String, String) },
}

#[derive(Default)]
pub struct MutualMatcher {
    profiles: HashMap<String, Profile>,
    likes: HashMap<String, HashSet<String>>,
    matches: HashSet<(String, String)>,
}

impl MutualMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_profile(&mut self, profile: Profile) -> Result<&Profile, MutualError> {
        if profile.id.is_empty() || profile.name.is_empty() {
            return Err(MutualError::IncompleteProfile);
        }
        if self.profiles.contains_key(&profile.id) {
            return Err(MutualError::DuplicateProfile(profile.id));
        }

        let id = profile.id.clone();
        self.likes.insert(id.clone(), HashSet::new());
        self.profiles.insert(id.clone(), profile);
        Ok(&self.profiles[&id])
    }

    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.profiles.get(id)
    }

    pub fn swipe_right(&mut self, from: &str, to: &str) -> Result<SwipeOutcome, MutualError> {
        self.validate_swipe(from, to)?;

        self.likes
            .get_mut(from)
            .expect("validated profile has a like-set")
            .insert(to.to_owned());

        if self.likes[to].contains(from) {
            self.matches.insert(pair_key(from, to));
            return Ok(SwipeOutcome::Matched {
                users: (from.to_owned(), to.to_owned()),
            });
        }

        Ok(SwipeOutcome::NoMatch)
    }

    /// Validated like a right swipe, but records nothing and never matches,
    /// even when the other side already liked back.
    pub fn swipe_left(&mut self, from: &str, to: &str) -> Result<SwipeOutcome, MutualError> {
        self.validate_swipe(from, to)?;
        Ok(SwipeOutcome::NoMatch)
    }

    pub fn matches_for(&self, id: &str) -> Result<Vec<&Profile>, MutualError> {
        if !self.profiles.contains_key(id) {
            return Err(MutualError::UnknownProfile(id.to_owned()));
        }

        Ok(self
            .matches
            .iter()
            .filter_map(|(a, b)| {
                if a == id {
                    self.profiles.get(b)
                } else if b == id {
                    self.profiles.get(a)
                } else {
                    None
                }
            })
            .collect())
    }

    pub fn is_match(&self, a: &str, b: &str) -> bool {
        self.matches.contains(&pair_key(a, b))
    }

    fn validate_swipe(&self, from: &str, to: &str) -> Result<(), MutualError> {
        if !self.profiles.contains_key(from) {
            return Err(MutualError::UnknownProfile(from.to_owned()));
        }
        if !self.profiles.contains_key(to) {
            return Err(MutualError::UnknownProfile(to.to_owned()));
        }
        if from == to {
            return Err(MutualError::SelfSwipe);
        }
        Ok(())
    }
}

/// Order-independent key for one matched pair.
fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_owned(), b.to_owned())
    } else {
        (b.to_owned(), a.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, name: &str, age: u32) -> Profile {
        Profile {
            id: id.to_owned(),
            name: name.to_owned(),
            age: Some(age),
        }
    }

    fn seeded() -> MutualMatcher {
        let mut m = MutualMatcher::new();
        m.add_profile(profile("u1", "Alice", 28)).unwrap();
        m.add_profile(profile("u2", "Bob", 30)).unwrap();
        m.add_profile(profile("u3", "Carol", 25)).unwrap();
        m
    }

    #[test]
    fn adds_and_retrieves_profiles() {
        let m = seeded();
        assert_eq!(m.get("u1"), Some(&profile("u1", "Alice", 28)));
        assert_eq!(m.get("unknown"), None);
    }

    #[test]
    fn rejects_incomplete_profiles() {
        let mut m = MutualMatcher::new();
        let no_id = Profile {
            id: String::new(),
            name: "Dave".to_owned(),
            age: None,
        };
        assert_eq!(m.add_profile(no_id), Err(MutualError::IncompleteProfile));

        let no_name = Profile {
            id: "u4".to_owned(),
            name: String::new(),
            age: None,
        };
        assert_eq!(m.add_profile(no_name), Err(MutualError::IncompleteProfile));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut m = seeded();
        assert_eq!(
            m.add_profile(profile("u1", "Alice2", 29)),
            Err(MutualError::DuplicateProfile("u1".to_owned()))
        );
    }

    #[test]
    fn one_sided_right_swipe_is_not_a_match() {
        let mut m = seeded();
        assert_eq!(m.swipe_right("u1", "u2"), Ok(SwipeOutcome::NoMatch));
        assert!(!m.is_match("u1", "u2"));
    }

    #[test]
    fn reciprocal_right_swipes_match() {
        let mut m = seeded();
        m.swipe_right("u1", "u2").unwrap();
        assert_eq!(
            m.swipe_right("u2", "u1"),
            Ok(SwipeOutcome::Matched {
                users: ("u2".to_owned(), "u1".to_owned()),
            })
        );
    }

    #[test]
    fn swipes_on_unknown_profiles_fail() {
        let mut m = seeded();
        assert_eq!(
            m.swipe_right("nobody", "u2"),
            Err(MutualError::UnknownProfile("nobody".to_owned()))
        );
        assert_eq!(
            m.swipe_right("u1", "nobody"),
            Err(MutualError::UnknownProfile("nobody".to_owned()))
        );
        assert_eq!(
            m.swipe_left("nobody", "u2"),
            Err(MutualError::UnknownProfile("nobody".to_owned()))
        );
        assert_eq!(
            m.swipe_left("u1", "nobody"),
            Err(MutualError::UnknownProfile("nobody".to_owned()))
        );
    }

    #[test]
    fn self_swipes_fail() {
        let mut m = seeded();
        assert_eq!(m.swipe_right("u1", "u1"), Err(MutualError::SelfSwipe));
        assert_eq!(m.swipe_left("u1", "u1"), Err(MutualError::SelfSwipe));
    }

    #[test]
    fn left_swipe_never_matches() {
        let mut m = seeded();
        assert_eq!(m.swipe_left("u1", "u2"), Ok(SwipeOutcome::NoMatch));

        // Even when the other side already liked back.
        m.swipe_right("u2", "u1").unwrap();
        m.swipe_left("u1", "u2").unwrap();
        assert!(!m.is_match("u1", "u2"));
    }

    #[test]
    fn matches_for_lists_all_mutual_likes() {
        let mut m = seeded();
        assert_eq!(m.matches_for("u1").unwrap().len(), 0);

        m.swipe_right("u1", "u2").unwrap();
        m.swipe_right("u2", "u1").unwrap();
        m.swipe_right("u1", "u3").unwrap();
        m.swipe_right("u3", "u1").unwrap();

        let mut names: Vec<&str> = m
            .matches_for("u1")
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        names.sort();
        assert_eq!(names, ["Bob", "Carol"]);

        assert_eq!(
            m.matches_for("nobody"),
            Err(MutualError::UnknownProfile("nobody".to_owned()))
        );
    }

    #[test]
    fn is_match_is_symmetric() {
        let mut m = seeded();
        assert!(!m.is_match("u1", "u2"));

        m.swipe_right("u1", "u2").unwrap();
        assert!(!m.is_match("u1", "u2"));

        m.swipe_right("u2", "u1").unwrap();
        assert!(m.is_match("u1", "u2"));
        assert!(m.is_match("u2", "u1"));
    }
}
