//! Type tags used to filter world queries.

use std::fmt;

/// Tag naming what sort of thing an actor (or world) is.
///
/// Queries such as [`Actor::objects_in_range`](super::actor::Actor::objects_in_range)
/// take a `Kind` and only report members carrying that tag. [`Kind::ANY`]
/// matches every member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kind(&'static str);

impl Kind {
    /// Wildcard tag. Actors are created with it unless `with_kind` is used.
    pub const ANY: Kind = Kind("actor");

    /// Creates a tag with the given name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Name of the tag.
    pub fn name(self) -> &'static str {
        self.0
    }

    /// Whether a member tagged `other` passes a filter on `self`.
    pub fn matches(self, other: Kind) -> bool {
        self == Self::ANY || self == other
    }
}

impl Default for Kind {
    fn default() -> Self {
        Self::ANY
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_matches_everything() {
        let rock = Kind::new("rock");
        assert!(Kind::ANY.matches(rock));
        assert!(Kind::ANY.matches(Kind::ANY));
        assert!(rock.matches(rock));
        assert!(!rock.matches(Kind::new("tree")));
        assert!(!rock.matches(Kind::ANY));
    }
}
