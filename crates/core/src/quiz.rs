//! Next-question selection for quiz play.
//!
//! A quiz session is stateless on the server: the ids already shown
//! travel in each request. Selection removes those ids from the pool
//! and draws one of the survivors uniformly at random. Randomness is
//! injected so tests can pass a seeded generator and assert exact picks.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::question::QuestionLike;
use crate::types::DbId;

/// Which questions are eligible for the quiz pool.
///
/// The wire protocol encodes "all categories" as category id 0; that
/// sentinel is decoded into this enum once at the boundary so nothing
/// downstream compares magic values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Draw from every question regardless of category.
    All,
    /// Draw only from questions in the given category.
    Specific(DbId),
}

impl CategoryFilter {
    /// Decode the wire sentinel: id 0 means "all categories".
    pub fn from_id(id: DbId) -> Self {
        if id == 0 {
            CategoryFilter::All
        } else {
            CategoryFilter::Specific(id)
        }
    }

    pub fn matches(&self, category_id: DbId) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Specific(id) => *id == category_id,
        }
    }
}

/// Pick the next quiz question from `pool`, skipping `excluded` ids.
///
/// Returns `None` when every question in the pool has already been
/// shown. Exhaustion is a normal terminal state of a session, not an
/// error. If a question is returned it is always a member of the pool
/// and never one of the excluded ids.
pub fn select_next<'a, T, R>(
    pool: &'a [T],
    excluded: &HashSet<DbId>,
    rng: &mut R,
) -> Option<&'a T>
where
    T: QuestionLike,
    R: Rng + ?Sized,
{
    let candidates: Vec<&T> = pool
        .iter()
        .filter(|q| !excluded.contains(&q.id()))
        .collect();
    candidates.choose(rng).copied()
}
