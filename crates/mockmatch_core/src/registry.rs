//! Matcher registry: recognises matcher constructs and maps each kind to its
//! handler.

use crate::handlers::{
    ContainingDeepHandler, ContainingHandler, EndsWithHandler, InstanceOfHandler,
    MatcherHandler, MatchesHandler, OneOfHandler, OrHandler, PredicateHandler, SchemaHandler,
    StartsWithHandler, WildcardHandler,
};
use crate::matcher::{Matcher, MatcherKind};
use crate::value::Value;

// Static handler instances for 'static lifetime references
static WILDCARD: WildcardHandler = WildcardHandler;
static CONTAINING: ContainingHandler = ContainingHandler;
static CONTAINING_DEEP: ContainingDeepHandler = ContainingDeepHandler;
static SCHEMA: SchemaHandler = SchemaHandler;
static PREDICATE: PredicateHandler = PredicateHandler;
static OR: OrHandler = OrHandler;
static ONE_OF: OneOfHandler = OneOfHandler;
static INSTANCE_OF: InstanceOfHandler = InstanceOfHandler;
static STARTS_WITH: StartsWithHandler = StartsWithHandler;
static ENDS_WITH: EndsWithHandler = EndsWithHandler;
static MATCHES: MatchesHandler = MatchesHandler;

/// Registry mapping `MatcherKind` to handlers.
///
/// Uses direct enum dispatch instead of `HashMap` lookup. All handlers are
/// zero-sized statics, so the registry itself carries no state.
pub struct MatcherRegistry {
    // Marker field to prevent external construction
    _private: (),
}

impl MatcherRegistry {
    pub fn new() -> Self {
        MatcherRegistry { _private: () }
    }

    /// The matcher construct `value` carries, if it is one.
    pub fn detect(value: &Value) -> Option<&Matcher> {
        value.as_matcher()
    }

    /// The handler for `kind`.
    pub fn get(&self, kind: MatcherKind) -> &'static dyn MatcherHandler {
        match kind {
            MatcherKind::WildcardByCategory => &WILDCARD,
            MatcherKind::ShallowContaining => &CONTAINING,
            MatcherKind::DeepContaining => &CONTAINING_DEEP,
            MatcherKind::SchemaValidate => &SCHEMA,
            MatcherKind::PredicateValidate => &PREDICATE,
            MatcherKind::Alternation => &OR,
            MatcherKind::Membership => &ONE_OF,
            MatcherKind::TypeInstance => &INSTANCE_OF,
            MatcherKind::PrefixMatch => &STARTS_WITH,
            MatcherKind::SuffixMatch => &ENDS_WITH,
            MatcherKind::PatternMatch => &MATCHES,
        }
    }

    /// All registered kinds.
    pub fn kinds(&self) -> impl Iterator<Item = MatcherKind> {
        MatcherKind::ALL.into_iter()
    }

    pub fn len(&self) -> usize {
        MatcherKind::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
