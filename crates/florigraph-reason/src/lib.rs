//! Florigraph reasoning engines.
//!
//! Query layers over an immutable [`Ontology`](florigraph_ontology::Ontology)
//! context:
//!
//! - [`closure`]: per-relation boolean predicates (taxonomy, part-whole in
//!   both directions, direct habitat facts)
//! - [`path`]: shortest labeled derivation paths over the merged multigraph
//! - [`explain`]: human-readable rendering of derivations
//! - [`hypothesis`]: free-text statements mapped onto the closure checks
//! - [`audit`]: structural requirements report
//!
//! Every query is a pure read: per-query state (visited sets, queues, path
//! accumulators) is local, so any number of queries may run concurrently
//! over a shared context.

pub mod audit;
pub mod closure;
pub mod explain;
pub mod hypothesis;
pub mod path;

pub use audit::{audit, KbAudit};
pub use closure::{grows_in, has_part, is_kind_of, is_part_of, is_subclass_of};
pub use explain::{explain, render_path, NO_RELATIONSHIP};
pub use hypothesis::{
    HypothesisEvaluator, HypothesisIntent, HypothesisOutcome, EXAMPLE_HYPOTHESES,
};
pub use path::{find_path, PathStep};
