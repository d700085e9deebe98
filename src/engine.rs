//! Substitution engine.
//!
//! Rewriting a text is a two-phase pipeline:
//!
//! ```text
//! RuleTable ──┐
//!             │  CompiledTable::new            (compiled_table.rs)
//!             │   - reject empty / duplicate patterns
//!             │   - order: longest pattern first, declaration order on ties
//!             └───────────────┬───────────────
//!                             │
//! input ── TriggerInfo::scan ─┼─ character classes present in the text
//!          (trigger.rs)       │
//!                             v
//!                   Substituter::run (substitute.rs)
//!                     - one sequential pass over the ordered rules
//!                     - replace all occurrences of each firing rule
//!                     - widen the trigger mask with each replacement
//!                             │
//!                             v
//!                       RunResult (metrics.rs)
//! ```
//!
//! The pass is *cascading*: once a rule has rewritten the text, every later
//! rule sees the rewritten text, including whatever the replacement inserted.
//! Nothing is rescanned by rules that already ran. This is the contract the
//! tables in `src/tables/` are written against, so do not turn it into a
//! simultaneous substitution.
//!
//! ## Responsibilities by module
//!
//! - `compiled_table.rs`: validation, derived application order, per-rule
//!   metadata.
//! - `trigger.rs`: coarse character-class masks used to skip rules that
//!   cannot possibly match.
//! - `substitute.rs`: the pass itself.
//! - `metrics.rs`: counts, per-rule fire records and timing.

#[path = "engine/compiled_table.rs"]
mod compiled_table;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/substitute.rs"]
mod substitute;
#[path = "engine/trigger.rs"]
mod trigger;

#[allow(unused_imports)]
pub use compiled_table::{CompiledTable, RuleId, RuleMeta};
#[allow(unused_imports)]
pub use metrics::{RuleFire, RunMetrics, RunResult};
pub use substitute::Substituter;
#[allow(unused_imports)]
pub use trigger::{CharClass, TriggerInfo};
