// Matching engine: vectorization, the four similarity signals, score
// integration, ranking and report assembly. No I/O happens below this module;
// the catalog and taxonomy arrive in memory.

pub mod engine;
pub mod handlers;
pub mod integrator;
pub mod overlap;
pub mod ranker;
pub mod report;
pub mod semantic;
pub mod skills;
pub mod taxonomy;
pub mod vectorizer;
