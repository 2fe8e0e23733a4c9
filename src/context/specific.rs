use rand::SeedableRng;

use crate::{
    config::Config,
    context::{ContextState, Counters, GenericContext},
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches},
    generic::minimal_pcg::MinimalPCG32,
};

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        let rng = MinimalPCG32::from_seed(config.random_seed.to_le_bytes());

        let mut ctx = Self {
            config,
            counters: Counters::default(),
            clause_db: ClauseDB::default(),
            atom_db: AtomDB::default(),
            trail: Trail::default(),
            watches: Watches::default(),
            state: ContextState::Input,
            rng,
            assumptions: Vec::default(),
            failed: Vec::default(),
            seen: Vec::default(),
            to_clear: Vec::default(),
        };

        // A slot for the reserved top atom in the structures the atom database does not govern.
        ctx.watches.fresh_atom();
        ctx.seen.push(false);

        ctx
    }
}
