use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lq_core::Corpus;
use lq_interpret::{InterpretationService, Interpreter};
use lq_ritual::{RitualConfig, draw_slip_index};

pub fn run(seed: Option<u64>, offline: bool) -> Result<(), String> {
    let corpus = Corpus::builtin();
    let service = InterpretationService::new();

    let curated = if offline || !service.is_configured() {
        Some(RitualConfig::default().curated_prefix)
    } else {
        None
    };

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    let index = draw_slip_index(&mut rng, corpus.len(), curated);
    super::print_slip(&corpus.slips()[index]);

    Ok(())
}
