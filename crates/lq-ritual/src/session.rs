//! Ritual session management.
//!
//! `RitualSession` owns the seeded RNG, drives the stage sequence with
//! cooperative timers, and invokes the interpreter exactly once per
//! confirmed ritual. A reset while an interpretation is outstanding bumps
//! the generation tag, so a late-arriving reading from the abandoned
//! ritual is discarded instead of overwriting the fresh session state.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::sleep;

use lq_core::{Corpus, Interpretation, Slip};
use lq_interpret::Interpreter;

use crate::blocks::{ThrowOutcome, throw_blocks};
use crate::config::RitualConfig;
use crate::draw::draw_slip_index;
use crate::error::{RitualError, RitualResult};
use crate::stage::Stage;

/// An interactive divination session.
pub struct RitualSession {
    corpus: Arc<Corpus>,
    interpreter: Arc<dyn Interpreter>,
    config: RitualConfig,
    rng: StdRng,
    stage: Stage,
    slip: Option<Slip>,
    outcome: ThrowOutcome,
    interpretation: Option<Interpretation>,
    throwing: bool,
    interpreting: bool,
    generation: u64,
}

impl RitualSession {
    /// Create a session in the idle stage.
    pub fn new(
        corpus: Arc<Corpus>,
        interpreter: Arc<dyn Interpreter>,
        config: RitualConfig,
    ) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            corpus,
            interpreter,
            config,
            rng,
            stage: Stage::Idle,
            slip: None,
            outcome: ThrowOutcome::Unthrown,
            interpretation: None,
            throwing: false,
            interpreting: false,
            generation: 0,
        }
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The drawn slip, if one has emerged.
    pub fn slip(&self) -> Option<&Slip> {
        self.slip.as_ref()
    }

    /// Outcome of the most recent block throw.
    pub fn outcome(&self) -> ThrowOutcome {
        self.outcome
    }

    /// The completed reading, once the ritual reaches its result.
    pub fn interpretation(&self) -> Option<&Interpretation> {
        self.interpretation.as_ref()
    }

    /// Whether a block throw is in flight.
    pub fn is_throwing(&self) -> bool {
        self.throwing
    }

    /// Whether an interpretation request is in flight.
    pub fn is_interpreting(&self) -> bool {
        self.interpreting
    }

    /// The current ritual generation tag.
    ///
    /// Capture this before spawning an interpretation externally and pass
    /// it back through [`RitualSession::apply_interpretation`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin the ritual: shake the cylinder and draw a slip.
    ///
    /// Transitions idle → shaking → confirming. While no backend is
    /// configured the draw is restricted to the curated corpus prefix.
    pub async fn start(&mut self) -> RitualResult<()> {
        if self.stage != Stage::Idle {
            return Err(RitualError::WrongStage {
                action: "start",
                stage: self.stage,
            });
        }
        self.stage = Stage::Shaking;
        sleep(self.config.shake_delay).await;
        // The stick has emerged; let it linger before the slip is read.
        sleep(self.config.reveal_delay).await;

        let curated = if self.interpreter.is_configured() {
            None
        } else {
            Some(self.config.curated_prefix)
        };
        let index = draw_slip_index(&mut self.rng, self.corpus.len(), curated);
        self.slip = Some(self.corpus.slips()[index].clone());
        self.stage = Stage::Confirming;
        Ok(())
    }

    /// Throw the confirmation blocks.
    ///
    /// Returns the outcome. A holy outcome invokes the interpreter and
    /// moves the session to the result stage; smile and yin leave it
    /// confirming for another throw. Calling while a throw is already in
    /// flight is a no-op that returns the current outcome.
    pub async fn throw(&mut self) -> RitualResult<ThrowOutcome> {
        if self.stage != Stage::Confirming {
            return Err(RitualError::WrongStage {
                action: "throw",
                stage: self.stage,
            });
        }
        if self.throwing {
            return Ok(self.outcome);
        }

        self.throwing = true;
        self.outcome = ThrowOutcome::Unthrown;
        sleep(self.config.throw_delay).await;
        let outcome = throw_blocks(&mut self.rng);
        self.outcome = outcome;
        self.throwing = false;

        if outcome.is_affirmative()
            && !self.interpreting
            && let Some(slip) = self.slip.clone()
        {
            self.interpreting = true;
            let generation = self.generation;
            let reading = self.interpreter.interpret(&slip).await;
            self.apply_interpretation(generation, reading);
        }
        Ok(outcome)
    }

    /// Apply a completed reading if it still belongs to this ritual.
    ///
    /// A reading tagged with a generation older than the current one comes
    /// from a ritual that was reset while its request was outstanding; it
    /// is dropped without touching session state.
    pub fn apply_interpretation(&mut self, generation: u64, reading: Interpretation) {
        if generation != self.generation {
            return;
        }
        self.interpretation = Some(reading);
        self.interpreting = false;
        self.stage = Stage::Result;
    }

    /// Reset to idle, discarding the drawn slip and any outstanding reading.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.stage = Stage::Idle;
        self.slip = None;
        self.outcome = ThrowOutcome::Unthrown;
        self.interpretation = None;
        self.throwing = false;
        self.interpreting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lq_core::{Category, CategoryAdvice};

    /// Interpreter stub with a fixed configured flag and canned reading.
    struct StubInterpreter {
        configured: bool,
    }

    fn canned_reading() -> Interpretation {
        Interpretation {
            insight: "万象更新。".to_string(),
            advice: Category::ALL
                .iter()
                .map(|category| CategoryAdvice {
                    category: *category,
                    content: format!("{category}平顺。"),
                })
                .collect(),
        }
    }

    #[async_trait]
    impl Interpreter for StubInterpreter {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn interpret(&self, _slip: &Slip) -> Interpretation {
            canned_reading()
        }
    }

    fn corpus(len: u32) -> Arc<Corpus> {
        let slips = (1..=len)
            .map(|id| Slip {
                id,
                title: format!("签题{id}"),
                kind: "中签".to_string(),
                poetry: "一行。两行。".to_string(),
                meaning: "诗意。".to_string(),
                explanation: "解曰。".to_string(),
            })
            .collect();
        Arc::new(Corpus::new(slips).unwrap())
    }

    fn session(seed: u64, corpus_len: u32, configured: bool) -> RitualSession {
        RitualSession::new(
            corpus(corpus_len),
            Arc::new(StubInterpreter { configured }),
            RitualConfig::default().with_seed(seed).without_delays(),
        )
    }

    #[tokio::test]
    async fn new_session_is_idle() {
        let s = session(42, 12, true);
        assert_eq!(s.stage(), Stage::Idle);
        assert!(s.slip().is_none());
        assert_eq!(s.outcome(), ThrowOutcome::Unthrown);
        assert!(s.interpretation().is_none());
        assert!(!s.is_throwing());
        assert!(!s.is_interpreting());
    }

    #[tokio::test]
    async fn start_draws_a_slip_and_confirms() {
        let mut s = session(42, 12, true);
        s.start().await.unwrap();
        assert_eq!(s.stage(), Stage::Confirming);
        assert!(s.slip().is_some());
    }

    #[tokio::test]
    async fn start_twice_is_rejected() {
        let mut s = session(42, 12, true);
        s.start().await.unwrap();
        assert!(matches!(
            s.start().await,
            Err(RitualError::WrongStage { action: "start", .. })
        ));
    }

    #[tokio::test]
    async fn throw_before_start_is_rejected() {
        let mut s = session(42, 12, true);
        assert!(matches!(
            s.throw().await,
            Err(RitualError::WrongStage { action: "throw", .. })
        ));
    }

    #[tokio::test]
    async fn holy_throw_completes_the_ritual() {
        let mut s = session(42, 12, true);
        s.start().await.unwrap();
        for _ in 0..100 {
            let outcome = s.throw().await.unwrap();
            if outcome.is_affirmative() {
                break;
            }
        }
        assert_eq!(s.stage(), Stage::Result);
        assert_eq!(s.interpretation(), Some(&canned_reading()));
        assert!(!s.is_interpreting());
    }

    #[tokio::test]
    async fn non_holy_throws_stay_confirming() {
        // First throws across seeds cover both branches deterministically.
        let mut saw_confirming = false;
        let mut saw_result = false;
        for seed in 0..40 {
            let mut s = session(seed, 12, true);
            s.start().await.unwrap();
            let outcome = s.throw().await.unwrap();
            if outcome.is_affirmative() {
                assert_eq!(s.stage(), Stage::Result);
                saw_result = true;
            } else {
                assert_eq!(s.stage(), Stage::Confirming);
                assert!(s.interpretation().is_none());
                saw_confirming = true;
            }
        }
        assert!(saw_confirming && saw_result);
    }

    #[tokio::test]
    async fn unconfigured_draws_stay_in_curated_prefix() {
        let mut s = session(42, 50, false);
        for _ in 0..300 {
            s.start().await.unwrap();
            let id = s.slip().unwrap().id;
            assert!(id <= 10, "drew slip {id} outside the curated prefix");
            s.reset();
        }
    }

    #[tokio::test]
    async fn configured_draws_reach_past_the_prefix() {
        let mut s = session(42, 50, true);
        let mut past_prefix = false;
        for _ in 0..300 {
            s.start().await.unwrap();
            if s.slip().unwrap().id > 10 {
                past_prefix = true;
            }
            s.reset();
        }
        assert!(past_prefix, "300 configured draws never left the prefix");
    }

    #[tokio::test]
    async fn reset_clears_all_fields() {
        let mut s = session(42, 12, true);
        s.start().await.unwrap();
        for _ in 0..100 {
            if s.throw().await.unwrap().is_affirmative() {
                break;
            }
        }
        s.reset();
        assert_eq!(s.stage(), Stage::Idle);
        assert!(s.slip().is_none());
        assert_eq!(s.outcome(), ThrowOutcome::Unthrown);
        assert!(s.interpretation().is_none());
    }

    #[tokio::test]
    async fn stale_reading_is_discarded_after_reset() {
        let mut s = session(42, 12, true);
        s.start().await.unwrap();
        let stale_generation = s.generation();

        // The seeker walks away while the request is outstanding.
        s.reset();
        s.apply_interpretation(stale_generation, canned_reading());

        assert_eq!(s.stage(), Stage::Idle);
        assert!(s.interpretation().is_none());
    }

    #[tokio::test]
    async fn current_generation_reading_is_applied() {
        let mut s = session(42, 12, true);
        s.start().await.unwrap();
        s.apply_interpretation(s.generation(), canned_reading());
        assert_eq!(s.stage(), Stage::Result);
        assert_eq!(s.interpretation(), Some(&canned_reading()));
    }

    #[tokio::test]
    async fn generation_advances_on_every_reset() {
        let mut s = session(42, 12, true);
        let first = s.generation();
        s.reset();
        s.reset();
        assert_eq!(s.generation(), first + 2);
    }

    #[tokio::test]
    async fn same_seed_replays_the_same_ritual() {
        let mut a = session(7, 12, true);
        let mut b = session(7, 12, true);
        a.start().await.unwrap();
        b.start().await.unwrap();
        assert_eq!(a.slip().map(|s| s.id), b.slip().map(|s| s.id));
        assert_eq!(a.throw().await.unwrap(), b.throw().await.unwrap());
    }
}
