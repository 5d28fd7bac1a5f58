//! Property-based tests for the card state machine
//!
//! Uses proptest to throw arbitrary interaction sequences at the machine and
//! check the invariants the UI relies on.

use proptest::prelude::*;
use lovenote_core::toast::MAX_VISIBLE;
use lovenote_core::{
    CardContent, CardMachine, Cue, Effect, Event, FlipDeck, LetterPhase, Scene, StampLine,
    TimerFired, Timings, Typewriter,
};
use std::time::Duration;

// ============================================================================
// Strategy Generators
// ============================================================================

/// User interactions (timers are interleaved separately)
fn user_event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        2 => Just(Event::OpenGift),
        2 => Just(Event::OpenEnvelope),
        3 => Just(Event::Continue),
        4 => (0u32..5).prop_map(Event::FlipCard),
        1 => Just(Event::OpenFinalLetter),
        1 => Just(Event::StayHere),
        1 => Just(Event::Restart),
        2 => Just(Event::CopyLetter),
        2 => Just(Event::CopyFinished(Ok(()))),
        1 => Just(Event::CopyFinished(Err("clipboard unavailable".to_string()))),
    ]
}

/// A step performs a user event, fires some pending timers, or clicks one
/// of the visible toasts (index taken modulo the visible count)
#[derive(Debug, Clone)]
enum Step {
    User(Event),
    FireTimers(usize),
    DismissToast(usize),
}

fn steps_strategy(max: usize) -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(
        prop_oneof![
            3 => user_event_strategy().prop_map(Step::User),
            2 => (1usize..20).prop_map(Step::FireTimers),
            1 => (0usize..MAX_VISIBLE).prop_map(Step::DismissToast),
        ],
        0..max,
    )
}

/// Apply steps, keeping scheduled cues in a FIFO and checking invariants
/// after every transition.
fn run_steps(steps: Vec<Step>) -> Result<CardMachine, TestCaseError> {
    let mut machine = CardMachine::new(CardContent::default(), Timings::default());
    let mut timers: std::collections::VecDeque<TimerFired> = Default::default();

    for step in steps {
        let effects = match step {
            Step::User(event) => machine.handle(event),
            Step::FireTimers(n) => {
                let mut out = Vec::new();
                for _ in 0..n {
                    if let Some(fired) = timers.pop_front() {
                        out.extend(machine.handle(Event::Timer(fired)));
                    }
                }
                out
            }
            Step::DismissToast(n) => {
                let ids: Vec<_> = machine.toasts().map(|t| t.id()).collect();
                match ids.get(n % ids.len().max(1)) {
                    Some(&id) => machine.handle(Event::DismissToast(id)),
                    None => Vec::new(),
                }
            }
        };
        for effect in effects {
            if let Effect::Schedule { cue, epoch, .. } = effect {
                timers.push_back(TimerFired { cue, epoch });
            }
        }
        check_invariants(&machine)?;
        check_toast_expiry(&machine, &timers)?;
    }
    Ok(machine)
}

/// Every visible toast still has its expiry cue waiting to fire.
fn check_toast_expiry(
    m: &CardMachine,
    timers: &std::collections::VecDeque<TimerFired>,
) -> Result<(), TestCaseError> {
    for toast in m.toasts() {
        prop_assert!(
            timers.iter().any(|t| t.cue == Cue::ExpireToast(toast.id())),
            "toast {:?} has no pending expiry",
            toast.id()
        );
    }
    Ok(())
}

fn check_invariants(m: &CardMachine) -> Result<(), TestCaseError> {
    // The unlock modal only ever shows over a fully flipped gallery
    if m.modal_open() {
        prop_assert_eq!(m.scene(), Scene::Gallery);
        prop_assert!(m.deck().all_flipped());
    }

    // Stamp text stays empty until the letter is shown
    if !m.phase().is_letter_shown() {
        prop_assert_eq!(m.stamp_text(StampLine::Love), "");
        prop_assert_eq!(m.stamp_text(StampLine::Stamped), "");
        prop_assert_eq!(m.signature_text(), "");
        prop_assert!(!m.can_continue());
    }

    // Typed text is always a prefix of the content
    let letter = &m.content().letter;
    prop_assert!(letter.stamp_top.starts_with(m.stamp_text(StampLine::Love)));
    prop_assert!(letter.stamp_bottom.starts_with(m.stamp_text(StampLine::Stamped)));
    prop_assert!(letter.signature.starts_with(m.signature_text()));

    // Hero is a clean slate
    if m.scene() == Scene::Hero {
        prop_assert_eq!(m.phase(), LetterPhase::Sealed);
        prop_assert_eq!(m.deck().flipped_count(), 0);
    }

    // Toast overflow waits in the queue behind a full stack
    let toaster = m.toaster();
    prop_assert!(toaster.visible_count() <= MAX_VISIBLE);
    if toaster.queued_count() > 0 {
        prop_assert_eq!(toaster.visible_count(), MAX_VISIBLE);
    }

    let progress = m.deck().progress_percent();
    prop_assert!((0.0..=100.0).contains(&progress));
    Ok(())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// No interleaving of clicks and timers breaks the card's invariants
    #[test]
    fn arbitrary_interactions_keep_invariants(steps in steps_strategy(120)) {
        run_steps(steps)?;
    }

    /// Restart always lands on a fresh hero, whatever came before
    #[test]
    fn restart_always_resets(steps in steps_strategy(60)) {
        let mut machine = run_steps(steps)?;
        machine.handle(Event::Restart);
        prop_assert_eq!(machine.scene(), Scene::Hero);
        prop_assert!(!machine.modal_open());
        prop_assert!(!machine.confetti_active());
        prop_assert_eq!(machine.signature_text(), "");
    }

    /// Toggling a card an even number of times leaves it face up
    #[test]
    fn even_toggles_cancel_out(id in 1u32..4, times in 0usize..10) {
        let mut deck = FlipDeck::new([1, 2, 3]);
        for _ in 0..times * 2 {
            deck.toggle(id).unwrap();
        }
        prop_assert!(!deck.is_flipped(id));
        prop_assert_eq!(deck.flipped_count(), 0);
    }

    /// Progress is proportional to the number of distinct flipped cards
    #[test]
    fn progress_matches_flipped_set(ids in prop::collection::vec(1u32..6, 0..20)) {
        let mut deck = FlipDeck::new(1..=5);
        let mut expected = std::collections::BTreeSet::new();
        for id in ids {
            deck.toggle(id).unwrap();
            if !expected.remove(&id) {
                expected.insert(id);
            }
        }
        prop_assert_eq!(deck.flipped_count(), expected.len());
        prop_assert!((deck.progress_percent() - expected.len() as f64 * 20.0).abs() < 1e-9);
    }

    /// A typewriter needs exactly chars + 2 ticks and only ever shows prefixes
    #[test]
    fn typewriter_tick_count(text in "\\PC{0,40}") {
        let mut tw = Typewriter::stepped(text.clone(), Duration::from_millis(100));
        let mut ticks = 1;
        while tw.tick() {
            prop_assert!(text.starts_with(tw.visible()));
            ticks += 1;
        }
        prop_assert_eq!(ticks, text.chars().count() + 2);
        prop_assert_eq!(tw.visible(), text.as_str());
    }
}
