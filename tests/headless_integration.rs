use std::sync::mpsc;
use std::time::Duration;

use typerace::clock::ManualClock;
use typerace::display::{DisplayUpdate, RecordingDisplay};
use typerace::feedback::{unstyled, WordStatus};
use typerace::runtime::{ChannelEventSource, FixedTicker, RaceEvent, Runner, SessionEvent};
use typerace::session::State;
use typerace::Engine;

// Headless integration using the runtime + Engine without a TTY.
// Verifies that a full start/type/stop/retry cycle goes through Runner/ChannelEventSource.
#[test]
fn headless_session_flow_completes() {
    // Arrange: engine with a manual clock so timing is exact
    let clock = ManualClock::new();
    let mut engine = Engine::new(RecordingDisplay::new(), clock.clone());

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        ChannelEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    tx.send(RaceEvent::Session(SessionEvent::ReferenceTextAvailable {
        text: "The cat sat on the mat.".into(),
        label: "Easy".into(),
    }))
    .unwrap();
    tx.send(RaceEvent::Session(SessionEvent::Start)).unwrap();
    let mut typed = String::new();
    for c in "the cat sat on the hat.".chars() {
        typed.push(c);
        tx.send(RaceEvent::Session(SessionEvent::TypedTextChanged(typed.clone())))
            .unwrap();
    }

    // Act: drive a tiny event loop until the queue is drained
    for _ in 0..100u32 {
        match runner.step() {
            RaceEvent::Session(event) => engine.dispatch(event),
            RaceEvent::Tick => break,
            _ => {}
        }
    }
    assert_eq!(engine.state(), State::Running);

    clock.advance_ms(10_000);
    tx.send(RaceEvent::Session(SessionEvent::Stop)).unwrap();
    if let RaceEvent::Session(event) = runner.step() {
        engine.dispatch(event);
    }

    // Assert
    assert_eq!(engine.state(), State::Stopped);
    let result = engine.session().result.expect("stopped session has a result");
    assert_eq!(result.correct_words, 5);
    assert_eq!(result.elapsed_secs, 10.0);
    assert_eq!(result.wpm, 30.0);
    assert_eq!(engine.display().last_elapsed(), Some(10.0));
    assert_eq!(engine.display().last_wpm(), Some(30.0));

    let feedback = engine.display().last_feedback().unwrap();
    let statuses: Vec<WordStatus> = feedback.iter().map(|f| f.status).collect();
    assert_eq!(
        statuses,
        vec![
            WordStatus::Correct,
            WordStatus::Correct,
            WordStatus::Correct,
            WordStatus::Correct,
            WordStatus::Correct,
            WordStatus::Incorrect,
        ]
    );
}

#[test]
fn headless_retry_after_running_resets_display() {
    let clock = ManualClock::new();
    let mut engine = Engine::new(RecordingDisplay::new(), clock.clone());
    engine.on_reference_text_available("All that glitters is not gold.", "Medium");

    engine.on_start_requested();
    engine.on_typed_text_changed("All that");
    clock.advance_ms(1200);
    engine.display_mut().take();

    engine.on_retry_requested();

    assert_eq!(engine.state(), State::Idle);
    let updates = engine.display_mut().take();
    assert_eq!(
        updates,
        vec![
            DisplayUpdate::Elapsed(0.0),
            DisplayUpdate::Wpm(0.0),
            DisplayUpdate::Accuracy(0.0),
            DisplayUpdate::ClearInput,
            DisplayUpdate::DifficultyLabel("Medium".into()),
            DisplayUpdate::WordFeedback(unstyled("All that glitters is not gold.")),
            DisplayUpdate::Controls {
                start: true,
                stop: false,
                retry: false
            },
            DisplayUpdate::FocusInput,
        ]
    );
}

#[test]
fn headless_double_start_keeps_first_timestamp() {
    let clock = ManualClock::new();
    let mut engine = Engine::new(RecordingDisplay::new(), clock.clone());
    engine.on_reference_text_available("one two three", "Easy");

    engine.dispatch(SessionEvent::Start);
    let first = engine.session().started_at;
    clock.advance_ms(5000);
    engine.dispatch(SessionEvent::Start);
    engine.dispatch(SessionEvent::TypedTextChanged("one two three".into()));
    clock.advance_ms(1000);
    engine.dispatch(SessionEvent::Stop);

    assert_eq!(engine.session().started_at, first);
    assert_eq!(engine.session().elapsed_secs, Some(6.0));
    assert_eq!(engine.session().wpm(), 30.0);
}
