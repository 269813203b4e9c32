// tests/run_flow.rs - full runs through the default course
use glam::Vec3;
use lanedash::config::RunnerConfig;
use lanedash::player::{FrameInput, RunOutcome};
use lanedash::scene::SceneEvent;
use lanedash::session::RunSession;
use lanedash::world::{CharacterMover, TrackWorld};

const DT: f32 = 1.0 / 60.0;

fn new_session(config: &RunnerConfig) -> RunSession {
    let mover: Box<dyn CharacterMover> = Box::new(TrackWorld::from_course(
        &config.course,
        config.player.lane_distance,
    ));
    RunSession::new(config, Some(mover)).unwrap()
}

/// Steps until `max_seconds` pass or the run ends, pressing the lane keys at
/// the scripted forward positions. Returns fired scene events.
fn drive(
    session: &mut RunSession,
    max_seconds: f32,
    mut plan: Vec<(f32, FrameInput)>,
) -> Vec<SceneEvent> {
    let mut fired = Vec::new();
    let mut elapsed = 0.0;
    while elapsed < max_seconds {
        let z = session.player_position().z;
        let mut input = FrameInput::default();
        if let Some((trigger_z, planned)) = plan.first().copied() {
            if z >= trigger_z {
                input = planned;
                plan.remove(0);
            }
        }
        fired.extend(session.step(DT, input));
        elapsed += DT;
        // After a terminal transition, keep ticking until the reload fires.
        if !fired.is_empty() {
            break;
        }
    }
    fired
}

fn left() -> FrameInput {
    FrameInput {
        lane_left: true,
        ..Default::default()
    }
}

fn right() -> FrameInput {
    FrameInput {
        lane_right: true,
        ..Default::default()
    }
}

#[test]
fn running_straight_into_the_first_obstacle_dies_and_reloads_after_one_second() {
    let config = RunnerConfig::default();
    let mut session = new_session(&config);

    // No inputs: the center lane obstacle at z=20 ends the run.
    let fired = drive(&mut session, 30.0, vec![]);

    assert_eq!(session.outcome(), Some(RunOutcome::Dead));
    assert_eq!(fired, vec![SceneEvent::Reload]);

    // Death happens around z=19 at forward speed 5; the player froze there.
    let z = session.player_position().z;
    assert!(z > 15.0 && z < 25.0, "died at unexpected z={}", z);
}

#[test]
fn weaving_through_the_course_reaches_the_finish_and_wins() {
    let config = RunnerConfig::default();
    let mut session = new_session(&config);

    // Default course: obstacles at z 20 (lane 1), 40 (lane 0), 55 (lane 2),
    // 75 (lane 1), 95 (lane 0); finish at 120.
    let plan = vec![
        (1.0, right()),  // 1 -> 2, clears 20 and 40
        (45.0, left()),  // 2 -> 1, clears 55
        (60.0, left()),  // 1 -> 0, clears 75
        (80.0, right()), // 0 -> 1, clears 95
    ];
    let fired = drive(&mut session, 40.0, plan);

    assert_eq!(session.outcome(), Some(RunOutcome::Win));
    assert_eq!(fired, vec![SceneEvent::Reload]);
    assert!(session.player_position().z >= config.course.finish_z);
}

#[test]
fn win_reload_fires_five_seconds_after_the_finish() {
    let config = RunnerConfig::default();
    let mut session = new_session(&config);

    let plan = vec![
        (1.0, right()),
        (45.0, left()),
        (60.0, left()),
        (80.0, right()),
    ];

    // Run until the win transition, counting frames after it.
    let mut plan = plan;
    let mut frames_after_win = 0u32;
    let mut fired = Vec::new();
    for _ in 0..(60 * 40) {
        let z = session.player_position().z;
        let mut input = FrameInput::default();
        if let Some((trigger_z, planned)) = plan.first().copied() {
            if z >= trigger_z {
                input = planned;
                plan.remove(0);
            }
        }
        let events = session.step(DT, input);
        if session.outcome() == Some(RunOutcome::Win) {
            frames_after_win += 1;
        }
        if !events.is_empty() {
            fired = events;
            break;
        }
    }

    assert_eq!(fired, vec![SceneEvent::Reload]);
    let seconds_after_win = frames_after_win as f32 * DT;
    assert!(
        (seconds_after_win - 5.0).abs() < 0.1,
        "reload fired {}s after win",
        seconds_after_win
    );
}

#[test]
fn jumping_clears_a_center_lane_obstacle() {
    let config = RunnerConfig::default();
    let mut session = new_session(&config);

    // Stay in the center lane and jump just before the z=20 obstacle. The
    // arc peaks at 2.5 units, enough to pass over the box.
    let mut jumped = false;
    let mut elapsed = 0.0;
    while elapsed < 6.0 {
        let z = session.player_position().z;
        let mut input = FrameInput::default();
        if !jumped && z >= 17.4 {
            input.jump = true;
            jumped = true;
        }
        session.step(DT, input);
        elapsed += DT;
        if z > 26.0 {
            break;
        }
    }

    assert!(jumped);
    assert_eq!(session.outcome(), None);
    assert!(session.player().is_alive());
    assert!(session.player_position().z > 25.0);
}

#[test]
fn camera_trails_at_the_configured_offset_for_the_whole_run() {
    let config = RunnerConfig::default();
    let offset = Vec3::from_array(config.camera.offset);
    let mut session = new_session(&config);

    for _ in 0..120 {
        session.step(DT, FrameInput::default());
        let gap = session.camera_position() - session.player_position();
        assert!((gap - offset).length() < 1e-4);
    }
}
