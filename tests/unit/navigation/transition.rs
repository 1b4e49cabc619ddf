use super::*;

const FRAME: f64 = 1.0 / 60.0;

fn settle(ctl: &mut PageTransitionController) {
    for _ in 0..240 {
        ctl.tick(FRAME);
    }
}

fn controller() -> PageTransitionController {
    let mut ctl = PageTransitionController::new(TransitionConfig::default(), "/");
    settle(&mut ctl);
    ctl.drain_events();
    ctl
}

#[test]
fn initial_view_enters_from_initial_state() {
    let mut ctl = PageTransitionController::new(TransitionConfig::default(), "/");
    assert_eq!(ctl.phase(), TransitionPhase::EnterRunning);
    assert_eq!(ctl.view_state(), RouteTransitionState::Initial);
    ctl.tick(FRAME);
    assert_eq!(ctl.view_state(), RouteTransitionState::Entering);
    settle(&mut ctl);
    assert_eq!(ctl.view_state(), RouteTransitionState::Entered);
    assert!(ctl.is_idle());
}

#[test]
fn exit_finishes_before_enter_starts() {
    let mut ctl = controller();
    assert!(ctl.navigate("/blog"));
    assert_eq!(ctl.phase(), TransitionPhase::ExitRunning);
    assert_eq!(ctl.current_key(), "/");

    // While exiting only the outgoing view is present.
    ctl.tick(0.1);
    let p = ctl.presence();
    assert!(p.incoming.is_none());
    let out = p.outgoing.unwrap();
    assert_eq!(out.key, "/");
    assert!(out.style.opacity < 1.0 && out.style.opacity > 0.0);

    ctl.tick(0.2);
    assert_eq!(ctl.phase(), TransitionPhase::EnterRunning);
    assert_eq!(ctl.current_key(), "/blog");
    assert!(ctl.presence().outgoing.is_none());

    settle(&mut ctl);
    assert!(ctl.is_idle());
    assert_eq!(
        ctl.drain_events(),
        vec![
            TransitionEvent::ExitStarted {
                from: "/".into(),
                to: "/blog".into()
            },
            TransitionEvent::ExitCompleted { key: "/".into() },
            TransitionEvent::EnterStarted {
                key: "/blog".into()
            },
            TransitionEvent::EnterCompleted {
                key: "/blog".into()
            },
        ]
    );
}

#[test]
fn navigating_to_the_same_key_is_a_noop() {
    let mut ctl = controller();
    assert!(!ctl.navigate("/"));
    assert!(ctl.is_idle());
    assert!(ctl.navigate("/blog"));
    assert!(!ctl.navigate("/blog"));
    assert_eq!(ctl.generation(), 1);
}

#[test]
fn rapid_navigation_only_completes_the_last_route() {
    let mut ctl = controller();
    ctl.navigate("/blog");
    ctl.tick(FRAME);
    ctl.navigate("/blog/second");
    ctl.tick(FRAME);
    settle(&mut ctl);

    assert!(ctl.is_idle());
    assert_eq!(ctl.current_key(), "/blog/second");
    let events = ctl.drain_events();
    let completed: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            TransitionEvent::EnterCompleted { key } => Some(key.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(completed, vec!["/blog/second"]);
    assert!(events.contains(&TransitionEvent::Abandoned { key: "/blog".into() }));
}

#[test]
fn abandoning_an_enter_exits_the_half_entered_view() {
    let mut ctl = controller();
    ctl.navigate("/blog");
    for _ in 0..20 {
        ctl.tick(FRAME);
    }
    assert_eq!(ctl.phase(), TransitionPhase::EnterRunning);

    ctl.navigate("/");
    assert_eq!(ctl.phase(), TransitionPhase::ExitRunning);
    assert_eq!(ctl.current_key(), "/blog");
    assert_eq!(ctl.target_key(), "/");
    settle(&mut ctl);
    assert_eq!(ctl.current_key(), "/");
}

#[test]
fn reduced_motion_completes_synchronously() {
    let config = TransitionConfig {
        reduced_motion: true,
        ..TransitionConfig::default()
    };
    let mut ctl = PageTransitionController::new(config, "/");
    assert!(ctl.is_idle());

    ctl.navigate("/blog");
    assert!(ctl.is_idle());
    assert_eq!(ctl.current_key(), "/blog");
    assert_eq!(ctl.view_state(), RouteTransitionState::Entered);
}

#[test]
fn enabling_reduced_motion_mid_flight_finishes_the_transition() {
    let mut ctl = controller();
    ctl.navigate("/blog");
    ctl.tick(FRAME);
    ctl.set_reduced_motion(true);
    assert!(ctl.is_idle());
    assert_eq!(ctl.current_key(), "/blog");
}

#[test]
fn idle_presence_is_fully_visible() {
    let ctl = controller();
    let p = ctl.presence();
    assert!(p.outgoing.is_none());
    let view = p.incoming.unwrap();
    assert_eq!(view.state, RouteTransitionState::Entered);
    assert_eq!(view.style.opacity, 1.0);
    assert_eq!(view.style.offset_y, 0.0);
}
