use super::*;
use pretty_assertions::assert_eq;

fn delays(specs: &[AnimationSpec]) -> Vec<f64> {
    specs.iter().map(|s| s.delay_ms).collect()
}

#[test]
fn hero_timeline_resolves_overlaps_to_absolute_delays() {
    let timeline = Timeline::new()
        .then(AnimationSpec::new(".hero-title", Preset::FadeInUp).duration(1000.0).from_y(100.0))
        .then_at(AnimationSpec::new(".hero-subtitle", Preset::FadeInUp), Position::Overlap(500.0))
        .then_at(AnimationSpec::new(".hero-description", Preset::FadeInUp).duration(600.0), Position::Overlap(300.0))
        .then_at(AnimationSpec::new(".hero-buttons", Preset::ScaleIn), Position::Overlap(200.0));
    assert_eq!(delays(&timeline.clone().into_specs()), vec![0.0, 500.0, 1000.0, 1400.0]);
    assert_eq!(timeline.duration_ms(), 2000.0);
}

#[test]
fn timeline_entries_never_start_before_zero() {
    let specs = Timeline::new()
        .then_at(AnimationSpec::new(".a", Preset::FadeInUp), Position::Overlap(500.0))
        .into_specs();
    assert_eq!(specs[0].delay_ms, 0.0);
}

#[test]
fn timeline_forces_mount_trigger_and_keeps_own_delay() {
    let specs = Timeline::new()
        .then(AnimationSpec::new(".a", Preset::FadeInUp).duration(100.0))
        .then_at(AnimationSpec::new(".b", Preset::FadeInUp).on_scroll().delay(50.0), Position::AfterPrevious)
        .into_specs();
    assert_eq!(specs[1].trigger, Trigger::Mount);
    assert_eq!(specs[1].delay_ms, 150.0);
}

#[test]
fn absolute_position_ignores_cursor() {
    let specs = Timeline::new()
        .then(AnimationSpec::new(".a", Preset::Reveal))
        .then_at(AnimationSpec::new(".b", Preset::FadeInUp), Position::At(200.0))
        .into_specs();
    assert_eq!(specs[1].delay_ms, 200.0);
}

#[test]
fn stagger_offsets_each_matched_element() {
    let spec = AnimationSpec::new(".nav-item", Preset::SlideDown { distance_px: 20.0 })
        .delay(500.0)
        .stagger(100.0);
    let offsets: Vec<f64> = (0..3).map(|i| spec.element_delay_ms(i)).collect();
    assert_eq!(offsets, vec![500.0, 600.0, 700.0]);
}

#[test]
fn default_scroll_actions_play_then_reverse_on_leave_back() {
    let actions = ToggleActions::PLAY_REVERSE;
    assert_eq!(actions.action(ScrollEdge::Enter), Action::Play);
    assert_eq!(actions.action(ScrollEdge::Leave), Action::None);
    assert_eq!(actions.action(ScrollEdge::EnterBack), Action::None);
    assert_eq!(actions.action(ScrollEdge::LeaveBack), Action::Reverse);
}

#[test]
fn mount_animations_never_reverse() {
    let mount = AnimationSpec::new(".logo", Preset::ScaleIn);
    let scroll = AnimationSpec::new(".card", Preset::FadeInUp).on_scroll();
    let once = AnimationSpec::new(".card", Preset::FadeInUp).scroll_with(None, ToggleActions::PLAY_ONCE);
    assert!(!mount.reverses());
    assert!(scroll.reverses());
    assert!(!once.reverses());
    assert!(AnimationSpec::new(".btn", Preset::Pulse).on_hover().reverses());
}

#[test]
fn trigger_selector_defaults_to_target() {
    let own = AnimationSpec::new(".card", Preset::FadeInUp).on_scroll();
    let section = AnimationSpec::new(".service-card", Preset::FadeInUp).on_scroll_of(".services-grid");
    assert_eq!(own.trigger_selector(), ".card");
    assert_eq!(section.trigger_selector(), ".services-grid");
}

#[test]
fn scroll_tracker_reports_edges_in_both_directions() {
    let mut tracker = ScrollTracker::default();
    assert!(tracker.observe(false, true).is_empty());
    assert_eq!(tracker.observe(true, false), vec![ScrollEdge::Enter]);
    assert_eq!(tracker.observe(false, false), vec![ScrollEdge::Leave]);
    assert_eq!(tracker.observe(true, false), vec![ScrollEdge::EnterBack]);
    assert_eq!(tracker.observe(false, true), vec![ScrollEdge::LeaveBack]);
}

#[test]
fn scroll_tracker_reports_both_edges_when_jumping_past() {
    let mut tracker = ScrollTracker::default();
    assert_eq!(tracker.observe(false, false), vec![ScrollEdge::Enter, ScrollEdge::Leave]);
    assert_eq!(tracker.observe(false, true), vec![ScrollEdge::EnterBack, ScrollEdge::LeaveBack]);
}

#[test]
fn repeated_observation_is_silent() {
    let mut tracker = ScrollTracker::default();
    tracker.observe(true, false);
    assert!(tracker.observe(true, false).is_empty());
}

#[test]
fn unobservable_trigger_plays_its_own_animation_once() {
    let mut tracker = ScrollTracker::default();
    let edges = tracker.assume_entered();
    assert_eq!(edges, vec![ScrollEdge::Enter]);
    let actions: Vec<Action> = edges.iter().map(|&edge| ToggleActions::PLAY_REVERSE.action(edge)).collect();
    assert_eq!(actions, vec![Action::Play]);
    assert!(tracker.observe(true, false).is_empty());
}

#[test]
fn frame_css_output() {
    let reveal = Preset::Reveal.motion();
    assert_eq!(reveal.from.transform(), "translate(0px, 50px) scale(1)");
    assert_eq!(reveal.from.clip_path().as_deref(), Some("inset(100% 0 0 0)"));
    let parallax = Preset::Parallax { speed: 0.5 }.motion();
    assert_eq!(parallax.to.transform(), "translate(0px, 0px) translateY(-25%) scale(1)");
    assert_eq!(Frame::IDENTITY.clip_path(), None);
}

#[test]
fn floating_repeats_and_others_run_once() {
    assert_eq!(Preset::Floating.motion().repeat, Repeat::YoyoForever);
    assert_eq!(Preset::FadeInLeft.motion().repeat, Repeat::Once);
    assert_eq!(Preset::FadeInLeft.motion().from.x_px, -50.0);
    assert_eq!(Preset::FadeInRight.motion().from.x_px, 50.0);
}

#[test]
fn scroll_progress_helpers_clamp() {
    assert_eq!(element_scroll_progress(800.0, 200.0, 800.0), 0.0);
    assert_eq!(element_scroll_progress(300.0, 200.0, 800.0), 0.5);
    assert_eq!(element_scroll_progress(-500.0, 200.0, 800.0), 1.0);
    assert_eq!(document_scroll_progress(500.0, 1800.0, 800.0), 0.5);
    assert_eq!(document_scroll_progress(10.0, 600.0, 800.0), 0.0);
}

#[test]
fn schedule_filters_by_target() {
    let schedule = AnimationSchedule::new()
        .with(AnimationSpec::new(".a", Preset::FadeInUp))
        .with(AnimationSpec::new(".b", Preset::FadeInUp))
        .with(AnimationSpec::new(".a", Preset::Lift).on_hover());
    assert_eq!(schedule.for_target(".a").count(), 2);
    assert_eq!(schedule.specs().len(), 3);
    assert!(AnimationSchedule::new().is_empty());
}

#[test]
fn grow_x_scales_horizontally_only() {
    let grow = Preset::GrowX.motion();
    assert_eq!(grow.from.transform(), "translate(0px, 0px) scale(1) scaleX(0)");
    assert_eq!(grow.to.transform(), "translate(0px, 0px) scale(1)");
}
