//! Stylesheet — entrance targets start hidden in the served CSS
//!
//! Server-rendered HTML is visible before hydration runs the animation
//! schedules. Every element a schedule fades in from transparent must be
//! transparent in `public/style.css` too, or it flashes visible and then
//! snaps back to its first keyframe.

use std::collections::HashSet;
use std::fs;

use client::components::{header::header_schedule, scroll_progress::progress_schedule};
use client::pages::home::home_schedule;
use client::util::animation::{AnimationSchedule, Trigger};

fn stylesheet() -> String {
    fs::read_to_string("../public/style.css").unwrap_or_default()
}

/// Selectors of every rule whose body sets `opacity: 0`.
fn hidden_selectors(css: &str) -> HashSet<String> {
    let mut hidden = HashSet::new();
    let mut rest = css;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            break;
        };
        let prelude = &rest[..open];
        let prelude = prelude.rsplit_once("*/").map_or(prelude, |(_, after)| after);
        let body = &rest[open + 1..open + close];
        let hides = body
            .split(';')
            .any(|decl| decl.split_once(':').is_some_and(|(k, v)| k.trim() == "opacity" && v.trim() == "0"));
        if hides {
            hidden.extend(prelude.split(',').map(|s| s.split_whitespace().collect::<Vec<_>>().join(" ")));
        }
        rest = &rest[open + close + 1..];
    }
    hidden
}

fn transparent_entrances(schedule: &AnimationSchedule) -> Vec<String> {
    schedule
        .specs()
        .iter()
        .filter(|spec| !matches!(spec.trigger, Trigger::Hover))
        .filter(|spec| spec.motion.from.opacity == Some(0.0))
        .map(|spec| spec.target.clone())
        .collect()
}

#[test]
fn stylesheet_hides_every_fade_in_target() {
    let css = stylesheet();
    assert!(!css.is_empty(), "public/style.css not found; run from the client crate root");
    let hidden = hidden_selectors(&css);
    let mut missing = Vec::new();
    for schedule in [home_schedule(), header_schedule(), progress_schedule()] {
        for target in transparent_entrances(&schedule) {
            if !hidden.contains(&target) {
                missing.push(target);
            }
        }
    }
    assert!(missing.is_empty(), "targets fade in but are not hidden in style.css: {missing:?}");
}

#[test]
fn hero_copy_is_not_dimmed_with_opacity() {
    let css = stylesheet();
    for line in css.lines().filter(|l| l.starts_with(".hero-subtitle") || l.starts_with(".hero-description")) {
        assert!(!line.contains("opacity"), "hero copy dims with color, not opacity: {line}");
    }
}

#[test]
fn hidden_selector_parsing_splits_lists_and_skips_comments() {
    let css = "/* start */\n.a,\n.b .c {\n  opacity: 0;\n}\n.d { opacity: 0.5; }\n";
    let hidden = hidden_selectors(css);
    assert!(hidden.contains(".a"));
    assert!(hidden.contains(".b .c"));
    assert!(!hidden.contains(".d"));
}
