//! Reading-progress bar pinned to the top of the viewport.

use leptos::prelude::*;

use crate::components::animate::use_animations;
use crate::util::animation::{AnimationSchedule, AnimationSpec, Preset, ScrubSource};

/// Bar width follows document scroll; the track fades in after a second.
pub fn progress_schedule() -> AnimationSchedule {
    AnimationSchedule::new()
        .with(AnimationSpec::new(".scroll-progress__bar", Preset::GrowX).scrubbed(ScrubSource::Document))
        .with(
            AnimationSpec::new(".scroll-progress", Preset::SlideDown { distance_px: 10.0 })
                .duration(1000.0)
                .delay(1000.0),
        )
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
    use_animations(progress_schedule());

    view! {
        <div class="scroll-progress" aria-hidden="true">
            <div class="scroll-progress__bar"></div>
        </div>
    }
}
