//! Mount-scoped animation schedules.

use leptos::prelude::*;

use crate::util::animation::AnimationSchedule;
use crate::util::animator::{self, AnimationHandle};

/// Run `schedule` once the calling component has mounted and stop it when
/// the component is cleaned up. Does nothing during SSR.
pub fn use_animations(schedule: AnimationSchedule) {
    let handle = StoredValue::new_local(None::<AnimationHandle>);
    Effect::new(move |_| {
        let running = animator::run(&schedule);
        log::trace!("animations attached: {}", running.animation_count());
        handle.set_value(Some(running));
    });
    on_cleanup(move || handle.set_value(None));
}
