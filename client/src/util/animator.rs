//! Web Animations driver for [`AnimationSchedule`]s.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components hand their schedule to [`run`] after mount and keep the returned
//! [`AnimationHandle`] until cleanup. Dropping the handle cancels every
//! animation, disconnects observers, and removes listeners it created, so a
//! page never leaks scroll or hover bindings into the next route.
//!
//! ERROR HANDLING
//! ==============
//! Animation is decorative. Missing targets and rejected browser calls are
//! logged at debug level and skipped. SSR and native builds get an inert
//! handle.

use crate::util::animation::AnimationSchedule;

/// Owner of every live browser resource created for one schedule.
#[derive(Default)]
pub struct AnimationHandle {
    #[cfg(feature = "hydrate")]
    inner: driver::Bindings,
}

impl AnimationHandle {
    /// Number of animations under control of this handle.
    #[must_use]
    pub fn animation_count(&self) -> usize {
        #[cfg(feature = "hydrate")]
        {
            self.inner.animation_count()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0
        }
    }
}

/// Start every spec in `schedule` against the current document.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn run(schedule: &AnimationSchedule) -> AnimationHandle {
    AnimationHandle { inner: driver::start(schedule) }
}

/// Start every spec in `schedule`. Without a browser there is nothing to drive.
#[cfg(not(feature = "hydrate"))]
#[must_use]
pub fn run(_schedule: &AnimationSchedule) -> AnimationHandle {
    AnimationHandle::default()
}

#[cfg(feature = "hydrate")]
mod driver {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use crate::util::animation::{
        Action, AnimationSchedule, AnimationSpec, Frame, Motion, Repeat, ScrollTracker, ScrubSource, ToggleActions,
        Trigger, document_scroll_progress, element_scroll_progress,
    };

    type EventCallback = Closure<dyn FnMut(web_sys::Event)>;
    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

    struct Listener {
        target: web_sys::EventTarget,
        event: &'static str,
        callback: EventCallback,
    }

    struct ScrollBinding {
        trigger: web_sys::Element,
        animations: Vec<web_sys::Animation>,
        tracker: ScrollTracker,
    }

    struct Scrub {
        source: ScrubSource,
        element: web_sys::Element,
        animation: web_sys::Animation,
        duration_ms: f64,
    }

    #[derive(Default)]
    pub(super) struct Bindings {
        animations: Vec<web_sys::Animation>,
        listeners: Vec<Listener>,
        observers: Vec<(web_sys::IntersectionObserver, ObserverCallback)>,
    }

    impl Bindings {
        pub(super) fn animation_count(&self) -> usize {
            self.animations.len()
        }
    }

    impl Drop for Bindings {
        fn drop(&mut self) {
            for (observer, _) in &self.observers {
                observer.disconnect();
            }
            for listener in &self.listeners {
                if let Err(err) = listener
                    .target
                    .remove_event_listener_with_callback(listener.event, listener.callback.as_ref().unchecked_ref())
                {
                    log::debug!("failed to remove {} listener: {err:?}", listener.event);
                }
            }
            for animation in &self.animations {
                animation.cancel();
            }
        }
    }

    pub(super) fn start(schedule: &AnimationSchedule) -> Bindings {
        let mut bindings = Bindings::default();
        let mut scrubs = Vec::new();
        for spec in schedule.specs() {
            match &spec.trigger {
                Trigger::Mount => start_mount(spec, &mut bindings),
                Trigger::Scroll { start, actions, .. } => start_scroll(spec, *start, *actions, &mut bindings),
                Trigger::Scrub { source } => collect_scrubs(spec, source, &mut scrubs, &mut bindings),
                Trigger::Hover => start_hover(spec, &mut bindings),
            }
        }
        if !scrubs.is_empty() {
            attach_scrubs(scrubs, &mut bindings);
        }
        log::debug!("animation schedule started: {} animations", bindings.animations.len());
        bindings
    }

    fn select(selector: &str) -> Vec<web_sys::Element> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let list = match document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::debug!("invalid animation selector {selector}: {err:?}");
                return Vec::new();
            }
        };
        let elements: Vec<_> = (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_ref::<web_sys::Element>().cloned())
            .collect();
        if elements.is_empty() {
            log::debug!("animation target not found: {selector}");
        }
        elements
    }

    fn keyframe(frame: &Frame) -> JsValue {
        let object = js_sys::Object::new();
        let set = |key: &str, value: JsValue| {
            if let Err(err) = js_sys::Reflect::set(&object, &JsValue::from_str(key), &value) {
                log::debug!("failed to set keyframe {key}: {err:?}");
            }
        };
        if let Some(opacity) = frame.opacity {
            set("opacity", JsValue::from_f64(opacity));
        }
        set("transform", JsValue::from_str(&frame.transform()));
        if let Some(clip) = frame.clip_path() {
            set("clipPath", JsValue::from_str(&clip));
        }
        object.into()
    }

    /// `additive` layers the motion on top of the element's other animations
    /// instead of replacing them.
    fn animate(element: &web_sys::Element, motion: &Motion, delay_ms: f64, additive: bool) -> web_sys::Animation {
        let keyframes = js_sys::Array::of2(&keyframe(&motion.from), &keyframe(&motion.to));
        let options = web_sys::KeyframeAnimationOptions::new();
        options.set_duration(motion.duration_ms);
        options.set_delay(delay_ms);
        options.set_easing(motion.ease.css());
        options.set_fill(web_sys::FillMode::Both);
        if motion.repeat == Repeat::YoyoForever {
            options.set_iterations(f64::INFINITY);
            options.set_direction(web_sys::PlaybackDirection::Alternate);
        }
        if additive {
            options.set_composite(web_sys::CompositeOperation::Add);
        }
        element.animate_with_keyframe_animation_options(Some(&*keyframes), &options)
    }

    /// Animation parked on its first frame until a trigger fires.
    fn animate_paused(
        element: &web_sys::Element,
        motion: &Motion,
        delay_ms: f64,
        additive: bool,
    ) -> web_sys::Animation {
        let animation = animate(element, motion, delay_ms, additive);
        if let Err(err) = animation.pause() {
            log::debug!("failed to pause animation: {err:?}");
        }
        animation
    }

    fn play_forward(animation: &web_sys::Animation) {
        if animation.playback_rate() < 0.0 {
            animation.set_playback_rate(-animation.playback_rate());
        }
        if let Err(err) = animation.play() {
            log::debug!("failed to play animation: {err:?}");
        }
    }

    fn play_backward(animation: &web_sys::Animation) {
        if animation.playback_rate() > 0.0 {
            if let Err(err) = animation.reverse() {
                log::debug!("failed to reverse animation: {err:?}");
            }
        }
    }

    fn apply(action: Action, animations: &[web_sys::Animation]) {
        match action {
            Action::Play => animations.iter().for_each(play_forward),
            Action::Reverse => animations.iter().for_each(play_backward),
            Action::None => {}
        }
    }

    fn start_mount(spec: &AnimationSpec, bindings: &mut Bindings) {
        for (index, element) in select(&spec.target).iter().enumerate() {
            bindings.animations.push(animate(element, &spec.motion, spec.element_delay_ms(index), false));
        }
    }

    fn start_scroll(
        spec: &AnimationSpec,
        start: f64,
        actions: ToggleActions,
        bindings: &mut Bindings,
    ) {
        let targets = select(&spec.target);
        if targets.is_empty() {
            return;
        }
        let animations: Vec<_> = targets
            .iter()
            .enumerate()
            .map(|(index, element)| animate_paused(element, &spec.motion, spec.element_delay_ms(index), false))
            .collect();
        bindings.animations.extend(animations.iter().cloned());

        // A target-driven spec pairs each element with its own trigger; a
        // separate trigger selector drives every target from its first match.
        let scroll_bindings: Vec<ScrollBinding> = if spec.trigger_selector() == spec.target {
            targets
                .into_iter()
                .zip(animations)
                .map(|(trigger, animation)| ScrollBinding {
                    trigger,
                    animations: vec![animation],
                    tracker: ScrollTracker::default(),
                })
                .collect()
        } else {
            match select(spec.trigger_selector()).into_iter().next() {
                Some(trigger) => vec![ScrollBinding { trigger, animations, tracker: ScrollTracker::default() }],
                None => return,
            }
        };

        let triggers: Vec<_> = scroll_bindings.iter().map(|b| b.trigger.clone()).collect();
        let state = Rc::new(RefCell::new(scroll_bindings));
        let observed = Rc::clone(&state);
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                let mut state = observed.borrow_mut();
                for entry in entries.iter() {
                    let Some(entry) = entry.dyn_ref::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let below = entry.bounding_client_rect().top() > 0.0;
                    if let Some(binding) = state.iter_mut().find(|b| b.trigger == target) {
                        for edge in binding.tracker.observe(entry.is_intersecting(), below) {
                            apply(actions.action(edge), &binding.animations);
                        }
                    }
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(&root_margin(start));
        let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        {
            Ok(observer) => observer,
            Err(err) => {
                log::debug!("intersection observer unavailable: {err:?}");
                // Without an observer this spec's content must still become visible.
                for binding in state.borrow_mut().iter_mut() {
                    for edge in binding.tracker.assume_entered() {
                        apply(actions.action(edge), &binding.animations);
                    }
                }
                return;
            }
        };
        for trigger in &triggers {
            observer.observe(trigger);
        }
        bindings.observers.push((observer, callback));
    }

    /// Shrink the observation root so "intersecting" means the trigger top
    /// has crossed `start` of the viewport height.
    fn root_margin(start: f64) -> String {
        let bottom = ((1.0 - start) * 100.0).clamp(0.0, 100.0);
        format!("0px 0px -{bottom}% 0px")
    }

    fn start_hover(spec: &AnimationSpec, bindings: &mut Bindings) {
        for element in select(&spec.target) {
            let animation = animate_paused(&element, &spec.motion, 0.0, true);
            bindings.animations.push(animation.clone());
            let target: web_sys::EventTarget = element.into();

            let enter = animation.clone();
            listen(&target, "mouseenter", move |_| play_forward(&enter), bindings);
            listen(&target, "mouseleave", move |_| play_backward(&animation), bindings);
        }
    }

    fn listen(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
        bindings: &mut Bindings,
    ) {
        let callback: EventCallback = Closure::new(handler);
        if let Err(err) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::debug!("failed to add {event} listener: {err:?}");
            return;
        }
        bindings.listeners.push(Listener { target: target.clone(), event, callback });
    }

    fn collect_scrubs(spec: &AnimationSpec, source: &ScrubSource, scrubs: &mut Vec<Scrub>, bindings: &mut Bindings) {
        for element in select(&spec.target) {
            let animation = animate_paused(&element, &spec.motion, 0.0, false);
            bindings.animations.push(animation.clone());
            scrubs.push(Scrub {
                source: source.clone(),
                element,
                animation,
                duration_ms: spec.motion.duration_ms,
            });
        }
    }

    fn scrub_all(scrubs: &[Scrub]) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let viewport = window.inner_height().map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let scroll_height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |root| f64::from(root.scroll_height()));
        for scrub in scrubs {
            let progress = match scrub.source {
                ScrubSource::Document => document_scroll_progress(scroll_y, scroll_height, viewport),
                ScrubSource::Element => {
                    let rect = scrub.element.get_bounding_client_rect();
                    element_scroll_progress(rect.top(), rect.height(), viewport)
                }
            };
            scrub.animation.set_current_time(Some(progress * scrub.duration_ms));
        }
    }

    fn attach_scrubs(scrubs: Vec<Scrub>, bindings: &mut Bindings) {
        scrub_all(&scrubs);
        let Some(window) = web_sys::window() else {
            return;
        };
        let target: web_sys::EventTarget = window.into();
        let scrubs = Rc::new(scrubs);
        let on_scroll = Rc::clone(&scrubs);
        listen(&target, "scroll", move |_| scrub_all(&on_scroll), bindings);
        listen(&target, "resize", move |_| scrub_all(&scrubs), bindings);
    }
}
