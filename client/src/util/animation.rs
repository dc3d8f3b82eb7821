//! Declarative animation presets, triggers, and schedules.
//!
//! DESIGN
//! ======
//! Pages describe their motion as data: a list of [`AnimationSpec`]s, each a
//! `{target selector, motion, trigger}` tuple. Timelines resolve sequencing
//! (including overlaps) into absolute delays up front, and scroll reversal is
//! a lookup in [`ToggleActions`]. The browser driver in
//! [`crate::util::animator`] only executes what this module has decided, so
//! ordering and reversal rules are testable without a DOM.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

/// Fraction of the viewport height at which scroll-triggered animations start
/// (trigger top crossing 80 % of the viewport).
pub const DEFAULT_SCROLL_START: f64 = 0.8;

/// Easing curves, named after the motion library conventions used in design specs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1InOut,
    Power2Out,
    Power3Out,
    BackOut,
}

impl Ease {
    /// CSS timing function for the Web Animations API.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Power1InOut => "cubic-bezier(0.37, 0, 0.63, 1)",
            Ease::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)",
            Ease::Power3Out => "cubic-bezier(0.25, 1, 0.5, 1)",
            Ease::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// One keyframe of visual state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub opacity: Option<f64>,
    pub x_px: f64,
    pub y_px: f64,
    /// Vertical offset relative to the element's own height.
    pub y_percent: f64,
    pub scale: f64,
    /// Horizontal-only scale, applied after `scale`.
    pub scale_x: f64,
    /// `clip-path: inset(<n>% 0 0 0)`; `None` leaves clipping untouched.
    pub clip_top_percent: Option<f64>,
}

impl Frame {
    pub const IDENTITY: Frame = Frame {
        opacity: None,
        x_px: 0.0,
        y_px: 0.0,
        y_percent: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        clip_top_percent: None,
    };

    const fn visible() -> Frame {
        Frame { opacity: Some(1.0), ..Frame::IDENTITY }
    }

    const fn hidden() -> Frame {
        Frame { opacity: Some(0.0), ..Frame::IDENTITY }
    }

    /// CSS `transform` value for this frame.
    #[must_use]
    pub fn transform(&self) -> String {
        let mut parts = vec![format!("translate({}px, {}px)", self.x_px, self.y_px)];
        if self.y_percent != 0.0 {
            parts.push(format!("translateY({}%)", self.y_percent));
        }
        parts.push(format!("scale({})", self.scale));
        if self.scale_x != 1.0 {
            parts.push(format!("scaleX({})", self.scale_x));
        }
        parts.join(" ")
    }

    /// CSS `clip-path` value, if this frame clips.
    #[must_use]
    pub fn clip_path(&self) -> Option<String> {
        self.clip_top_percent.map(|top| format!("inset({top}% 0 0 0)"))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    #[default]
    Once,
    /// Alternate direction forever.
    YoyoForever,
}

/// A single from → to transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub from: Frame,
    pub to: Frame,
    pub duration_ms: f64,
    pub ease: Ease,
    pub repeat: Repeat,
}

/// Named motion presets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Preset {
    FadeInUp,
    FadeInLeft,
    FadeInRight,
    ScaleIn,
    Reveal,
    Floating,
    /// Scroll-scrubbed vertical drift; `speed` scales the total travel.
    Parallax { speed: f64 },
    /// Drop in from above by `distance_px`.
    SlideDown { distance_px: f64 },
    /// Horizontal scale from 0 to 1 anchored at the left edge.
    GrowX,
    /// Hover pulse for buttons.
    Pulse,
    /// Hover lift for cards.
    Lift,
}

impl Preset {
    #[must_use]
    pub fn motion(self) -> Motion {
        let once = |from: Frame, to: Frame, duration_ms: f64, ease: Ease| Motion {
            from,
            to,
            duration_ms,
            ease,
            repeat: Repeat::Once,
        };
        match self {
            Preset::FadeInUp => once(Frame { y_px: 50.0, ..Frame::hidden() }, Frame::visible(), 800.0, Ease::Power2Out),
            Preset::FadeInLeft => once(Frame { x_px: -50.0, ..Frame::hidden() }, Frame::visible(), 800.0, Ease::Power2Out),
            Preset::FadeInRight => once(Frame { x_px: 50.0, ..Frame::hidden() }, Frame::visible(), 800.0, Ease::Power2Out),
            Preset::ScaleIn => once(Frame { scale: 0.8, ..Frame::hidden() }, Frame::visible(), 600.0, Ease::BackOut),
            Preset::Reveal => once(
                Frame { y_px: 50.0, clip_top_percent: Some(100.0), ..Frame::hidden() },
                Frame { clip_top_percent: Some(0.0), ..Frame::visible() },
                1000.0,
                Ease::Power2Out,
            ),
            Preset::Floating => Motion {
                from: Frame::IDENTITY,
                to: Frame { y_px: -10.0, ..Frame::IDENTITY },
                duration_ms: 2000.0,
                ease: Ease::Power1InOut,
                repeat: Repeat::YoyoForever,
            },
            Preset::Parallax { speed } => once(
                Frame::IDENTITY,
                Frame { y_percent: -50.0 * speed, ..Frame::IDENTITY },
                1000.0,
                Ease::Linear,
            ),
            Preset::SlideDown { distance_px } => {
                once(Frame { y_px: -distance_px, ..Frame::hidden() }, Frame::visible(), 800.0, Ease::Power2Out)
            }
            Preset::GrowX => once(Frame { scale_x: 0.0, ..Frame::IDENTITY }, Frame::IDENTITY, 1000.0, Ease::Linear),
            Preset::Pulse => once(Frame::IDENTITY, Frame { scale: 1.05, ..Frame::IDENTITY }, 300.0, Ease::Power2Out),
            Preset::Lift => once(
                Frame::IDENTITY,
                Frame { y_px: -10.0, scale: 1.02, ..Frame::IDENTITY },
                300.0,
                Ease::Power2Out,
            ),
        }
    }
}

/// What to do with a scroll-linked animation when its trigger crosses an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Play,
    Reverse,
}

/// Crossing of the scroll trigger region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollEdge {
    /// Scrolling down into the region.
    Enter,
    /// Scrolling down out of the region.
    Leave,
    /// Scrolling up back into the region.
    EnterBack,
    /// Scrolling up out of the region, above its start.
    LeaveBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: Action,
    pub on_leave: Action,
    pub on_enter_back: Action,
    pub on_leave_back: Action,
}

impl ToggleActions {
    /// Play on enter, reverse when scrolled back above the start.
    pub const PLAY_REVERSE: ToggleActions = ToggleActions {
        on_enter: Action::Play,
        on_leave: Action::None,
        on_enter_back: Action::None,
        on_leave_back: Action::Reverse,
    };

    /// Play on first enter and stay finished.
    pub const PLAY_ONCE: ToggleActions = ToggleActions {
        on_enter: Action::Play,
        on_leave: Action::None,
        on_enter_back: Action::None,
        on_leave_back: Action::None,
    };

    #[must_use]
    pub fn action(&self, edge: ScrollEdge) -> Action {
        match edge {
            ScrollEdge::Enter => self.on_enter,
            ScrollEdge::Leave => self.on_leave,
            ScrollEdge::EnterBack => self.on_enter_back,
            ScrollEdge::LeaveBack => self.on_leave_back,
        }
    }

    #[must_use]
    pub fn reverses(&self) -> bool {
        [self.on_enter, self.on_leave, self.on_enter_back, self.on_leave_back].contains(&Action::Reverse)
    }
}

/// Input driving a scrubbed animation's progress.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrubSource {
    /// Trigger element travelling from the viewport bottom to the viewport top.
    Element,
    /// Whole-document scroll position.
    Document,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Trigger {
    /// Run once when the component mounts.
    Mount,
    /// Start when the trigger element reaches `start` of the viewport height.
    Scroll {
        /// Element whose visibility drives the animation; defaults to the target.
        trigger: Option<String>,
        start: f64,
        actions: ToggleActions,
    },
    /// Progress follows scroll position continuously.
    Scrub { source: ScrubSource },
    /// Play on pointer enter, reverse on pointer leave.
    Hover,
}

/// One entry of a page's animation schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSpec {
    pub target: String,
    pub motion: Motion,
    pub trigger: Trigger,
    pub delay_ms: f64,
    /// Delay between consecutive elements matched by `target`.
    pub stagger_ms: f64,
}

impl AnimationSpec {
    /// Mount-triggered animation of `target` using `preset`.
    pub fn new(target: impl Into<String>, preset: Preset) -> Self {
        Self {
            target: target.into(),
            motion: preset.motion(),
            trigger: Trigger::Mount,
            delay_ms: 0.0,
            stagger_ms: 0.0,
        }
    }

    #[must_use]
    pub fn delay(mut self, ms: f64) -> Self {
        self.delay_ms = ms;
        self
    }

    #[must_use]
    pub fn stagger(mut self, ms: f64) -> Self {
        self.stagger_ms = ms;
        self
    }

    #[must_use]
    pub fn duration(mut self, ms: f64) -> Self {
        self.motion.duration_ms = ms;
        self
    }

    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.motion.ease = ease;
        self
    }

    /// Override the starting vertical offset.
    #[must_use]
    pub fn from_y(mut self, px: f64) -> Self {
        self.motion.from.y_px = px;
        self
    }

    /// Scroll-trigger on the target itself, reversing when scrolled back.
    #[must_use]
    pub fn on_scroll(self) -> Self {
        self.scroll_with(None, ToggleActions::PLAY_REVERSE)
    }

    /// Scroll-trigger on another element (e.g. the enclosing section).
    #[must_use]
    pub fn on_scroll_of(self, trigger: impl Into<String>) -> Self {
        self.scroll_with(Some(trigger.into()), ToggleActions::PLAY_REVERSE)
    }

    #[must_use]
    pub fn scroll_with(mut self, trigger: Option<String>, actions: ToggleActions) -> Self {
        self.trigger = Trigger::Scroll { trigger, start: DEFAULT_SCROLL_START, actions };
        self
    }

    #[must_use]
    pub fn scrubbed(mut self, source: ScrubSource) -> Self {
        self.trigger = Trigger::Scrub { source };
        self
    }

    #[must_use]
    pub fn on_hover(mut self) -> Self {
        self.trigger = Trigger::Hover;
        self
    }

    /// Start offset for the `index`-th matched element.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn element_delay_ms(&self, index: usize) -> f64 {
        self.delay_ms + self.stagger_ms * index as f64
    }

    /// Selector of the element whose visibility drives this spec.
    #[must_use]
    pub fn trigger_selector(&self) -> &str {
        match &self.trigger {
            Trigger::Scroll { trigger: Some(selector), .. } => selector,
            _ => &self.target,
        }
    }

    /// Whether this spec can ever run backwards. Mount animations never do.
    #[must_use]
    pub fn reverses(&self) -> bool {
        match &self.trigger {
            Trigger::Mount => false,
            Trigger::Scroll { actions, .. } => actions.reverses(),
            Trigger::Scrub { .. } | Trigger::Hover => true,
        }
    }
}

/// Where a timeline entry starts relative to the timeline cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// When the previous entry ends.
    AfterPrevious,
    /// This many milliseconds before the previous entry ends.
    Overlap(f64),
    /// Absolute offset from the timeline start.
    At(f64),
}

/// Sequenced mount animations resolved to absolute delays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    cursor_ms: f64,
    specs: Vec<AnimationSpec>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn then(self, spec: AnimationSpec) -> Self {
        self.then_at(spec, Position::AfterPrevious)
    }

    #[must_use]
    pub fn then_at(mut self, mut spec: AnimationSpec, position: Position) -> Self {
        let start = match position {
            Position::AfterPrevious => self.cursor_ms,
            Position::Overlap(ms) => (self.cursor_ms - ms).max(0.0),
            Position::At(ms) => ms.max(0.0),
        };
        spec.delay_ms += start;
        spec.trigger = Trigger::Mount;
        self.cursor_ms = spec.delay_ms + spec.motion.duration_ms;
        self.specs.push(spec);
        self
    }

    /// End of the last entry.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.cursor_ms
    }

    #[must_use]
    pub fn into_specs(self) -> Vec<AnimationSpec> {
        self.specs
    }
}

/// All animations a component runs, consumed by the driver as a unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationSchedule {
    specs: Vec<AnimationSpec>,
}

impl AnimationSchedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, spec: AnimationSpec) -> Self {
        self.specs.push(spec);
        self
    }

    #[must_use]
    pub fn with_timeline(mut self, timeline: Timeline) -> Self {
        self.specs.extend(timeline.into_specs());
        self
    }

    #[must_use]
    pub fn specs(&self) -> &[AnimationSpec] {
        &self.specs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Specs matching `target`, in schedule order.
    pub fn for_target<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a AnimationSpec> + 'a {
        self.specs.iter().filter(move |spec| spec.target == target)
    }
}

/// Position of a scroll trigger relative to its active region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Region {
    #[default]
    Before,
    Active,
    After,
}

/// Turns raw visibility observations into scroll edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollTracker {
    region: Region,
}

impl ScrollTracker {
    /// Feed one observation. `below` says whether an invisible trigger sits
    /// below the active region (not yet reached) rather than above it.
    pub fn observe(&mut self, intersecting: bool, below: bool) -> Vec<ScrollEdge> {
        let next = if intersecting {
            Region::Active
        } else if below {
            Region::Before
        } else {
            Region::After
        };
        let edges = match (self.region, next) {
            (Region::Before, Region::Active) => vec![ScrollEdge::Enter],
            (Region::Active, Region::After) => vec![ScrollEdge::Leave],
            (Region::After, Region::Active) => vec![ScrollEdge::EnterBack],
            (Region::Active, Region::Before) => vec![ScrollEdge::LeaveBack],
            (Region::Before, Region::After) => vec![ScrollEdge::Enter, ScrollEdge::Leave],
            (Region::After, Region::Before) => vec![ScrollEdge::EnterBack, ScrollEdge::LeaveBack],
            _ => Vec::new(),
        };
        self.region = next;
        edges
    }

    /// Treat the trigger as already in view when it cannot be observed.
    pub fn assume_entered(&mut self) -> Vec<ScrollEdge> {
        self.observe(true, false)
    }
}

/// Progress of an element travelling from the viewport bottom (0) to the
/// viewport top (1).
#[must_use]
pub fn element_scroll_progress(element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + element_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - element_top) / span).clamp(0.0, 1.0)
}

/// Fraction of the document scrolled, in `[0, 1]`.
#[must_use]
pub fn document_scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let max = scroll_height - viewport_height;
    if max <= 0.0 {
        return 0.0;
    }
    (scroll_y / max).clamp(0.0, 1.0)
}
