//! Gesture session tracking.
//!
//! A [`GestureSession`] lives from touch down to touch up. It classifies the
//! gesture onto an axis, produces live [`DragFrame`]s while the finger moves
//! horizontally and, on release, resolves the gesture into an [`Intent`].
//!
//! The session is pure arithmetic: it never touches the DOM. The controller
//! feeds it panel geometry and applies what it returns.

use crate::events::Intent;
use crate::geometry::Point;
use crate::gesture_constants::OPEN_OVERSHOOT_TOLERANCE;
use crate::settings::DrawerSettings;
use web_time::Instant;

/// Axis a session has been classified onto. Once set it stays for the rest
/// of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisLock {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Visual state of a panel being dragged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragFrame {
    /// Horizontal translation of the panel in pixels.
    pub translate_x: f32,
    /// Backdrop opacity in `[0, 1]`; 1 when fully open.
    pub backdrop_opacity: f32,
}

impl DragFrame {
    /// Inline `transform` value for the panel.
    pub fn transform(&self) -> String {
        format!("translate3d({}px, 0px, 0px)", self.translate_x)
    }

    /// Inline `opacity` value for the backdrop.
    pub fn opacity(&self) -> String {
        self.backdrop_opacity.to_string()
    }
}

/// What a pointer move did to the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// The pointer left the valid range; the point was recorded, nothing else.
    OutOfBounds,
    /// Nothing to apply: below threshold, or the session is a page scroll.
    Idle,
    /// Horizontal drag. The frame must be applied and native scrolling
    /// suppressed for this move.
    Drag(DragFrame),
    /// This move classified the session as a vertical page scroll.
    ScrollLocked,
}

impl MoveOutcome {
    pub fn suppresses_scroll(&self) -> bool {
        matches!(self, MoveOutcome::Drag(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GestureSession {
    start: Point,
    current: Point,
    started_at: Instant,
    axis_lock: AxisLock,
    origin_offset: f32,
    panel_width: f32,
}

impl GestureSession {
    /// Starts a session at `point`.
    ///
    /// `panel_left` is the panel's document-relative left edge and
    /// `panel_width` its outer width, both read when the finger lands. A
    /// gesture that starts on the backdrop drags from the fully open position
    /// regardless of where the finger is.
    pub fn begin(
        point: Point,
        started_at: Instant,
        panel_left: f32,
        panel_width: f32,
        from_backdrop: bool,
    ) -> Self {
        let origin_offset = if from_backdrop {
            -panel_width
        } else {
            panel_left - point.x
        };

        Self {
            start: point,
            current: point,
            started_at,
            axis_lock: AxisLock::None,
            origin_offset,
            panel_width,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn current(&self) -> Point {
        self.current
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn axis_lock(&self) -> AxisLock {
        self.axis_lock
    }

    pub fn origin_offset(&self) -> f32 {
        self.origin_offset
    }

    pub fn panel_width(&self) -> f32 {
        self.panel_width
    }

    /// Displacement of the pointer since the session began.
    pub fn displacement(&self) -> Point {
        self.current - self.start
    }

    /// Whether the session was classified onto an axis, i.e. it was a drag
    /// or a scroll rather than a tap.
    pub fn was_dragged(&self) -> bool {
        self.axis_lock != AxisLock::None
    }

    /// Records a pointer move and classifies it.
    pub fn track(&mut self, point: Point, panel_open: bool, threshold: f32) -> MoveOutcome {
        self.current = point;

        if point.x > self.panel_width
            || point.x + self.origin_offset > OPEN_OVERSHOOT_TOLERANCE
        {
            return MoveOutcome::OutOfBounds;
        }

        let delta = self.displacement();

        if self.axis_lock != AxisLock::Vertical && delta.x.abs() > threshold {
            self.axis_lock = AxisLock::Horizontal;
            return MoveOutcome::Drag(self.drag_frame());
        }

        if self.axis_lock != AxisLock::Horizontal && panel_open && delta.y.abs() > threshold {
            let newly_locked = self.axis_lock == AxisLock::None;
            self.axis_lock = AxisLock::Vertical;
            if newly_locked {
                return MoveOutcome::ScrollLocked;
            }
        }

        MoveOutcome::Idle
    }

    /// Panel translation and backdrop opacity for the current pointer.
    pub fn drag_frame(&self) -> DragFrame {
        let leading_edge = self.current.x + self.origin_offset;
        DragFrame {
            translate_x: leading_edge + self.panel_width,
            backdrop_opacity: backdrop_opacity(leading_edge, self.panel_width),
        }
    }

    /// Decides what the gesture asked for once the finger lifts.
    ///
    /// Quick flicks are judged by direction and distance. Slower drags settle
    /// toward whichever end the panel is closer to, using `panel_left` read
    /// before the live transform is cleared.
    pub fn resolve(
        &self,
        ended_at: Instant,
        panel_left: f32,
        settings: &DrawerSettings,
    ) -> Option<Intent> {
        let elapsed = ended_at.saturating_duration_since(self.started_at);
        let dx = self.current.x - self.start.x;

        if elapsed <= settings.swipe_toggle_duration {
            if dx > 0.0 && dx.abs() >= settings.swipe_toggle_distance {
                Some(Intent::Open)
            } else if -dx >= settings.swipe_toggle_distance {
                Some(Intent::Close)
            } else {
                None
            }
        } else if panel_left.abs() < self.panel_width / 2.0 {
            Some(Intent::Open)
        } else {
            Some(Intent::Close)
        }
    }
}

/// Opacity of the backdrop when the panel's leading edge sits at
/// `leading_edge` relative to the fully open position (0 = open,
/// `-panel_width` = closed).
pub fn backdrop_opacity(leading_edge: f32, panel_width: f32) -> f32 {
    if panel_width <= 0.0 {
        return 0.0;
    }
    (1.0 - leading_edge / -panel_width).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use web_time::Duration;

    const WIDTH: f32 = 300.0;

    fn closed_session(x: f32, y: f32, at: Instant) -> GestureSession {
        GestureSession::begin(Point::new(x, y), at, -WIDTH, WIDTH, false)
    }

    fn open_session(x: f32, y: f32, at: Instant) -> GestureSession {
        GestureSession::begin(Point::new(x, y), at, 0.0, WIDTH, false)
    }

    #[test]
    fn begin_records_origin_offset_from_panel_edge() {
        let t0 = Instant::now();
        let session = closed_session(20.0, 100.0, t0);

        assert_eq!(session.origin_offset(), -320.0);
        assert_eq!(session.start(), session.current());
        assert_eq!(session.axis_lock(), AxisLock::None);
    }

    #[test]
    fn backdrop_start_drags_from_fully_open_position() {
        let t0 = Instant::now();
        let session = GestureSession::begin(Point::new(250.0, 10.0), t0, 0.0, WIDTH, true);
        assert_eq!(session.origin_offset(), -WIDTH);
    }

    #[test]
    fn small_moves_stay_unclassified() {
        let mut session = closed_session(10.0, 10.0, Instant::now());
        assert_eq!(session.track(Point::new(14.0, 13.0), false, 5.0), MoveOutcome::Idle);
        assert_eq!(session.axis_lock(), AxisLock::None);
    }

    #[test]
    fn horizontal_move_locks_and_produces_frame() {
        let mut session = closed_session(10.0, 10.0, Instant::now());

        let outcome = session.track(Point::new(70.0, 12.0), false, 5.0);

        let MoveOutcome::Drag(frame) = outcome else {
            panic!("expected drag, got {outcome:?}");
        };
        assert!(outcome.suppresses_scroll());
        assert_eq!(frame.translate_x, 60.0);
        assert!((frame.backdrop_opacity - 0.2).abs() < 1e-6);
        assert_eq!(session.axis_lock(), AxisLock::Horizontal);
        assert_eq!(frame.transform(), "translate3d(60px, 0px, 0px)");
    }

    #[test]
    fn horizontal_lock_survives_later_vertical_motion() {
        let mut session = open_session(200.0, 10.0, Instant::now());
        session.track(Point::new(150.0, 10.0), true, 5.0);

        let outcome = session.track(Point::new(150.0, 200.0), true, 5.0);

        assert!(matches!(outcome, MoveOutcome::Drag(_)));
        assert_eq!(session.axis_lock(), AxisLock::Horizontal);
    }

    #[test]
    fn vertical_lock_only_when_open() {
        let mut closed = closed_session(10.0, 10.0, Instant::now());
        assert_eq!(closed.track(Point::new(10.0, 80.0), false, 5.0), MoveOutcome::Idle);
        assert_eq!(closed.axis_lock(), AxisLock::None);

        let mut open = open_session(200.0, 10.0, Instant::now());
        assert_eq!(
            open.track(Point::new(200.0, 80.0), true, 5.0),
            MoveOutcome::ScrollLocked
        );
        assert_eq!(open.axis_lock(), AxisLock::Vertical);
    }

    #[test]
    fn vertical_lock_suppresses_horizontal_drag() {
        let mut session = open_session(200.0, 10.0, Instant::now());
        session.track(Point::new(200.0, 80.0), true, 5.0);

        let outcome = session.track(Point::new(100.0, 90.0), true, 5.0);

        assert_eq!(outcome, MoveOutcome::Idle);
        assert!(!outcome.suppresses_scroll());
        assert_eq!(session.axis_lock(), AxisLock::Vertical);
    }

    #[test]
    fn moves_past_panel_width_are_recorded_but_ignored() {
        let mut session = open_session(200.0, 10.0, Instant::now());

        let outcome = session.track(Point::new(WIDTH + 5.0, 10.0), true, 5.0);

        assert_eq!(outcome, MoveOutcome::OutOfBounds);
        assert_eq!(session.current(), Point::new(WIDTH + 5.0, 10.0));
        assert_eq!(session.axis_lock(), AxisLock::None);
    }

    #[test]
    fn overshooting_the_open_position_is_ignored() {
        // Open panel, finger at 200: leading edge = x - 200.
        let mut session = open_session(200.0, 10.0, Instant::now());
        assert_eq!(
            session.track(Point::new(202.0, 10.0), true, 1.0),
            MoveOutcome::OutOfBounds
        );
        assert!(matches!(
            session.track(Point::new(201.0, 10.0), true, 0.5),
            MoveOutcome::Drag(_)
        ));
    }

    #[test]
    fn opacity_is_clamped_and_monotonic() {
        assert_eq!(backdrop_opacity(0.0, WIDTH), 1.0);
        assert_eq!(backdrop_opacity(-WIDTH, WIDTH), 0.0);
        assert_eq!(backdrop_opacity(1.0, WIDTH), 1.0);
        assert_eq!(backdrop_opacity(-2.0 * WIDTH, WIDTH), 0.0);
        assert_eq!(backdrop_opacity(-10.0, 0.0), 0.0);

        let samples: Vec<f32> = (0..=30)
            .map(|step| backdrop_opacity(-WIDTH + step as f32 * 10.0, WIDTH))
            .collect();
        assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn fast_gestures_need_distance() {
        let settings = DrawerSettings::default();
        let t0 = Instant::now();
        let end = t0 + Duration::from_millis(120);

        let mut right = closed_session(10.0, 10.0, t0);
        right.track(Point::new(60.0, 10.0), false, 5.0);
        assert_eq!(right.resolve(end, -250.0, &settings), Some(Intent::Open));

        let mut short = closed_session(10.0, 10.0, t0);
        short.track(Point::new(59.0, 10.0), false, 5.0);
        assert_eq!(short.resolve(end, -251.0, &settings), None);

        let mut left = open_session(200.0, 10.0, t0);
        left.track(Point::new(150.0, 10.0), true, 5.0);
        assert_eq!(left.resolve(end, -50.0, &settings), Some(Intent::Close));
    }

    #[test]
    fn release_without_movement_is_a_no_op() {
        let t0 = Instant::now();
        let session = closed_session(10.0, 10.0, t0);
        assert_eq!(session.resolve(t0, -WIDTH, &DrawerSettings::default()), None);
        assert!(!session.was_dragged());
    }

    #[test]
    fn slow_gestures_settle_to_nearest_end() {
        let settings = DrawerSettings::default();
        let t0 = Instant::now();
        let end = t0 + Duration::from_millis(600);
        let session = closed_session(10.0, 10.0, t0);

        assert_eq!(session.resolve(end, -149.0, &settings), Some(Intent::Open));
        assert_eq!(session.resolve(end, -150.0, &settings), Some(Intent::Close));
        assert_eq!(session.resolve(end, 0.0, &settings), Some(Intent::Open));
    }

    #[test]
    fn duration_boundary_is_inclusive() {
        let settings = DrawerSettings::default();
        let t0 = Instant::now();
        let mut session = closed_session(10.0, 10.0, t0);
        session.track(Point::new(15.0, 10.0), false, 5.0);

        // Exactly at the window: still a flick, too short to count.
        assert_eq!(
            session.resolve(t0 + Duration::from_millis(200), -295.0, &settings),
            None
        );
        // Just past it: settles closed.
        assert_eq!(
            session.resolve(t0 + Duration::from_millis(201), -295.0, &settings),
            Some(Intent::Close)
        );
    }
}
