use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;

use crate::{
    ActiveSlide, Instant, Px, SlideSet, Slider, SliderConfig, SlidesPerView, Surface,
    drag::DragState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Duration(Duration),
    Offset(Px),
    Bullet(usize),
    Layout(Px, Px),
    Clones(SlideSet),
}

#[derive(Debug)]
struct Recorder {
    commands: Vec<Command>,
    pagination: bool,
}

impl Recorder {
    fn new() -> Self {
        Self {
            commands: Vec::new(),
            pagination: true,
        }
    }

    fn without_pagination() -> Self {
        Self {
            commands: Vec::new(),
            pagination: false,
        }
    }

    fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    fn offsets(&self) -> Vec<Px> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                Command::Offset(offset) => Some(*offset),
                _ => None,
            })
            .collect()
    }

    fn bullets(&self) -> Vec<usize> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                Command::Bullet(bullet) => Some(*bullet),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn set_transition_duration(&mut self, duration: Duration) {
        self.commands.push(Command::Duration(duration));
    }

    fn set_wrapper_offset(&mut self, offset: Px) {
        self.commands.push(Command::Offset(offset));
    }

    fn set_active_bullet(&mut self, index: usize) {
        self.commands.push(Command::Bullet(index));
    }

    fn set_layout(&mut self, slide_width: Px, wrapper_width: Px) {
        self.commands.push(Command::Layout(slide_width, wrapper_width));
    }

    fn mount_clones(&mut self, slides: &SlideSet) {
        self.commands.push(Command::Clones(*slides));
    }

    fn has_pagination(&self) -> bool {
        self.pagination
    }
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn base_config() -> SliderConfig {
    SliderConfig::default().speed(ms(300)).delay(ms(1000))
}

fn build(config: SliderConfig, slides: usize, width: i32, t0: Instant) -> Slider<Recorder> {
    let mut slider = match Slider::new(config, slides, Px(width), Recorder::new(), t0) {
        Ok(slider) => slider,
        Err(err) => panic!("config rejected: {err}"),
    };
    slider.surface_mut().take();
    slider
}

/// Polls at every deadline up to `end`, the way a host timer would.
fn run_until(slider: &mut Slider<Recorder>, end: Instant) {
    while let Some(deadline) = slider.next_deadline().filter(|&at| at <= end) {
        slider.poll(deadline);
    }
}

fn record_changes(config: SliderConfig) -> (SliderConfig, Arc<Mutex<Vec<ActiveSlide>>>) {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let config = config.on_change(move |slide| sink.lock().push(slide));
    (config, changes)
}

#[test]
fn init_mounts_clones_lays_out_and_highlights_first_bullet() {
    let t0 = Instant::now();
    let mut slider = match Slider::new(base_config(), 3, Px(400), Recorder::new(), t0) {
        Ok(slider) => slider,
        Err(err) => panic!("{err}"),
    };
    assert_eq!(
        slider.surface_mut().take(),
        vec![
            Command::Clones(SlideSet::new(3, 1)),
            Command::Bullet(0),
            Command::Layout(Px(400), Px(2000)),
            Command::Duration(Duration::ZERO),
            Command::Offset(Px(400)),
        ]
    );
    assert!(slider.is_initialized());
    assert_eq!(slider.index(), 0);
}

#[test]
fn looping_three_slides_wraps_back_to_first() {
    let t0 = Instant::now();
    let (config, changes) = record_changes(base_config());
    let mut slider = build(config, 3, 400, t0);

    let mut settled = Vec::new();
    let mut bullets = Vec::new();
    for start in [0, 350, 700] {
        assert!(slider.on_advance_requested(t0 + ms(start)));
        slider.poll(t0 + ms(start + 300));
        settled.push(slider.index());
        bullets.push(slider.active_bullet());
    }
    assert_eq!(settled, vec![1, 2, 0]);
    assert_eq!(bullets, vec![1, 2, 0]);
    assert_eq!(slider.surface().bullets(), vec![1, 2, 0]);

    // The last advance animates into the back clone, then snaps to the real
    // first slide without transition.
    let tail: Vec<_> = slider.surface().commands.iter().rev().take(2).copied().collect();
    assert_eq!(
        tail,
        vec![Command::Offset(Px(400)), Command::Duration(Duration::ZERO)]
    );
    assert!(slider.surface().offsets().contains(&Px(1600)));

    let changes = changes.lock();
    let indices: Vec<_> = changes.iter().map(|slide| slide.index).collect();
    assert_eq!(indices, vec![1, 2, 0]);
    assert_eq!(changes[2].wrapper_position, 1);
}

#[test]
fn retreat_from_first_slide_goes_through_front_clone() {
    let t0 = Instant::now();
    let mut slider = build(base_config(), 3, 400, t0);
    assert!(slider.on_retreat_requested(t0));
    assert_eq!(slider.raw_index(), -1);
    assert_eq!(slider.active_bullet(), 2);
    assert_eq!(slider.offset(), Px(0));

    slider.poll(t0 + ms(300));
    assert_eq!(slider.index(), 2);
    assert_eq!(slider.raw_index(), 2);
    assert_eq!(slider.offset(), Px(1200));
}

#[test]
fn second_advance_within_speed_is_dropped() {
    let t0 = Instant::now();
    let mut slider = build(base_config(), 5, 400, t0);
    assert!(slider.on_advance_requested(t0));
    assert!(!slider.on_advance_requested(t0 + ms(150)));
    assert!(!slider.on_bullet_clicked(4, t0 + ms(299)));
    slider.poll(t0 + ms(300));
    assert_eq!(slider.index(), 1);
    assert!(slider.on_advance_requested(t0 + ms(300)));
}

#[test]
fn manual_advance_pushes_autoplay_back_a_full_interval() {
    let t0 = Instant::now();
    let mut slider = build(base_config().autoplay(true), 5, 400, t0);
    assert_eq!(slider.autoplay_deadline(), Some(t0 + ms(1300)));

    slider.on_advance_requested(t0 + ms(500));
    assert_eq!(slider.autoplay_deadline(), Some(t0 + ms(1800)));

    slider.poll(t0 + ms(1300));
    assert_eq!(slider.index(), 1);
    assert!(!slider.is_transitioning());

    slider.poll(t0 + ms(1800));
    assert!(slider.is_transitioning());
    assert_eq!(slider.raw_index(), 2);
    // Autoplay reschedules itself from its own tick.
    assert_eq!(slider.autoplay_deadline(), Some(t0 + ms(3100)));
}

#[test]
fn autoplay_keeps_advancing_and_wraps() {
    let t0 = Instant::now();
    let mut slider = build(base_config().autoplay(true), 3, 400, t0);
    run_until(&mut slider, t0 + ms(1300 * 3 + 300));
    assert_eq!(slider.index(), 0);
    assert_eq!(slider.surface().bullets(), vec![1, 2, 0]);
}

#[test]
fn late_poll_fires_a_single_tick() {
    let t0 = Instant::now();
    let mut slider = build(base_config().autoplay(true), 3, 400, t0);
    slider.poll(t0 + ms(4200));
    assert_eq!(slider.index(), 1);
    assert_eq!(slider.autoplay_deadline(), Some(t0 + ms(5200)));
}

#[test]
fn dropped_click_does_not_reset_autoplay() {
    let t0 = Instant::now();
    let mut slider = build(base_config().autoplay(true), 3, 400, t0);
    slider.on_bullet_clicked(2, t0 + ms(1000));
    slider.on_bullet_clicked(1, t0 + ms(1100));
    assert_eq!(slider.autoplay_deadline(), Some(t0 + ms(2300)));
    slider.poll(t0 + ms(1300));
    assert_eq!(slider.index(), 2);
}

#[test]
fn bounded_mode_never_passes_last_page() {
    let t0 = Instant::now();
    let config = base_config()
        .loop_mode(false)
        .slides_per_view(SlidesPerView::fixed(2));
    let mut slider = build(config, 5, 600, t0);
    assert_eq!(slider.slide_set().clones_per_side(), 0);

    for step in 0..10u64 {
        let start = t0 + ms(step * 400);
        slider.on_advance_requested(start);
        assert!(slider.raw_index() <= 4);
        slider.poll(start + ms(300));
        assert!(slider.index() <= 3);
    }
    assert_eq!(slider.index(), 3);
    assert_eq!(slider.offset(), Px(900));
}

#[test]
fn bounded_advance_at_end_settles_back_without_change() {
    let t0 = Instant::now();
    let (config, changes) = record_changes(base_config().loop_mode(false));
    let mut slider = build(config, 4, 400, t0);
    slider.on_bullet_clicked(3, t0);
    slider.poll(t0 + ms(300));
    assert_eq!(slider.index(), 3);
    assert_eq!(changes.lock().len(), 1);
    slider.surface_mut().take();

    assert!(slider.on_advance_requested(t0 + ms(400)));
    slider.poll(t0 + ms(700));
    assert_eq!(slider.index(), 3);
    assert_eq!(slider.active_bullet(), 3);
    assert_eq!(changes.lock().len(), 1);
    assert_eq!(
        slider.surface_mut().take(),
        vec![
            Command::Duration(ms(300)),
            Command::Offset(Px(1200)),
            Command::Duration(Duration::ZERO),
            Command::Offset(Px(1200)),
        ]
    );
}

#[test]
fn bounded_retreat_at_first_page_stays() {
    let t0 = Instant::now();
    let mut slider = build(base_config().loop_mode(false), 4, 400, t0);
    slider.on_retreat_requested(t0);
    assert_eq!(slider.active_bullet(), 0);
    slider.poll(t0 + ms(300));
    assert_eq!(slider.index(), 0);
    assert_eq!(slider.offset(), Px(0));
}

#[test]
fn drag_below_threshold_snaps_back() {
    let t0 = Instant::now();
    let mut slider = build(base_config(), 3, 400, t0);
    slider.on_drag_start(Px(500));
    slider.on_drag_move(Px(401), false, t0 + ms(50));
    slider.on_drag_end(t0 + ms(100));

    assert_eq!(
        slider.surface_mut().take(),
        vec![
            Command::Duration(Duration::ZERO),
            Command::Offset(Px(499)),
            Command::Duration(ms(300)),
            Command::Offset(Px(400)),
        ]
    );
    assert_eq!(slider.index(), 0);
    assert!(!slider.is_transitioning());
    assert_eq!(slider.drag(), DragState::default());
}

#[test]
fn drag_past_threshold_commits_one_step() {
    let t0 = Instant::now();
    let mut slider = build(base_config(), 3, 400, t0);
    slider.on_drag_start(Px(500));
    slider.on_drag_move(Px(450), false, t0 + ms(20));
    slider.on_drag_move(Px(399), false, t0 + ms(40));
    assert_eq!(slider.offset(), Px(400));
    slider.on_drag_end(t0 + ms(60));
    assert!(slider.is_transitioning());
    slider.poll(t0 + ms(360));
    assert_eq!(slider.index(), 1);

    slider.on_drag_start(Px(100));
    slider.on_drag_move(Px(201), false, t0 + ms(400));
    slider.on_drag_end(t0 + ms(420));
    slider.poll(t0 + ms(720));
    assert_eq!(slider.index(), 0);
}

#[test]
fn drag_leaving_travel_window_finalizes_immediately() {
    let t0 = Instant::now();
    let mut slider = build(base_config(), 3, 400, t0);
    slider.on_drag_start(Px(500));
    slider.on_drag_move(Px(650), false, t0 + ms(30));
    assert!(slider.is_transitioning());
    assert_eq!(slider.raw_index(), -1);
    assert!(!slider.drag().focused);

    let before = slider.surface().offsets().len();
    slider.on_drag_move(Px(700), false, t0 + ms(40));
    slider.on_drag_end(t0 + ms(50));
    assert_eq!(slider.surface().offsets().len(), before);

    slider.poll(t0 + ms(330));
    assert_eq!(slider.index(), 2);
    assert_eq!(slider.offset(), Px(1200));
}

#[test]
fn bounded_drag_holds_at_first_page_through_jitter() {
    let t0 = Instant::now();
    let mut slider = build(base_config().loop_mode(false), 4, 400, t0);
    slider.on_drag_start(Px(200));
    slider.on_drag_move(Px(210), false, t0);
    assert!(slider.drag().focused);
    slider.on_drag_move(Px(90), false, t0 + ms(20));
    assert_eq!(slider.surface().offsets(), vec![Px(0), Px(110)]);
    slider.on_drag_end(t0 + ms(40));
    slider.poll(t0 + ms(340));
    assert_eq!(slider.index(), 1);
}

#[test]
fn bounded_drag_pushed_past_first_page_settles_back() {
    let t0 = Instant::now();
    let (config, changes) = record_changes(base_config().loop_mode(false));
    let mut slider = build(config, 4, 400, t0);
    slider.on_drag_start(Px(200));
    slider.on_drag_move(Px(250), false, t0);
    slider.on_drag_move(Px(300), false, t0 + ms(10));
    assert!(slider.drag().focused);
    slider.on_drag_move(Px(301), false, t0 + ms(20));
    assert!(!slider.drag().focused);
    assert!(slider.is_transitioning());

    slider.poll(t0 + ms(320));
    assert_eq!(slider.index(), 0);
    assert_eq!(slider.offset(), Px(0));
    assert!(changes.lock().is_empty());
}

#[test]
fn loop_drag_wraps_from_last_slide_with_default_slack() {
    let t0 = Instant::now();
    let mut slider = build(base_config(), 3, 400, t0);
    slider.on_bullet_clicked(2, t0);
    slider.poll(t0 + ms(300));

    slider.on_drag_start(Px(500));
    for x in [480, 440, 400] {
        slider.on_drag_move(Px(x), false, t0 + ms(400));
    }
    assert!(slider.drag().focused);
    slider.on_drag_move(Px(399), false, t0 + ms(410));
    assert!(slider.is_transitioning());
    slider.poll(t0 + ms(710));
    assert_eq!(slider.index(), 0);
}

#[test]
fn loop_drag_wraps_within_wider_slack() {
    let t0 = Instant::now();
    let mut slider = build(base_config().drag_slack(Px(150)), 3, 400, t0);
    slider.on_bullet_clicked(2, t0);
    slider.poll(t0 + ms(300));

    slider.on_drag_start(Px(500));
    for x in [480, 440, 400, 350] {
        slider.on_drag_move(Px(x), false, t0 + ms(400));
    }
    assert!(slider.drag().focused);
    assert_eq!(slider.surface().offsets().last(), Some(&Px(1350)));
    slider.on_drag_end(t0 + ms(420));
    slider.poll(t0 + ms(720));
    assert_eq!(slider.index(), 0);
}

#[test]
fn drag_moves_ignored_while_transitioning() {
    let t0 = Instant::now();
    let mut slider = build(base_config(), 3, 400, t0);
    slider.on_advance_requested(t0);
    slider.surface_mut().take();

    slider.on_drag_start(Px(500));
    slider.on_drag_move(Px(300), false, t0 + ms(10));
    assert_eq!(slider.drag().diff, Px::ZERO);
    slider.on_drag_end(t0 + ms(20));
    assert_eq!(
        slider.surface_mut().take(),
        vec![
            Command::Duration(Duration::ZERO),
            Command::Duration(ms(300)),
            Command::Offset(Px(800)),
        ]
    );
}

#[test]
fn drag_disabled_is_ignored() {
    let t0 = Instant::now();
    let mut slider = build(base_config().enable_drag(false), 3, 400, t0);
    slider.on_drag_start(Px(500));
    slider.on_drag_move(Px(100), false, t0);
    slider.on_drag_end(t0);
    assert!(slider.surface().commands.is_empty());
    assert_eq!(slider.index(), 0);
}

#[test]
fn drag_pauses_autoplay_and_resets_it_once() {
    let t0 = Instant::now();
    let mut slider = build(base_config().autoplay(true), 3, 400, t0);
    slider.on_drag_start(Px(500));
    assert_eq!(slider.autoplay_deadline(), None);
    for x in (420..500).rev().step_by(10) {
        slider.on_drag_move(Px(x), false, t0 + ms(1000));
    }
    slider.poll(t0 + ms(1500));
    assert_eq!(slider.index(), 0);

    slider.on_drag_end(t0 + ms(1600));
    assert_eq!(slider.autoplay_deadline(), Some(t0 + ms(2900)));
}

#[test]
fn drag_over_link_suppresses_following_click() {
    let t0 = Instant::now();
    let mut slider = build(base_config(), 3, 400, t0);
    slider.on_drag_start(Px(500));
    slider.on_drag_move(Px(470), true, t0);
    slider.on_drag_end(t0 + ms(10));
    assert!(!slider.drag().is_link);
    assert!(slider.take_click_suppression());
    assert!(!slider.take_click_suppression());

    slider.on_drag_start(Px(500));
    slider.on_drag_end(t0 + ms(20));
    assert!(!slider.take_click_suppression());
}

#[test]
fn resize_across_breakpoint_relayouts_without_transition() {
    let t0 = Instant::now();
    let table = SlidesPerView::fixed(1).breakpoint(Px(800), 3);
    let mut slider = build(base_config().slides_per_view(table), 5, 400, t0);
    assert_eq!(slider.slide_set(), SlideSet::new(5, 3));
    assert_eq!(slider.offset(), Px(1200));

    slider.on_resize(Px(900));
    assert_eq!(slider.slides_per_view(), 3);
    assert_eq!(
        slider.surface_mut().take(),
        vec![
            Command::Layout(Px(300), Px(3300)),
            Command::Duration(Duration::ZERO),
            Command::Offset(Px(600)),
        ]
    );

    for _ in 0..3 {
        slider.on_resize(Px(900));
    }
    assert!(slider.surface().commands.is_empty());
    assert_eq!(slider.offset(), Px(600));
}

#[test]
fn bounded_resize_clamps_index_to_new_last_page() {
    let t0 = Instant::now();
    let table = SlidesPerView::fixed(1).breakpoint(Px(800), 3);
    let config = base_config().loop_mode(false).slides_per_view(table);
    let mut slider = build(config, 5, 400, t0);
    slider.on_bullet_clicked(4, t0);
    slider.poll(t0 + ms(300));
    assert_eq!(slider.index(), 4);
    assert_eq!(slider.offset(), Px(1600));

    slider.on_resize(Px(900));
    assert_eq!(slider.index(), 2);
    assert_eq!(slider.active_bullet(), 2);
    assert_eq!(slider.slide_width(), Px(300));
    assert_eq!(slider.wrapper_width(), Px(1500));
    assert_eq!(slider.offset(), Px(600));
}

#[test]
fn zero_width_defers_layout_and_init() {
    let t0 = Instant::now();
    let inits = Arc::new(Mutex::new(0usize));
    let config = {
        let inits = Arc::clone(&inits);
        base_config().on_init(move || *inits.lock() += 1)
    };
    let mut slider = build(config, 3, 0, t0);
    assert!(!slider.is_initialized());
    assert_eq!(*inits.lock(), 0);

    slider.on_resize(Px::ZERO);
    assert!(slider.surface().commands.is_empty());

    slider.on_resize(Px(400));
    assert_eq!(*inits.lock(), 1);
    assert_eq!(slider.offset(), Px(400));

    slider.on_resize(Px(500));
    assert_eq!(*inits.lock(), 1);
    assert_eq!(slider.offset(), Px(500));
}

#[test]
fn hidden_page_stops_autoplay() {
    let t0 = Instant::now();
    let mut slider = build(base_config().autoplay(true), 3, 400, t0);
    slider.on_visibility_change(true, t0 + ms(500));
    assert_eq!(slider.next_deadline(), None);
    slider.poll(t0 + ms(5000));
    assert_eq!(slider.index(), 0);

    slider.on_visibility_change(false, t0 + ms(5000));
    assert_eq!(slider.next_deadline(), Some(t0 + ms(6300)));
    slider.poll(t0 + ms(6300));
    assert_eq!(slider.raw_index(), 1);
    assert_eq!(slider.next_deadline(), Some(t0 + ms(6600)));
}

#[test]
fn missing_pagination_never_touches_bullets() {
    let t0 = Instant::now();
    let mut slider = match Slider::new(
        base_config(),
        3,
        Px(400),
        Recorder::without_pagination(),
        t0,
    ) {
        Ok(slider) => slider,
        Err(err) => panic!("{err}"),
    };
    slider.on_advance_requested(t0);
    slider.poll(t0 + ms(300));
    assert_eq!(slider.index(), 1);
    assert!(slider.surface().bullets().is_empty());
    assert_eq!(slider.active_bullet(), 1);
}

#[test]
fn out_of_range_bullet_is_ignored() {
    let t0 = Instant::now();
    let mut slider = build(base_config(), 3, 400, t0);
    assert!(!slider.on_bullet_clicked(3, t0));
    assert!(!slider.is_transitioning());
    assert!(slider.surface().commands.is_empty());
}

#[test]
fn bullet_click_jumps_to_slide() {
    let t0 = Instant::now();
    let (config, changes) = record_changes(base_config());
    let mut slider = build(config, 5, 400, t0);
    assert!(slider.on_bullet_clicked(3, t0));
    assert_eq!(slider.active_bullet(), 3);
    slider.poll(t0 + ms(300));
    assert_eq!(slider.index(), 3);
    assert_eq!(
        changes.lock().as_slice(),
        &[ActiveSlide {
            index: 3,
            wrapper_position: 4
        }]
    );

    // Clicking the active bullet animates in place and reports nothing.
    slider.on_bullet_clicked(3, t0 + ms(400));
    slider.poll(t0 + ms(700));
    assert_eq!(changes.lock().len(), 1);
}

#[test]
fn zero_speed_settles_synchronously() {
    let t0 = Instant::now();
    let mut slider = build(base_config().speed(Duration::ZERO), 2, 400, t0);
    assert!(slider.on_advance_requested(t0));
    assert!(!slider.is_transitioning());
    assert!(slider.on_advance_requested(t0));
    assert_eq!(slider.index(), 0);
    assert_eq!(slider.raw_index(), 0);
    assert_eq!(slider.offset(), Px(400));
}

#[test]
fn instances_do_not_share_state() {
    let t0 = Instant::now();
    let mut first = build(base_config().autoplay(true), 3, 400, t0);
    let second = build(base_config().autoplay(true), 3, 400, t0 + ms(100));
    first.on_advance_requested(t0 + ms(200));
    assert_eq!(first.autoplay_deadline(), Some(t0 + ms(1500)));
    assert_eq!(second.autoplay_deadline(), Some(t0 + ms(1400)));
    assert!(!second.is_transitioning());
}

#[test]
fn rejects_invalid_config() {
    let t0 = Instant::now();
    let result = Slider::new(base_config(), 0, Px(400), Recorder::new(), t0);
    assert!(matches!(result, Err(crate::ConfigError::NoSlides)));
}

#[test]
fn rejects_unschedulable_speed_instead_of_panicking() {
    let t0 = Instant::now();
    let config = SliderConfig::default().speed(Duration::MAX).autoplay(true);
    let result = Slider::new(config, 3, Px(400), Recorder::new(), t0);
    assert!(matches!(
        result,
        Err(crate::ConfigError::DurationTooLong { field: "speed", .. })
    ));
}

#[test]
fn rejects_slack_that_blocks_wrapping_drags() {
    let t0 = Instant::now();
    let config = base_config().drag_slack(Px(50));
    let result = Slider::new(config, 3, Px(400), Recorder::new(), t0);
    assert!(matches!(
        result,
        Err(crate::ConfigError::SlackBelowThreshold { .. })
    ));
}
