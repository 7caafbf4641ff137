use chatpose_foundation::{
    ConfigError, MessageId, MessageInfo, PointerSample, RawReaction, ReactionKind,
    ResolvedReactions, RowSlot, Sender,
};
use chatpose_ui::{
    ConversationSurface, InteractionConfig, OverlayAction, SafeZone, SurfaceEffect,
};
use chatpose_ui_graphics::{EdgeInsets, Point, Rect, Size};

const FRAME_NANOS: u64 = 16_666_667;

/// One scripted step of the session.
enum Step {
    Down(Point),
    Move(Point),
    Up,
    /// Frames for this many milliseconds.
    Wait(u64),
    Select(OverlayAction),
    Tap(Point),
    Keyboard(f32),
}

struct Session {
    surface: ConversationSurface,
    now_nanos: u64,
    last_position: Point,
    effects: usize,
}

impl Session {
    fn new(surface: ConversationSurface) -> Self {
        Self {
            surface,
            now_nanos: 0,
            last_position: Point::ZERO,
            effects: 0,
        }
    }

    fn run(&mut self, title: &str, steps: &[Step]) {
        log::info!("--- {title} ---");
        for step in steps {
            match step {
                Step::Down(at) => self.pointer(PointerSample::down(*at, self.now_nanos)),
                Step::Move(at) => {
                    self.frame();
                    self.pointer(PointerSample::moved(*at, self.now_nanos));
                }
                Step::Up => self.pointer(PointerSample::up(self.last_position, self.now_nanos)),
                Step::Wait(millis) => {
                    let until = self.now_nanos + millis * 1_000_000;
                    while self.now_nanos < until {
                        self.frame();
                    }
                }
                Step::Select(action) => {
                    let effects = self.surface.select_action(*action);
                    self.report(effects);
                }
                Step::Tap(at) => {
                    self.pointer(PointerSample::down(*at, self.now_nanos));
                    self.frame();
                    self.pointer(PointerSample::up(*at, self.now_nanos));
                }
                Step::Keyboard(height) => {
                    let zone = SafeZone::resolve(system_insets(), *height, INPUT_BAR);
                    let effects = self.surface.on_safe_zone_changed(zone);
                    self.report(effects);
                }
            }
        }
        while !self.surface.is_idle() {
            self.frame();
        }
    }

    fn pointer(&mut self, sample: PointerSample) {
        self.last_position = sample.position;
        let effects = self.surface.on_pointer_event(&sample);
        if sample.is_consumed() {
            log::trace!("{:?} at {:?} consumed", sample.kind, sample.position);
        } else {
            log::trace!("{:?} at {:?} passed to the list", sample.kind, sample.position);
        }
        self.report(effects);
    }

    fn frame(&mut self) {
        let effects = self.surface.advance_frame(self.now_nanos);
        self.now_nanos += FRAME_NANOS;
        self.report(effects);
    }

    fn report(&mut self, effects: impl IntoIterator<Item = SurfaceEffect>) {
        for effect in effects {
            self.effects += 1;
            log::info!("[{:>6.1} ms] {:?}", self.now_nanos as f64 / 1e6, effect);
        }
    }
}

const INPUT_BAR: f32 = 56.0;

fn system_insets() -> EdgeInsets {
    EdgeInsets::from_components(0.0, 40.0, 0.0, 24.0)
}

fn build_surface() -> Result<ConversationSurface, ConfigError> {
    let mut surface = ConversationSurface::new(InteractionConfig::default(), Size::new(1080.0, 2340.0))?;
    surface.on_safe_zone_changed(SafeZone::resolve(system_insets(), 0.0, INPUT_BAR));
    surface.bind_row(
        RowSlot(0),
        MessageInfo::incoming(1),
        Rect::new(0.0, 1200.0, 1080.0, 120.0),
        600.0,
    );
    surface.bind_row(
        RowSlot(1),
        MessageInfo::outgoing(2),
        Rect::new(0.0, 1400.0, 1080.0, 120.0),
        500.0,
    );
    surface.bind_row(
        RowSlot(2),
        MessageInfo::outgoing(3).with_reply_allowed(false),
        Rect::new(0.0, 1600.0, 1080.0, 120.0),
        300.0,
    );
    surface.set_reactions(
        MessageId(2),
        ResolvedReactions::resolve(&[
            RawReaction::numeric(Sender::Handle("+15550100".into()), 2001, 10),
            RawReaction::text(Sender::Me, "Loved “see you there”", 20),
        ]),
    );
    Ok(surface)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let surface = match build_surface() {
        Ok(surface) => surface,
        Err(err) => {
            log::error!("invalid interaction config: {err}");
            std::process::exit(1);
        }
    };
    let mut session = Session::new(surface);

    session.run(
        "reply swipe on an incoming message",
        &[
            Step::Down(Point::new(300.0, 1260.0)),
            Step::Move(Point::new(320.0, 1262.0)),
            Step::Move(Point::new(350.0, 1263.0)),
            Step::Move(Point::new(380.0, 1263.0)),
            Step::Move(Point::new(400.0, 1264.0)),
            Step::Up,
        ],
    );

    session.run(
        "vertical scroll over a message",
        &[
            Step::Down(Point::new(800.0, 1450.0)),
            Step::Move(Point::new(802.0, 1430.0)),
            Step::Move(Point::new(803.0, 1380.0)),
            Step::Up,
        ],
    );

    session.run(
        "date reveal on a message without replies",
        &[
            Step::Down(Point::new(950.0, 1650.0)),
            Step::Move(Point::new(930.0, 1650.0)),
            Step::Move(Point::new(880.0, 1651.0)),
            Step::Up,
        ],
    );

    session.run(
        "long press, keyboard, reaction",
        &[
            Step::Down(Point::new(800.0, 1460.0)),
            Step::Wait(550),
            Step::Up,
            Step::Wait(400),
            Step::Keyboard(900.0),
            Step::Select(OverlayAction::React(ReactionKind::Laugh)),
        ],
    );

    session.run(
        "long press and outside tap",
        &[
            Step::Down(Point::new(300.0, 1260.0)),
            Step::Wait(550),
            Step::Up,
            Step::Wait(400),
            Step::Tap(Point::new(1000.0, 200.0)),
        ],
    );

    log::info!("session finished with {} effects", session.effects);
}
