//! End-to-end negotiation scenarios against recording fakes.

use tradeui_core::{GamePhase, PlayerId, RecipientSet, ResourceVector, TradeOffer};
use tradeui_panel::{
    GameView, MessageSender, OfferPanelController, PanelConfig, PanelHost, TradeAction,
};
use tradeui_state::TickOutcome;

#[derive(Debug, Clone)]
struct FakeGame {
    seats: Vec<Option<String>>,
    bots: Vec<bool>,
    viewer: Option<PlayerId>,
    resources: ResourceVector,
    phase: GamePhase,
    sea_board: bool,
}

impl FakeGame {
    fn four_player() -> Self {
        Self {
            seats: vec![
                Some("viewer".into()),
                Some("botto".into()),
                Some("cal".into()),
                None,
            ],
            bots: vec![false, true, false, false],
            viewer: Some(PlayerId(0)),
            resources: ResourceVector::ZERO,
            phase: GamePhase::FreeTrading,
            sea_board: false,
        }
    }
}

impl GameView for FakeGame {
    fn player_name(&self, id: PlayerId) -> Option<String> {
        self.seats.get(id.index()).cloned().flatten()
    }

    fn is_bot(&self, id: PlayerId) -> bool {
        self.bots.get(id.index()).copied().unwrap_or(false)
    }

    fn seat_names(&self) -> Vec<Option<String>> {
        self.seats.clone()
    }

    fn viewer_id(&self) -> Option<PlayerId> {
        self.viewer
    }

    fn viewer_resources(&self) -> ResourceVector {
        self.resources
    }

    fn max_players(&self) -> usize {
        self.seats.len()
    }

    fn current_phase(&self) -> GamePhase {
        self.phase
    }

    fn has_sea_board(&self) -> bool {
        self.sea_board
    }
}

#[derive(Debug, Default)]
struct FakeSender {
    offers: Vec<TradeOffer>,
    accepts: Vec<PlayerId>,
}

impl MessageSender for FakeSender {
    fn send_trade_offer(&mut self, offer: &TradeOffer) {
        self.offers.push(offer.clone());
    }

    fn send_accept_offer(&mut self, from: PlayerId) {
        self.accepts.push(from);
    }
}

#[derive(Debug, Default)]
struct FakeHost {
    visibility_changes: Vec<bool>,
    rejected_at_viewer: u32,
    undo_disabled: u32,
    messages: Vec<String>,
    repaints: u32,
}

impl PanelHost for FakeHost {
    fn counter_offer_visibility_changed(&mut self, visible: bool) {
        self.visibility_changes.push(visible);
    }

    fn offer_rejected_at_viewer(&mut self) {
        self.rejected_at_viewer += 1;
    }

    fn disable_bank_trade_undo(&mut self) {
        self.undo_disabled += 1;
    }

    fn report_message(&mut self, text: &str) {
        self.messages.push(text.to_owned());
    }

    fn request_repaint(&mut self) {
        self.repaints += 1;
    }
}

struct FakeConfig {
    auto_reject_seconds: u32,
}

impl PanelConfig for FakeConfig {
    fn auto_reject_seconds(&self) -> u32 {
        self.auto_reject_seconds
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn bot_offer_to_viewer() -> TradeOffer {
    TradeOffer::new(
        PlayerId(1),
        RecipientSet::of(4, &[PlayerId(0)]),
        ResourceVector::new([3, 0, 0, 0, 0]),
        ResourceVector::new([0, 0, 1, 0, 0]),
    )
}

fn show_bot_offer(
    controller: &mut OfferPanelController,
    game: &FakeGame,
    host: &mut FakeHost,
    seconds: u32,
) {
    init_tracing();
    let config = FakeConfig {
        auto_reject_seconds: seconds,
    };
    controller.set_offer(bot_offer_to_viewer(), game, &config, host);
}

#[test]
fn ignored_bot_offer_is_auto_rejected() {
    let game = FakeGame::four_player();
    let mut host = FakeHost::default();
    let mut controller = OfferPanelController::new(PlayerId(1));

    show_bot_offer(&mut controller, &game, &mut host, 5);
    assert!(controller.is_visible());
    let epoch = controller.state().countdown().epoch();

    // Five displayed seconds, then the next scheduled tick fires Reject.
    for expected in (1..=5).rev() {
        assert_eq!(
            controller.countdown_tick(epoch, &mut host),
            TickOutcome::Display(expected)
        );
    }
    assert_eq!(
        controller.countdown_tick(epoch, &mut host),
        TickOutcome::FireReject
    );

    assert_eq!(host.rejected_at_viewer, 1);
    assert!(!controller.is_visible());

    // Late straggler ticks are inert.
    assert_eq!(
        controller.countdown_tick(epoch, &mut host),
        TickOutcome::Ignored
    );
    assert_eq!(host.rejected_at_viewer, 1);
}

#[test]
fn counter_before_expiry_cancels_countdown() {
    let game = FakeGame::four_player();
    let mut host = FakeHost::default();
    let mut sender = FakeSender::default();
    let mut controller = OfferPanelController::new(PlayerId(1));

    show_bot_offer(&mut controller, &game, &mut host, 5);
    let epoch = controller.state().countdown().epoch();

    assert_eq!(
        controller.countdown_tick(epoch, &mut host),
        TickOutcome::Display(5)
    );
    assert_eq!(
        controller.countdown_tick(epoch, &mut host),
        TickOutcome::Display(4)
    );

    controller
        .handle(TradeAction::Counter, &game, &mut sender, &mut host)
        .unwrap();
    assert!(controller.state().counter_offer_mode());

    // Tick 3 was already scheduled when Counter was pressed: it must not
    // display anything or fire Reject.
    assert_eq!(
        controller.countdown_tick(epoch, &mut host),
        TickOutcome::Ignored
    );
    assert_eq!(host.rejected_at_viewer, 0);
    assert_eq!(host.visibility_changes, vec![true]);
}

#[test]
fn send_with_empty_give_side_is_rejected_with_advisory() {
    let game = FakeGame::four_player();
    let mut host = FakeHost::default();
    let mut sender = FakeSender::default();
    let mut controller = OfferPanelController::new(PlayerId(1));

    show_bot_offer(&mut controller, &game, &mut host, 0);
    controller
        .handle(TradeAction::Counter, &game, &mut sender, &mut host)
        .unwrap();

    // give-sum 0, get-sum 3.
    controller.state_mut().draft_mut().set_values(
        ResourceVector::ZERO,
        ResourceVector::new([0, 0, 3, 0, 0]),
    );

    controller
        .handle(TradeAction::Send, &game, &mut sender, &mut host)
        .unwrap();

    assert_eq!(host.messages.len(), 1);
    assert!(host.messages[0].contains("at least one resource"));
    assert!(sender.offers.is_empty());
    // State unchanged: still drafting, draft untouched.
    assert!(controller.state().counter_offer_mode());
    let (give, get) = controller.state().draft().values();
    assert!(give.is_empty());
    assert_eq!(get.total(), 3);
}

#[test]
fn send_beyond_holdings_is_rejected_with_advisory() {
    let mut game = FakeGame::four_player();
    game.resources = ResourceVector::new([1, 0, 0, 0, 0]);
    let mut host = FakeHost::default();
    let mut sender = FakeSender::default();
    let mut controller = OfferPanelController::new(PlayerId(1));

    show_bot_offer(&mut controller, &game, &mut host, 0);
    controller
        .handle(TradeAction::Counter, &game, &mut sender, &mut host)
        .unwrap();
    controller.state_mut().draft_mut().set_values(
        ResourceVector::new([2, 0, 0, 0, 0]),
        ResourceVector::new([0, 1, 0, 0, 0]),
    );

    controller
        .handle(TradeAction::Send, &game, &mut sender, &mut host)
        .unwrap();

    assert_eq!(host.messages.len(), 1);
    assert!(host.messages[0].contains("don't have"));
    assert!(sender.offers.is_empty());
    assert!(controller.state().counter_offer_mode());
}

#[test]
fn valid_send_addresses_original_proposer_and_keeps_box_open() {
    let mut game = FakeGame::four_player();
    game.resources = ResourceVector::new([2, 0, 0, 0, 0]);
    let mut host = FakeHost::default();
    let mut sender = FakeSender::default();
    let mut controller = OfferPanelController::new(PlayerId(1));

    show_bot_offer(&mut controller, &game, &mut host, 0);
    controller
        .handle(TradeAction::Counter, &game, &mut sender, &mut host)
        .unwrap();
    controller.state_mut().draft_mut().set_values(
        ResourceVector::new([1, 0, 0, 0, 0]),
        ResourceVector::new([0, 0, 0, 0, 1]),
    );

    controller
        .handle(TradeAction::Send, &game, &mut sender, &mut host)
        .unwrap();

    assert_eq!(sender.offers.len(), 1);
    let sent = &sender.offers[0];
    assert_eq!(sent.from, PlayerId(0));
    assert!(sent.to.contains(PlayerId(1)));
    assert_eq!(sent.to.iter().count(), 1);
    assert!(host.messages.is_empty());
    assert!(controller.state().counter_offer_mode());
    // The draft survives so the viewer can see what they sent.
    assert!(!controller.state().draft().is_zero());
}

#[test]
fn send_outside_trading_phase_does_nothing() {
    let mut game = FakeGame::four_player();
    game.resources = ResourceVector::new([2, 0, 0, 0, 0]);
    game.phase = GamePhase::Other;
    let mut host = FakeHost::default();
    let mut sender = FakeSender::default();
    let mut controller = OfferPanelController::new(PlayerId(1));

    show_bot_offer(&mut controller, &game, &mut host, 0);
    controller
        .handle(TradeAction::Counter, &game, &mut sender, &mut host)
        .unwrap();
    controller.state_mut().draft_mut().set_values(
        ResourceVector::new([1, 0, 0, 0, 0]),
        ResourceVector::new([0, 0, 0, 0, 1]),
    );
    controller
        .handle(TradeAction::Send, &game, &mut sender, &mut host)
        .unwrap();

    assert!(sender.offers.is_empty());
    assert!(host.messages.is_empty());
}

#[test]
fn accept_requires_componentwise_affordability() {
    let mut game = FakeGame::four_player();
    // Holdings [1,0,0,0,0] vs asked [0,0,1,0,0]: same total, wrong kind.
    game.resources = ResourceVector::new([1, 0, 0, 0, 0]);
    let mut host = FakeHost::default();
    let mut sender = FakeSender::default();
    let mut controller = OfferPanelController::new(PlayerId(1));

    show_bot_offer(&mut controller, &game, &mut host, 0);
    assert!(!controller.state().can_accept());

    controller
        .handle(TradeAction::Accept, &game, &mut sender, &mut host)
        .unwrap();
    assert!(sender.accepts.is_empty());
    assert_eq!(host.undo_disabled, 0);
}

#[test]
fn accept_sends_message_and_disables_bank_undo() {
    let mut game = FakeGame::four_player();
    game.resources = ResourceVector::new([0, 0, 1, 0, 0]);
    let mut host = FakeHost::default();
    let mut sender = FakeSender::default();
    let mut controller = OfferPanelController::new(PlayerId(1));

    show_bot_offer(&mut controller, &game, &mut host, 5);
    assert!(controller.state().buttons().accept);

    controller
        .handle(TradeAction::Accept, &game, &mut sender, &mut host)
        .unwrap();

    assert_eq!(sender.accepts, vec![PlayerId(1)]);
    assert_eq!(host.undo_disabled, 1);
    assert!(!controller.state().countdown().is_running());
}

#[test]
fn reject_hides_panel_and_notifies_host() {
    let game = FakeGame::four_player();
    let mut host = FakeHost::default();
    let mut sender = FakeSender::default();
    let mut controller = OfferPanelController::new(PlayerId(1));

    show_bot_offer(&mut controller, &game, &mut host, 5);
    controller
        .handle(TradeAction::Reject, &game, &mut sender, &mut host)
        .unwrap();

    assert!(!controller.is_visible());
    assert_eq!(host.rejected_at_viewer, 1);
    assert!(!controller.state().countdown().is_running());
}

#[test]
fn accept_after_reject_is_ignored() {
    let mut game = FakeGame::four_player();
    game.resources = ResourceVector::new([0, 0, 1, 0, 0]);
    let mut host = FakeHost::default();
    let mut sender = FakeSender::default();
    let mut controller = OfferPanelController::new(PlayerId(1));

    show_bot_offer(&mut controller, &game, &mut host, 0);
    assert!(controller.state().buttons().accept);

    controller
        .handle(TradeAction::Reject, &game, &mut sender, &mut host)
        .unwrap();
    assert!(!controller.is_visible());
    assert_eq!(host.rejected_at_viewer, 1);

    // The offer was rejected at this viewer; a late Accept must not
    // resurrect it.
    controller
        .handle(TradeAction::Accept, &game, &mut sender, &mut host)
        .unwrap();
    assert!(sender.accepts.is_empty());
    assert_eq!(host.undo_disabled, 0);
}

#[test]
fn accept_after_countdown_expiry_is_ignored() {
    let mut game = FakeGame::four_player();
    game.resources = ResourceVector::new([0, 0, 1, 0, 0]);
    let mut host = FakeHost::default();
    let mut sender = FakeSender::default();
    let mut controller = OfferPanelController::new(PlayerId(1));

    show_bot_offer(&mut controller, &game, &mut host, 1);
    let epoch = controller.state().countdown().epoch();
    assert_eq!(
        controller.countdown_tick(epoch, &mut host),
        TickOutcome::Display(1)
    );
    assert_eq!(
        controller.countdown_tick(epoch, &mut host),
        TickOutcome::FireReject
    );
    assert!(!controller.is_visible());

    controller
        .handle(TradeAction::Accept, &game, &mut sender, &mut host)
        .unwrap();
    assert!(sender.accepts.is_empty());
    assert_eq!(host.undo_disabled, 0);
}

#[test]
fn cancel_closes_box_and_clears_draft() {
    let game = FakeGame::four_player();
    let mut host = FakeHost::default();
    let mut sender = FakeSender::default();
    let mut controller = OfferPanelController::new(PlayerId(1));

    show_bot_offer(&mut controller, &game, &mut host, 0);
    controller
        .handle(TradeAction::Counter, &game, &mut sender, &mut host)
        .unwrap();
    controller.state_mut().draft_mut().set_values(
        ResourceVector::new([1, 0, 0, 0, 0]),
        ResourceVector::new([0, 1, 0, 0, 0]),
    );
    controller
        .handle(TradeAction::Cancel, &game, &mut sender, &mut host)
        .unwrap();

    assert!(!controller.state().counter_offer_mode());
    assert!(controller.state().draft().is_zero());
    assert_eq!(host.visibility_changes, vec![true, false]);
}

#[test]
fn counter_offer_box_forces_compact_when_host_is_short() {
    let game = FakeGame::four_player();
    let mut host = FakeHost::default();
    let mut sender = FakeSender::default();
    let mut controller = OfferPanelController::new(PlayerId(1));

    show_bot_offer(&mut controller, &game, &mut host, 0);
    controller
        .handle(TradeAction::Counter, &game, &mut sender, &mut host)
        .unwrap();

    controller.set_available_space(400, 120);
    let repaints_before = host.repaints;
    let decision = controller.preferred_size(0, &mut host);
    assert!(decision.compact);
    assert!(decision.repaint_needed);
    assert!(host.repaints > repaints_before);
    assert!(decision.size.height <= 120);
}

#[test]
fn resource_gain_enables_accept_mid_offer() {
    let mut game = FakeGame::four_player();
    let mut host = FakeHost::default();
    let mut controller = OfferPanelController::new(PlayerId(1));

    show_bot_offer(&mut controller, &game, &mut host, 0);
    assert!(!controller.state().buttons().accept);

    game.resources = ResourceVector::new([0, 0, 2, 0, 0]);
    controller.update_offer_buttons(&game);
    assert!(controller.state().buttons().accept);
}

#[test]
fn panicking_collaborator_is_contained() {
    struct PanickyHost {
        messages: Vec<String>,
    }

    impl PanelHost for PanickyHost {
        fn counter_offer_visibility_changed(&mut self, _visible: bool) {
            panic!("host repaint exploded");
        }
        fn offer_rejected_at_viewer(&mut self) {}
        fn disable_bank_trade_undo(&mut self) {}
        fn report_message(&mut self, text: &str) {
            self.messages.push(text.to_owned());
        }
        fn request_repaint(&mut self) {}
    }

    let game = FakeGame::four_player();
    let mut sender = FakeSender::default();
    let mut host = PanickyHost {
        messages: Vec::new(),
    };
    let mut controller = OfferPanelController::new(PlayerId(1));

    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));
    let result = controller.handle(TradeAction::Counter, &game, &mut sender, &mut host);
    std::panic::set_hook(prev_hook);

    let err = result.unwrap_err();
    assert_eq!(err.error_type(), "action_panicked");
    assert!(err.is_recoverable());
    assert_eq!(host.messages.len(), 1);
    assert!(host.messages[0].contains("host repaint exploded"));

    // The loop is still alive: the next action dispatches normally.
    let mut good_host = FakeHost::default();
    controller
        .handle(TradeAction::Cancel, &game, &mut sender, &mut good_host)
        .unwrap();
}
