use crate::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use sw_core::config::default_salt_config;
use sw_core::{InputField, RawInput, SaltConfig, Tier};

fn cfg() -> Arc<SaltConfig> { Arc::new(default_salt_config()) }

fn seeded() -> Box<StdRng> { Box::new(StdRng::seed_from_u64(11)) }

fn ms(n: u64) -> Duration { Duration::from_millis(n) }

fn widget(sliders: &MemorySliders, renderer: &RecordingRenderer) -> SalinityWidget<MemorySliders, RecordingRenderer> {
    SalinityWidget::attach(Some(sliders.clone()), Some(renderer.clone()), cfg(), seeded())
}

// ========== Initialization ==========

#[tokio::test]
async fn test_attach_renders_defaults() {
    let sliders = MemorySliders::new();
    let renderer = RecordingRenderer::new();
    let w = widget(&sliders, &renderer);
    assert_eq!(w.status(), WidgetStatus::Ready);
    assert_eq!(renderer.render_count(), 1);
    let state = renderer.last().unwrap();
    assert_eq!(state.loss_mg, 726);
    assert_eq!(state.formatted_loss, "726mg");
    assert_eq!(state.tier_label, "MODERATE");
    assert!(!state.message.is_empty());
    assert_eq!(w.last_state(), Some(state));
}

#[test]
fn test_attach_missing_handles_is_inert() {
    let renderer = RecordingRenderer::new();
    let mut w: SalinityWidget<MemorySliders, _> =
        SalinityWidget::attach(None, Some(renderer.clone()), cfg(), seeded());
    assert_eq!(w.status(), WidgetStatus::Uninitialized);
    w.on_input(InputField::Duration);
    assert!(w.on_commit(InputField::Duration).is_none());
    assert!(w.last_state().is_none());
    assert!(!w.has_pending());
    assert_eq!(renderer.render_count(), 0);
    assert!(renderer.notices().is_empty());
}

#[test]
fn test_attach_missing_renderer_is_inert() {
    let w: SalinityWidget<_, RecordingRenderer> =
        SalinityWidget::attach(Some(MemorySliders::new()), None, cfg(), seeded());
    assert_eq!(w.status(), WidgetStatus::Uninitialized);
}

#[test]
fn test_attach_invalid_config_shows_notice() {
    let mut c = default_salt_config();
    c.tiers.low.messages.clear();
    let renderer = RecordingRenderer::new();
    let w = SalinityWidget::attach(Some(MemorySliders::new()), Some(renderer.clone()), Arc::new(c), seeded());
    assert_eq!(w.status(), WidgetStatus::Uninitialized);
    assert_eq!(renderer.notices(), vec![UNAVAILABLE_MESSAGE.to_string()]);
    assert_eq!(renderer.render_count(), 0);
}

#[test]
fn test_attach_without_runtime_shows_notice() {
    let renderer = RecordingRenderer::new();
    let w = widget(&MemorySliders::new(), &renderer);
    assert_eq!(w.status(), WidgetStatus::Uninitialized);
    assert_eq!(renderer.notices().len(), 1);
}

#[tokio::test]
async fn test_closure_input_source() {
    let renderer = RecordingRenderer::new();
    let source = |f: InputField| match f {
        InputField::Duration => RawInput::from("180"),
        InputField::Temperature => RawInput::from(110),
        InputField::Intensity => RawInput::from("10"),
        InputField::Humidity => RawInput::from(100.0),
    };
    let w = SalinityWidget::attach(Some(source), Some(renderer.clone()), cfg(), seeded());
    let state = w.last_state().unwrap();
    assert_eq!(state.tier, Tier::Extreme);
    assert_eq!(
        state.recommendation,
        "Deploy all countermeasures. Pre-load heavily, replenish during, and recover aggressively."
    );
}

// ========== Debounce ==========

#[tokio::test(start_paused = true)]
async fn test_drag_burst_collapses_to_one_run() {
    let sliders = MemorySliders::new();
    let renderer = RecordingRenderer::new();
    let mut w = widget(&sliders, &renderer);

    for v in ["30", "45", "90", "120"] {
        sliders.set(InputField::Duration, v);
        w.on_input(InputField::Duration);
        tokio::time::advance(ms(5)).await;
    }
    assert_eq!(renderer.render_count(), 1);
    assert!(w.has_pending());

    tokio::time::sleep(ms(50)).await;
    assert_eq!(renderer.render_count(), 2);
    assert_eq!(renderer.last().unwrap().inputs.duration, 120);
    assert!(!w.has_pending());
}

#[tokio::test(start_paused = true)]
async fn test_drag_reads_latest_values_at_fire_time() {
    let sliders = MemorySliders::new();
    let renderer = RecordingRenderer::new();
    let mut w = widget(&sliders, &renderer);

    w.on_input(InputField::Humidity);
    sliders.set(InputField::Humidity, "90");
    tokio::time::sleep(ms(50)).await;
    assert_eq!(renderer.last().unwrap().inputs.humidity, 90);
    assert_eq!(renderer.last().unwrap().readouts[&InputField::Humidity], "90%");
}

#[tokio::test(start_paused = true)]
async fn test_commit_runs_immediately_and_cancels_drag() {
    let sliders = MemorySliders::new();
    let renderer = RecordingRenderer::new();
    let mut w = widget(&sliders, &renderer);

    sliders.set(InputField::Intensity, "9");
    w.on_input(InputField::Intensity);
    let state = w.on_commit(InputField::Intensity).unwrap();
    assert_eq!(state.inputs.intensity, 9);
    assert_eq!(renderer.render_count(), 2);
    assert!(!w.has_pending());

    tokio::time::sleep(ms(50)).await;
    assert_eq!(renderer.render_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_debouncer_reschedule_cancels_previous() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut d = Debouncer::new(ms(16)).unwrap();
    for _ in 0..5 {
        let fired = fired.clone();
        d.schedule(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::advance(ms(10)).await;
    }
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    tokio::time::sleep(ms(20)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert!(!d.cancel());
}

#[test]
fn test_debouncer_requires_runtime() {
    assert!(matches!(Debouncer::new(ms(16)), Err(sw_core::SaltError::NoRuntime)));
}

// ========== Stickiness ==========

#[tokio::test]
async fn test_same_tier_keeps_copy() {
    let sliders = MemorySliders::new();
    let renderer = RecordingRenderer::new();
    let mut w = widget(&sliders, &renderer);
    let first = w.last_state().unwrap();

    for h in ["60", "70", "40"] {
        sliders.set(InputField::Humidity, h);
        let state = w.on_commit(InputField::Humidity).unwrap();
        assert_eq!(state.tier, Tier::Moderate);
        assert_eq!(state.message, first.message);
        assert_eq!(state.recommendation, first.recommendation);
    }
}

#[tokio::test]
async fn test_tier_change_updates_recommendation() {
    let sliders = MemorySliders::new();
    let renderer = RecordingRenderer::new();
    let mut w = widget(&sliders, &renderer);

    sliders.set(InputField::Duration, "15");
    let state = w.on_commit(InputField::Duration).unwrap();
    assert_eq!(state.tier, Tier::Minimal);
    assert_eq!(state.style_tag, "status-minimal");
    assert_eq!(state.recommendation, default_salt_config().tiers.minimal.recommendation);
    assert!(default_salt_config().tiers.minimal.messages.contains(&state.message));
}

#[tokio::test]
async fn test_unchanged_inputs_idempotent() {
    let sliders = MemorySliders::new();
    let renderer = RecordingRenderer::new();
    let mut w = widget(&sliders, &renderer);
    let a = w.on_commit(InputField::Duration).unwrap();
    let b = w.on_commit(InputField::Duration).unwrap();
    assert_eq!(serde_json::to_vec(&a).unwrap(), serde_json::to_vec(&b).unwrap());
}

#[tokio::test]
async fn test_instances_are_independent() {
    let sliders_a = MemorySliders::new();
    let sliders_b = MemorySliders::new();
    let renderer_a = RecordingRenderer::new();
    let renderer_b = RecordingRenderer::new();
    let mut a = widget(&sliders_a, &renderer_a);
    let b = widget(&sliders_b, &renderer_b);
    assert_ne!(a.id(), b.id());

    sliders_a.set(InputField::Duration, "180");
    sliders_a.set(InputField::Temperature, "110");
    a.on_commit(InputField::Duration);
    assert_eq!(renderer_a.last().unwrap().tier, Tier::Extreme);
    assert_eq!(renderer_b.render_count(), 1);
    assert_eq!(b.last_state().unwrap().tier, Tier::Moderate);
}

#[tokio::test]
async fn test_garbage_input_falls_back_to_default() {
    let sliders = MemorySliders::new();
    let renderer = RecordingRenderer::new();
    let mut w = widget(&sliders, &renderer);
    sliders.set(InputField::Temperature, "hot");
    sliders.set(InputField::Intensity, "500");
    let state = w.on_commit(InputField::Temperature).unwrap();
    assert_eq!(state.inputs.temperature, 75);
    assert_eq!(state.inputs.intensity, 10);
}

// ========== Navigation ==========

#[derive(Default)]
struct RecordingNav {
    ops: RefCell<Vec<String>>,
}

impl NavHost for &RecordingNav {
    fn set_expanded(&self, expanded: bool) {
        self.ops.borrow_mut().push(format!("expanded={}", expanded));
    }
    fn set_open(&self, open: bool) {
        self.ops.borrow_mut().push(format!("open={}", open));
    }
    fn focus_toggle(&self) {
        self.ops.borrow_mut().push("focus".into());
    }
}

#[test]
fn test_nav_toggle() {
    let host = RecordingNav::default();
    let mut nav = NavMenu::attach(Some(&host));
    nav.toggle_clicked();
    assert!(nav.is_open());
    nav.toggle_clicked();
    assert!(!nav.is_open());
    assert_eq!(*host.ops.borrow(), vec!["expanded=true", "open=true", "expanded=false", "open=false"]);
}

#[test]
fn test_nav_link_closes() {
    let host = RecordingNav::default();
    let mut nav = NavMenu::attach(Some(&host));
    nav.toggle_clicked();
    nav.link_clicked();
    assert!(!nav.is_open());
}

#[test]
fn test_nav_escape() {
    let host = RecordingNav::default();
    let mut nav = NavMenu::attach(Some(&host));
    nav.key_pressed(NavKey::from("Escape"));
    assert!(host.ops.borrow().is_empty());

    nav.toggle_clicked();
    nav.key_pressed(NavKey::from("Enter"));
    assert!(nav.is_open());
    nav.key_pressed(NavKey::Escape);
    assert!(!nav.is_open());
    assert_eq!(host.ops.borrow().last().unwrap(), "focus");
}

#[test]
fn test_nav_missing_markup_inert() {
    let mut nav: NavMenu<&RecordingNav> = NavMenu::attach(None);
    assert!(!nav.is_active());
    nav.toggle_clicked();
    assert!(!nav.is_open());
}
