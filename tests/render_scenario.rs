//! Integration test: hold keys through the controller → render blocks → verify output.

use bayan_engine::{Driver, Note, StreamStatus, SynthConfig, SynthContext, BLOCK_SIZE, SAMPLE_RATE};
use bayan_master::{Controller, KeyInput, KeyMods};
use winit::keyboard::KeyCode;

const BLOCK: usize = BLOCK_SIZE as usize;

fn two_lowest_notes_at(gain: f32) -> SynthContext {
    let ctx = SynthContext::new(&SynthConfig {
        initial_gain: gain,
        ..SynthConfig::default()
    });
    ctx.keys.set_note_active(Note::G2, true);
    ctx.keys.set_note_active(Note::Gs2, true);
    ctx
}

#[test]
fn one_block_of_two_notes() {
    let ctx = two_lowest_notes_at(0.8);
    let config = SynthConfig::default();
    let mut driver = Driver::new(&ctx, &config);

    let mut out = [0.0f32; BLOCK * 2];
    let status = driver.render(&mut out, BLOCK);

    assert_eq!(status, StreamStatus::Continue);
    assert!(out.iter().all(|s| s.is_finite()));
    assert!(out.iter().all(|s| s.abs() <= 1.0));
    for pair in out.chunks_exact(2) {
        assert_eq!(pair[0], pair[1]);
    }
    let expected = BLOCK as f64 / SAMPLE_RATE as f64;
    assert!((driver.renderer().time() - expected).abs() < 1e-15);
}

#[test]
fn every_block_continues_and_advances() {
    let ctx = two_lowest_notes_at(0.8);
    let config = SynthConfig::default();
    let mut driver = Driver::new(&ctx, &config);
    let mut out = [0.0f32; BLOCK * 2];

    let blocks = 1000;
    for _ in 0..blocks {
        assert_eq!(driver.render(&mut out, BLOCK), StreamStatus::Continue);
        assert!(out.iter().all(|s| s.is_finite()));
    }
    let expected = (blocks * BLOCK) as f64 / SAMPLE_RATE as f64;
    assert!((driver.renderer().time() - expected).abs() < 1e-9);
}

#[test]
fn output_is_audible_for_two_notes() {
    let ctx = two_lowest_notes_at(0.8);
    let config = SynthConfig::default();
    let mut driver = Driver::new(&ctx, &config);
    // A bit over one period of G2.
    let mut out = vec![0.0f32; 512 * 2];
    driver.render_interleaved(&mut out);
    let peak = out.iter().fold(0.0f32, |m, s| m.max(s.abs()));
    assert!(peak > 0.5, "peak {} too quiet", peak);
}

#[test]
fn keyboard_session_end_to_end() {
    let mut ctrl = Controller::default();
    ctrl.handle_key(&KeyInput::press(KeyCode::KeyA, KeyMods::NONE));
    ctrl.handle_key(&KeyInput::press(KeyCode::KeyZ, KeyMods::NONE));
    for _ in 0..2 {
        ctrl.handle_key(&KeyInput::release(KeyCode::ArrowDown, KeyMods::NONE));
    }
    assert!((ctrl.context().gain.gain() - 0.75).abs() < 1e-6);

    let frames = ctrl.render_frames(BLOCK * 10);
    assert!(frames.iter().any(|f| !f.is_silent()));

    ctrl.handle_key(&KeyInput::press(KeyCode::Backslash, KeyMods::NONE));
    assert!(ctrl.render_frames(BLOCK).iter().all(|f| f.is_silent()));

    ctrl.handle_key(&KeyInput::press(KeyCode::Backslash, KeyMods::NONE));
    ctrl.handle_key(&KeyInput::release(KeyCode::KeyA, KeyMods::NONE));
    ctrl.handle_key(&KeyInput::release(KeyCode::KeyZ, KeyMods::NONE));
    assert!(ctrl.render_frames(BLOCK).iter().all(|f| f.is_silent()));
}
