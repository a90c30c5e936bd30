//! bayan CLI — headless chord playback and WAV export.
//!
//! Usage:
//!   bayan-cli G2 B2 D3
//!   bayan-cli G2 B2 D3 --seconds 4 --wav chord.wav

use anyhow::{bail, Context};
use bayan_master::{Controller, Note, SynthConfig};
use std::time::Duration;
use std::{env, fs};

const USAGE: &str = "Usage: bayan-cli <note>... [--seconds N] [--wav output.wav]";

struct Args {
    notes: Vec<Note>,
    seconds: f32,
    wav_path: Option<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut notes = Vec::new();
    let mut seconds: f32 = 2.0;
    let mut wav_path = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seconds" => {
                let value = args.next().context(USAGE)?;
                seconds = value
                    .parse()
                    .with_context(|| format!("Invalid duration {}", value))?;
            }
            "--wav" => wav_path = Some(args.next().context(USAGE)?),
            name => match Note::from_name(name) {
                Some(note) => notes.push(note),
                None => bail!("Unknown note {} (expected G2 through G#4)\n{}", name, USAGE),
            },
        }
    }

    if notes.is_empty() {
        bail!(USAGE);
    }
    if !(seconds.is_finite() && seconds >= 0.0) {
        bail!("Duration must be a non-negative number of seconds");
    }
    Ok(Args {
        notes,
        seconds,
        wav_path,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let mut ctrl = Controller::new(SynthConfig::default());
    ctrl.set_notes(&args.notes, true);

    let names: Vec<&str> = args.notes.iter().map(|n| n.name()).collect();
    println!("Notes:   {}", names.join(" "));
    println!("Length:  {} s", args.seconds);

    match &args.wav_path {
        Some(path) => render_to_wav(&ctrl, path, args.seconds),
        None => play_audio(&mut ctrl, args.seconds),
    }
}

fn play_audio(ctrl: &mut Controller, seconds: f32) -> anyhow::Result<()> {
    ctrl.start_audio().context("Failed to start audio output")?;
    println!("Playing...");
    std::thread::sleep(Duration::from_secs_f32(seconds));
    ctrl.release_all();
    ctrl.stop_audio();
    println!("Done.");
    Ok(())
}

fn render_to_wav(ctrl: &Controller, path: &str, seconds: f32) -> anyhow::Result<()> {
    println!(
        "Rendering to {} at {} Hz...",
        path,
        ctrl.config().sample_rate
    );
    let wav = ctrl.render_to_wav(seconds);
    fs::write(path, &wav).with_context(|| format!("Failed to write {}", path))?;
    println!("Wrote {} bytes", wav.len());
    Ok(())
}
