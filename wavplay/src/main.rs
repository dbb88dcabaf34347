use cpal::traits::*;
use std::error::Error;
use std::io::Read;
use std::sync::mpsc;

const SAMPLE_RATE: u32 = 44_100;

fn load(path: Option<String>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path),
        None => {
            let mut data = Vec::new();
            std::io::stdin().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

/// Averages every frame down to one sample.
fn fold_to_mono(samples: &[f32], channels: usize) -> Vec<f32> {
    samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

fn run() -> Result<(), Box<dyn Error>> {
    let data = load(std::env::args().nth(1))?;
    let mut reader = wav::WavReader::new(&data)?;
    println!(
        "{}: {} channels at {} Hz, {:?}",
        reader.codec_format(),
        reader.channel_count(),
        reader.sample_rate(),
        reader.duration()
    );

    let mono = fold_to_mono(&reader.read_to_end()?, reader.channel_count());
    let source_rate = reader.sample_rate();

    let (finished_send, finished_recv) = mpsc::sync_channel::<()>(1);

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or("no default output device")?;
    let stream = {
        use dasp::signal::Signal;

        let mut samples = dasp::signal::from_iter(mono);
        let interp = dasp::interpolate::linear::Linear::new(samples.next(), samples.next());
        let samples: Vec<_> = samples
            .from_hz_to_hz(interp, source_rate as f64, SAMPLE_RATE as f64)
            .until_exhausted()
            .collect();
        let mut i = 0;

        device.build_output_stream(
            &cpal::StreamConfig {
                channels: 1,
                sample_rate: cpal::SampleRate(SAMPLE_RATE),
                buffer_size: cpal::BufferSize::Default,
            },
            move |data: &mut [f32], _| {
                for sample in data.iter_mut() {
                    if i >= samples.len() {
                        let _ = finished_send.try_send(());
                        *sample = 0.0;
                    } else {
                        *sample = samples[i];
                        i += 1;
                    }
                }
            },
            move |err| {
                eprintln!("cpal error: {:?}", err);
            },
        )?
    };
    stream.play()?;

    finished_recv.recv()?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("wavplay: {}", err);
        std::process::exit(1);
    }
}
