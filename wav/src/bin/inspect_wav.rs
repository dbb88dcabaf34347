use std::io::Read;

fn main() {
    let mut data = Vec::new();
    if let Err(err) = std::io::stdin().read_to_end(&mut data) {
        eprintln!("failed to read stdin: {}", err);
        std::process::exit(1);
    }

    let mut reader = match wav::WavReader::new(&data) {
        Ok(reader) => reader,
        Err(err) => {
            eprintln!("not a usable WAVE file: {}", err);
            std::process::exit(1);
        }
    };

    println!("{:#?}", reader.header());
    println!("{:#?}", reader.format());
    println!("format code: {:#06x}", u16::from(reader.format().encoding));
    println!(
        "data: {} bytes declared, {} present",
        reader.data().chunk_size,
        reader.data().len()
    );
    println!("codec: {}", reader.codec_format());
    println!("frames: {}", reader.frame_count());
    println!("audio length: {:?}", reader.duration());

    match reader.read_to_end() {
        Ok(samples) => {
            let peak = samples.iter().fold(0.0f32, |peak, s| peak.max(s.abs()));
            println!("peak: {}", peak);
        }
        Err(err) => println!("cannot decode samples: {}", err),
    }
}
