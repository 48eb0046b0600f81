use mfba_reader::MfbaReader;
use std::env;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <path-to-mfba-file> [--dump-frame <INDEX> <OUTPUT.png>]",
            args[0]
        );
        process::exit(1);
    }

    let mfba_path = &args[1];
    let mut dump: Option<(usize, String)> = None;
    // Parse --dump-frame argument
    if let Some(flag_idx) = args.iter().position(|arg| arg == "--dump-frame") {
        match (
            args.get(flag_idx + 1).and_then(|s| s.parse().ok()),
            args.get(flag_idx + 2),
        ) {
            (Some(index), Some(output)) => dump = Some((index, output.clone())),
            _ => {
                eprintln!("ERROR: --dump-frame requires <INDEX> <OUTPUT.png>");
                process::exit(1);
            }
        }
    }

    println!("Reading MFBA file: {}", mfba_path);
    println!("{}", "=".repeat(60));

    let reader = match MfbaReader::new(mfba_path) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("\nERROR: Failed to read MFBA file");
            eprintln!("  {}", e);
            process::exit(1);
        }
    };

    println!("\nContainer Information:");
    println!("  Version: {}", reader.version());
    println!("  Frames: {}", reader.frame_count());

    if reader.frame_count() > 0 {
        match reader.metadata(0) {
            Ok(metadata) => {
                println!("\nFrame 0 metadata sources:");
                for (source, entries) in &metadata {
                    println!("  {} ({} entries)", source, entries.len());
                }
            }
            Err(e) => eprintln!("WARNING: failed to read frame 0 metadata: {}", e),
        }
    }

    if let Some((index, output)) = dump {
        match reader.image(index) {
            Ok(frame) => {
                if let Err(e) = frame.save(&output) {
                    eprintln!("ERROR: failed to save {}: {}", output, e);
                    process::exit(1);
                }
                println!("\nFrame {} written to {}", index, output);
            }
            Err(e) => {
                eprintln!("ERROR: failed to decode frame {}: {}", index, e);
                process::exit(1);
            }
        }
    }
}
