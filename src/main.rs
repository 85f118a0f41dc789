use enpass2nordpass::convert::convert;
use std::env;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <enpass_json_file> <nordpass_csv_file>", args[0]);
        process::exit(1);
    }

    match convert(Path::new(&args[1]), Path::new(&args[2])) {
        Ok(count) => println!("Conversion complete: {} items written.", count),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}
