// Prints `0x<keccak256>  <name>` for every file argument, stdin for none or "-".

use std::fs::File;
use std::io;
use std::process::ExitCode;

use keccak_eth::{keccak256_reader, to_hex};

fn digest_path(path: &str) -> io::Result<[u8; 32]> {
    if path == "-" {
        keccak256_reader(io::stdin().lock())
    } else {
        keccak256_reader(File::open(path)?)
    }
}

fn main() -> ExitCode {
    let mut paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        paths.push("-".to_string());
    }

    let mut failed = false;
    for path in &paths {
        match digest_path(path) {
            Ok(d) => println!("{}  {}", to_hex(&d), path),
            Err(e) => {
                eprintln!("keccak_sum: {path}: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
