use keccak_eth::eth::{pubkey_to_address, to_checksum_address};
use keccak_eth::{decode_hex, keccak256_hex, to_hex};

fn main() {
    let inputs = ["", "Hello, Ethereum!", "The quick brown fox jumps over the lazy dog"];

    println!("Keccak-256 Hash Examples");
    println!("========================\n");

    for input in inputs {
        println!("Input: \"{input}\"");
        println!("Hash:  {}\n", keccak256_hex(input));
    }

    // Address = last 20 bytes of keccak256(X || Y)
    let pubkey = "0x04e68acfc0253a10620dff706b0a1b1f1f5833ea3beb3bde2250d5f271f3563606\
                  672ebc45e0b7ea2e816ecb70ca03137b1c9476eec63d4632e990020b7b6fba39";
    let key = decode_hex(pubkey).expect("demo public key is valid hex");
    let addr = pubkey_to_address(&key).expect("demo public key is 65 bytes with 0x04 tag");

    println!("Ethereum Address Generation Demo:");
    println!("Public Key: {pubkey}");
    println!("Keccak-256: {}", keccak256_hex(&key[1..]));
    println!(
        "Address:    {}",
        to_checksum_address(&to_hex(&addr)).expect("20-byte address")
    );
}
