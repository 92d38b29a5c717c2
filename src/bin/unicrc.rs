use std::env;
use std::fs::File;
use std::io;
use std::process;
use unicrc::crc::{catalog, Crc, Degree};
use unicrc::Result;

const USAGE: &str = "usage: unicrc --list\n       unicrc <variant> [FILE|-]";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let outcome = match args.as_slice() {
        [flag] if flag == "--list" => {
            list();
            Ok(())
        }
        [flag] if flag == "--help" || flag == "-h" => {
            println!("{}", USAGE);
            Ok(())
        }
        [variant] => checksum(variant, "-"),
        [variant, path] => checksum(variant, path),
        _ => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    if let Err(err) = outcome {
        eprintln!("unicrc: {}", err);
        process::exit(1);
    }
}

fn checksum(variant: &str, path: &str) -> Result<()> {
    let params = catalog::find(variant)?;
    let mut crc = Crc::new(params.descriptor()?);

    if path == "-" {
        io::copy(&mut io::stdin().lock(), &mut crc)?;
    } else {
        io::copy(&mut File::open(path)?, &mut crc)?;
    }

    println!("{}  {}", format_value(crc.finalize(), params.degree), path);
    Ok(())
}

fn list() {
    for params in catalog::ALL {
        println!(
            "{:<18} poly=0x{} init=0x{} refin={:<5} refout={:<5} xorout=0x{} check=0x{}",
            params.name,
            format_value(params.poly, params.degree),
            format_value(params.init, params.degree),
            params.ref_in,
            params.ref_out,
            format_value(params.xor_out, params.degree),
            format_value(params.check, params.degree),
        );
    }
}

/// Upper-case hex, zero padded to the width of the degree.
fn format_value(value: u32, degree: Degree) -> String {
    let encoded = hex::encode_upper(value.to_be_bytes());
    encoded[encoded.len() - degree.hex_digits()..].to_string()
}
