//! csinspect - Inspect charset ids, validate UTF-8 and preview
//! sanitization.
//!
//! Resolves Oracle/IANA charset names against the catalog, dumps the
//! catalog as JSON, and runs the counting and quoting routines over
//! files or command line strings so gateway behavior can be checked
//! without a running server.

use clap::{ArgAction, Parser};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use sucre_core::charset::catalog::{
    CHARSET_TABLE, classify, iana_name, oracle_name, resolve,
};
use sucre_core::codec::utf8::is_valid_utf8;
use sucre_core::text::count::count_chars;
use sucre_core::text::ident::quote_identifier;
use sucre_core::text::path::find_last_delimiter;

/// Inspect charset ids, validate UTF-8 and preview sanitization.
#[derive(Parser, Debug)]
#[command(name = "csinspect")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Resolve a charset name (Oracle or IANA) to its id and class
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Inspect a numeric charset id
    #[arg(short = 'i', long = "id")]
    id: Option<u16>,

    /// Dump the whole catalog as JSON
    #[arg(short = 'l', long = "list", action = ArgAction::SetTrue)]
    list: bool,

    /// Validate a file as UTF-8 ("-" reads stdin)
    #[arg(long = "check-utf8")]
    check_utf8: Option<PathBuf>,

    /// Count complete characters in a file under --charset
    #[arg(long = "count")]
    count: Option<PathBuf>,

    /// Quote a string as a SQL identifier under --charset
    #[arg(short = 'q', long = "quote")]
    quote: Option<String>,

    /// Locate the last path delimiter in a string under --charset
    #[arg(long = "split-path")]
    split_path: Option<String>,

    /// Charset name or id for --count, --quote and --split-path
    #[arg(short = 'c', long = "charset", default_value = "utf-8")]
    charset: String,
}

#[derive(Serialize)]
struct CharsetReport {
    id: u16,
    oracle_name: Option<&'static str>,
    iana_name: Option<&'static str>,
    class: String,
}

#[derive(Serialize)]
struct CatalogRow {
    id: u16,
    oracle_name: Option<&'static str>,
    iana_name: &'static str,
}

#[derive(Serialize)]
struct CountReport {
    charset_id: u16,
    input_bytes: usize,
    chars: usize,
    complete_bytes: usize,
}

fn charset_report(id: u16) -> CharsetReport {
    CharsetReport {
        id,
        oracle_name: oracle_name(id),
        iana_name: iana_name(id),
        class: format!("{:?}", classify(id)),
    }
}

/// Accept either a catalog name or a bare numeric id.
fn charset_arg(value: &str) -> Result<u16, Box<dyn std::error::Error>> {
    if let Ok(id) = value.parse::<u16>() {
        return Ok(id);
    }
    Ok(resolve(value)?)
}

fn read_input(path: &PathBuf) -> io::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(path)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.list {
        let rows: Vec<CatalogRow> = CHARSET_TABLE
            .iter()
            .map(|e| CatalogRow {
                id: e.id,
                oracle_name: e.oracle_name,
                iana_name: e.iana_name,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if let Some(name) = &args.name {
        let id = resolve(name)?;
        println!("{}", serde_json::to_string_pretty(&charset_report(id))?);
        return Ok(());
    }

    if let Some(id) = args.id {
        println!("{}", serde_json::to_string_pretty(&charset_report(id))?);
        return Ok(());
    }

    if let Some(path) = &args.check_utf8 {
        let data = read_input(path)?;
        if is_valid_utf8(&data) {
            println!("valid utf-8 ({} bytes)", data.len());
            return Ok(());
        }
        eprintln!("not valid utf-8");
        std::process::exit(1);
    }

    let charset_id = charset_arg(&args.charset)?;

    if let Some(path) = &args.count {
        let data = read_input(path)?;
        let counted = count_chars(charset_id, &data);
        let report = CountReport {
            charset_id,
            input_bytes: data.len(),
            chars: counted.chars,
            complete_bytes: counted.bytes,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(value) = &args.quote {
        let quoted = quote_identifier(value.as_bytes(), charset_id);
        io::Write::write_all(&mut io::stdout(), &quoted)?;
        println!();
        return Ok(());
    }

    if let Some(value) = &args.split_path {
        let bytes = value.as_bytes();
        let offset = find_last_delimiter(bytes, charset_id);
        println!(
            "{}",
            serde_json::json!({
                "offset": offset,
                "dir": String::from_utf8_lossy(&bytes[..offset]),
                "name": String::from_utf8_lossy(&bytes[offset..]),
            })
        );
        return Ok(());
    }

    eprintln!("nothing to do; try --help");
    std::process::exit(2);
}
