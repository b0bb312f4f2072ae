//! # Dumping a recfile database
//!
//! A small development aid: reads a `.rec` file given as the first
//! argument (or stdin if none is given) and re-renders it, optionally in a
//! different [`WriteMode`].
use std::env;
use std::fs;
use std::io::{self, Read};

use recs::write::WriteMode;
use recs::Error;

fn mode_from_arg(arg: Option<&str>) -> WriteMode {
    match arg {
        Some("sexp") => WriteMode::Sexp,
        Some("values") => WriteMode::Values,
        Some("values-row") => WriteMode::ValuesRow,
        _ => WriteMode::Normal,
    }
}

fn main() -> Result<(), Error> {
    let mut args = env::args().skip(1);
    let path = args.next();
    let mode = mode_from_arg(args.next().as_deref());

    let (input, source) = match &path {
        Some(path) => (fs::read_to_string(path)?, path.clone()),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            (buf, "-".to_string())
        }
    };

    let db = recs::from_str(&input, source)?;
    print!("{}", recs::to_string_with_mode(&db, mode));

    Ok(())
}
