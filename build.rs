use clap::ValueEnum;
use clap_complete::{generate_to, Shell};
use std::env;
use std::io::Error;

include!("src/cli.rs");

// Writes shell completion scripts for the binary into OUT_DIR.
fn main() -> Result<(), Error>{
    println!("cargo:rerun-if-changed=src/cli.rs");
    let outdir = match env::var_os("OUT_DIR"){
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();
    for &shell in Shell::value_variants(){
        generate_to(shell, &mut cmd, "subsample-seq", &outdir)?;
    }
    Ok(())
}
