use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Include directory used when the gateware build did not export one.
const TESTBED_DIRECTORY: &'static str = "../testbed/software/include";

fn buildinc_directory() -> PathBuf {
    println!("cargo:rerun-if-env-changed=BUILDINC_DIRECTORY");
    match env::var("BUILDINC_DIRECTORY") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
            Path::new(&manifest_dir).join(TESTBED_DIRECTORY)
        }
    }
}

/// Turns every line of `generated/rust-cfg` into a `--cfg` flag and exports
/// the include directory as `BUILDINC_DIRECTORY` for `include!`.
pub fn cfg() {
    let out_dir = buildinc_directory();
    println!("cargo:rustc-env=BUILDINC_DIRECTORY={}", out_dir.to_str().unwrap());

    let cfg_path = out_dir.join("generated").join("rust-cfg");
    println!("cargo:rerun-if-changed={}", cfg_path.to_str().unwrap());

    let f = BufReader::new(File::open(&cfg_path).unwrap());
    for line in f.lines() {
        let line = line.unwrap();
        let line = line.trim();
        if !line.is_empty() {
            println!("cargo:rustc-cfg={}", line);
        }
    }
}
