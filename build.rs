#[cfg(feature = "bindings")]
mod error {
    use std::{env::VarError, error, fmt, io, path::PathBuf};

    /// Reasons the C header could not be produced.
    #[derive(Debug)]
    pub enum HeaderError {
        /// Cargo did not tell us where the crate or its target directory is.
        Location(VarError),
        /// `cbindgen` failed to read the crate.
        Generate(cbindgen::Error),
        /// The `include/arcball` directory could not be created.
        CreateDir { path: PathBuf, source: io::Error },
    }

    impl error::Error for HeaderError {
        fn source(&self) -> Option<&(dyn error::Error + 'static)> {
            match *self {
                HeaderError::Location(ref e) => Some(e),
                HeaderError::Generate(ref e) => Some(e),
                HeaderError::CreateDir { ref source, .. } => Some(source),
            }
        }
    }

    impl fmt::Display for HeaderError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match *self {
                HeaderError::Location(ref e) => {
                    write!(f, "could not locate the arcball crate: {}", e)
                }
                HeaderError::Generate(ref e) => write!(f, "could not generate arcball.h: {}", e),
                HeaderError::CreateDir {
                    ref path,
                    ref source,
                } => write!(f, "could not create {}: {}", path.display(), source),
            }
        }
    }

    impl From<VarError> for HeaderError {
        #[inline]
        fn from(e: VarError) -> Self {
            HeaderError::Location(e)
        }
    }

    impl From<cbindgen::Error> for HeaderError {
        #[inline]
        fn from(e: cbindgen::Error) -> Self {
            HeaderError::Generate(e)
        }
    }
}

#[cfg(feature = "bindings")]
fn main() -> Result<(), error::HeaderError> {
    use error::HeaderError;
    use std::{env, fs, path::PathBuf};

    println!("cargo:rerun-if-changed=src/ffi.rs");

    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let bindings = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("ARCBALL_H")
        .generate()?;

    let header_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| crate_dir.join("target"))
        .join("include/arcball");

    fs::create_dir_all(&header_dir).map_err(|source| HeaderError::CreateDir {
        path: header_dir.clone(),
        source,
    })?;

    if !bindings.write_to_file(header_dir.join("arcball.h")) {
        println!("cargo:warning=arcball.h unchanged");
    }

    Ok(())
}

#[cfg(not(feature = "bindings"))]
fn main() {}
