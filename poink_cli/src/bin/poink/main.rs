//! Main entry point for PoinkCli

#![deny(warnings, missing_docs, trivial_casts, unused_qualifications)]
#![forbid(unsafe_code)]

use poink_cli::application::APP;

/// Boot PoinkCli
fn main() {
    abscissa_core::boot(&APP);
}
