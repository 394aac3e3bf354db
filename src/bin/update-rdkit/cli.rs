//! CLI definitions using clap.

use clap::Parser;

/// Update the Rosetta copy of RDKit from an upstream checkout
#[derive(Parser)]
#[command(name = "update-rdkit")]
#[command(version, about)]
#[command(long_about = "\
Update the Rosetta distribution for a new RDKit release.

Run this program in the main/source/external/rdkit directory, with the new
RDKit checkout at ./rdkit.upstream. It reads the CMakeLists.txt files under
rdkit.upstream/Code to find the C/C++ files that are actually compiled, scans
for all headers, links the RDKit subdirectories into the current directory and
writes ../rdkit.external.settings for the Rosetta SCons build.

You will probably have to build RDKit once (or at least run CMake within the
RDKit checkout) so the generated SmilesParse lexer and parser files exist.

It is also possible that the Rosetta Boost library needs updating to include
new libraries that RDKit requires.

Paths can be overridden with an rdkit-sync.toml file in the current directory.
The program takes no arguments; any argument prints this text.")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Any argument prints usage instead of running
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Whether usage was requested instead of a run.
    pub fn wants_usage(&self) -> bool {
        !self.args.is_empty()
    }
}
