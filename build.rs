use anyhow::Result;
use vergen::EmitBuilder;

// Emits VERGEN_GIT_SHA for the CLI version string
fn main() -> Result<()> {
    EmitBuilder::builder().git_sha(true).emit()?;
    Ok(())
}
