use std::io;
use std::io::Write;

use anyhow::Context;
use log::info;
use rpcreg::generator::{write_header_file, RegisterFunctionsWriter};
use rpcreg::method_count::MethodCount;
use rpcreg::params::GeneratorParams;

use crate::opts::OutputTarget;

pub fn generate(
    output: &OutputTarget,
    max_count: MethodCount,
    params: &GeneratorParams,
) -> anyhow::Result<()> {
    match output {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            write_header(stdout.lock(), max_count, params)
                .context("Could not write the header to the standard output")?;
        }
        OutputTarget::File(path) => {
            write_header_file(path, max_count, params)
                .with_context(|| format!("Could not write the header to {}", path.display()))?;
            info!("Generated {}", path.display());
        }
    }

    Ok(())
}

fn write_header<W: Write>(
    writer: W,
    max_count: MethodCount,
    params: &GeneratorParams,
) -> anyhow::Result<()> {
    let mut writer = RegisterFunctionsWriter::with_params(writer, params.clone());
    writer.write_all_macros(max_count)?;

    Ok(())
}
