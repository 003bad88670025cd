use std::io::Write;

use anyhow::{Context, Result};

use super::Spawner;
use crate::request::LaunchRequest;

/// Writes each request as JSON instead of spawning it.
pub struct PrintSpawner<W> {
    output: W,
}

impl<W> PrintSpawner<W>
where
    W: Write,
{
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W> Spawner for PrintSpawner<W>
where
    W: Write,
{
    fn spawn(&mut self, request: &LaunchRequest) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.output, request)
            .context("Failed to transform LaunchRequest into a JSON string")?;
        writeln!(self.output).context("Failed to write launch request")?;
        self.output.flush().context("Failed to write launch request")
    }
}
