use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

pub trait Serializer {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<Vec<u8>>;
}

/// JSON encoder for machine configs. Output always ends in a newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    pub pretty: bool,
}

impl JsonSerializer {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Serializer for JsonSerializer {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<Vec<u8>> {
        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(data)?
        } else {
            serde_json::to_vec(data)?
        };
        bytes.push(b'\n');
        Ok(bytes)
    }
}

pub trait FileSerializer {
    fn save_to_file<T, S: Serializer>(&self, path: &Path, data: &T, serializer: &S) -> Result<()>
    where
        T: Serialize;
    fn write_to<W, T, S: Serializer>(&self, writer: W, data: &T, serializer: &S) -> Result<()>
    where
        W: Write,
        T: Serialize;
}

pub struct FileUtils;

impl FileSerializer for FileUtils {
    fn save_to_file<T, S: Serializer>(&self, path: &Path, data: &T, serializer: &S) -> Result<()>
    where
        T: Serialize,
    {
        let file = fs::File::create(path)
            .with_context(|| format!("failed to create output file {}", path.display()))?;
        self.write_to(file, data, serializer)
            .with_context(|| format!("failed to write output file {}", path.display()))
    }

    fn write_to<W, T, S: Serializer>(&self, mut writer: W, data: &T, serializer: &S) -> Result<()>
    where
        W: Write,
        T: Serialize,
    {
        let content = serializer.serialize(data)?;
        writer.write_all(&content)?;
        writer.flush()?;
        Ok(())
    }
}
