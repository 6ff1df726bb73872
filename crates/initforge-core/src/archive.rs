//! In-memory zip assembly

use crate::error::GenerateError;
use crate::render::Artifact;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Assemble rendered artifacts into a deflate-compressed zip held in memory.
/// Each artifact becomes one regular file entry at its relative path, with
/// the UTF-8 text stored as bytes.
pub fn assemble(artifacts: &[Artifact]) -> Result<Vec<u8>, GenerateError> {
    let mut buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for artifact in artifacts {
            zip.start_file(&artifact.path, options)?;
            zip.write_all(artifact.contents.as_bytes())?;
        }

        zip.finish()?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_assembled_archive_round_trips() {
        let artifacts = vec![
            Artifact {
                path: "pom.xml".to_string(),
                contents: "<project/>".to_string(),
            },
            Artifact {
                path: "src/main/resources/application.properties".to_string(),
                contents: "spring.application.name=demo\n".to_string(),
            },
        ];

        let bytes = assemble(&artifacts).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut contents = String::new();
        archive
            .by_name("src/main/resources/application.properties")
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "spring.application.name=demo\n");
    }

    #[test]
    fn test_empty_artifact_list_is_a_valid_archive() {
        let bytes = assemble(&[]).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
