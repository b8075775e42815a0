use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, warning};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Snapshot the schedule database at `source` into `dest_file`.
    ///
    /// With `compress` the snapshot is written as a single-entry `.zip`
    /// next to `dest_file` instead. Returns the written path, or `None`
    /// when the user declined to replace an existing file.
    pub fn backup(
        pool: &DbPool,
        source: &Path,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        if !source.is_file() {
            return Err(AppError::Other(format!(
                "schedule database not found: {}",
                source.display()
            )));
        }

        let target = if compress {
            Path::new(dest_file).with_extension("zip")
        } else {
            PathBuf::from(dest_file)
        };

        if target.exists() && !force {
            warning(format!("'{}' already exists.", target.display()));
            if !confirm("Replace it?")? {
                return Ok(None);
            }
        }

        if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        if compress {
            write_zip(source, &target)?;
        } else {
            fs::copy(source, &target)?;
        }

        tracing::debug!(path = %target.display(), compress, "database backup written");
        ttlog_quiet(
            &pool.conn,
            "backup",
            &target.to_string_lossy(),
            if compress { "zip snapshot" } else { "plain copy" },
        );

        Ok(Some(target))
    }
}

/// The archive holds one entry named after the database file.
fn write_zip(source: &Path, target: &Path) -> AppResult<()> {
    let entry = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "heliops.sqlite".to_string());

    let mut zip = ZipWriter::new(File::create(target)?);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry, options).map_err(io::Error::other)?;
    io::copy(&mut File::open(source)?, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;
    Ok(())
}
