use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::fs::{ensure_parent_dir, ensure_writable};
use crate::utils::path::expand_tilde;
use rusqlite::params;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(
        store: &Store,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = expand_tilde(dest_file);

        // 1) Check DB exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2) Ensure destination folder exists, ask before overwriting
        ensure_parent_dir(&dest)?;
        ensure_writable(&dest, force)?;

        // 3) Snapshot the open database
        if dest.exists() {
            fs::remove_file(&dest)?;
        }
        let dest_str = dest.to_string_lossy().to_string();
        store.conn.execute("VACUUM INTO ?1", params![dest_str])?;
        success(format!("Backup created: {}", dest.display()));

        // 4) Optional compression
        let final_path = if compress {
            let compressed = compress_backup(&dest, force)?;

            if let Err(e) = fs::remove_file(&dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            } else {
                info(format!("Removed uncompressed backup: {}", dest.display()));
            }

            compressed
        } else {
            dest.clone()
        };

        // 5) Log in DB
        ttlog_quiet(
            &store.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(())
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path, force: bool) -> AppResult<PathBuf> {
    let zip_path = if path.extension().is_some_and(|e| e == "zip") {
        path.with_extension("db.zip")
    } else {
        path.with_extension("zip")
    };
    ensure_writable(&zip_path, force)?;

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "backup.db".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
