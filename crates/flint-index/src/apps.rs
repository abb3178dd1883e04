//! Application bundle scanning and keyword lookup.

use parking_lot::{Mutex, RwLock};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use flint_core::{Application, IndexConfig, LookupError};

/// The subset of Info.plist the index reads.
#[derive(Debug, Deserialize)]
struct InfoPlist {
    #[serde(rename = "CFBundleName")]
    bundle_name: Option<String>,
    #[serde(rename = "CFBundleDisplayName")]
    display_name: Option<String>,
    #[serde(rename = "CFBundleIconFile")]
    icon: Option<String>,
}

/// Keyword lookup over installed application bundles.
///
/// The first lookup scans every configured directory; later lookups reuse
/// that scan until [`AppIndex::refresh`] is called. Only one scan runs at a
/// time; lookups that miss the cache while a scan is running wait for it.
pub struct AppIndex {
    directories: Vec<PathBuf>,
    limit: usize,
    apps: RwLock<Option<Arc<Vec<Application>>>>,
    scan_lock: Mutex<()>,
}

impl AppIndex {
    pub fn new(directories: Vec<PathBuf>, limit: usize) -> Self {
        Self {
            directories,
            limit,
            apps: RwLock::new(None),
            scan_lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &IndexConfig) -> Self {
        Self::new(config.directories.clone(), config.limit)
    }

    /// Applications whose name contains `keyword`, best matches first.
    pub fn search(&self, keyword: &str) -> Result<Vec<Application>, LookupError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        let apps = self.apps()?;
        let results = rank(&apps, keyword, self.limit);
        tracing::debug!("search {:?}: {} of {} apps", keyword, results.len(), apps.len());
        Ok(results)
    }

    /// Rescan all directories. Returns the number of applications found.
    pub fn refresh(&self) -> Result<usize, LookupError> {
        let _scan = self.scan_lock.lock();
        Ok(self.rescan()?.len())
    }

    fn apps(&self) -> Result<Arc<Vec<Application>>, LookupError> {
        if let Some(apps) = self.apps.read().as_ref() {
            return Ok(apps.clone());
        }

        let _scan = self.scan_lock.lock();
        // Another lookup may have finished the scan while we waited
        if let Some(apps) = self.apps.read().as_ref() {
            return Ok(apps.clone());
        }
        self.rescan()
    }

    /// Scan and replace the cache. Caller holds `scan_lock`.
    fn rescan(&self) -> Result<Arc<Vec<Application>>, LookupError> {
        let apps = Arc::new(scan_directories(&self.directories)?);
        *self.apps.write() = Some(apps.clone());
        tracing::info!("Indexed {} applications", apps.len());
        Ok(apps)
    }
}

/// Scan several directories, skipping unreadable ones.
///
/// Fails only when none of the directories could be read.
pub fn scan_directories(directories: &[PathBuf]) -> Result<Vec<Application>, LookupError> {
    let mut apps = Vec::new();
    let mut last_error = None;
    let mut scanned = 0;

    for dir in directories {
        match scan_directory(dir) {
            Ok(found) => {
                scanned += 1;
                apps.extend(found);
            }
            Err(e) => {
                tracing::warn!("Skipping application directory: {}", e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if scanned == 0 => Err(e),
        _ => Ok(apps),
    }
}

/// Scan one directory for `*.app` bundles.
pub fn scan_directory(dir: &Path) -> Result<Vec<Application>, LookupError> {
    let io_error = |source| LookupError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut result = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        if !entry.file_type().map_err(io_error)?.is_dir() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("app") {
            continue;
        }

        // Bundles without a readable plist are ignored
        if let Some(app) = read_bundle(&path) {
            result.push(app);
        }
    }
    Ok(result)
}

/// Read an application bundle's Info.plist.
fn read_bundle(app_path: &Path) -> Option<Application> {
    let info_path = app_path.join("Contents/Info.plist");
    let info: InfoPlist = match plist::from_file(&info_path) {
        Ok(info) => info,
        Err(e) => {
            tracing::debug!("Skipping {}: {}", app_path.display(), e);
            return None;
        }
    };

    let name = info
        .bundle_name
        .or(info.display_name)
        .or_else(|| {
            app_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })?;

    Some(Application {
        name,
        path: app_path.to_string_lossy().into_owned(),
        icon: info.icon,
    })
}

/// Case-insensitive substring match; prefix matches first, then by name.
pub fn rank(apps: &[Application], keyword: &str, limit: usize) -> Vec<Application> {
    let needle = keyword.to_lowercase();

    let mut hits: Vec<(bool, String, &Application)> = apps
        .iter()
        .filter_map(|app| {
            let name = app.name.to_lowercase();
            let position = name.find(&needle)?;
            Some((position != 0, name, app))
        })
        .collect();

    hits.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));
    hits.into_iter()
        .take(limit)
        .map(|(_, _, app)| app.clone())
        .collect()
}
