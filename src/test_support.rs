/// Shared fixtures for unit tests
///
/// An in-memory file system that counts every probe and read, plus helpers
/// for writing plist documents.

use crate::store::FileSystem;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

/// Wrap a body in an XML plist document
pub fn plist_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
{}
</plist>"#,
        body
    )
}

/// A groups file body with one dict per (id, name)
pub fn groups_xml(groups: &[(&str, &str)]) -> String {
    let items: String = groups
        .iter()
        .map(|(id, name)| {
            format!(
                "<dict><key>ID</key><string>{}</string><key>Name</key><string>{}</string></dict>",
                id, name
            )
        })
        .collect();
    plist_xml(&format!("<array>{}</array>", items))
}

/// A connections file body with one dict per (id, name, group id)
pub fn connections_xml(connections: &[(&str, &str, &str)]) -> String {
    let items: String = connections
        .iter()
        .map(|(id, name, group)| {
            format!(
                "<dict><key>ID</key><string>{}</string><key>ConnectionName</key><string>{}</string><key>GroupID</key><string>{}</string></dict>",
                id, name, group
            )
        })
        .collect();
    plist_xml(&format!("<array>{}</array>", items))
}

/// Seconds past the epoch, for readable fake timestamps
pub fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

/// File system kept in memory, with counters
#[derive(Default)]
pub struct MemoryFs {
    files: Mutex<HashMap<PathBuf, (Vec<u8>, SystemTime)>>,
    probes: AtomicUsize,
    reads: Mutex<HashMap<PathBuf, usize>>,
    broken_probes: AtomicBool,
    read_delays: Mutex<HashMap<PathBuf, Duration>>,
    panicking_reads: Mutex<HashSet<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, path: impl AsRef<Path>, contents: &str, modified: SystemTime) {
        self.files.lock().unwrap().insert(
            path.as_ref().to_path_buf(),
            (contents.as_bytes().to_vec(), modified),
        );
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        self.files.lock().unwrap().remove(path.as_ref());
    }

    /// Make every `modified` call fail until turned back off
    pub fn break_probes(&self, broken: bool) {
        self.broken_probes.store(broken, Ordering::SeqCst);
    }

    /// Slow down reads of `path` so concurrent callers pile up
    pub fn slow_reads(&self, path: impl AsRef<Path>, delay: Duration) {
        self.read_delays
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), delay);
    }

    /// Make the next read of `path` panic, as a crashing parser thread would
    pub fn panic_on_next_read(&self, path: impl AsRef<Path>) {
        self.panicking_reads
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf());
    }

    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    /// How many times `path` was read
    pub fn reads(&self, path: impl AsRef<Path>) -> usize {
        self.reads
            .lock()
            .unwrap()
            .get(path.as_ref())
            .copied()
            .unwrap_or(0)
    }
}

impl FileSystem for MemoryFs {
    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        if self.broken_probes.load(Ordering::SeqCst) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|(_, modified)| *modified)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        *self
            .reads
            .lock()
            .unwrap()
            .entry(path.to_path_buf())
            .or_default() += 1;

        let delay = self.read_delays.lock().unwrap().get(path).copied();
        if let Some(delay) = delay {
            std::thread::sleep(delay);
        }

        let should_panic = self.panicking_reads.lock().unwrap().remove(path);
        if should_panic {
            panic!("read of {} blew up", path.display());
        }

        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|(contents, _)| contents.clone())
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}
