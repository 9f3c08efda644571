//! Version-gated orchestration across stores.

use std::path::PathBuf;

use statekeep_core_store::{Error, Lifecycle, ScalarData, ScalarSchema};
use statekeep_json_store::{LocalStore, StoreConfig};

/// What [`DataManager::start`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The stored version differed from the running one; every store was
    /// reset to its defaults.
    Reset,
    /// The stored version matched; nothing was touched.
    Unchanged,
}

/// Tracks the application version on disk and resets stores when it
/// changes.
///
/// The manager holds no references to other stores. Callers pass the set of
/// stores each operation should fan out to:
///
/// ```rust,no_run
/// use statekeep::{DataManager, DictionaryStore, Lifecycle, StoreConfig};
///
/// let root = "/tmp/game";
/// let mut manager = DataManager::open(root, "1.4.0", false)?;
/// let mut settings = DictionaryStore::open(
///     &StoreConfig::new(root, "settings"),
///     [("volume", "7")].into_iter().collect(),
/// )?;
///
/// manager.start(&mut [&mut settings])?;
/// manager.save_all(&mut [&mut settings])?;
/// # Ok::<(), statekeep::Error>(())
/// ```
///
/// Fan-out stops at the first store that fails and returns its error.
pub struct DataManager {
    version: String,
    reset_on_start: bool,
    store: LocalStore<ScalarData>,
}

impl DataManager {
    pub const VERSION_STORE: &'static str = "Version";

    /// Open and initialize the version store under `root`.
    pub fn open(
        root: impl Into<PathBuf>,
        version: &str,
        reset_on_start: bool,
    ) -> Result<Self, Error> {
        let version = version.trim().to_string();
        let config = StoreConfig::new(root, Self::VERSION_STORE);
        let mut store = LocalStore::new(config, ScalarSchema::new(version.clone()))?;
        store.initialize()?;

        Ok(Self {
            version,
            reset_on_start,
            store,
        })
    }

    /// The running version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The version currently held by the version store.
    pub fn stored_version(&self) -> Result<&str, Error> {
        Ok(self.store.data()?.get())
    }

    /// Compare the stored version with the running one and reset `stores`
    /// if they differ.
    ///
    /// With `reset_on_start`, the stored version is cleared first, which
    /// forces a reset.
    pub fn start(&mut self, stores: &mut [&mut dyn Lifecycle]) -> Result<StartOutcome, Error> {
        if self.reset_on_start {
            self.store.reset();
        }

        let stored = self.stored_version()?;
        if stored == self.version {
            return Ok(StartOutcome::Unchanged);
        }

        log::info!(
            "Version changed from {:?} to {:?}, resetting {} stores",
            stored,
            self.version,
            stores.len()
        );
        self.store.reset_reconcile_save()?;
        Self::reset_each(stores)?;

        Ok(StartOutcome::Reset)
    }

    /// Save every store in `stores`.
    pub fn save_all(&self, stores: &mut [&mut dyn Lifecycle]) -> Result<(), Error> {
        for store in stores.iter_mut() {
            log::debug!("Saving {}", store.name());
            store.save()?;
        }
        Ok(())
    }

    /// Reset every store in `stores` to its schema defaults and save it.
    pub fn reset_all(&self, stores: &mut [&mut dyn Lifecycle]) -> Result<(), Error> {
        Self::reset_each(stores)
    }

    fn reset_each(stores: &mut [&mut dyn Lifecycle]) -> Result<(), Error> {
        for store in stores.iter_mut() {
            log::debug!("Resetting {}", store.name());
            store.reset_reconcile_save()?;
        }
        Ok(())
    }
}

impl Lifecycle for DataManager {
    fn name(&self) -> &str {
        self.store.name()
    }

    fn save(&mut self) -> Result<(), Error> {
        self.store.save()
    }

    fn reset(&mut self) {
        self.store.reset()
    }

    fn reset_reconcile_save(&mut self) -> Result<(), Error> {
        self.store.reset_reconcile_save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statekeep_typed_store::VariableStore;

    /// Records calls and optionally fails on save.
    struct Probe {
        name: String,
        fail: bool,
        saves: usize,
        resets: usize,
    }

    impl Probe {
        fn new(name: &str, fail: bool) -> Self {
            Self {
                name: name.to_string(),
                fail,
                saves: 0,
                resets: 0,
            }
        }
    }

    impl Lifecycle for Probe {
        fn name(&self) -> &str {
            &self.name
        }

        fn save(&mut self) -> Result<(), Error> {
            if self.fail {
                return Err(Error::Uninitialized {
                    name: self.name.clone(),
                });
            }
            self.saves += 1;
            Ok(())
        }

        fn reset(&mut self) {
            self.resets += 1;
        }

        fn reset_reconcile_save(&mut self) -> Result<(), Error> {
            self.reset();
            self.save()
        }
    }

    #[test]
    fn fresh_install_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = DataManager::open(dir.path(), "1.0", false).unwrap();
        let mut probe = Probe::new("probe", false);

        let outcome = manager.start(&mut [&mut probe]).unwrap();

        assert_eq!(outcome, StartOutcome::Unchanged);
        assert_eq!(probe.resets, 0);
        assert_eq!(manager.stored_version().unwrap(), "1.0");
        assert!(dir.path().join("VersionData.json").exists());
    }

    #[test]
    fn version_change_resets_stores() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path(), "lives");

        DataManager::open(dir.path(), "1.0", false).unwrap();
        let mut lives = VariableStore::open(&config, "3").unwrap();
        lives.set("1").unwrap();
        lives.save().unwrap();

        let mut manager = DataManager::open(dir.path(), " 2.0\n", false).unwrap();
        assert_eq!(manager.version(), "2.0");
        assert_eq!(manager.stored_version().unwrap(), "1.0");

        let mut lives = VariableStore::open(&config, "3").unwrap();
        assert_eq!(lives.get().unwrap(), "1");

        let outcome = manager.start(&mut [&mut lives]).unwrap();
        assert_eq!(outcome, StartOutcome::Reset);
        assert_eq!(lives.get().unwrap(), "3");
        assert_eq!(manager.stored_version().unwrap(), "2.0");

        // The new version was persisted, so the next start is quiet.
        let mut manager = DataManager::open(dir.path(), "2.0", false).unwrap();
        assert_eq!(manager.start(&mut []).unwrap(), StartOutcome::Unchanged);
    }

    #[test]
    fn reset_on_start_always_resets() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = DataManager::open(dir.path(), "1.0", true).unwrap();
        let mut probe = Probe::new("probe", false);

        assert_eq!(manager.start(&mut [&mut probe]).unwrap(), StartOutcome::Reset);
        assert_eq!(probe.resets, 1);
        assert_eq!(probe.saves, 1);
        assert_eq!(manager.stored_version().unwrap(), "1.0");
    }

    #[test]
    fn fan_out_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let manager = DataManager::open(dir.path(), "1.0", false).unwrap();
        let mut first = Probe::new("first", false);
        let mut broken = Probe::new("broken", true);
        let mut last = Probe::new("last", false);

        let err = manager
            .save_all(&mut [&mut first, &mut broken, &mut last])
            .unwrap_err();
        assert!(matches!(err, Error::Uninitialized { ref name } if name == "broken"));
        assert_eq!(first.saves, 1);
        assert_eq!(last.saves, 0);

        assert!(manager.reset_all(&mut [&mut first, &mut broken, &mut last]).is_err());
        assert_eq!(first.resets, 1);
        assert_eq!(last.resets, 0);
    }

    #[test]
    fn manager_is_itself_a_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = DataManager::open(dir.path(), "1.0", false).unwrap();

        assert_eq!(Lifecycle::name(&manager), "Version");
        manager.reset();
        assert_eq!(manager.stored_version().unwrap(), "");
        manager.reset_reconcile_save().unwrap();
        assert_eq!(manager.stored_version().unwrap(), "1.0");
    }
}
