use crate::areas::history::History;
use crate::areas::index::StagingIndex;
use crate::areas::refs::Refs;
use crate::areas::store::ContentStore;
use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Name of the repository state directory
pub const REPO_DIR: &str = ".lit";

/// Orchestrates the content store, staging index, commit graph, HEAD, and
/// working directory for one repository root.
///
/// Owns all repository state exclusively; persisted records are loaded at
/// construction and flushed by each mutating operation. One command runs to
/// completion per process, so there is no locking.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    store: ContentStore,
    index: StagingIndex,
    history: History,
    refs: Refs,
    workspace: Workspace,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;
        let repo_dir = path.join(REPO_DIR);

        let mut store = ContentStore::new(repo_dir.join("contents").into_boxed_path());
        let mut index = StagingIndex::new(repo_dir.join("index").into_boxed_path());
        let mut history = History::new(repo_dir.join("commits").into_boxed_path());
        let refs = Refs::new(repo_dir.into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        store.rehydrate();
        index.rehydrate();
        history.rehydrate();

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            store,
            index,
            history,
            refs,
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repo_dir(&self) -> PathBuf {
        self.path.join(REPO_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut ContentStore {
        &mut self.store
    }

    pub fn index(&self) -> &StagingIndex {
        &self.index
    }

    pub(crate) fn index_mut(&mut self) -> &mut StagingIndex {
        &mut self.index
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
