use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::task::Task;

// Resolved against the current working directory on every run
pub const DATA_FILE: &str = "./data.json";

// The whole persisted document: a single object with a "tasks" array.
// Keeping a wrapper struct instead of a bare Vec<Task> makes the file shape
// explicit and the derive produces the {"tasks": [...]} nesting for free
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

impl TaskList {
    // Next id comes from the LAST task in the list, not from the highest id
    // in it. Delete the last task and the next add hands that id out again.
    // Switching this to max-id would change ids users already see, so it
    // stays as is. At u32::MAX the id saturates instead of wrapping to 0;
    // the add then collides with the last task and save refuses it
    pub fn next_id(&self) -> u32 {
        self.tasks.last().map_or(0, |task| task.id).saturating_add(1)
    }

    // Linear scan for the position of the task with this id. Three
    // outcomes: exactly one match is the index we want, none is a NotFound
    // the caller reports, several means the file got duplicated ids from
    // outside since save() refuses to write such a list
    pub fn find_index(&self, id: u32) -> Result<usize> {
        let matches: Vec<usize> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.id == id)
            .map(|(index, _)| index)
            .collect();

        match matches.as_slice() {
            [index] => Ok(*index),
            [] => Err(Error::NotFound(id)),
            _ => Err(Error::AmbiguousId(id)),
        }
    }

    // First id that appears twice, if any. HashSet::insert returns false
    // the second time it sees a value
    fn first_duplicate_id(&self) -> Option<u32> {
        let mut seen = HashSet::new();
        self.tasks.iter().map(|task| task.id).find(|id| !seen.insert(*id))
    }
}

// Owns the path of the backing file and the list loaded from it. One store
// per invocation: load once, mutate in memory, save once
pub struct TaskStore {
    path: PathBuf,
    pub list: TaskList,
}

impl TaskStore {
    // The CLI always works against ./data.json
    pub fn load() -> Result<Self> {
        Self::load_from(DATA_FILE)
    }

    // Load from an explicit path (tests point this at a scratch file).
    // A missing file is not an error: we write an empty document first so
    // even a read only command leaves a valid file behind, then start from
    // the empty list. A file that exists but does not parse is fatal, there
    // is nothing sensible to do without the data
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            let list = TaskList::default();
            write_list(&path, &list)?;
            log::debug!("created empty data file at {}", path.display());
            return Ok(Self { path, list });
        }

        let file = File::open(&path)?; // ? operator. If open fails return the error
        let reader = BufReader::new(file);
        let list: TaskList = serde_json::from_reader(reader)?;
        log::debug!("loaded {} tasks from {}", list.tasks.len(), path.display());

        Ok(Self { path, list })
    }

    // Refuse to persist a list with a duplicated id. The scan runs before
    // the file is opened for writing: File::create truncates, so bailing
    // out up front is what leaves the old contents intact
    pub fn save(&self) -> Result<()> {
        if let Some(id) = self.list.first_duplicate_id() {
            log::warn!("duplicate task id {}, keeping {} untouched", id, self.path.display());
            return Err(Error::DuplicateId(id));
        }

        write_list(&self.path, &self.list)?;
        log::debug!("saved {} tasks to {}", self.list.tasks.len(), self.path.display());
        Ok(())
    }
}

// serde_json's to_writer_pretty indents with 2 spaces, the data file has
// always used 4, so we plug in a PrettyFormatter with the wider indent
fn write_list(path: &Path, list: &TaskList) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    list.serialize(&mut serializer)?;
    writer.flush()?;
    Ok(())
}
