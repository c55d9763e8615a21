use clap::{Parser, Subcommand};

pub mod error;
pub mod store;
pub mod task;

pub use error::{Error, Result};
pub use store::{DATA_FILE, TaskList, TaskStore};
pub use task::{Status, Task};

// Struct Cli holds the command line arguments of type Commands
// The subcommand is optional on purpose: running the binary bare is a
// no-op that never touches the data file, not an argument error
#[derive(Parser)]
#[command(name = "task-cli")]
#[command(about = "Task Tracker CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Enum Commands holds the different commands for the CLI that we can use
#[derive(Subcommand)]
pub enum Commands {
    /// List all the tasks
    List {
        /// list Tasks by status (optional)
        status: Option<Status>,
    },
    /// add a task
    Add {
        /// Task Name
        name: String,
    },
    /// delete a task
    Delete {
        /// Task ID
        id: u32,
    },
    /// update a task
    Update {
        /// Task ID
        id: u32,
        /// New Name for the Task
        name: String,
    },
    /// mark a task
    Mark {
        /// Task ID
        id: u32,
        /// Change the Task status
        status: Status,
    },
}
